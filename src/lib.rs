//! Stack-annotated error chains with structured state and diagnostic
//! reports.
//!
//! Every error created through this crate captures the caller's stack at
//! construction, can carry a free-form state map, and can wrap a causing
//! error into a finite, acyclic chain. Uniform traversal functions then
//! extract a human-readable message, a machine-readable state list, or a
//! full diagnostic report from any point in the chain.
//!
//! # Examples
//!
//! ## Wrapping and aggregating
//!
//! ```
//! use errstack::prelude::*;
//!
//! let io = std::io::Error::other("connection reset");
//! let err = errstack::wrap(io, "fetching manifest");
//!
//! assert_eq!(get_message(&err), "fetching manifest connection reset");
//!
//! let report = err.to_string();
//! assert!(report.starts_with("ERROR:"));
//! assert!(report.contains("ORIGINAL STACK TRACE:"));
//! ```
//!
//! ## Structured state
//!
//! ```
//! use errstack::prelude::*;
//! use serde_json::json;
//!
//! let mut state = StateMap::new();
//! state.insert("user_id".into(), json!(42));
//!
//! let err = errstack::new("quota exceeded").with_state(state);
//! let states = err.annotated_states();
//!
//! assert_eq!(states[0]["user_id"], 42);
//! assert_eq!(states[0]["_message"], "quota exceeded");
//! ```
//!
//! ## Formatted constructors
//!
//! ```
//! use errstack::prelude::*;
//!
//! let err = errstack::newf!("shard {} unavailable", 7);
//! assert_eq!(err.message(), "shard 7 unavailable");
//! ```

/// Chain traversal, message aggregation, and diagnostic rendering
pub mod chain;
/// Formatted-constructor macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Nth-separator search primitive
pub mod search;
/// Call-stack capture with a current/context split
pub mod stack;
/// The `Annotated` capability trait
pub mod traits;
/// The concrete error node and state aliases
pub mod types;

/// Tracing emission for error chains (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{as_annotated, default_error, get_message, Chain};
pub use search::{index_nth, SepIndex};
pub use stack::StackTrace;
pub use traits::Annotated;
pub use types::{new, wrap, AnnotatedError, StateMap, StateVec};
