//! Error node type and state aliases.
//!
//! [`AnnotatedError`] is the one concrete implementor of
//! [`Annotated`](crate::Annotated): a chain node carrying a message, the
//! stack captured at construction, free-form structured state, and an
//! optional owned inner error.
//!
//! # Examples
//!
//! ```
//! use errstack::prelude::*;
//! use serde_json::json;
//!
//! let mut state = StateMap::new();
//! state.insert("shard".into(), json!(7));
//!
//! let err = errstack::new("replication lag exceeded").with_state(state);
//! assert_eq!(err.state().unwrap()["shard"], 7);
//! ```

use smallvec::SmallVec;

pub mod annotated_error;

pub use annotated_error::{new, wrap, AnnotatedError};

/// Free-form per-node state: string keys mapped to arbitrary JSON values.
///
/// Replaced wholesale by [`Annotated::set_state`](crate::Annotated::set_state);
/// serialized compactly into the diagnostic report.
pub type StateMap = serde_json::Map<String, serde_json::Value>;

/// SmallVec-backed sequence of per-node state maps, as returned by
/// [`Annotated::annotated_states`](crate::Annotated::annotated_states).
///
/// Inline storage covers the common one- and two-node chains without a heap
/// allocation.
pub type StateVec = SmallVec<[StateMap; 2]>;
