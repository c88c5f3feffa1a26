//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use errstack::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Traits**: [`Annotated`]
//! - **Types**: [`AnnotatedError`], [`StateMap`], [`StateVec`], [`Chain`]
//! - **Functions**: [`get_message`], [`default_error`], [`as_annotated`]
//! - **Macros**: [`newf!`], [`wrapf!`]
//!
//! The plain constructors stay at the crate root (`errstack::new`,
//! `errstack::wrap`); their names are too generic to glob-import.
//!
//! # Examples
//!
//! ```
//! use errstack::prelude::*;
//!
//! let err = errstack::wrap(errstack::new("root cause"), "request failed");
//! assert_eq!(get_message(&err), "request failed root cause");
//! ```

pub use crate::chain::{as_annotated, default_error, get_message, Chain};
pub use crate::traits::Annotated;
pub use crate::types::{AnnotatedError, StateMap, StateVec};
pub use crate::{newf, wrapf};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::Emit;
