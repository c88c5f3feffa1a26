//! Tracing integration for annotated errors.
//!
//! Emits an error chain through the `tracing` ecosystem: the aggregated
//! message becomes the event text and the per-node state maps ride along as
//! a field. Emission only; wiring a subscriber or transport is the caller's
//! concern.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! errstack = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::Annotated;

/// Extension trait that logs an annotated error as a `tracing` event.
///
/// Implemented for every [`Annotated`] error, trait objects included.
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
/// use errstack::tracing_ext::Emit;
///
/// let err = errstack::wrap(errstack::new("root cause"), "request failed");
/// err.emit();
/// ```
pub trait Emit: Annotated {
    /// Emits this chain at `ERROR` level.
    ///
    /// The event text is the space-joined per-node message aggregate; the
    /// full [`annotated_states`](Annotated::annotated_states) sequence is
    /// attached as the `states` field.
    fn emit(&self) {
        let states = self.annotated_states();
        let message: Vec<&str> = states
            .iter()
            .filter_map(|entry| entry.get("_message")?.as_str())
            .collect();
        tracing::error!(states = ?states, "{}", message.join(" "));
    }
}

impl<T: Annotated + ?Sized> Emit for T {}
