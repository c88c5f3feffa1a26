//! The capability contract exposed by every stack-annotated error.
//!
//! [`Annotated`] is the abstraction the chain-traversal functions in
//! [`crate::chain`] are written against. The crate ships one concrete
//! implementor, [`AnnotatedError`](crate::AnnotatedError); chain walkers
//! rediscover the capability through a `dyn Error` link with
//! [`as_annotated`](crate::as_annotated), and treat any error that does not
//! satisfy it as a foreign, opaque terminal.

use std::error::Error;

use crate::types::{StateMap, StateVec};

/// Capability trait for errors that carry a captured stack, structured
/// state, and an optional causal inner error.
///
/// All read accessors take `&self` and are safe to call concurrently on a
/// chain that is not being mutated. [`set_state`](Annotated::set_state) is
/// the one mutation; it requires `&mut self`, so exclusive access is
/// enforced by the borrow checker.
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
///
/// let inner = errstack::new("connection refused");
/// let outer = errstack::wrap(inner, "loading profile");
///
/// assert_eq!(outer.message(), "loading profile");
/// assert!(outer.inner().is_some());
/// assert_eq!(errstack::get_message(&outer), "loading profile connection refused");
/// ```
pub trait Annotated: Error {
    /// The node's own message, without stack text or inner errors.
    fn message(&self) -> &str;

    /// The stack text captured at construction: header line plus the
    /// caller's frames.
    fn stack(&self) -> &str;

    /// Trailing stack text beyond the current segment. Empty unless the
    /// captured trace carried sections past the blank-line boundary.
    fn stack_context(&self) -> &str;

    /// The causing error this node wraps, if any.
    fn inner(&self) -> Option<&(dyn Error + 'static)>;

    /// True iff `target` is reference-identical to some node in this
    /// error's chain, the receiver included.
    ///
    /// Identity means the same object address, not structural equality:
    /// two separately constructed errors with equal messages do not match.
    fn has_inner(&self, target: &(dyn Error + 'static)) -> bool;

    /// Replaces the node's state map wholesale.
    ///
    /// For fluent construction use
    /// [`AnnotatedError::with_state`](crate::AnnotatedError::with_state).
    fn set_state(&mut self, state: StateMap);

    /// The node's current state map, or `None` if never set.
    fn state(&self) -> Option<&StateMap>;

    /// One state map per chain node, outermost first.
    ///
    /// Each annotated node contributes a copy of its state augmented with
    /// two synthesized keys: `_location`, a trimmed single representative
    /// frame of that node's stack, and `_message`, the node's own message.
    /// A foreign terminal contributes a map holding only `_message` set to
    /// its rendered text. The stored state is never mutated by this call.
    ///
    /// # Examples
    ///
    /// ```
    /// use errstack::prelude::*;
    ///
    /// let err = errstack::wrap(errstack::new("root"), "outer");
    /// let states = err.annotated_states();
    ///
    /// assert_eq!(states.len(), 2);
    /// assert_eq!(states[0]["_message"], "outer");
    /// assert_eq!(states[1]["_message"], "root");
    /// ```
    fn annotated_states(&self) -> StateVec;
}
