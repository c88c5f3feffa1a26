//! The concrete error node and its constructors.

use std::error::Error;
use std::fmt;
use std::ptr;

use serde_json::Value;

use crate::chain::{as_annotated, default_error, Chain};
use crate::search::{index_nth, SepIndex};
use crate::stack::StackTrace;
use crate::traits::Annotated;
use crate::types::{StateMap, StateVec};

/// One node in a cause chain: message, captured stack, structured state,
/// and an optional owned inner error.
///
/// `message`, the captured stack text, and the inner link are fixed at
/// construction; only the state map may be replaced afterward. The node
/// exclusively owns its inner error, so chains are finite and acyclic by
/// construction.
///
/// `Display` (and therefore `to_string`) renders the full diagnostic report
/// described in [`default_error`]; use
/// [`message`](Annotated::message) or [`get_message`](crate::get_message)
/// for the plain text.
#[derive(Debug)]
pub struct AnnotatedError {
    msg: String,
    trace: StackTrace,
    state: Option<StateMap>,
    inner: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Creates a fresh annotated error with the given message and the stack
/// captured at this call.
///
/// For a formatted message use [`newf!`](crate::newf).
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
///
/// let err = errstack::new("index rebuild failed");
/// assert_eq!(err.message(), "index rebuild failed");
/// assert!(err.stack().starts_with("thread '"));
/// assert!(err.inner().is_none());
/// ```
pub fn new(msg: impl Into<String>) -> AnnotatedError {
    let trace = StackTrace::capture();
    AnnotatedError::from_parts(msg.into(), None, trace)
}

/// Wraps a causing error in a fresh annotated node, capturing the stack at
/// this call.
///
/// The new node takes ownership of `inner`; it is reachable again through
/// [`Annotated::inner`] and [`Error::source`].
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
///
/// let io = std::io::Error::other("disk offline");
/// let err = errstack::wrap(io, "flushing journal");
///
/// assert_eq!(errstack::get_message(&err), "flushing journal disk offline");
/// ```
pub fn wrap<E>(inner: E, msg: impl Into<String>) -> AnnotatedError
where
    E: Error + Send + Sync + 'static,
{
    let trace = StackTrace::capture();
    AnnotatedError::from_parts(msg.into(), Some(Box::new(inner)), trace)
}

impl AnnotatedError {
    fn from_parts(
        msg: String,
        inner: Option<Box<dyn Error + Send + Sync + 'static>>,
        trace: StackTrace,
    ) -> Self {
        Self { msg, trace, state: None, inner }
    }

    /// Sets the state map during fluent construction.
    ///
    /// Equivalent to [`Annotated::set_state`] but consumes and returns the
    /// node, so it can be chained off a constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use errstack::prelude::*;
    /// use serde_json::json;
    ///
    /// let mut state = StateMap::new();
    /// state.insert("attempt".into(), json!(3));
    ///
    /// let err = errstack::new("upload failed").with_state(state);
    /// assert_eq!(err.state().unwrap().len(), 1);
    /// ```
    #[must_use]
    pub fn with_state(mut self, state: StateMap) -> Self {
        self.state = Some(state);
        self
    }
}

impl Annotated for AnnotatedError {
    #[inline]
    fn message(&self) -> &str {
        &self.msg
    }

    #[inline]
    fn stack(&self) -> &str {
        self.trace.current()
    }

    #[inline]
    fn stack_context(&self) -> &str {
        self.trace.context()
    }

    #[inline]
    fn inner(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
    }

    fn has_inner(&self, target: &(dyn Error + 'static)) -> bool {
        Chain::new(self).any(|node| ptr::addr_eq(node as *const _, target as *const _))
    }

    #[inline]
    fn set_state(&mut self, state: StateMap) {
        self.state = Some(state);
    }

    #[inline]
    fn state(&self) -> Option<&StateMap> {
        self.state.as_ref()
    }

    fn annotated_states(&self) -> StateVec {
        let mut out = StateVec::new();
        for node in Chain::new(self) {
            out.push(match as_annotated(node) {
                Some(annotated) => {
                    let mut entry = annotated.state().cloned().unwrap_or_default();
                    entry.insert("_location".into(), Value::from(location_of(annotated.stack())));
                    entry.insert("_message".into(), Value::from(annotated.message()));
                    entry
                }
                None => {
                    let mut entry = StateMap::new();
                    entry.insert("_message".into(), Value::from(node.to_string()));
                    entry
                }
            });
        }
        out
    }
}

/// One representative frame of captured stack text: the line between the
/// 3rd and 4th newline (the first frame's location line), trimmed. Shorter
/// stacks fall back to their last line.
fn location_of(stack: &str) -> String {
    let mut slice = stack;
    if let SepIndex::Found(end) = index_nth(slice, "\n", 3) {
        slice = &slice[..end];
    }
    if let Some(beg) = slice.rfind('\n') {
        slice = &slice[beg..];
    }
    slice.trim().to_string()
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&default_error(self))
    }
}

impl Error for AnnotatedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
