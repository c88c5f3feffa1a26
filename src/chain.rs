//! Chain traversal and aggregation over nested errors.
//!
//! Key pieces:
//! - [`Chain`] walks the singly-linked sequence of nested errors, outermost
//!   first, stopping after the first node that is not annotated.
//! - [`as_annotated`] is the optional cast from a `dyn Error` link back to
//!   the [`Annotated`] capability; a `None` marks a foreign, opaque
//!   terminal, which every walker here handles as a distinct case.
//! - [`get_message`] aggregates the per-node messages into one line;
//!   [`default_error`] renders the full multi-line diagnostic report.
//!
//! All functions are read-only and idempotent on an unmutated chain.

use std::error::Error;

use smallvec::SmallVec;

use crate::traits::Annotated;
use crate::types::AnnotatedError;

/// Optional cast from a chain link back to the [`Annotated`] capability.
///
/// Detection is downcast-based against the crate's node type; any other
/// error (including a custom `Annotated` implementor reached through a
/// `dyn Error` link) is treated as foreign. Chain walkers use the `None`
/// case as their terminal, never as a failure.
///
/// # Examples
///
/// ```
/// use errstack::as_annotated;
///
/// let annotated = errstack::new("boom");
/// let foreign = std::io::Error::other("io");
///
/// assert!(as_annotated(&annotated).is_some());
/// assert!(as_annotated(&foreign).is_none());
/// ```
#[inline]
pub fn as_annotated<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Annotated> {
    err.downcast_ref::<AnnotatedError>().map(|e| e as &dyn Annotated)
}

/// Iterator over a cause chain, outermost node first.
///
/// Yields the head, then follows [`Annotated::inner`] links until a node
/// without an inner error or a foreign node (which has no visible inner) is
/// reached. Chains are finite by construction, so iteration terminates.
///
/// # Examples
///
/// ```
/// use errstack::Chain;
///
/// let err = errstack::wrap(errstack::wrap(errstack::new("a"), "b"), "c");
/// assert_eq!(Chain::new(&err).count(), 3);
/// ```
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `head`.
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = as_annotated(node).and_then(|annotated| annotated.inner());
        Some(node)
    }
}

/// Aggregates the chain's messages into a single space-joined line.
///
/// For an annotated error, each node contributes its own message walking
/// inner links; a foreign terminal contributes its rendered text once. A
/// foreign input returns its rendered text directly. No stack text is
/// included.
///
/// # Examples
///
/// ```
/// use errstack::get_message;
///
/// let err = errstack::wrap(errstack::wrap(errstack::new("a"), "b"), "c");
/// assert_eq!(get_message(&err), "c b a");
/// ```
pub fn get_message(err: &(dyn Error + 'static)) -> String {
    if as_annotated(err).is_none() {
        return err.to_string();
    }

    let mut parts: SmallVec<[String; 4]> = SmallVec::new();
    for node in Chain::new(err) {
        match as_annotated(node) {
            Some(annotated) => parts.push(annotated.message().to_string()),
            None => parts.push(node.to_string()),
        }
    }
    parts.join(" ")
}

/// Renders the full diagnostic report for an annotated error.
///
/// The report is line-structured:
///
/// ```text
/// ERROR:
/// <outermost message>
/// <outermost state as compact JSON, or null>
/// ...
///
/// ORIGINAL STACK TRACE:
/// <innermost annotated node's stack, verbatim>
/// ```
///
/// Each annotated node contributes its message line and its state map
/// serialized compactly (a serialization failure substitutes that failure's
/// own description). A foreign mid-chain error contributes one rendered-text
/// line and ends the walk. The stack printed at the bottom is the innermost
/// annotated node's, the frame set closest to the original fault.
///
/// This also backs `Display` for [`AnnotatedError`].
pub fn default_error(err: &dyn Annotated) -> String {
    let mut lines: Vec<String> = vec!["ERROR:".to_string()];
    let mut original_stack = "";

    let mut node = err;
    loop {
        let state = match serde_json::to_string(&node.state()) {
            Ok(encoded) => encoded,
            Err(failure) => failure.to_string(),
        };
        lines.push(node.message().to_string());
        lines.push(state);
        original_stack = node.stack();

        match node.inner() {
            Some(next) => match as_annotated(next) {
                Some(annotated) => node = annotated,
                None => {
                    lines.push(next.to_string());
                    break;
                }
            },
            None => break,
        }
    }

    lines.push(String::new());
    lines.push("ORIGINAL STACK TRACE:".to_string());
    lines.push(original_stack.to_string());
    lines.join("\n")
}
