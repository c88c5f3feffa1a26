//! Call-stack capture with a current/context split.
//!
//! [`StackTrace`] snapshots the calling thread's stack as structured text:
//! one header line identifying the thread, then two lines per frame (symbol,
//! then a tab-indented `at file:line` location). The capture machinery's own
//! frames are excluded so the reported frames begin at the code that created
//! the error.
//!
//! The split keeps the frames belonging to the logical caller in
//! [`current`](StackTrace::current) and everything past the first blank line
//! in [`context`](StackTrace::context). Stack text produced here never
//! contains blank lines, so `context` is normally empty; the boundary matters
//! when splitting text that carries trailing sections from other threads.

use std::fmt::Write as _;
use std::thread;

use backtrace::Backtrace;
use serde::{Deserialize, Serialize};

// Frames between the backtrace capture and the constructor's caller:
// `capture_with_skip`, `capture`, and the constructor itself.
const CAPTURE_SKIP: usize = 3;

/// A captured call stack, split into the caller's frames and trailing
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackTrace {
    current: String,
    context: String,
}

impl StackTrace {
    /// Captures the current thread's stack.
    ///
    /// Intended to be called from an error constructor: the capture
    /// machinery and the constructor itself are skipped, so the reported
    /// frames begin at the constructor's caller. If the stack is shorter
    /// than the skip depth, the current segment degrades to the header line
    /// alone.
    #[must_use]
    pub fn capture() -> Self {
        Self::capture_with_skip(CAPTURE_SKIP)
    }

    fn capture_with_skip(skip: usize) -> Self {
        let bt = Backtrace::new();

        let current = thread::current();
        let mut text = format!("thread '{}':", current.name().unwrap_or("unnamed"));

        // The backtrace crate's own trace/resolve frames sit on top of the
        // stack; drop them by name so `skip` only has to count this crate's
        // call levels.
        let frames = bt.frames().iter().skip_while(|frame| {
            frame
                .symbols()
                .first()
                .and_then(|symbol| symbol.name())
                .is_some_and(|name| name.to_string().starts_with("backtrace::"))
        });

        for frame in frames {
            let symbol = frame.symbols().first();
            match symbol.and_then(|s| s.name()) {
                Some(name) => {
                    let _ = write!(text, "\n{name}");
                }
                None => text.push_str("\n<unresolved>"),
            }
            match symbol.and_then(|s| Some((s.filename()?, s.lineno()?))) {
                Some((file, line)) => {
                    let _ = write!(text, "\n\tat {}:{}", file.display(), line);
                }
                None => text.push_str("\n\tat <unknown>"),
            }
        }
        text.push('\n');

        split_stack(&text, skip)
    }

    /// The header line plus the frames belonging to the logical caller.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Trailing stack text beyond the current segment, beginning at the
    /// blank-line boundary. Empty when the trace carries no trailing
    /// sections.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Consumes the trace, returning `(current, context)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.current, self.context)
    }
}

/// Splits line-structured stack text into a current segment and trailing
/// context.
///
/// The header line is kept unconditionally. `skip` frames after it are
/// dropped by advancing past two line boundaries per frame. Frame blocks are
/// then consumed until two consecutive line boundaries with nothing between
/// them (an empty line) or the end of the text; everything from that
/// boundary onward is the context segment.
fn split_stack(buf: &str, skip: usize) -> StackTrace {
    let mut index = index_newline(buf, 0);
    let mut current = String::from(&buf[..index]);

    for _ in 0..skip {
        index = index_newline(buf, index + 1);
        index = index_newline(buf, index + 1);
    }

    let start = index;
    let mut last = index;
    loop {
        index = index_newline(buf, index + 1);
        if index - last <= 1 {
            break;
        }
        last = index;
    }

    current.push_str(&buf[start..index]);
    StackTrace { current, context: buf[index..].to_string() }
}

/// First `\n` at or after `start`, or `buf.len()` when none remains. The
/// clamp keeps the split loops index-safe past the end of the text.
fn index_newline(buf: &str, start: usize) -> usize {
    if start >= buf.len() {
        return buf.len();
    }
    match buf[start..].find('\n') {
        Some(i) => start + i,
        None => buf.len(),
    }
}
