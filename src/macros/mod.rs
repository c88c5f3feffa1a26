//! Formatted-constructor macros.
//!
//! [`newf!`](crate::newf) and [`wrapf!`](crate::wrapf) are the
//! `format!`-style variants of [`new`](crate::new) and
//! [`wrap`](crate::wrap). They expand to a plain constructor call at the
//! call site, so the captured stack starts at the same caller frame as the
//! unformatted constructors.
//!
//! # Examples
//!
//! ```
//! use errstack::prelude::*;
//!
//! let err = errstack::newf!("shard {} unavailable", 7);
//! assert_eq!(err.message(), "shard 7 unavailable");
//! ```

/// Creates a fresh annotated error with a formatted message.
///
/// Accepts the same arguments as [`format!`]; the stack is captured at the
/// call site, exactly like [`new`](crate::new).
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
///
/// let err = errstack::newf!("timeout after {}ms", 250);
/// assert_eq!(err.message(), "timeout after 250ms");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Wraps a causing error with a formatted message.
///
/// The first argument is the inner error; the rest are [`format!`]
/// arguments. The stack is captured at the call site, exactly like
/// [`wrap`](crate::wrap).
///
/// # Examples
///
/// ```
/// use errstack::prelude::*;
///
/// let io = std::io::Error::other("disk offline");
/// let err = errstack::wrapf!(io, "flushing segment {}", 12);
///
/// assert_eq!(err.message(), "flushing segment 12");
/// assert!(err.inner().is_some());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, ::std::format!($($arg)*))
    };
}
