//! Error annotation
//!
//! Wraps an existing error with contextual text and the call site of the
//! annotation. Every call appends exactly one `\n--> dir/file:line\t` marker,
//! so an error that crosses several annotating frames accumulates the
//! markers in call order, outermost last:
//!
//! ```text
//! call a failed call aaa failed origin error aab
//! --> src/mid.rs:14
//! --> src/top.rs:8
//! ```
//!
//! Absent errors stay absent: every entry point takes an `Option` and maps
//! `None` to `None` without allocating anything.

pub mod annotated;
pub mod location;

pub use annotated::{AnnotatedError, BoxError};
pub use location::{Location, MARKER_PREFIX};

use std::fmt;

/// Annotate `err` with a literal message
///
/// The annotation is used verbatim and is never treated as a format string,
/// so braces or `%` signs in it are rendered as-is. Use [`with_context_args`]
/// or the [`with_context!`](crate::with_context!) macro with arguments for
/// formatted messages.
#[track_caller]
pub fn with_context<E>(err: Option<E>, annotation: &str) -> Option<AnnotatedError>
where
    E: Into<BoxError>,
{
    let location = Location::caller();
    err.map(|err| AnnotatedError::new(err.into(), Some(annotation), location))
}

/// Annotate `err` with a formatted message
#[track_caller]
pub fn with_context_args<E>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<AnnotatedError>
where
    E: Into<BoxError>,
{
    let location = Location::caller();
    err.map(|err| {
        let annotation = fmt::format(args);
        AnnotatedError::new(err.into(), Some(&annotation), location)
    })
}

/// Annotate `err` with the call site only
#[track_caller]
pub fn with_position<E>(err: Option<E>) -> Option<AnnotatedError>
where
    E: Into<BoxError>,
{
    let location = Location::caller();
    err.map(|err| AnnotatedError::new(err.into(), None, location))
}

/// Annotate an optional error with a message, formatting it only when
/// arguments are given
///
/// ```
/// use deeperror::with_context;
///
/// let err = with_context!(Some("timeout"), "call {} failed", "fetch").unwrap();
/// assert!(err.to_string().starts_with("call fetch failed timeout\n--> "));
///
/// let err = with_context!(Some("timeout"), "100% {literal}").unwrap();
/// assert!(err.to_string().starts_with("100% {literal} timeout\n--> "));
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $annotation:expr $(,)?) => {
        $crate::annotate::with_context($err, $annotation)
    };
    ($err:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::annotate::with_context_args($err, ::std::format_args!($fmt, $($arg)+))
    };
}
