//! Annotation helpers for `Result`
//!
//! The same operations as [`crate::annotate`], shaped for `?`-style
//! propagation: `Ok` values pass through untouched and an `Err` is wrapped
//! into an [`AnnotatedError`] marked with the caller's location.

use crate::annotate::{AnnotatedError, BoxError, Location};

/// Extension trait for annotating the error side of a `Result`
pub trait ErrorContextExt<T> {
    /// Prefix the error with a literal message and mark the call site
    fn with_context(self, annotation: &str) -> Result<T, AnnotatedError>;

    /// Like [`with_context`](Self::with_context), building the message only on error
    fn with_context_lazy<F>(self, f: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> String;

    /// Mark the call site without adding a message
    fn with_position(self) -> Result<T, AnnotatedError>;
}

impl<T, E> ErrorContextExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn with_context(self, annotation: &str) -> Result<T, AnnotatedError> {
        let location = Location::caller();
        self.map_err(|e| AnnotatedError::new(e.into(), Some(annotation), location))
    }

    #[track_caller]
    fn with_context_lazy<F>(self, f: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> String,
    {
        let location = Location::caller();
        self.map_err(|e| AnnotatedError::new(e.into(), Some(&f()), location))
    }

    #[track_caller]
    fn with_position(self) -> Result<T, AnnotatedError> {
        let location = Location::caller();
        self.map_err(|e| AnnotatedError::new(e.into(), None, location))
    }
}

/// Annotate the error of a `Result` expression
///
/// ```rust
/// use deeperror::context;
///
/// fn read() -> Result<String, deeperror::AnnotatedError> {
///     let content = context!(
///         std::fs::read_to_string("/definitely/not/here.toml"),
///         "reading configuration file"
///     )?;
///     Ok(content)
/// }
///
/// assert!(read().unwrap_err().to_string().starts_with("reading configuration file "));
/// ```
#[macro_export]
macro_rules! context {
    ($expr:expr, $annotation:expr $(,)?) => {
        $crate::errors::ErrorContextExt::with_context($expr, $annotation)
    };
    ($expr:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::errors::ErrorContextExt::with_context_lazy($expr, || ::std::format!($fmt, $($arg)+))
    };
}
