//! The annotated error value
//!
//! An [`AnnotatedError`] is rendered once, at construction, and never changes
//! afterwards. Annotating it again produces a new value that owns the previous
//! one.

use super::location::Location;
use std::error::Error as StdError;
use std::fmt;
use tracing::trace;

/// Boxed error accepted by every annotation entry point
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error wrapped with an optional message and one call-site marker
///
/// The display text is `"<message> <inner text>\n--> dir/file:line\t"`, or
/// `"<inner text>\n--> dir/file:line\t"` for position-only annotations.
#[derive(Debug)]
pub struct AnnotatedError {
    text: String,
    location: Location,
    inner: BoxError,
}

impl AnnotatedError {
    /// Render `inner` with an optional message and the marker for `location`
    pub fn new(inner: BoxError, message: Option<&str>, location: Location) -> Self {
        let mut text = match message {
            Some(message) => format!("{message} {inner}"),
            None => inner.to_string(),
        };
        text.push_str(&location.marker());

        trace!(location = %location, "annotated error");

        Self {
            text,
            location,
            inner,
        }
    }

    /// Where this layer of annotation happened
    pub fn location(&self) -> Location {
        self.location
    }

    /// The error this layer wraps
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Give back the wrapped error, dropping this layer's text
    pub fn into_inner(self) -> BoxError {
        self.inner
    }

    /// The innermost error that is not itself an `AnnotatedError`
    pub fn root(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = &*self.inner;
        while let Some(annotated) = current.downcast_ref::<AnnotatedError>() {
            current = &*annotated.inner;
        }
        current
    }

    /// Rendered text, identical to the `Display` output
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Deepest message of this chain, see [`crate::deepest_error`]
    pub fn deepest_message(&self) -> String {
        crate::deepest::deepest_message(&self.root().to_string())
    }
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// The inner text is already part of `Display`, so it is not reported as a source.
impl StdError for AnnotatedError {}
