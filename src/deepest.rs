//! Deepest message extraction
//!
//! Recovers the originating message of an annotated error with all of its
//! location markers removed. Extraction never fails: when the marker pattern
//! is unavailable or absent from the text, the selected line is returned as-is.

use crate::annotate::AnnotatedError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error as StdError;
use tracing::{debug, warn};

/// Signature of a location marker: `--> <path>.<ext>:<line>`
const MARKER_PATTERN: &str = r"-->.*\.[A-Za-z0-9_]+:[0-9]*";

static MARKER_REGEX: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(MARKER_PATTERN) {
    Ok(regex) => Some(regex),
    Err(e) => {
        warn!("Location marker pattern unavailable, markers will not be stripped: {}", e);
        None
    }
});

/// Strip a leading location marker and one tab from `line`
fn strip_marker(line: &str) -> &str {
    let line = match MARKER_REGEX.as_ref() {
        Some(regex) => match regex.find(line) {
            Some(found) if found.start() == 0 => &line[found.end()..],
            _ => line,
        },
        None => line,
    };
    line.strip_prefix('\t').unwrap_or(line)
}

/// A line holding nothing but a marker, as appended by every annotation
fn is_bare_marker(line: &str) -> bool {
    line.starts_with("-->") && strip_marker(line).is_empty()
}

/// Deepest message carried by a rendered error text
///
/// Trailing marker-only lines are skipped; on the last remaining line a
/// leading marker and one tab are removed. Text without markers yields its
/// last line unchanged.
///
/// Annotation messages are prefixed onto the same line as the inner text,
/// so plain text only yields that whole message line. The innermost message
/// alone needs the [`AnnotatedError`] itself, see [`deepest_error`].
pub fn deepest_message(text: &str) -> String {
    let mut lines = text.split('\n');
    let Some(last) = lines.next_back() else {
        return String::new();
    };

    let mut selected = last;
    while is_bare_marker(selected) {
        match lines.next_back() {
            Some(previous) => selected = previous,
            None => break,
        }
    }

    let deepest = strip_marker(selected);
    if deepest.len() == selected.len() {
        debug!("No location marker on deepest line");
    }
    deepest.to_string()
}

/// Deepest message of an optional error
///
/// `None` yields an empty string. An [`AnnotatedError`] is first unwound to
/// the error it was originally built from; anything else is read from its
/// rendered text.
pub fn deepest_error(err: Option<&(dyn StdError + 'static)>) -> String {
    match err {
        None => String::new(),
        Some(err) => match err.downcast_ref::<AnnotatedError>() {
            Some(annotated) => annotated.deepest_message(),
            None => deepest_message(&err.to_string()),
        },
    }
}
