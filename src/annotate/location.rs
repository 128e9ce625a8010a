//! Call-site capture for annotations
//!
//! A [`Location`] records the file and line of the code that asked for an
//! annotation. Only the parent directory and file name are ever rendered.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Prefix written in front of every location marker line
pub const MARKER_PREFIX: &str = "\n--> ";

/// Source location of a single annotation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    /// Create a location from raw parts
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of whoever called the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line())
    }

    /// Full source path as reported by the compiler
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Parent directory name and file name, joined with `/`
    ///
    /// `src/annotate/location.rs` renders as `annotate/location.rs`, a bare
    /// `lib.rs` as `./lib.rs`. An empty file renders as the empty string.
    pub fn short_path(&self) -> String {
        if self.file.is_empty() {
            return String::new();
        }

        let path = Path::new(self.file);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let dir = path
            .parent()
            .and_then(Path::file_name)
            .map(|dir| dir.to_string_lossy())
            .unwrap_or(Cow::Borrowed("."));

        format!("{dir}/{name}")
    }

    /// The marker line appended to an annotated error: `\n--> dir/file:line\t`
    pub fn marker(&self) -> String {
        format!("{MARKER_PREFIX}{self}\t")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_path(), self.line)
    }
}
