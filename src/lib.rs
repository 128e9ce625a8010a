//! deeperror
//!
//! Annotates errors with a contextual message and the call site of the
//! annotation, building an append-only trace as the error travels up the
//! stack, and recovers the deepest (originating) message from such a trace.
//!
//! ```
//! use deeperror::{deepest_error, ErrorContextExt};
//! use std::io;
//!
//! fn leaf() -> io::Result<()> {
//!     Err(io::Error::new(io::ErrorKind::Other, "origin error aab"))
//! }
//!
//! let err = leaf()
//!     .with_context("call aaa failed")
//!     .with_context("call a failed")
//!     .unwrap_err();
//!
//! let text = err.to_string();
//! assert!(text.starts_with("call a failed call aaa failed origin error aab\n--> "));
//! assert_eq!(text.matches("\n--> ").count(), 2);
//! assert_eq!(deepest_error(Some(&err)), "origin error aab");
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod deepest;
pub mod errors;

// Re-export the annotation surface at the crate root
pub use annotate::{with_context, with_context_args, with_position, AnnotatedError, BoxError, Location};
pub use deepest::{deepest_error, deepest_message};
pub use errors::ErrorContextExt;
