//! Error handling
//!
//! `types` holds the tool's own error enum; `context` adds annotation
//! methods to any `Result`.

pub mod types;
pub mod context;

pub use types::{AppError, AppResult};
pub use context::ErrorContextExt;
