//! Error types for the storybook illustration pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{StorybookResult, ConfigError};
//!
//! fn load() -> StorybookResult<String> {
//!     Err(ConfigError::new("missing [imagen] section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod imagen;
mod json;
mod storage;

pub use config::ConfigError;
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use imagen::{ImagenError, ImagenErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
