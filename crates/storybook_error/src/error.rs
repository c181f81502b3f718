//! Top-level error wrapper types.

use crate::{ConfigError, ImagenError, JsonError, StorageError};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookError, JsonError};
///
/// let err: StorybookError = JsonError::new("trailing comma").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybookErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Story record or artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Image generation error
    #[from(ImagenError)]
    Imagen(ImagenError),
}

/// Storybook error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybook Error: {}", _0)]
pub struct StorybookError(Box<StorybookErrorKind>);

impl StorybookError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybookErrorKind {
        &self.0
    }
}

impl<T> From<T> for StorybookError
where
    T: Into<StorybookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storybook operations.
pub type StorybookResult<T> = std::result::Result<T, StorybookError>;
