//! Imagen-specific error types.

/// Imagen error conditions.
///
/// The `Display` text of a kind is the fault message that retry classification
/// inspects, so HTTP faults always carry their status code and response body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImagenErrorKind {
    /// No access token could be obtained from the ambient credentials
    #[display("Failed to obtain access token: {}", _0)]
    MissingCredentials(String),
    /// Failed to create the HTTP client
    #[display("Failed to create Imagen client: {}", _0)]
    ClientCreation(String),
    /// Transport-level request failure
    #[display("Imagen API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP response
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body did not match the prediction schema
    #[display("Invalid Imagen response: {}", _0)]
    InvalidResponse(String),
    /// Base64 decoding of returned image bytes failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Imagen error with source location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{ImagenError, ImagenErrorKind};
///
/// let err = ImagenError::new(ImagenErrorKind::HttpError {
///     status_code: 429,
///     message: "Quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Imagen Error: {} at line {} in {}", kind, line, file)]
pub struct ImagenError {
    /// The kind of error that occurred
    pub kind: ImagenErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImagenError {
    /// Create a new ImagenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImagenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Fault text without the location suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
