//! Classification of provider faults by message text.

/// Substrings that mark a fault as rate limiting or quota exhaustion.
///
/// These match the provider's error formatting exactly. Daily quota
/// exhaustion and short-term throttling are not told apart.
pub const RATE_LIMIT_MARKERS: [&str; 3] = ["429", "Quota", "Resource exhausted"];

/// Length, in characters, that other faults are truncated to when logged.
const FAULT_LOG_CHARS: usize = 120;

/// How a provider fault should be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum FaultClass {
    /// Rate limited or out of quota; back off by attempt number.
    #[display("rate limited")]
    RateLimited,
    /// Anything else; retry after the fixed delay.
    #[display("transient")]
    Transient,
}

/// Classify a fault by the text of its message.
///
/// # Examples
///
/// ```
/// use storybook_rate_limit::{FaultClass, classify_fault};
///
/// assert_eq!(classify_fault("HTTP 429 error: Too Many Requests"), FaultClass::RateLimited);
/// assert_eq!(classify_fault("Quota exceeded for aiplatform.googleapis.com"), FaultClass::RateLimited);
/// assert_eq!(classify_fault("connection reset by peer"), FaultClass::Transient);
/// ```
pub fn classify_fault(message: &str) -> FaultClass {
    if RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        FaultClass::RateLimited
    } else {
        FaultClass::Transient
    }
}

/// First 120 characters of a fault message, for logging.
pub fn truncate_fault(message: &str) -> &str {
    match message.char_indices().nth(FAULT_LOG_CHARS) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}
