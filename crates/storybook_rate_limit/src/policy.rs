//! Backoff schedule for the image generation retry loop.

use crate::{FaultClass, RetryConfig, classify_fault};
use std::time::Duration;

/// Why a single generation attempt did not produce an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AttemptFailure {
    /// The provider answered without error but returned no images.
    #[display("empty response")]
    EmptyResponse,
    /// The provider raised a fault.
    #[display("{}", _0)]
    Fault(FaultClass),
}

impl AttemptFailure {
    /// Classify a fault message into an attempt failure.
    pub fn from_fault(message: &str) -> Self {
        Self::Fault(classify_fault(message))
    }
}

/// Bounded retry with classification-dependent delays.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storybook_rate_limit::{AttemptFailure, FaultClass, RetryPolicy};
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts(), 8);
///
/// let rate_limited = AttemptFailure::Fault(FaultClass::RateLimited);
/// assert_eq!(policy.delay_for(rate_limited, 1), Duration::from_secs(45));
/// assert_eq!(policy.delay_for(rate_limited, 3), Duration::from_secs(135));
/// assert_eq!(policy.delay_for(AttemptFailure::EmptyResponse, 3), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryPolicy {
    max_attempts: u32,
    empty_response_delay: Duration,
    fault_delay: Duration,
    rate_limit_base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy from explicit values.
    pub fn new(
        max_attempts: u32,
        empty_response_delay: Duration,
        fault_delay: Duration,
        rate_limit_base_delay: Duration,
    ) -> Self {
        Self {
            max_attempts,
            empty_response_delay,
            fault_delay,
            rate_limit_base_delay,
        }
    }

    /// The same delays with a different attempt budget.
    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Attempts made before giving up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause after `failure` on the 1-based `attempt`.
    pub fn delay_for(&self, failure: AttemptFailure, attempt: u32) -> Duration {
        match failure {
            AttemptFailure::EmptyResponse => self.empty_response_delay,
            AttemptFailure::Fault(FaultClass::RateLimited) => {
                self.rate_limit_base_delay * attempt.max(1)
            }
            AttemptFailure::Fault(FaultClass::Transient) => self.fault_delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_secs(config.empty_response_delay_secs),
            Duration::from_secs(config.fault_delay_secs),
            Duration::from_secs(config.rate_limit_base_delay_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_delay_strictly_increases() {
        let policy = RetryPolicy::default();
        let failure = AttemptFailure::from_fault("HTTP 429 error: Too Many Requests");
        let delays: Vec<Duration> = (1..=policy.max_attempts())
            .map(|attempt| policy.delay_for(failure, attempt))
            .collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(delays[7], Duration::from_secs(360));
    }

    #[test]
    fn test_other_faults_use_fixed_delay() {
        let policy = RetryPolicy::default();
        let failure = AttemptFailure::from_fault("deadline exceeded");
        for attempt in 1..=policy.max_attempts() {
            assert_eq!(policy.delay_for(failure, attempt), Duration::from_secs(30));
        }
    }

    #[test]
    fn test_with_max_attempts_keeps_delays() {
        let policy = RetryPolicy::default().with_max_attempts(1);
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(
            policy.delay_for(AttemptFailure::EmptyResponse, 1),
            Duration::from_secs(30)
        );
    }
}
