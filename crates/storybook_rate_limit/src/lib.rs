//! Fault classification, retry backoff and configuration.
//!
//! The image provider reports rate limiting only through the text of its
//! faults. [`classify_fault`] is the single place that text is inspected, so
//! the marker substrings can change without touching the retry loop.
//!
//! [`RetryPolicy`] turns a classified failure and a 1-based attempt number into
//! the pause before the next attempt:
//!
//! | Failure | Pause |
//! |---|---|
//! | empty response | fixed (30 s) |
//! | rate limited | base × attempt (45 s, 90 s, …) |
//! | any other fault | fixed (30 s) |
//!
//! [`StorybookConfig`] loads every tunable from layered TOML files.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod config;
mod policy;

pub use classify::{FaultClass, RATE_LIMIT_MARKERS, classify_fault, truncate_fault};
pub use config::{
    BatchConfig, ImagenConfig, PathsConfig, RetryConfig, StorybookConfig, StyleConfig,
};
pub use policy::{AttemptFailure, RetryPolicy};
