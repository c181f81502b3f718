//! Command-line interface module.
//!
//! Argument definitions and handlers for both binaries.

mod commands;
mod run;

pub use commands::{BatchCli, ImageCli};
pub use run::{run_batch, run_single};
