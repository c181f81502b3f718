//! Batch illustration binary.
//!
//! Walks the prompt catalog, generates every missing scene image and records
//! the image identifiers in the story records.

use clap::Parser;
use storybook::cli::{BatchCli, run_batch};
use storybook::{LoggingConfig, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = BatchCli::parse();
    init_logging(&LoggingConfig::from_env(cli.verbose))?;

    run_batch(&cli).await?;
    Ok(())
}
