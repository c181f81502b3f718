//! Single illustration binary.

use clap::Parser;
use storybook::cli::{ImageCli, run_single};
use storybook::{LoggingConfig, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = ImageCli::parse();
    init_logging(&LoggingConfig::from_env(cli.verbose))?;

    run_single(&cli).await?;
    Ok(())
}
