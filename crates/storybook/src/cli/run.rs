//! Command handlers.

use crate::cli::{BatchCli, ImageCli};
use storybook_batch::BatchOrchestrator;
use storybook_error::StorybookResult;
use storybook_models::{IllustrationClient, VertexImagenClient};
use storybook_rate_limit::{RetryPolicy, StorybookConfig};
use tracing::info;

/// Build the retrying client for `config`.
fn illustration_client(
    config: &StorybookConfig,
) -> StorybookResult<IllustrationClient<VertexImagenClient>> {
    let imagen = VertexImagenClient::new(&config.imagen)?;
    info!(url = imagen.url(), "Imagen endpoint");
    Ok(IllustrationClient::new(
        imagen,
        config.style.preamble.clone(),
        RetryPolicy::from(&config.retry),
    ))
}

/// Run the batch driver.
///
/// Listing and dry runs never contact the provider, so credentials are only
/// checked before a real run.
pub async fn run_batch(cli: &BatchCli) -> StorybookResult<()> {
    let config = StorybookConfig::load_with_override(cli.config.as_deref())?;
    let client = illustration_client(&config)?;
    let live = !cli.list && !cli.dry_run;
    if live {
        client.generator().authenticate().await?;
    }
    let orchestrator = BatchOrchestrator::from_config(client, &config);

    if cli.list {
        let listing = orchestrator.list().await?;
        print!("{}", listing);
        return Ok(());
    }

    let summary = orchestrator.run(cli.story.as_deref(), cli.dry_run).await?;
    if summary.failed() > 0 {
        info!(failed = summary.failed(), "Rerun to retry scenes without images");
    }
    Ok(())
}

/// Run the single-image driver. One attempt, no retry.
pub async fn run_single(cli: &ImageCli) -> StorybookResult<()> {
    let config = StorybookConfig::load_with_override(cli.config.as_deref())?;
    let client = illustration_client(&config)?;
    client.generator().authenticate().await?;

    println!(
        "Generating image with prompt:\n{}\n",
        client.styled_prompt(&cli.prompt)
    );
    if client.generate(&cli.prompt, &cli.output, cli.aspect, 1).await? {
        println!("Saved to {}", cli.output.display());
    } else {
        println!("No image generated.");
    }
    Ok(())
}
