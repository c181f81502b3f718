//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;
use storybook_core::AspectRatio;

/// Generate illustrations for every story in the prompt catalog
#[derive(Parser, Debug)]
#[command(name = "generate-story-images")]
#[command(about = "Generate illustrations for every story in the prompt catalog", long_about = None)]
#[command(version)]
pub struct BatchCli {
    /// Process a single story ID
    #[arg(long)]
    pub story: Option<String>,

    /// Show what would be generated without actually generating
    #[arg(long)]
    pub dry_run: bool,

    /// List all stories that need images
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file applied over the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Generate a single story illustration
#[derive(Parser, Debug)]
#[command(name = "generate-story-image")]
#[command(about = "Generate a story illustration", long_about = None)]
#[command(version)]
pub struct ImageCli {
    /// Scene description for the illustration
    #[arg(long)]
    pub prompt: String,

    /// Output file path (PNG)
    #[arg(long)]
    pub output: PathBuf,

    /// Aspect ratio
    #[arg(long, default_value = "3:4")]
    pub aspect: AspectRatio,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file applied over the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}
