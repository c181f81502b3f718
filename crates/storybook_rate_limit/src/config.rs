//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`storybook.toml` shipped with the workspace)
//! 2. `~/.config/storybook/storybook.toml`
//! 3. `./storybook.toml`
//! 4. An explicit file passed by the caller
//! 5. `STORYBOOK__<SECTION>__<KEY>` environment variables

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storybook_error::{ConfigError, StorybookError, StorybookResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storybook.toml");

/// Vertex AI endpoint selection.
///
/// ```toml
/// [imagen]
/// project_id = "tts-stories-488001"
/// location = "us-central1"
/// model = "imagen-3.0-generate-002"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImagenConfig {
    /// Google Cloud project that owns the Vertex AI quota
    pub project_id: String,
    /// Vertex AI region
    pub location: String,
    /// Imagen model identifier
    pub model: String,
    /// Full endpoint base URL, replacing the regional default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        Self {
            project_id: "tts-stories-488001".to_string(),
            location: "us-central1".to_string(),
            model: "imagen-3.0-generate-002".to_string(),
            endpoint: None,
        }
    }
}

/// Retry budget and delays for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Attempts before a scene is given up on
    pub max_attempts: u32,
    /// Pause after a response with no images
    pub empty_response_delay_secs: u64,
    /// Pause after a fault that is not rate limiting
    pub fault_delay_secs: u64,
    /// Rate-limit pause per attempt number
    pub rate_limit_base_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            empty_response_delay_secs: 30,
            fault_delay_secs: 30,
            rate_limit_base_delay_secs: 45,
        }
    }
}

/// Pacing and cost estimation for batch runs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause between successive scene generations
    pub throttle_millis: u64,
    /// Pause after a scene fails with a hard error
    pub failure_pause_millis: u64,
    /// Estimated USD cost of one generated image
    pub cost_per_image_usd: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            throttle_millis: 500,
            failure_pause_millis: 2000,
            cost_per_image_usd: 0.03,
        }
    }
}

/// Directory layout of the story corpus.
///
/// Relative `primary`, `secondary` and `images` paths resolve against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Corpus root
    pub root: PathBuf,
    /// Primary-language story records
    pub primary: PathBuf,
    /// Secondary-language story records
    pub secondary: PathBuf,
    /// Generated artifacts
    pub images: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            primary: PathBuf::from("stories/en"),
            secondary: PathBuf::from("stories/hi"),
            images: PathBuf::from("stories/images"),
        }
    }
}

impl PathsConfig {
    /// Layout rooted at `root` with the default subdirectories.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Directory of primary-language records.
    pub fn primary_dir(&self) -> PathBuf {
        self.root.join(&self.primary)
    }

    /// Directory of secondary-language records.
    pub fn secondary_dir(&self) -> PathBuf {
        self.root.join(&self.secondary)
    }

    /// Directory of generated artifacts.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(&self.images)
    }
}

/// Visual style shared by every illustration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Text prepended to every scene prompt
    pub preamble: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            preamble: concat!(
                "Traditional Indian watercolor storybook illustration for children. ",
                "Warm earthy and golden tones, soft brushstrokes, detailed traditional Indian setting. ",
                "Style of classic Indian children's book art with Mughal miniature painting influences. ",
                "No text, letters, or words in the image. ",
            )
            .to_string(),
        }
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use storybook_rate_limit::StorybookConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorybookConfig::load()?;
/// println!("Imagen model: {}", config.imagen.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StorybookConfig {
    /// Endpoint selection
    pub imagen: ImagenConfig,
    /// Retry budget and delays
    pub retry: RetryConfig,
    /// Batch pacing and cost
    pub batch: BatchConfig,
    /// Corpus layout
    pub paths: PathsConfig,
    /// Prompt style
    pub style: StyleConfig,
}

impl StorybookConfig {
    /// Only the bundled defaults.
    #[instrument]
    pub fn bundled() -> StorybookResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file path.
    ///
    /// Keys missing from the file take their built-in defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorybookResult<Self> {
        debug!("Loading configuration from file");
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }
        Self::build(Config::builder().add_source(File::from(path)))
    }

    /// Load configuration with the full precedence chain.
    #[instrument]
    pub fn load() -> StorybookResult<Self> {
        Self::load_with_override(None)
    }

    /// Load configuration with the full precedence chain, then `override_path`.
    ///
    /// User config files are optional and silently skipped when absent. An
    /// explicit override must exist.
    #[instrument]
    pub fn load_with_override(override_path: Option<&Path>) -> StorybookResult<Self> {
        debug!("Loading configuration: bundled < home dir < current dir < override < env");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybook/storybook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storybook").required(false));

        if let Some(path) = override_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("STORYBOOK")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> StorybookResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
