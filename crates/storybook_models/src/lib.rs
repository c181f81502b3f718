//! Image generation for the storybook illustration pipeline.
//!
//! Two layers:
//! - [`ImageGenerator`] is one call to the image provider. [`VertexImagenClient`]
//!   implements it against the Vertex AI Imagen `predict` endpoint.
//! - [`IllustrationClient`] wraps any generator with the style preamble and the
//!   bounded retry loop, and writes the first returned image to disk.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use storybook_core::AspectRatio;
//! use storybook_models::{IllustrationClient, VertexImagenClient};
//! use storybook_rate_limit::{RetryPolicy, StorybookConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorybookConfig::load()?;
//! let imagen = VertexImagenClient::new(&config.imagen)?;
//! let client = IllustrationClient::new(
//!     imagen,
//!     config.style.preamble.clone(),
//!     RetryPolicy::from(&config.retry),
//! );
//!
//! let saved = client
//!     .generate(
//!         "A thirsty crow beside a clay pitcher",
//!         Path::new("crow.png"),
//!         AspectRatio::Portrait,
//!         8,
//!     )
//!     .await?;
//! println!("saved: {saved}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod generator;
mod illustrator;
mod pause;
mod vertex;

pub use auth::{ACCESS_TOKEN_ENV, AccessTokenSource, GcloudTokenSource};
pub use generator::{ImageGenerator, ImagenResult};
pub use illustrator::IllustrationClient;
pub use pause::{Pause, TokioPause};
pub use vertex::{VertexImagenClient, predict_url};
