//! Vertex AI Imagen `predict` client.

use crate::{AccessTokenSource, GcloudTokenSource, ImageGenerator, ImagenResult};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use storybook_core::{AspectRatio, GeneratedImage, ImageRequest};
use storybook_error::{ImagenError, ImagenErrorKind};
use storybook_rate_limit::ImagenConfig;
use tracing::{debug, instrument};

/// Upper bound on one `predict` round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// `predict` URL for the configured project, region and model.
///
/// `config.endpoint`, when set, replaces the regional
/// `https://{location}-aiplatform.googleapis.com` base.
///
/// # Examples
///
/// ```
/// use storybook_models::predict_url;
/// use storybook_rate_limit::ImagenConfig;
///
/// assert_eq!(
///     predict_url(&ImagenConfig::default()),
///     "https://us-central1-aiplatform.googleapis.com/v1/projects/tts-stories-488001\
///      /locations/us-central1/publishers/google/models/imagen-3.0-generate-002:predict",
/// );
/// ```
pub fn predict_url(config: &ImagenConfig) -> String {
    let base = match &config.endpoint {
        Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
        None => format!("https://{}-aiplatform.googleapis.com", config.location),
    };
    format!(
        "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
        base, config.project_id, config.location, config.model
    )
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [PromptInstance<'a>; 1],
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PromptInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: AspectRatio,
}

impl<'a> From<&'a ImageRequest> for PredictRequest<'a> {
    fn from(request: &'a ImageRequest) -> Self {
        Self {
            instances: [PromptInstance {
                prompt: request.prompt(),
            }],
            parameters: PredictParameters {
                sample_count: *request.sample_count(),
                aspect_ratio: *request.aspect_ratio(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// Predictions filtered by safety checks carry no bytes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

/// Decode every prediction that carries image bytes.
fn decode_predictions(response: PredictResponse) -> ImagenResult<Vec<GeneratedImage>> {
    response
        .predictions
        .into_iter()
        .filter_map(|prediction| {
            let encoded = prediction.bytes_base64_encoded?;
            Some(
                STANDARD
                    .decode(encoded.as_bytes())
                    .map(|bytes| GeneratedImage::new(bytes, prediction.mime_type))
                    .map_err(|e| ImagenError::new(ImagenErrorKind::Base64Decode(e.to_string()))),
            )
        })
        .collect()
}

/// Imagen on Vertex AI.
///
/// Holds a pooled `reqwest` client; clones share it.
#[derive(Debug, Clone)]
pub struct VertexImagenClient {
    http: reqwest::Client,
    url: String,
    model: String,
    tokens: Arc<dyn AccessTokenSource>,
}

impl VertexImagenClient {
    /// Client for `config` using `gcloud` application-default credentials.
    pub fn new(config: &ImagenConfig) -> ImagenResult<Self> {
        Self::with_token_source(config, Arc::new(GcloudTokenSource::new()))
    }

    /// Client for `config` with an explicit token source.
    pub fn with_token_source(
        config: &ImagenConfig,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> ImagenResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ImagenError::new(ImagenErrorKind::ClientCreation(e.to_string())))?;
        Ok(Self {
            http,
            url: predict_url(config),
            model: config.model.clone(),
            tokens,
        })
    }

    /// Endpoint every request is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Obtain a token now so missing credentials surface before any work.
    #[instrument(skip(self))]
    pub async fn authenticate(&self) -> ImagenResult<()> {
        self.tokens.access_token().await.map(|_| ())
    }
}

#[async_trait]
impl ImageGenerator for VertexImagenClient {
    #[instrument(
        name = "imagen_predict",
        skip(self, request),
        fields(model = %self.model, aspect = %request.aspect_ratio())
    )]
    async fn generate_images(&self, request: &ImageRequest) -> ImagenResult<Vec<GeneratedImage>> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(token)
            .json(&PredictRequest::from(request))
            .send()
            .await
            .map_err(|e| ImagenError::new(ImagenErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) if !body.trim().is_empty() => body,
                _ => status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            return Err(ImagenError::new(ImagenErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ImagenError::new(ImagenErrorKind::InvalidResponse(e.to_string())))?;
        let images = decode_predictions(body)?;
        debug!(images = images.len(), "Imagen response decoded");
        Ok(images)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ImageRequest::new("A crow", AspectRatio::Portrait);
        let body = serde_json::to_value(PredictRequest::from(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "instances": [{"prompt": "A crow"}],
                "parameters": {"sampleCount": 1, "aspectRatio": "3:4"}
            })
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = ImagenConfig {
            endpoint: Some("http://127.0.0.1:8080/".to_string()),
            ..ImagenConfig::default()
        };
        assert!(predict_url(&config).starts_with("http://127.0.0.1:8080/v1/projects/"));
    }

    #[test]
    fn test_decode_predictions() {
        let body: PredictResponse = serde_json::from_str(
            r#"{"predictions": [
                {"bytesBase64Encoded": "iVBORw==", "mimeType": "image/png"},
                {"raiFilteredReason": "filtered"}
            ]}"#,
        )
        .unwrap();
        let images = decode_predictions(body).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].bytes(), &vec![0x89, b'P', b'N', b'G']);
        assert_eq!(images[0].mime_type().as_deref(), Some("image/png"));
    }

    #[test]
    fn test_missing_predictions_is_empty() {
        let body: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(decode_predictions(body).unwrap().is_empty());
    }

    #[test]
    fn test_bad_base64_is_an_error() {
        let body: PredictResponse =
            serde_json::from_str(r#"{"predictions": [{"bytesBase64Encoded": "***"}]}"#).unwrap();
        assert!(decode_predictions(body).is_err());
    }
}
