use serde_json::Value;
use thiserror::Error;

use super::model::{IdentifyRequest, IDENTIFY_PROMPT, IMAGE_MIME_TYPE};
use crate::gemini::{Content, GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig, Part};

#[derive(Debug, Error)]
pub enum IdentifyError {
    #[error("invalid identify request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] GeminiError),
}

/// Parse the raw HTTP body (pure, no HTTP)
pub fn parse_identify_request(body: &[u8]) -> Result<IdentifyRequest, IdentifyError> {
    serde_json::from_slice(body).map_err(IdentifyError::InvalidBody)
}

/// Fixed prompt + inline image, asking for a JSON answer
pub fn build_identify_request(image: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![
                Part::text(IDENTIFY_PROMPT),
                Part::inline_data(IMAGE_MIME_TYPE, image),
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
        }),
    }
}

/// Ask the model to classify one image. Returns the model's JSON answer unmodified.
pub async fn identify(
    client: &GeminiClient,
    api_key: &str,
    request: &IdentifyRequest,
) -> Result<Value, IdentifyError> {
    tracing::info!(
        "🔍 identify: model={}, image_len={}",
        client.model(),
        request.image.len()
    );

    let answer = client
        .generate_json(api_key, &build_identify_request(&request.image))
        .await?;

    tracing::info!("✅ identify: answer={}", answer);
    Ok(answer)
}
