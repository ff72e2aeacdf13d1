use reqwest::Client;
use serde_json::Value;

use super::error::GeminiError;
use super::model::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Thin client for the Gemini REST API.
///
/// The API key is supplied per call rather than stored, so a client built at
/// cold start never holds a secret.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: Client, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }

    /// POST `generateContent` once. Non-2xx statuses become `GeminiError::Status`.
    pub async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        tracing::debug!(
            model = %self.model,
            parts = request.contents.iter().map(|c| c.parts.len()).sum::<usize>(),
            "Sending request to Gemini API"
        );

        // without_url: the request URL carries the key as a query parameter
        let response = self
            .http
            .post(self.endpoint("generateContent"))
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::Decode(e.without_url()))
    }

    /// Call `generateContent` and parse the first candidate's text as JSON.
    pub async fn generate_json(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value, GeminiError> {
        let response = self.generate_content(api_key, request).await?;
        let text = response.first_text().ok_or(GeminiError::InvalidResponse)?;
        Ok(serde_json::from_str(text)?)
    }
}
