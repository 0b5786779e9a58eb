//! Gemini `generateContent` over reqwest.

use super::dto::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use chatterbox_error::{GeminiError, GeminiErrorKind, GeminiResult};
use chatterbox_interface::GenerationBackend;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini API host.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini REST client.
///
/// Non-success statuses surface as [`GeminiErrorKind::HttpError`] so the
/// caller can decide between key rotation and a plain retry.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for `model` against the public API.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: GEMINI_API_BASE.to_string(),
            model: model.into(),
        }
    }

    /// Point the client at a different host (proxies, tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    #[instrument(skip(self, api_key, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate_content(&self, api_key: &str, prompt: &str) -> GeminiResult<String> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key; keep it out of logs.
                let e = e.without_url();
                error!(error = %e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = %status, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string()))
        })?;

        let text = body
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        debug!(text_len = text.len(), "Received response from Gemini");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new("gemini-2.5-flash").with_api_base("http://localhost:9/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
