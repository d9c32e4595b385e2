//! HTTP client for the Gemini `generateContent` API.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::client::{ClientError, CompletionClient};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Sampling parameters kept low and narrow: structured output matters more
/// than variety here.
const TEMPERATURE: f32 = 0.1;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 20;
const MAX_OUTPUT_TOKENS: u32 = 6000;

pub struct GeminiClient {
    http_client: reqwest::Client,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(model: &str, api_key: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: &Value) -> Result<String, ClientError> {
        let parts = response["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].as_array())
            .ok_or_else(|| {
                warn!("no candidates in API response");
                ClientError::ParseError("missing candidates in response".to_string())
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        if text.is_empty() {
            return Err(ClientError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        info!("requesting completion from {}", self.model);
        debug!("prompt length: {} characters", prompt.len());

        let request = serde_json::json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "topK": TOP_K,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        });

        let response = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let message = format!("request to Gemini API failed: {}", e);
                warn!("{}", message);
                if e.is_timeout() {
                    warn!("request timed out");
                }
                if e.is_connect() {
                    warn!("connection error - check network connectivity");
                }
                ClientError::NetworkError(message)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            warn!("API error: HTTP {} - {}", status, message);
            return Err(ClientError::HttpError { status, message });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        let text = Self::extract_text(&body)?;
        debug!("received {} characters from {}", text.len(), self.model);
        Ok(text)
    }
}
