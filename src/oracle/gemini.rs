//! Google Gemini HTTP client.

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use super::models::{GenerateContentRequest, GenerateContentResponse};
use super::{Oracle, OracleRequest};
use crate::config::OracleConfig;
use crate::error::{MoodError, Result};

/// Calls `generateContent` once per request. No retries, no timeout.
pub struct GeminiClient {
	config: OracleConfig,
	client: reqwest::Client,
}

impl GeminiClient {
	/// Client for the configured model.
	pub fn new(config: OracleConfig) -> Self {
		debug!("mood-weather: gemini client using model {}", config.model);
		Self {
			config,
			client: reqwest::Client::new(),
		}
	}

	async fn make_request(&self, body: &GenerateContentRequest) -> Result<GenerateContentResponse> {
		let url = self.config.endpoint_url();
		debug!("mood-weather: oracle request to {}", url);

		let mut builder = self.client.post(&url).json(body);
		if !self.config.api_key.is_empty() {
			builder = builder.query(&[("key", self.config.api_key.as_str())]);
		}
		let response = builder.send().await?;

		let status = response.status();
		if !status.is_success() {
			let error_text = response
				.text()
				.await
				.unwrap_or_else(|_| "unknown error".to_string());
			error!("mood-weather: oracle error {}: {}", status, error_text);
			return Err(MoodError::Transport(format!("status {status}: {error_text}")));
		}

		Ok(response.json::<GenerateContentResponse>().await?)
	}
}

#[async_trait(?Send)]
impl Oracle for GeminiClient {
	async fn generate(&self, request: &OracleRequest) -> Result<Value> {
		let body = GenerateContentRequest::json_reply(&request.prompt, request.shape.schema());
		let response = self.make_request(&body).await?;
		if let Some(reason) = response
			.candidates
			.first()
			.and_then(|c| c.finish_reason.as_deref())
		{
			debug!("mood-weather: oracle finished with {}", reason);
		}
		response.json_payload()
	}
}
