//! Gemini `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MoodError, Result};

/// One piece of a message.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Part {
	/// Plain text content.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

/// A message in the conversation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
	/// `user` or `model`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	/// Message body.
	#[serde(default)]
	pub parts: Vec<Part>,
}

/// Constrains the reply to a JSON document of a given shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
	/// Always `application/json` here.
	pub response_mime_type: String,
	/// Schema from [`super::ResponseShape::schema`].
	pub response_schema: Value,
}

/// Gemini generation request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
	/// Conversation turns.
	pub contents: Vec<Content>,
	/// Output constraints.
	pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
	/// Single-turn user prompt whose reply must be JSON matching `schema`.
	pub fn json_reply(prompt: &str, schema: Value) -> Self {
		Self {
			contents: vec![Content {
				role: Some("user".to_string()),
				parts: vec![Part {
					text: Some(prompt.to_string()),
				}],
			}],
			generation_config: GenerationConfig {
				response_mime_type: "application/json".to_string(),
				response_schema: schema,
			},
		}
	}
}

/// Gemini candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	/// Generated message.
	#[serde(default)]
	pub content: Option<Content>,
	/// Why generation stopped, e.g. `STOP`.
	#[serde(default)]
	pub finish_reason: Option<String>,
}

/// Prompt feedback
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
	/// Set when the prompt was refused.
	#[serde(default)]
	pub block_reason: Option<String>,
}

/// Gemini response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
	/// Generated alternatives, best first.
	#[serde(default)]
	pub candidates: Vec<Candidate>,
	/// Safety feedback on the prompt.
	#[serde(default)]
	pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
	/// Text of the first part of the first candidate.
	pub fn text(&self) -> Option<&str> {
		self.candidates
			.first()?
			.content
			.as_ref()?
			.parts
			.first()?
			.text
			.as_deref()
	}

	/// Parse the reply text as the JSON document the schema asked for.
	pub fn json_payload(&self) -> Result<Value> {
		if let Some(reason) = self
			.prompt_feedback
			.as_ref()
			.and_then(|pf| pf.block_reason.as_deref())
		{
			return Err(MoodError::MalformedResponse(format!(
				"prompt blocked: {reason}"
			)));
		}
		let text = self
			.text()
			.ok_or_else(|| MoodError::MalformedResponse("no candidates in response".into()))?;
		Ok(serde_json::from_str(text)?)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn request_serializes_in_gemini_shape() {
		let request = GenerateContentRequest::json_reply("hi", json!({ "type": "ARRAY" }));
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
				"generationConfig": {
					"responseMimeType": "application/json",
					"responseSchema": { "type": "ARRAY" }
				}
			})
		);
	}

	#[test]
	fn payload_is_parsed_from_first_candidate_text() {
		let response: GenerateContentResponse = serde_json::from_value(json!({
			"candidates": [{
				"content": { "role": "model", "parts": [{ "text": "[\"calm\",\"hope\"]" }] },
				"finishReason": "STOP"
			}]
		}))
		.unwrap();
		assert_eq!(response.json_payload().unwrap(), json!(["calm", "hope"]));
	}

	#[test]
	fn missing_candidates_are_malformed() {
		let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
		assert!(matches!(
			response.json_payload(),
			Err(MoodError::MalformedResponse(_))
		));
	}

	#[test]
	fn non_json_text_is_malformed() {
		let response: GenerateContentResponse = serde_json::from_value(json!({
			"candidates": [{ "content": { "parts": [{ "text": "I feel sunny!" }] } }]
		}))
		.unwrap();
		assert!(matches!(
			response.json_payload(),
			Err(MoodError::MalformedResponse(_))
		));
	}

	#[test]
	fn blocked_prompt_is_malformed() {
		let response: GenerateContentResponse = serde_json::from_value(json!({
			"promptFeedback": { "blockReason": "SAFETY" }
		}))
		.unwrap();
		let err = response.json_payload().unwrap_err();
		assert!(err.to_string().contains("SAFETY"));
	}
}
