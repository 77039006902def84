//! Text-generation oracle that turns a feeling into visuals and related feelings.
//!
//! [`Oracle`] is the seam between the session and the network: the browser
//! build talks to Gemini through [`GeminiClient`], tests script replies.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::components::mood_canvas::MovementPolicy;
use crate::error::Result;

mod gemini;
pub mod models;
mod mood;

pub use gemini::GeminiClient;
pub use mood::MoodOracleClient;

/// The JSON document a request expects back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
	/// Object with `backgroundColor`, `emoji`, `particleCount` and `movement`.
	VisualParams,
	/// Array of feeling words.
	FeelingList,
}

impl ResponseShape {
	/// Response schema in the dialect `generationConfig.responseSchema` accepts.
	pub fn schema(self) -> Value {
		match self {
			Self::VisualParams => json!({
				"type": "OBJECT",
				"properties": {
					"backgroundColor": { "type": "STRING" },
					"emoji": { "type": "STRING" },
					"particleCount": { "type": "NUMBER" },
					"movement": {
						"type": "STRING",
						"enum": MovementPolicy::NAMES,
					},
				},
				"required": ["backgroundColor", "emoji", "particleCount", "movement"],
			}),
			Self::FeelingList => json!({
				"type": "ARRAY",
				"items": { "type": "STRING" },
			}),
		}
	}
}

/// A single prompt and the shape its reply must take.
#[derive(Clone, Debug)]
pub struct OracleRequest {
	/// Natural-language instruction.
	pub prompt: String,
	/// Schema the reply must follow.
	pub shape: ResponseShape,
}

/// Something that answers prompts with structured JSON.
#[async_trait(?Send)]
pub trait Oracle {
	/// Send one prompt and return the parsed JSON reply.
	async fn generate(&self, request: &OracleRequest) -> Result<Value>;
}
