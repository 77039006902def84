use log::{debug, info};

use super::{Oracle, OracleRequest, ResponseShape};
use crate::components::mood_canvas::{RawVisualParams, VisualParams};
use crate::error::{MoodError, Result};
use crate::i18n::Strings;

/// Turns a feeling into typed visuals and related feelings.
///
/// Both calls are single attempt. Errors are returned as-is; choosing a
/// fallback is the caller's business.
pub struct MoodOracleClient<O> {
	oracle: O,
	strings: &'static Strings,
}

impl<O: Oracle> MoodOracleClient<O> {
	/// Client asking `oracle` with the prompts of `strings`.
	pub fn new(oracle: O, strings: &'static Strings) -> Self {
		Self { oracle, strings }
	}

	/// String table the prompts come from.
	pub fn strings(&self) -> &'static Strings {
		self.strings
	}

	#[cfg(test)]
	pub(crate) fn oracle(&self) -> &O {
		&self.oracle
	}

	/// Ask for the canvas parameters matching `feeling`.
	pub async fn fetch_visual_params(&self, feeling: &str) -> Result<VisualParams> {
		let feeling = non_empty(feeling)?;
		let request = OracleRequest {
			prompt: self.strings.visuals_prompt_for(feeling),
			shape: ResponseShape::VisualParams,
		};
		let reply = self.oracle.generate(&request).await?;
		debug!("mood-weather: visuals reply {}", reply);

		let raw: RawVisualParams = serde_json::from_value(reply)?;
		let visuals = VisualParams::try_from(raw)?;
		info!(
			"mood-weather: visuals for {:?}: {} x{} {}",
			feeling,
			visuals.emoji,
			visuals.particle_count,
			visuals.movement.name()
		);
		Ok(visuals)
	}

	/// Ask for feelings related to `feeling`, in the oracle's order.
	///
	/// Entries are trimmed and blanks dropped. Any length is accepted,
	/// including none at all.
	pub async fn fetch_recommendations(&self, feeling: &str) -> Result<Vec<String>> {
		let feeling = non_empty(feeling)?;
		let request = OracleRequest {
			prompt: self.strings.recommendations_prompt_for(feeling),
			shape: ResponseShape::FeelingList,
		};
		let reply = self.oracle.generate(&request).await?;
		debug!("mood-weather: recommendations reply {}", reply);

		let suggestions: Vec<String> = serde_json::from_value::<Vec<String>>(reply)?
			.into_iter()
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect();
		info!("mood-weather: {} recommendations", suggestions.len());
		Ok(suggestions)
	}
}

fn non_empty(feeling: &str) -> Result<&str> {
	let feeling = feeling.trim();
	if feeling.is_empty() {
		Err(MoodError::InputIgnored)
	} else {
		Ok(feeling)
	}
}
