//! Runtime configuration, read from an inline JSON script element.
//!
//! ```html
//! <script id="mood-config" type="application/json">
//!   { "oracle": { "apiKey": "...", "model": "gemini-2.0-flash" }, "locale": "ko-KR" }
//! </script>
//! ```
//!
//! Every field is optional; anything missing keeps its default.

use serde::Deserialize;

/// Id of the script element holding the configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "mood-config";

/// Connection settings for the Gemini oracle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OracleConfig {
	/// API key sent as the `key` query parameter. Empty means the hosting
	/// page injects credentials some other way.
	pub api_key: String,
	/// Gemini model name, e.g. `gemini-2.0-flash`.
	pub model: String,
	/// API root without a trailing `/models/...` path.
	pub base_url: String,
}

impl Default for OracleConfig {
	fn default() -> Self {
		Self {
			api_key: String::new(),
			model: "gemini-2.0-flash".to_string(),
			base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
		}
	}
}

impl OracleConfig {
	/// Full `generateContent` URL for the configured model, without the key.
	pub fn endpoint_url(&self) -> String {
		format!(
			"{}/models/{}:generateContent",
			self.base_url.trim_end_matches('/'),
			self.model
		)
	}
}

/// Top-level application configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Oracle connection.
	pub oracle: OracleConfig,
	/// Overrides the browser's preferred language when set.
	pub locale: Option<String>,
}

impl AppConfig {
	/// Parse the JSON body of the config element.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}
}
