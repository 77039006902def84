//! Feeling submission and the state it drives.
//!
//! [`SessionController`] runs both oracle calls for a submitted feeling and
//! reports progress as [`SessionEvent`]s. [`SessionState`] is the single owner
//! of what the view shows and changes only by applying those events.

use log::{info, warn};

use crate::components::mood_canvas::{VisualParams, contrasting_text_color};
use crate::error::{MoodError, Result};
use crate::i18n::Strings;
use crate::oracle::{MoodOracleClient, Oracle};

/// One step of a submission, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
	/// Both oracle calls are about to run.
	LoadingStarted,
	/// New visuals, from the oracle or the fallback.
	Visuals(VisualParams),
	/// New suggestion list, from the oracle or the fallback.
	Suggestions(Vec<String>),
	/// Both calls have settled.
	LoadingFinished,
}

/// Everything the view renders besides the particles themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
	/// Parameters the canvas is drawing.
	pub visuals: VisualParams,
	/// Feelings offered as one-click submissions, in display order.
	pub suggestions: Vec<String>,
	/// True while a submission is in flight.
	pub loading: bool,
}

impl SessionState {
	/// Startup scene and the localized startup suggestions.
	pub fn new(strings: &Strings) -> Self {
		Self {
			visuals: VisualParams::startup(),
			suggestions: owned(&strings.default_suggestions),
			loading: false,
		}
	}

	/// Fold one event in, replacing whatever it carries wholesale.
	pub fn apply(&mut self, event: SessionEvent) {
		match event {
			SessionEvent::LoadingStarted => self.loading = true,
			SessionEvent::Visuals(visuals) => self.visuals = visuals,
			SessionEvent::Suggestions(suggestions) => self.suggestions = suggestions,
			SessionEvent::LoadingFinished => self.loading = false,
		}
	}

	/// Foreground color that stays legible on the current background.
	pub fn text_color(&self) -> &'static str {
		contrasting_text_color(&self.visuals.background_color)
	}

	/// Colors for the controls drawn over the canvas.
	pub fn palette(&self) -> Palette {
		Palette {
			foreground: self.text_color(),
			background: self.visuals.background_color.clone(),
		}
	}
}

/// Control colors derived from the canvas background.
///
/// Outlined controls (title, heading, suggestions, input) use `foreground`
/// for text and border. The Update button is solid: `foreground` fill with a
/// `background` label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	/// Contrasting text color, `#000000` or `#FFFFFF`.
	pub foreground: &'static str,
	/// The canvas background color.
	pub background: String,
}

fn owned(words: &[&str]) -> Vec<String> {
	words.iter().map(|w| w.to_string()).collect()
}

/// Wires submitted feelings to the oracle.
pub struct SessionController<O> {
	client: MoodOracleClient<O>,
}

impl<O: Oracle> SessionController<O> {
	/// Controller asking `oracle` in the language of `strings`.
	pub fn new(oracle: O, strings: &'static Strings) -> Self {
		Self {
			client: MoodOracleClient::new(oracle, strings),
		}
	}

	/// String table used for prompts and fallbacks.
	pub fn strings(&self) -> &'static Strings {
		self.client.strings()
	}

	/// Fetch visuals, then recommendations, for `text`.
	///
	/// Emits `LoadingStarted`, `Visuals`, `Suggestions`, `LoadingFinished`
	/// in that order. Each call that fails is replaced by its fallback on its
	/// own, so the only error returned is [`MoodError::InputIgnored`] for
	/// blank text, in which case nothing is emitted.
	pub async fn submit_feeling<F>(&self, text: &str, mut emit: F) -> Result<()>
	where
		F: FnMut(SessionEvent),
	{
		let feeling = text.trim();
		if feeling.is_empty() {
			return Err(MoodError::InputIgnored);
		}
		info!("mood-weather: submitting feeling {:?}", feeling);
		emit(SessionEvent::LoadingStarted);

		let visuals = match self.client.fetch_visual_params(feeling).await {
			Ok(visuals) => visuals,
			Err(e) => {
				warn!("mood-weather: visuals unavailable, using fallback: {}", e);
				VisualParams::fallback()
			}
		};
		emit(SessionEvent::Visuals(visuals));

		let suggestions = match self.client.fetch_recommendations(feeling).await {
			Ok(suggestions) => suggestions,
			Err(e) => {
				warn!(
					"mood-weather: recommendations unavailable, using fallback: {}",
					e
				);
				owned(&self.strings().fallback_suggestions)
			}
		};
		emit(SessionEvent::Suggestions(suggestions));

		emit(SessionEvent::LoadingFinished);
		Ok(())
	}
}
