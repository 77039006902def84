//! Rendering parameters for the mood canvas, and their wire form.

use log::warn;
use serde::Deserialize;

use super::theme::Color;
use crate::error::{MoodError, Result};

/// Upper bound on particles kept alive, whatever the oracle asks for.
pub const MAX_PARTICLES: usize = 200;

/// Per-frame motion rule applied to every particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementPolicy {
	/// Linear drift with a gentle vertical wave.
	#[default]
	Float,
	/// Linear drift, reflecting off the canvas edges.
	Bounce,
	/// Linear drift while each glyph rotates.
	Spin,
	/// Linear drift while each glyph pulses between half and one-and-a-half size.
	Grow,
}

impl MovementPolicy {
	/// Names accepted from the oracle.
	pub const NAMES: [&'static str; 4] = ["float", "bounce", "spin", "grow"];

	/// Parse an oracle movement name. Anything unrecognized floats.
	pub fn parse(name: &str) -> Self {
		match name.trim().to_ascii_lowercase().as_str() {
			"bounce" => Self::Bounce,
			"spin" => Self::Spin,
			"grow" => Self::Grow,
			_ => Self::Float,
		}
	}

	/// Wire name, the inverse of [`MovementPolicy::parse`].
	pub fn name(self) -> &'static str {
		match self {
			Self::Float => "float",
			Self::Bounce => "bounce",
			Self::Spin => "spin",
			Self::Grow => "grow",
		}
	}
}

/// What the canvas should look like for the current feeling.
///
/// Always valid: the background is a `#rrggbb` color, the emoji is non-empty
/// and the particle count is within `1..=MAX_PARTICLES`. Replaced wholesale,
/// never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualParams {
	/// Canvas fill, `#rrggbb`.
	pub background_color: String,
	/// Glyph drawn for every particle.
	pub emoji: String,
	/// How many particles to keep alive.
	pub particle_count: usize,
	/// Motion rule for every particle.
	pub movement: MovementPolicy,
}

impl VisualParams {
	/// Scene shown before anything is submitted.
	pub fn startup() -> Self {
		Self {
			background_color: "#1a1a2e".to_string(),
			emoji: "😊".to_string(),
			particle_count: 20,
			movement: MovementPolicy::Float,
		}
	}

	/// Scene shown when the oracle could not produce visuals.
	pub fn fallback() -> Self {
		Self {
			background_color: "#4a4a7f".to_string(),
			emoji: "🤔".to_string(),
			particle_count: 15,
			movement: MovementPolicy::Bounce,
		}
	}
}

impl Default for VisualParams {
	fn default() -> Self {
		Self::startup()
	}
}

/// Visual parameters exactly as the oracle sends them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVisualParams {
	/// Requested fill, validated on conversion.
	pub background_color: String,
	/// Requested glyph.
	pub emoji: String,
	/// Requested count. JSON numbers may be fractional.
	pub particle_count: f64,
	/// Requested movement name.
	pub movement: String,
}

impl TryFrom<RawVisualParams> for VisualParams {
	type Error = MoodError;

	fn try_from(raw: RawVisualParams) -> Result<Self> {
		let emoji = raw.emoji.trim();
		if emoji.is_empty() {
			return Err(MoodError::MalformedResponse("empty emoji".into()));
		}

		let count = raw.particle_count.round();
		if !count.is_finite() || count < 1.0 {
			return Err(MoodError::MalformedResponse(format!(
				"particle count {} is not positive",
				raw.particle_count
			)));
		}
		let particle_count = (count as usize).min(MAX_PARTICLES);

		// A bad color only costs the palette, not the whole response.
		let color = raw.background_color.trim();
		let background_color = if Color::from_hex(color).is_some() {
			color.to_string()
		} else {
			warn!(
				"mood-weather: oracle color {:?} is not #rrggbb, using fallback",
				raw.background_color
			);
			VisualParams::fallback().background_color
		};

		Ok(Self {
			background_color,
			emoji: emoji.to_string(),
			particle_count,
			movement: MovementPolicy::parse(&raw.movement),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(color: &str, count: f64, movement: &str) -> RawVisualParams {
		RawVisualParams {
			background_color: color.into(),
			emoji: "🌈".into(),
			particle_count: count,
			movement: movement.into(),
		}
	}

	#[test]
	fn unknown_movement_floats() {
		assert_eq!(MovementPolicy::parse("zigzag"), MovementPolicy::Float);
		assert_eq!(MovementPolicy::parse(""), MovementPolicy::Float);
		assert_eq!(MovementPolicy::parse(" Bounce "), MovementPolicy::Bounce);
		for name in MovementPolicy::NAMES {
			assert_eq!(MovementPolicy::parse(name).name(), name);
		}
	}

	#[test]
	fn deserializes_camel_case_wire_form() {
		let raw: RawVisualParams = serde_json::from_str(
			r##"{"backgroundColor":"#FFD700","emoji":"😊","particleCount":12,"movement":"bounce"}"##,
		)
		.unwrap();
		let visuals = VisualParams::try_from(raw).unwrap();
		assert_eq!(visuals.background_color, "#FFD700");
		assert_eq!(visuals.emoji, "😊");
		assert_eq!(visuals.particle_count, 12);
		assert_eq!(visuals.movement, MovementPolicy::Bounce);
	}

	#[test]
	fn malformed_color_is_replaced_not_stored() {
		let visuals = VisualParams::try_from(raw("sunshine", 10.0, "spin")).unwrap();
		assert_eq!(visuals.background_color, VisualParams::fallback().background_color);
		assert_eq!(visuals.movement, MovementPolicy::Spin);
	}

	#[test]
	fn particle_count_is_rounded_and_capped() {
		let visuals = VisualParams::try_from(raw("#000000", 7.6, "grow")).unwrap();
		assert_eq!(visuals.particle_count, 8);
		let visuals = VisualParams::try_from(raw("#000000", 5000.0, "grow")).unwrap();
		assert_eq!(visuals.particle_count, MAX_PARTICLES);
	}

	#[test]
	fn non_positive_count_is_malformed() {
		for count in [0.0, -3.0, 0.4, f64::NAN] {
			let err = VisualParams::try_from(raw("#000000", count, "float")).unwrap_err();
			assert!(matches!(err, MoodError::MalformedResponse(_)));
		}
	}

	#[test]
	fn blank_emoji_is_malformed() {
		let mut r = raw("#000000", 3.0, "float");
		r.emoji = "  ".into();
		assert!(VisualParams::try_from(r).is_err());
	}
}
