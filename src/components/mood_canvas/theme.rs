//! Color parsing and legible-text derivation for the mood canvas.

/// Text color used on light backgrounds.
pub const DARK_TEXT: &str = "#000000";
/// Text color used on dark backgrounds, and for anything unparseable.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Luminance above which text switches to dark, in thousandths.
const DARK_TEXT_THRESHOLD: u32 = 600;

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Color from its three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parse a strict `#rrggbb` string.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		Self::decode_channels(digits)
	}

	/// Decode three hex byte pairs from the first six characters.
	fn decode_channels(digits: &str) -> Option<Self> {
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
		Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}

	/// `299 R + 587 G + 114 B`, i.e. luminance times 255 000.
	fn weighted_sum(self) -> u32 {
		299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
	}
}

/// Pick black or white text for a background color.
///
/// Channels are read from characters 1..7 (the leading `#` is not checked).
/// Luminance strictly above 0.6 gets [`DARK_TEXT`]; everything else,
/// including short or undecodable input, gets [`LIGHT_TEXT`].
pub fn contrasting_text_color(hex: &str) -> &'static str {
	if hex.len() < 7 {
		return LIGHT_TEXT;
	}
	let Some(color) = hex.get(1..7).and_then(Color::decode_channels) else {
		return LIGHT_TEXT;
	};

	// Compared before dividing so that exactly 0.6 stays light.
	if color.weighted_sum() > DARK_TEXT_THRESHOLD * 255 {
		DARK_TEXT
	} else {
		LIGHT_TEXT
	}
}
