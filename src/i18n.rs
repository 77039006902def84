//! Localized UI strings and prompt templates.
//!
//! Two locales ship: `en-US` (default) and `ko-KR`. Lookup goes through
//! [`resolve_locale`], which never fails: exact tag, then any locale sharing
//! the base language, then the default.

/// Locale used when nothing better matches.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Placeholder replaced by the submitted feeling in prompt templates.
pub const EMOTION_PLACEHOLDER: &str = "{emotion}";

/// All translatable strings for one locale.
#[derive(Debug)]
pub struct Strings {
	/// BCP 47 tag of this table.
	pub tag: &'static str,
	/// Page and header title.
	pub title: &'static str,
	/// Placeholder of the feeling input.
	pub input_placeholder: &'static str,
	/// Label of the submit button.
	pub update_button: &'static str,
	/// Submit button label while loading.
	pub processing_text: &'static str,
	/// Heading above the suggestion buttons.
	pub recommendation_title: &'static str,
	/// Loading overlay message.
	pub drawing_message: &'static str,
	/// Instruction for the visual-parameters request.
	pub visuals_prompt: &'static str,
	/// Instruction for the related-feelings request.
	pub recommendations_prompt: &'static str,
	/// Suggestions shown before the first submission.
	pub default_suggestions: [&'static str; 3],
	/// Suggestions shown when the recommendations call fails.
	pub fallback_suggestions: [&'static str; 3],
}

/// English strings.
pub static EN_US: Strings = Strings {
	tag: "en-US",
	title: "Colorful Mood Weather",
	input_placeholder: "How are you feeling?",
	update_button: "Update",
	processing_text: "Thinking...",
	recommendation_title: "How about these feelings?",
	drawing_message: "Drawing your mood weather... Please wait a moment!",
	visuals_prompt: "You are creating visuals for a social-emotional learning app for elementary school students. For the emotion '{emotion}', provide simple visual parameters as JSON. The emoji should be a single, common emoji. The backgroundColor should be a single, safe hex color. The movement should be one of: 'float', 'bounce', 'spin', 'grow'. Respond ONLY with valid JSON.",
	recommendations_prompt: "For a social-emotional learning app for elementary school students, suggest three new emotions related to '{emotion}'. The emotions should be simple, single words. Provide them as a JSON array of strings. Respond ONLY with valid JSON.",
	default_suggestions: ["joy", "sadness", "anger"],
	fallback_suggestions: ["happiness", "surprise", "curiosity"],
};

/// Korean strings.
pub static KO_KR: Strings = Strings {
	tag: "ko-KR",
	title: "알록달록 마음 날씨",
	input_placeholder: "어떤 기분인지 알려주세요",
	update_button: "바꾸기",
	processing_text: "생각 중...",
	recommendation_title: "이런 감정은 어때요?",
	drawing_message: "마음 날씨를 그리고 있어요... 잠시만 기다려 주세요!",
	visuals_prompt: "초등학생을 위한 사회정서학습(SEL) 앱의 시각 자료를 만들고 있습니다. '{emotion}'이라는 감정에 대해, 간단한 시각적 파라미터를 JSON으로 제공해주세요. emoji는 흔하고 간단한 단일 이모지여야 합니다. backgroundColor는 안전한 단일 hex 색상이어야 합니다. movement는 'float'(둥실둥실), 'bounce'(통통), 'spin'(빙글빙글), 'grow'(커졌다 작아졌다) 중 하나여야 합니다. 유효한 JSON으로만 응답해주세요.",
	recommendations_prompt: "초등학생을 위한 사회정서학습(SEL) 앱을 위해, '{emotion}'과 관련된 새로운 감정 세 가지를 추천해주세요. 감정은 간단한 한글 단어여야 합니다. JSON 배열 형식으로 응답해주세요.",
	default_suggestions: ["기쁨", "슬픔", "화남"],
	fallback_suggestions: ["행복", "놀람", "궁금함"],
};

/// Locale table, default first.
static TRANSLATIONS: &[&Strings] = &[&EN_US, &KO_KR];

/// Tags of every locale that has a string table.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
	TRANSLATIONS.iter().map(|strings| strings.tag)
}

/// Pick the best available locale for a requested BCP 47 tag.
///
/// Order: exact match, then the first available tag with the same base
/// language (`ko` or `ko-KP` both map to `ko-KR`), then [`DEFAULT_LOCALE`].
/// Underscore separators (`ko_KR`) and letter case are tolerated.
pub fn resolve_locale<'a>(requested: &str, available: &[&'a str]) -> &'a str {
	let requested = requested.trim().replace('_', "-");

	if let Some(exact) = available
		.iter()
		.copied()
		.find(|tag| tag.eq_ignore_ascii_case(&requested))
	{
		return exact;
	}

	let lang = requested.split('-').next().unwrap_or_default();
	if !lang.is_empty() {
		let prefix = format!("{}-", lang.to_ascii_lowercase());
		if let Some(same_lang) = available
			.iter()
			.copied()
			.find(|tag| tag.to_ascii_lowercase().starts_with(&prefix))
		{
			return same_lang;
		}
	}

	available
		.iter()
		.copied()
		.find(|tag| *tag == DEFAULT_LOCALE)
		.or_else(|| available.first().copied())
		.unwrap_or(DEFAULT_LOCALE)
}

impl Strings {
	/// String table for a requested locale, resolved with fallback.
	pub fn for_locale(requested: &str) -> &'static Strings {
		let tags: Vec<&'static str> = available_locales().collect();
		let tag = resolve_locale(requested, &tags);
		TRANSLATIONS
			.iter()
			.copied()
			.find(|strings| strings.tag == tag)
			.unwrap_or(&EN_US)
	}

	/// Visuals instruction for a feeling.
	pub fn visuals_prompt_for(&self, feeling: &str) -> String {
		self.visuals_prompt.replace(EMOTION_PLACEHOLDER, feeling)
	}

	/// Related-feelings instruction for a feeling.
	pub fn recommendations_prompt_for(&self, feeling: &str) -> String {
		self.recommendations_prompt
			.replace(EMOTION_PLACEHOLDER, feeling)
	}
}
