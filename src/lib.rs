//! mood-weather: turns a typed feeling into an animated emoji weather scene.
//!
//! This crate provides a WASM client that asks a text-generation oracle for a
//! palette, an emoji and a motion style matching the user's feeling, renders
//! them as a particle field on a full-window canvas, and offers related
//! feelings to try next.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod oracle;
pub mod session;

// Pulled in only to enable its `js` backend for `rand` on wasm32.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub use components::mood_canvas::{MoodCanvas, MovementPolicy, VisualParams, contrasting_text_color};
pub use config::AppConfig;
pub use error::MoodError;
pub use i18n::{Strings, resolve_locale};
pub use oracle::{GeminiClient, MoodOracleClient, Oracle};
pub use session::{Palette, SessionController, SessionEvent, SessionState};

/// Inline positioning for the layers stacked over the canvas.
mod layers {
	pub const ROOT: &str = "position: relative; width: 100vw; height: 100vh; overflow: hidden;";
	pub const HEADER: &str = "position: absolute; top: 0; left: 0; z-index: 10; padding: 1rem;";
	pub const PANEL: &str = "position: absolute; bottom: 0; left: 0; right: 0; z-index: 10; padding: 1rem; background: rgba(0, 0, 0, 0.1);";
	pub const OVERLAY: &str = "position: absolute; inset: 0; z-index: 20; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5); color: #FFFFFF;";
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("mood-weather: logging initialized");
}

/// Load configuration from a script element with id="mood-config".
fn load_config() -> Option<AppConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match AppConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"mood-weather: loaded config (model {})",
				config.oracle.model
			);
			Some(config)
		}
		Err(e) => {
			warn!("mood-weather: failed to parse config: {}", e);
			None
		}
	}
}

/// First preferred language of the browser, `en-US` when unknown.
fn browser_locale() -> String {
	let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
		return i18n::DEFAULT_LOCALE.to_string();
	};
	let languages: js_sys::Array = navigator.languages();
	languages
		.get(0)
		.as_string()
		.or_else(|| navigator.language())
		.unwrap_or_else(|| i18n::DEFAULT_LOCALE.to_string())
}

/// Main application component.
/// Reads configuration from the DOM and renders the canvas with its controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_else(|| {
		warn!("mood-weather: no usable config, using defaults");
		AppConfig::default()
	});
	let requested = config.locale.clone().unwrap_or_else(browser_locale);
	let strings = Strings::for_locale(&requested);
	info!("mood-weather: locale {} (requested {})", strings.tag, requested);

	let controller = StoredValue::new_local(Rc::new(SessionController::new(
		GeminiClient::new(config.oracle),
		strings,
	)));
	let session = RwSignal::new(SessionState::new(strings));
	let feeling = RwSignal::new(String::new());

	let visuals = Memo::new(move |_| session.with(|s| s.visuals.clone()));
	let loading = Memo::new(move |_| session.with(|s| s.loading));
	let palette = Memo::new(move |_| session.with(|s| s.palette()));
	let foreground = move || palette.with(|p| p.foreground);
	let background = move || palette.with(|p| p.background.clone());

	let submit = move |text: String| {
		if loading.get_untracked() || text.trim().is_empty() {
			return;
		}
		feeling.set(String::new());
		let controller = controller.get_value();
		spawn_local(async move {
			let outcome = controller
				.submit_feeling(&text, |event| session.update(|s| s.apply(event)))
				.await;
			if let Err(e) = outcome {
				debug!("mood-weather: {}", e);
			}
		});
	};

	view! {
		<Html attr:lang=strings.tag attr:dir="ltr" />
		<Title text=strings.title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="mood-weather" style={layers::ROOT}>
			<MoodCanvas visuals=visuals />
			<Show when=move || loading.get()>
				<div class="loading-overlay" style={layers::OVERLAY}>
					<p>{strings.drawing_message}</p>
				</div>
			</Show>
			<header class="mood-header" style={layers::HEADER}>
				<h1 style:color=foreground>{strings.title}</h1>
			</header>
			<div class="control-panel" style={layers::PANEL}>
				<h2 style:color=foreground>{strings.recommendation_title}</h2>
				<div class="suggestions">
					{move || {
						session
							.with(|s| s.suggestions.clone())
							.into_iter()
							.map(|word| {
								let label = word.clone();
								view! {
									<button
										class="suggestion"
										style:color=foreground
										style:border-color=foreground
										style:background-color="rgba(255, 255, 255, 0.2)"
										disabled=move || loading.get()
										on:click=move |_| submit(word.clone())
									>
										{label}
									</button>
								}
							})
							.collect_view()
					}}
				</div>
				<div class="feeling-input">
					<input
						type="text"
						placeholder=strings.input_placeholder
						style:color=foreground
						style:border-color=foreground
						disabled=move || loading.get()
						prop:value=move || feeling.get()
						on:input=move |ev| feeling.set(event_target_value(&ev))
						on:keydown=move |ev| {
							if ev.key() == "Enter" {
								submit(feeling.get_untracked());
							}
						}
					/>
					<button
						style:color=background
						style:background-color=foreground
						style:border-color=foreground
						disabled=move || loading.get() || feeling.with(|f| f.trim().is_empty())
						on:click=move |_| submit(feeling.get_untracked())
					>
						{move || if loading.get() { strings.processing_text } else { strings.update_button }}
					</button>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mood_canvas::CANVAS_STYLE;

	fn z_index(style: &str) -> i32 {
		style
			.split(';')
			.find_map(|decl| decl.trim().strip_prefix("z-index:"))
			.and_then(|v| v.trim().parse().ok())
			.unwrap_or_else(|| panic!("no z-index in {style:?}"))
	}

	#[test]
	fn controls_stack_above_canvas_and_overlay_above_controls() {
		let canvas = z_index(CANVAS_STYLE);
		for control in [layers::HEADER, layers::PANEL] {
			assert!(z_index(control) > canvas);
			assert!(z_index(layers::OVERLAY) > z_index(control));
		}
	}

	#[test]
	fn layers_are_positioned_against_the_root() {
		assert!(layers::ROOT.contains("position: relative"));
		for layer in [CANVAS_STYLE, layers::HEADER, layers::PANEL, layers::OVERLAY] {
			assert!(layer.contains("position: absolute"), "{layer}");
		}
	}
}
