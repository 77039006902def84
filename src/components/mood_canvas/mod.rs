//! Emoji particle canvas driven by mood parameters.
//!
//! Renders an animated field of emoji glyphs on an HTML canvas with:
//! - A solid background color chosen for the current feeling
//! - One of four movement policies (float, bounce, spin, grow)
//! - Toroidal wrap-around so glyphs never drift out of view for good
//! - Full repopulation whenever the parameters or the window size change
//!
//! # Example
//!
//! ```ignore
//! use mood_weather::components::mood_canvas::{MoodCanvas, VisualParams};
//!
//! let visuals = RwSignal::new(VisualParams::startup());
//! view! { <MoodCanvas visuals=visuals /> }
//! ```

mod component;
pub mod frame_loop;
pub mod particles;
mod render;
pub mod state;
pub mod theme;
mod types;

pub use component::MoodCanvas;
#[cfg(test)]
pub(crate) use component::CANVAS_STYLE;
pub use theme::contrasting_text_color;
pub use types::{MAX_PARTICLES, MovementPolicy, RawVisualParams, VisualParams};
