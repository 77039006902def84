//! UI components.

pub mod mood_canvas;
