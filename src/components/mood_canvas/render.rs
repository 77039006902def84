//! Canvas rendering for the mood scene.
//!
//! One pass per frame: a solid background fill, then every particle's emoji
//! drawn centered on its position with its own rotation and scale.

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::CanvasScene;

/// Paints the complete scene to the canvas.
pub fn render(scene: &CanvasScene, ctx: &CanvasRenderingContext2d) {
	draw_background(scene, ctx);

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for p in scene.field.particles() {
		draw_particle(ctx, p, &scene.visuals.emoji);
	}
}

fn draw_background(scene: &CanvasScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&scene.visuals.background_color);
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle, emoji: &str) {
	ctx.save();
	let _ = ctx.translate(p.x, p.y);
	let _ = ctx.rotate(p.angle);
	let _ = ctx.scale(p.scale, p.scale);
	ctx.set_font(&glyph_font(p.size));
	let _ = ctx.fill_text(emoji, 0.0, 0.0);
	ctx.restore();
}

/// CSS font shorthand for a glyph of `size` pixels.
fn glyph_font(size: f64) -> String {
	format!("{}px sans-serif", size)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn font_uses_particle_size_in_pixels() {
		assert_eq!(glyph_font(42.0), "42px sans-serif");
		assert_eq!(glyph_font(37.5), "37.5px sans-serif");
	}
}
