//! Canvas scene state: the current visual parameters plus the particles they produced.

use log::debug;
use rand::Rng;

use super::particles::ParticleField;
use super::types::VisualParams;

/// Everything the render loop needs for one frame.
///
/// Created once when the canvas mounts. New visual parameters or a new canvas
/// size replace the particle population wholesale; frames only advance it.
pub struct CanvasScene {
	/// Parameters currently drawn.
	pub visuals: VisualParams,
	/// Particles seeded from `visuals`.
	pub field: ParticleField,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
}

impl CanvasScene {
	/// Scene for `visuals` on a `width` x `height` canvas, already seeded.
	pub fn new<R: Rng + ?Sized>(visuals: VisualParams, width: f64, height: f64, rng: &mut R) -> Self {
		let mut scene = Self {
			visuals,
			field: ParticleField::new(),
			width,
			height,
		};
		scene.reseed(rng);
		scene
	}

	/// Swap in a new set of visual parameters and repopulate.
	pub fn apply_visuals<R: Rng + ?Sized>(&mut self, visuals: VisualParams, rng: &mut R) {
		self.visuals = visuals;
		self.reseed(rng);
	}

	/// Track a new canvas size. The random ranges depend on it, so repopulate.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.reseed(rng);
	}

	/// Advance every particle by one frame under the current movement policy.
	pub fn tick(&mut self) {
		self.field
			.update(self.visuals.movement, self.width, self.height);
	}

	fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		self.field
			.reseed(self.visuals.particle_count, self.width, self.height, rng);
		debug!(
			"mood-weather: seeded {} {} particles ({}) on {}x{}",
			self.field.len(),
			self.visuals.emoji,
			self.visuals.movement.name(),
			self.width,
			self.height
		);
	}
}
