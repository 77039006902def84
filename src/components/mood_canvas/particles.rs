//! Emoji particles and the per-frame motion rules that drive them.

use rand::Rng;

use super::types::MovementPolicy;

/// Velocity components are drawn from `[-MAX_SPEED, MAX_SPEED)` px/frame.
const MAX_SPEED: f64 = 1.0;
const SIZE_MIN: f64 = 30.0;
const SIZE_MAX: f64 = 50.0;
/// Spin rates are drawn from `[-MAX_SPIN_RATE, MAX_SPIN_RATE)` rad/frame.
const MAX_SPIN_RATE: f64 = 0.025;

const GROW_STEP: f64 = 0.01;
const SCALE_MIN: f64 = 0.5;
const SCALE_MAX: f64 = 1.5;

const FLOAT_AMPLITUDE: f64 = 0.5;
const FLOAT_WAVELENGTH: f64 = 50.0;

/// A single emoji glyph drifting across the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal center in canvas pixels.
	pub x: f64,
	/// Vertical center in canvas pixels.
	pub y: f64,
	/// Horizontal velocity in px/frame.
	pub vx: f64,
	/// Vertical velocity in px/frame.
	pub vy: f64,
	/// Glyph extent in pixels, used as the font size.
	pub size: f64,
	/// Rotation in radians. Only `spin` changes it.
	pub angle: f64,
	/// Radians added to `angle` each frame under spin.
	pub spin_rate: f64,
	/// Render scale around 1.0. Only `grow` changes it.
	pub scale: f64,
	/// +1.0 while growing, -1.0 while shrinking.
	pub scale_direction: f64,
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

impl Particle {
	/// A fresh particle somewhere inside a `width` x `height` canvas.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		Self {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			vx: uniform(rng, -MAX_SPEED, MAX_SPEED),
			vy: uniform(rng, -MAX_SPEED, MAX_SPEED),
			size: uniform(rng, SIZE_MIN, SIZE_MAX),
			angle: 0.0,
			spin_rate: uniform(rng, -MAX_SPIN_RATE, MAX_SPIN_RATE),
			scale: 1.0,
			scale_direction: 1.0,
		}
	}

	/// Advance one frame under `policy`, then wrap around the canvas edges.
	pub fn step(&mut self, policy: MovementPolicy, width: f64, height: f64) {
		match policy {
			MovementPolicy::Bounce => {
				self.reflect(width, height);
				self.translate();
			}
			MovementPolicy::Spin => {
				self.angle += self.spin_rate;
				self.translate();
			}
			MovementPolicy::Grow => {
				self.scale += GROW_STEP * self.scale_direction;
				if self.scale > SCALE_MAX || self.scale < SCALE_MIN {
					self.scale_direction = -self.scale_direction;
				}
				self.translate();
			}
			MovementPolicy::Float => {
				self.translate();
				self.y += (self.x / FLOAT_WAVELENGTH).sin() * FLOAT_AMPLITUDE;
			}
		}
		self.wrap(width, height);
	}

	fn translate(&mut self) {
		self.x += self.vx;
		self.y += self.vy;
	}

	/// Reverse any velocity component carrying the glyph's edge further past
	/// a canvas border. Edges are `size / 2` from the center.
	fn reflect(&mut self, width: f64, height: f64) {
		let half = self.size / 2.0;
		if (self.x + half > width && self.vx > 0.0) || (self.x - half < 0.0 && self.vx < 0.0) {
			self.vx = -self.vx;
		}
		if (self.y + half > height && self.vy > 0.0) || (self.y - half < 0.0 && self.vy < 0.0) {
			self.vy = -self.vy;
		}
	}

	/// Toroidal wrap: a glyph fully past one edge re-enters at the opposite one.
	fn wrap(&mut self, width: f64, height: f64) {
		if self.x > width + self.size {
			self.x = -self.size;
		} else if self.x < -self.size {
			self.x = width + self.size;
		}
		if self.y > height + self.size {
			self.y = -self.size;
		} else if self.y < -self.size {
			self.y = height + self.size;
		}
	}
}

/// Owns the particle population for the current scene.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// An empty field.
	pub fn new() -> Self {
		Self::default()
	}

	/// Throw away every particle and create `count` new ones within the canvas.
	pub fn reseed<R: Rng + ?Sized>(&mut self, count: usize, width: f64, height: f64, rng: &mut R) {
		self.particles = (0..count)
			.map(|_| Particle::random(rng, width, height))
			.collect();
	}

	/// Advance every particle by one frame.
	pub fn update(&mut self, policy: MovementPolicy, width: f64, height: f64) {
		for p in &mut self.particles {
			p.step(policy, width, height);
		}
	}

	/// Current particles, in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True before the first reseed, or after a reseed to zero.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const W: f64 = 320.0;
	const H: f64 = 240.0;

	fn seeded_field(count: usize) -> ParticleField {
		let mut field = ParticleField::new();
		field.reseed(count, W, H, &mut StdRng::seed_from_u64(7));
		field
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 40.0,
			angle: 0.0,
			spin_rate: 0.02,
			scale: 1.0,
			scale_direction: 1.0,
		}
	}

	#[test]
	fn reseed_respects_count_and_ranges() {
		let field = seeded_field(64);
		assert_eq!(field.len(), 64);
		for p in field.particles() {
			assert!((0.0..W).contains(&p.x) && (0.0..H).contains(&p.y));
			assert!((SIZE_MIN..SIZE_MAX).contains(&p.size));
			assert!((-MAX_SPEED..MAX_SPEED).contains(&p.vx));
			assert!((-MAX_SPEED..MAX_SPEED).contains(&p.vy));
			assert!((-MAX_SPIN_RATE..MAX_SPIN_RATE).contains(&p.spin_rate));
			assert_eq!((p.angle, p.scale, p.scale_direction), (0.0, 1.0, 1.0));
		}
	}

	#[test]
	fn reseed_replaces_the_whole_population() {
		let mut field = seeded_field(30);
		let before = field.particles().to_vec();
		field.reseed(5, W, H, &mut StdRng::seed_from_u64(99));
		assert_eq!(field.len(), 5);
		assert!(field.particles().iter().all(|p| !before.contains(p)));
	}

	#[test]
	fn reseed_on_zero_sized_canvas_pins_to_origin() {
		let mut field = ParticleField::new();
		field.reseed(3, 0.0, 0.0, &mut StdRng::seed_from_u64(1));
		assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn bounce_reflects_outward_motion_before_moving() {
		let mut p = particle(W - 10.0, H / 2.0, 0.5, 0.0);
		p.step(MovementPolicy::Bounce, W, H);
		assert_eq!(p.vx, -0.5);
		assert_eq!(p.x, W - 10.5);

		let mut p = particle(H / 2.0, 5.0, 0.0, -0.75);
		p.step(MovementPolicy::Bounce, W, H);
		assert_eq!(p.vy, 0.75);
		assert_eq!(p.y, 5.75);
	}

	#[test]
	fn bounce_leaves_inward_motion_alone() {
		let mut p = particle(W - 10.0, H / 2.0, -0.5, 0.0);
		p.step(MovementPolicy::Bounce, W, H);
		assert_eq!(p.vx, -0.5);
		assert_eq!(p.x, W - 10.5);
	}

	/// How far a glyph's edge sits past either border of one axis.
	fn overshoot(pos: f64, size: f64, extent: f64) -> f64 {
		let half = size / 2.0;
		(pos + half - extent).max(half - pos).max(0.0)
	}

	#[test]
	fn bounce_never_drifts_further_outside() {
		let mut field = seeded_field(40);
		for _ in 0..2_000 {
			let before: Vec<(f64, f64)> = field
				.particles()
				.iter()
				.map(|p| (overshoot(p.x, p.size, W), overshoot(p.y, p.size, H)))
				.collect();
			field.update(MovementPolicy::Bounce, W, H);
			for (p, (was_x, was_y)) in field.particles().iter().zip(before) {
				for (was, now) in [
					(was_x, overshoot(p.x, p.size, W)),
					(was_y, overshoot(p.y, p.size, H)),
				] {
					// Already outside: must not get worse. Inside: at most one step out.
					let limit = if was > 0.0 { was } else { MAX_SPEED };
					assert!(now <= limit + 1e-9, "overshoot {was} -> {now}");
				}
			}
		}
	}

	#[test]
	fn spin_rotates_by_spin_rate() {
		let mut p = particle(100.0, 100.0, 1.0, 1.0);
		for _ in 0..10 {
			p.step(MovementPolicy::Spin, W, H);
		}
		assert!((p.angle - 0.2).abs() < 1e-12);
		assert_eq!((p.x, p.y), (110.0, 110.0));
		assert_eq!(p.scale, 1.0);
	}

	#[test]
	fn grow_oscillates_between_scale_bounds() {
		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		let mut saw_shrink = false;
		for _ in 0..500 {
			p.step(MovementPolicy::Grow, W, H);
			assert!((SCALE_MIN - GROW_STEP - 1e-9..=SCALE_MAX + GROW_STEP + 1e-9).contains(&p.scale));
			saw_shrink |= p.scale_direction < 0.0;
		}
		assert!(saw_shrink);
		assert_eq!(p.angle, 0.0);
	}

	#[test]
	fn float_adds_a_vertical_wave() {
		let mut p = particle(49.0, 100.0, 1.0, 0.0);
		p.step(MovementPolicy::Float, W, H);
		assert_eq!(p.x, 50.0);
		assert!((p.y - (100.0 + 0.5 * 1.0_f64.sin())).abs() < 1e-12);
	}

	#[test]
	fn unknown_movement_names_move_like_float() {
		let mut a = seeded_field(20);
		let mut b = a.clone();
		for _ in 0..100 {
			a.update(MovementPolicy::parse("wobble"), W, H);
			b.update(MovementPolicy::Float, W, H);
		}
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn wrap_moves_particles_to_the_opposite_edge() {
		let mut p = particle(W + 40.5, 100.0, 1.0, 0.0);
		p.step(MovementPolicy::Spin, W, H);
		assert_eq!(p.x, -40.0);

		let mut p = particle(100.0, -40.5, 0.0, -1.0);
		p.step(MovementPolicy::Spin, W, H);
		assert_eq!(p.y, H + 40.0);
	}

	#[test]
	fn every_policy_stays_within_wrap_bounds() {
		for policy in [
			MovementPolicy::Float,
			MovementPolicy::Bounce,
			MovementPolicy::Spin,
			MovementPolicy::Grow,
		] {
			let mut field = seeded_field(50);
			for _ in 0..5_000 {
				field.update(policy, W, H);
				for p in field.particles() {
					assert!(p.x >= -p.size && p.x <= W + p.size, "{policy:?} x={}", p.x);
					assert!(p.y >= -p.size && p.y <= H + p.size, "{policy:?} y={}", p.y);
				}
			}
		}
	}
}
