//! Particle simulation for depth-projected background fields.
//!
//! The simulation is a plain value: [`ParticleField::tick`] advances every
//! particle by one time step and reports how many were recycled. Nothing here
//! touches the browser, so the component layer only has to schedule frames and
//! hand the field to the renderer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::projection::{Projected, project};
use super::theme::{ExitRule, FieldStyle, HueSource, Hsla, Spawn};

/// Duration of one nominal animation frame. Velocities are expressed per frame.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// How far past the left, right and bottom edges a bounded particle may drift.
const EDGE_MARGIN: f64 = 10.0;

/// A single particle in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Depth, kept in `(near_plane, max_depth]`.
	pub z: f64,
	pub vx: f64,
	pub vy: f64,
	/// Depth decrement per frame.
	pub speed: f64,
	/// Base radius before projection.
	pub size: f64,
	/// Hue in degrees, only meaningful for [`HueSource::Random`].
	pub hue: f64,
}

/// Counts of particles recycled during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
	/// Particles that crossed the near plane and respawned at the far plane.
	pub depth_resets: usize,
	/// Particles that left the surface bounds.
	pub bounds_resets: usize,
}

/// Fixed-size particle population bound to one drawing surface.
///
/// Generic over the random source so tests and callers can inject a seeded
/// generator; [`ParticleField::seeded`] covers the common case.
pub struct ParticleField<R = StdRng> {
	pub particles: Vec<Particle>,
	style: FieldStyle,
	width: f64,
	height: f64,
	rng: R,
}

impl ParticleField<StdRng> {
	/// Create a field populated from a [`StdRng`] seeded with `seed`.
	pub fn seeded(style: FieldStyle, width: f64, height: f64, seed: u64) -> Self {
		Self::with_rng(style, width, height, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> ParticleField<R> {
	/// Create a field of `style.count` freshly sampled particles.
	pub fn with_rng(style: FieldStyle, width: f64, height: f64, mut rng: R) -> Self {
		let particles = (0..style.count)
			.map(|_| spawn(&style, width, height, &mut rng, Respawn::Initial))
			.collect();

		Self {
			particles,
			style,
			width,
			height,
			rng,
		}
	}

	/// Create a field from an explicit particle list. Later resets still draw
	/// from `rng`.
	pub fn from_particles(
		style: FieldStyle,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
		rng: R,
	) -> Self {
		Self {
			particles,
			style,
			width,
			height,
			rng,
		}
	}

	/// Advance the simulation by `dt` seconds.
	pub fn tick(&mut self, dt: f64) -> TickReport {
		let step = dt / FRAME_DT;
		let mut report = TickReport::default();
		let (width, height) = (self.width, self.height);

		for p in &mut self.particles {
			p.x += p.vx * step;
			p.y += p.vy * step;
			p.z -= p.speed * step;

			if p.z <= self.style.near_plane {
				*p = spawn(&self.style, width, height, &mut self.rng, Respawn::Depth);
				p.z = self.style.max_depth;
				report.depth_resets += 1;
				continue;
			}

			if self.style.exit == ExitRule::Bounds
				&& (p.y > height + EDGE_MARGIN
					|| p.x < -EDGE_MARGIN
					|| p.x > width + EDGE_MARGIN)
			{
				*p = spawn(&self.style, width, height, &mut self.rng, Respawn::Bounds);
				report.bounds_resets += 1;
			}
		}

		report
	}
}

impl<R> ParticleField<R> {
	/// Resynchronize the surface bounds. Particle positions are left as-is;
	/// resets redistribute them over the new area.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Project a particle onto the current surface.
	pub fn project(&self, p: &Particle) -> Projected {
		project(
			self.style.perspective,
			self.style.opacity,
			(p.x, p.y, p.z),
			p.size,
			self.width,
			self.height,
		)
	}

	/// Fill color for a particle at the given projection.
	pub fn color(&self, p: &Particle, projected: &Projected) -> Hsla {
		let hue = match self.style.hue {
			HueSource::Random { .. } => p.hue,
			HueSource::Depth { base, span } => base + (p.z / self.style.max_depth) * span,
		};
		Hsla {
			hue,
			saturation: self.style.saturation,
			lightness: self.style.lightness,
			alpha: projected.opacity * self.style.fill_alpha,
		}
	}
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty.
fn sample<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Why a particle is being (re)sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Respawn {
	Initial,
	/// Crossed the near plane.
	Depth,
	/// Left the surface bounds.
	Bounds,
}

/// Sample a fresh particle. Only particles that left the bounds re-enter from
/// the style's spawn edge; every other spawn is spread over the whole surface.
fn spawn<R: Rng>(style: &FieldStyle, width: f64, height: f64, rng: &mut R, cause: Respawn) -> Particle {
	let x = sample(rng, (0.0, width));
	let y = match (style.spawn, cause) {
		(Spawn::Top { y }, Respawn::Bounds) => y,
		_ => sample(rng, (0.0, height)),
	};
	// max - U[0, max - near) lies in (near, max]
	let z = style.max_depth - sample(rng, (0.0, style.max_depth - style.near_plane));
	let hue = match style.hue {
		HueSource::Random { min, max } => sample(rng, (min, max)),
		HueSource::Depth { base, .. } => base,
	};

	Particle {
		x,
		y,
		z,
		vx: sample(rng, style.drift_x),
		vy: sample(rng, style.drift_y),
		speed: sample(rng, style.depth_speed),
		size: sample(rng, style.size),
		hue,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn still(z: f64, speed: f64) -> Particle {
		Particle {
			x: 100.0,
			y: 100.0,
			z,
			vx: 0.0,
			vy: 0.0,
			speed,
			size: 2.0,
			hue: 220.0,
		}
	}

	#[test]
	fn seeded_fields_are_reproducible() {
		let a = ParticleField::seeded(FieldStyle::starfield(), 800.0, 600.0, 7);
		let b = ParticleField::seeded(FieldStyle::starfield(), 800.0, 600.0, 7);
		assert_eq!(a.particles, b.particles);
		assert_eq!(a.particles.len(), 150);
	}

	#[test]
	fn initial_particles_respect_style_ranges() {
		let style = FieldStyle::starfield();
		let field = ParticleField::seeded(style.clone(), 800.0, 600.0, 3);
		for p in &field.particles {
			assert!(p.z > 0.0 && p.z <= style.max_depth);
			assert!((1.0..3.0).contains(&p.size));
			assert!((1.0..3.0).contains(&p.speed));
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((200.0..260.0).contains(&p.hue));
		}
	}

	#[test]
	fn depth_stays_within_bounds_across_many_ticks() {
		for style in [FieldStyle::starfield(), FieldStyle::drift()] {
			for seed in 0..8 {
				let mut field = ParticleField::seeded(style.clone(), 640.0, 480.0, seed);
				for _ in 0..1500 {
					field.tick(FRAME_DT);
					for p in &field.particles {
						assert!(
							p.z > style.near_plane && p.z <= style.max_depth,
							"{} seed {seed}: depth {} escaped",
							style.name,
							p.z
						);
					}
				}
			}
		}
	}

	#[test]
	fn single_particle_resets_once_after_reaching_near_plane() {
		let mut field = ParticleField::from_particles(
			FieldStyle::starfield(),
			800.0,
			600.0,
			vec![still(500.0, 1.0)],
			StdRng::seed_from_u64(1),
		);

		let mut resets = 0;
		for _ in 0..500 {
			resets += field.tick(FRAME_DT).depth_resets;
		}

		assert_eq!(resets, 1);
		assert_eq!(field.particles[0].z, 1000.0);
	}

	#[test]
	fn no_reset_before_near_plane() {
		let mut field = ParticleField::from_particles(
			FieldStyle::starfield(),
			800.0,
			600.0,
			vec![still(500.0, 1.0)],
			StdRng::seed_from_u64(1),
		);
		for _ in 0..499 {
			assert_eq!(field.tick(FRAME_DT), TickReport::default());
		}
		assert_eq!(field.particles[0].z, 1.0);
	}

	#[test]
	fn depth_reset_samples_new_lateral_position() {
		let mut field = ParticleField::from_particles(
			FieldStyle::starfield(),
			800.0,
			600.0,
			vec![still(1.0, 2.0)],
			StdRng::seed_from_u64(9),
		);
		let report = field.tick(FRAME_DT);
		assert_eq!(report.depth_resets, 1);
		let p = &field.particles[0];
		assert_ne!((p.x, p.y), (100.0, 100.0));
		assert_eq!(p.z, 1000.0);
	}

	#[test]
	fn drift_depth_reset_lands_anywhere_on_surface() {
		let mut field = ParticleField::from_particles(
			FieldStyle::drift(),
			800.0,
			600.0,
			vec![still(2.0, 2.0)],
			StdRng::seed_from_u64(21),
		);
		let report = field.tick(FRAME_DT);
		assert_eq!(report.depth_resets, 1);
		let p = &field.particles[0];
		assert!((0.0..600.0).contains(&p.y), "y = {}", p.y);
		assert_eq!(p.z, 1500.0);
	}

	#[test]
	fn drift_field_stays_spread_over_height() {
		let (width, height) = (1280.0, 900.0);
		let mut field = ParticleField::seeded(FieldStyle::drift(), width, height, 17);
		for _ in 0..3000 {
			field.tick(FRAME_DT);
		}

		let (mut lower, mut total) = (0usize, 0usize);
		for _ in 0..30 {
			for _ in 0..100 {
				field.tick(FRAME_DT);
			}
			lower += field.particles.iter().filter(|p| p.y > height / 2.0).count();
			total += field.particles.len();
		}

		let fraction = lower as f64 / total as f64;
		assert!((0.3..0.7).contains(&fraction), "lower half fraction {fraction}");
	}

	#[test]
	fn bounded_particle_leaving_bottom_respawns_at_top() {
		let mut p = still(800.0, 2.0);
		p.y = 605.0;
		p.vy = 10.0;
		let mut field = ParticleField::from_particles(
			FieldStyle::drift(),
			800.0,
			600.0,
			vec![p],
			StdRng::seed_from_u64(4),
		);

		let report = field.tick(FRAME_DT);

		assert_eq!(report.bounds_resets, 1);
		assert_eq!(report.depth_resets, 0);
		assert_eq!(field.particles[0].y, -10.0);
	}

	#[test]
	fn depth_only_particle_may_leave_bounds() {
		let mut p = still(800.0, 1.0);
		p.x = 900.0;
		p.vx = 5.0;
		let mut field = ParticleField::from_particles(
			FieldStyle::starfield(),
			800.0,
			600.0,
			vec![p],
			StdRng::seed_from_u64(4),
		);
		assert_eq!(field.tick(FRAME_DT), TickReport::default());
		assert_eq!(field.particles[0].x, 905.0);
	}

	#[test]
	fn larger_time_step_advances_proportionally() {
		let mut field = ParticleField::from_particles(
			FieldStyle::starfield(),
			800.0,
			600.0,
			vec![still(500.0, 1.5)],
			StdRng::seed_from_u64(2),
		);
		field.tick(FRAME_DT * 2.0);
		assert!((field.particles[0].z - 497.0).abs() < 1e-9);
	}

	#[test]
	fn resize_keeps_positions() {
		let mut field = ParticleField::seeded(FieldStyle::starfield(), 800.0, 600.0, 11);
		let before = field.particles.clone();
		field.resize(1024.0, 768.0);
		assert_eq!(field.particles, before);
		assert_eq!((field.width(), field.height()), (1024.0, 768.0));
		field.resize(1024.0, 768.0);
		assert_eq!(field.particles, before);
	}

	#[test]
	fn empty_surface_does_not_panic() {
		let mut field = ParticleField::seeded(FieldStyle::drift(), 0.0, 0.0, 5);
		field.tick(FRAME_DT);
		assert_eq!(field.particles.len(), 80);
	}

	#[test]
	fn depth_hue_follows_depth() {
		let field = ParticleField::from_particles(
			FieldStyle::drift(),
			800.0,
			600.0,
			vec![still(750.0, 2.0)],
			StdRng::seed_from_u64(0),
		);
		let p = &field.particles[0];
		let color = field.color(p, &field.project(p));
		assert!((color.hue - 230.0).abs() < 1e-9);
	}
}
