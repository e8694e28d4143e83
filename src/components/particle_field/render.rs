//! Drawing particle fields onto a 2D surface.
//!
//! Each frame is composed in three passes:
//! 1. A translucent black wash over the whole surface, leaving motion trails
//! 2. Particles, optionally with a depth-scaled glow
//! 3. Proximity links between nearby particles (styles that enable them)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::theme::{Color, Hsla, LinkStyle};

/// The drawing primitives a particle field needs.
pub trait Surface {
	/// Fill the `width` x `height` area with a flat color.
	fn fade(&mut self, width: f64, height: f64, color: &str);
	/// Fill a circle, optionally with a blurred glow of the given radius.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, glow: Option<(f64, &str)>);
	/// Stroke a straight line segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, stroke: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn fade(&mut self, width: f64, height: f64, color: &str) {
		self.set_global_alpha(1.0);
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, glow: Option<(f64, &str)>) {
		self.set_fill_style_str(fill);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();

		if let Some((blur, color)) = glow {
			self.set_shadow_blur(blur);
			self.set_shadow_color(color);
			self.fill();
			self.set_shadow_blur(0.0);
		}
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, stroke: &str) {
		self.set_stroke_style_str(stroke);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Opacity of a link between two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
pub fn link_opacity(distance: f64, links: &LinkStyle) -> Option<f64> {
	if distance < links.threshold {
		Some((1.0 - distance / links.threshold) * links.max_opacity)
	} else {
		None
	}
}

/// Renders one frame of the field.
pub fn render<R, S: Surface>(field: &ParticleField<R>, surface: &mut S) {
	let style = field.style();
	let (width, height) = (field.width(), field.height());

	surface.fade(width, height, &Color::rgba(0, 0, 0, style.trail_fade).to_css());

	for p in &field.particles {
		draw_particle(field, surface, p);
	}

	if let Some(links) = &style.links {
		draw_links(field, surface, links);
	}
}

fn draw_particle<R, S: Surface>(field: &ParticleField<R>, surface: &mut S, p: &Particle) {
	let style = field.style();
	let projected = field.project(p);

	if let Some(margin) = style.cull_margin {
		if projected.x < -margin
			|| projected.x > field.width() + margin
			|| projected.y < -margin
			|| projected.y > field.height() + margin
		{
			return;
		}
	}

	let color = field.color(p, &projected);
	let fill = color.to_css();

	if style.glow > 0.0 {
		let halo = Hsla {
			alpha: projected.opacity * 0.5,
			..color
		};
		surface.fill_circle(
			projected.x,
			projected.y,
			projected.radius,
			&fill,
			Some((style.glow * projected.scale, &halo.to_css())),
		);
	} else {
		surface.fill_circle(projected.x, projected.y, projected.radius, &fill, None);
	}
}

/// Links every pair closer than the threshold. Distance is measured in world
/// x/y; endpoints are drawn at each particle's own projection.
fn draw_links<R, S: Surface>(field: &ParticleField<R>, surface: &mut S, links: &LinkStyle) {
	let particles = &field.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let Some(opacity) = link_opacity((dx * dx + dy * dy).sqrt(), links) else {
				continue;
			};
			let (pa, pb) = (field.project(a), field.project(b));
			surface.stroke_line(
				(pa.x, pa.y),
				(pb.x, pb.y),
				links.line_width,
				&links.color.with_alpha(opacity).to_css(),
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::theme::FieldStyle;

	#[derive(Debug, PartialEq)]
	enum Op {
		Fade(String),
		Circle { glow: bool },
		Line(String),
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
	}

	impl Surface for Recorder {
		fn fade(&mut self, _width: f64, _height: f64, color: &str) {
			self.ops.push(Op::Fade(color.to_string()));
		}

		fn fill_circle(&mut self, _x: f64, _y: f64, _r: f64, _fill: &str, glow: Option<(f64, &str)>) {
			self.ops.push(Op::Circle {
				glow: glow.is_some(),
			});
		}

		fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _w: f64, stroke: &str) {
			self.ops.push(Op::Line(stroke.to_string()));
		}
	}

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			z: 1000.0,
			vx: 0.0,
			vy: 0.0,
			speed: 2.0,
			size: 2.0,
			hue: 220.0,
		}
	}

	fn drift_field(particles: Vec<Particle>) -> ParticleField<StdRng> {
		ParticleField::from_particles(
			FieldStyle::drift(),
			800.0,
			600.0,
			particles,
			StdRng::seed_from_u64(0),
		)
	}

	fn links() -> LinkStyle {
		FieldStyle::drift().links.expect("drift preset links particles")
	}

	#[test]
	fn link_opacity_is_maximal_at_zero_distance() {
		assert_eq!(link_opacity(0.0, &links()), Some(0.3));
	}

	#[test]
	fn link_opacity_decays_linearly() {
		let half = link_opacity(75.0, &links()).expect("within threshold");
		assert!((half - 0.15).abs() < 1e-12);
	}

	#[test]
	fn no_link_at_or_beyond_threshold() {
		assert_eq!(link_opacity(150.0, &links()), None);
		assert_eq!(link_opacity(400.0, &links()), None);
	}

	#[test]
	fn frame_starts_with_trail_fade() {
		let field = drift_field(vec![particle(400.0, 300.0)]);
		let mut rec = Recorder::default();
		render(&field, &mut rec);
		assert_eq!(rec.ops[0], Op::Fade("rgba(0, 0, 0, 0.15)".into()));
		assert_eq!(rec.ops[1], Op::Circle { glow: true });
	}

	#[test]
	fn distant_pair_is_not_linked() {
		let field = drift_field(vec![particle(100.0, 100.0), particle(400.0, 100.0)]);
		let mut rec = Recorder::default();
		render(&field, &mut rec);
		assert!(!rec.ops.iter().any(|op| matches!(op, Op::Line(_))));
	}

	#[test]
	fn close_pair_is_linked_once() {
		let field = drift_field(vec![particle(100.0, 100.0), particle(100.0, 100.0)]);
		let mut rec = Recorder::default();
		render(&field, &mut rec);
		let lines: Vec<_> = rec.ops.iter().filter(|op| matches!(op, Op::Line(_))).collect();
		assert_eq!(lines, vec![&Op::Line("rgba(100, 150, 255, 0.3)".into())]);
	}

	#[test]
	fn particles_far_outside_surface_are_culled() {
		let mut far_out = particle(5000.0, 300.0);
		far_out.z = 1000.0;
		let field = drift_field(vec![far_out]);
		let mut rec = Recorder::default();
		render(&field, &mut rec);
		assert_eq!(rec.ops.len(), 1);
	}

	#[test]
	fn starfield_draws_every_particle_without_glow() {
		let field = ParticleField::seeded(FieldStyle::starfield(), 800.0, 600.0, 21);
		let mut rec = Recorder::default();
		render(&field, &mut rec);
		assert_eq!(rec.ops.len(), 151);
		assert!(rec.ops[1..].iter().all(|op| *op == Op::Circle { glow: false }));
	}
}
