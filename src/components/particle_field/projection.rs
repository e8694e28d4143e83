//! Pseudo-3D perspective projection for particle fields.
//!
//! Particles live in a world whose x/y axes coincide with canvas pixels and
//! whose z axis is depth away from the viewer. Projection pulls a particle
//! towards the canvas center by a depth-dependent factor, so far particles
//! cluster in the middle while near particles spread to the edges.
//!
//! # Perspective Variants
//!
//! - [`Perspective::Offset`]: `scale = f / (f + z)`. Never exceeds 1.0, so
//!   even the nearest particle is drawn at its base size.
//! - [`Perspective::Direct`]: `scale = f / z`. Grows without bound as `z`
//!   approaches zero; callers keep `z` above a near plane.
//!
//! Size and opacity are both driven by the same scale factor, which gives the
//! near-large-bright / far-small-faint depth illusion.

/// Defines how depth maps to an on-screen scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Perspective {
	/// `scale = focal / (focal + depth)`.
	Offset { focal: f64 },
	/// `scale = focal / depth`.
	Direct { focal: f64 },
}

impl Perspective {
	/// Scale factor for a particle at `depth`.
	///
	/// `depth` must be positive for [`Perspective::Direct`]; particle fields
	/// guarantee this by resetting at the near plane.
	pub fn scale(&self, depth: f64) -> f64 {
		match *self {
			Perspective::Offset { focal } => focal / (focal + depth),
			Perspective::Direct { focal } => focal / depth,
		}
	}
}

/// How opacity is derived from the perspective scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityCurve {
	/// Multiplier applied to the scale factor.
	pub gain: f64,
	/// Upper bound after the gain is applied.
	pub ceiling: f64,
}

impl OpacityCurve {
	pub fn apply(&self, scale: f64) -> f64 {
		(scale * self.gain).min(self.ceiling)
	}
}

/// A particle mapped to canvas coordinates for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Radius in pixels.
	pub radius: f64,
	/// Opacity in `[0, ceiling]`.
	pub opacity: f64,
	pub scale: f64,
}

/// Projects a world-space point onto a `width` x `height` canvas.
pub fn project(
	perspective: Perspective,
	opacity: OpacityCurve,
	(x, y, z): (f64, f64, f64),
	size: f64,
	width: f64,
	height: f64,
) -> Projected {
	let scale = perspective.scale(z);
	let (cx, cy) = (width / 2.0, height / 2.0);
	Projected {
		x: cx + (x - cx) * scale,
		y: cy + (y - cy) * scale,
		radius: size * scale,
		opacity: opacity.apply(scale),
		scale,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const OFFSET: Perspective = Perspective::Offset { focal: 1000.0 };
	const DIRECT: Perspective = Perspective::Direct { focal: 1000.0 };

	#[test]
	fn offset_scale_is_half_at_focal_depth() {
		assert!((OFFSET.scale(1000.0) - 0.5).abs() < 1e-12);
		assert!((OFFSET.scale(0.0) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn direct_scale_is_unity_at_focal_depth() {
		assert!((DIRECT.scale(1000.0) - 1.0).abs() < 1e-12);
		assert!((DIRECT.scale(500.0) - 2.0).abs() < 1e-12);
	}

	#[test]
	fn center_point_stays_at_center() {
		let curve = OpacityCurve {
			gain: 0.8,
			ceiling: 1.0,
		};
		let p = project(OFFSET, curve, (400.0, 300.0, 750.0), 2.0, 800.0, 600.0);
		assert_eq!((p.x, p.y), (400.0, 300.0));
	}

	#[test]
	fn size_and_opacity_shrink_with_depth() {
		let curve = OpacityCurve {
			gain: 0.8,
			ceiling: 1.0,
		};
		for perspective in [OFFSET, DIRECT] {
			let mut prev: Option<Projected> = None;
			for step in 1..=60 {
				let z = step as f64 * 25.0;
				let p = project(perspective, curve, (100.0, 50.0, z), 2.0, 800.0, 600.0);
				if let Some(near) = prev {
					assert!(p.radius < near.radius, "{perspective:?} radius at z={z}");
					assert!(p.opacity <= near.opacity, "{perspective:?} opacity at z={z}");
				}
				prev = Some(p);
			}
		}
	}

	#[test]
	fn offset_opacity_strictly_decreases_below_ceiling() {
		let curve = OpacityCurve {
			gain: 0.8,
			ceiling: 1.0,
		};
		let near = project(OFFSET, curve, (0.0, 0.0, 10.0), 1.0, 10.0, 10.0);
		let far = project(OFFSET, curve, (0.0, 0.0, 900.0), 1.0, 10.0, 10.0);
		assert!(near.opacity > far.opacity);
	}

	#[test]
	fn opacity_ceiling_clamps_near_particles() {
		let curve = OpacityCurve {
			gain: 0.8,
			ceiling: 1.0,
		};
		let p = project(DIRECT, curve, (0.0, 0.0, 100.0), 1.0, 10.0, 10.0);
		assert_eq!(p.opacity, 1.0);
	}
}
