//! Visual styles for particle fields.
//!
//! A [`FieldStyle`] bundles everything that distinguishes one section's
//! background from another: population, depth range, motion, projection,
//! coloring, trail fade and optional proximity links.

use super::projection::{OpacityCurve, Perspective};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// CSS `hsla()` color with hue in degrees and saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub hue: f64,
	pub saturation: f64,
	pub lightness: f64,
	pub alpha: f64,
}

impl Hsla {
	pub fn to_css(self) -> String {
		format!(
			"hsla({:.1}, {}%, {}%, {:.3})",
			self.hue, self.saturation, self.lightness, self.alpha
		)
	}
}

/// Where a particle's hue comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HueSource {
	/// Sampled once per spawn from `[min, max)` and kept for the particle's life.
	Random { min: f64, max: f64 },
	/// Recomputed every frame as `base + depth / max_depth * span`.
	Depth { base: f64, span: f64 },
}

/// Which boundary breaches send a particle back to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitRule {
	/// Only crossing the near plane resets a particle.
	DepthOnly,
	/// Crossing the near plane or drifting past the canvas edges resets it.
	Bounds,
}

/// Where a particle that left the surface bounds re-enters vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spawn {
	/// Anywhere on the surface.
	Anywhere,
	/// Just above the top edge, at the given y (negative).
	Top { y: f64 },
}

/// Connecting lines drawn between nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
	/// Pairs at or beyond this world-space distance are not linked.
	pub threshold: f64,
	/// Opacity of a link between coincident particles.
	pub max_opacity: f64,
	pub color: Color,
	pub line_width: f64,
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	pub name: &'static str,
	pub count: usize,
	/// Far plane. Depth is kept in `(near_plane, max_depth]`.
	pub max_depth: f64,
	/// A particle whose depth drops to or below this value is reset.
	pub near_plane: f64,
	/// Per-frame depth decrement range.
	pub depth_speed: (f64, f64),
	/// Horizontal drift range (px per frame).
	pub drift_x: (f64, f64),
	/// Vertical drift range (px per frame).
	pub drift_y: (f64, f64),
	/// Base radius range.
	pub size: (f64, f64),
	pub spawn: Spawn,
	pub exit: ExitRule,
	pub perspective: Perspective,
	pub opacity: OpacityCurve,
	pub hue: HueSource,
	pub saturation: f64,
	pub lightness: f64,
	/// Extra alpha applied to the fill color.
	pub fill_alpha: f64,
	/// Shadow blur at scale 1.0; zero disables the glow pass.
	pub glow: f64,
	/// Projected particles further than this outside the surface are not drawn.
	pub cull_margin: Option<f64>,
	/// Alpha of the black wash painted before each frame.
	pub trail_fade: f64,
	pub links: Option<LinkStyle>,
}

impl FieldStyle {
	/// Warp-speed starfield behind the hero section.
	pub fn starfield() -> Self {
		Self {
			name: "starfield",
			count: 150,
			max_depth: 1000.0,
			near_plane: 0.0,
			depth_speed: (1.0, 3.0),
			drift_x: (0.0, 0.0),
			drift_y: (0.0, 0.0),
			size: (1.0, 3.0),
			spawn: Spawn::Anywhere,
			exit: ExitRule::DepthOnly,
			perspective: Perspective::Offset { focal: 1000.0 },
			opacity: OpacityCurve {
				gain: 0.8,
				ceiling: 1.0,
			},
			hue: HueSource::Random {
				min: 200.0,
				max: 260.0,
			},
			saturation: 70.0,
			lightness: 60.0,
			fill_alpha: 1.0,
			glow: 0.0,
			cull_margin: None,
			trail_fade: 0.05,
			links: None,
		}
	}

	/// Slowly falling, linked constellation behind the certifications grid.
	pub fn drift() -> Self {
		Self {
			name: "drift",
			count: 80,
			max_depth: 1500.0,
			near_plane: 1.0,
			depth_speed: (2.0, 2.0),
			drift_x: (-0.25, 0.25),
			drift_y: (0.2, 0.7),
			size: (1.0, 3.0),
			spawn: Spawn::Top { y: -10.0 },
			exit: ExitRule::Bounds,
			perspective: Perspective::Direct { focal: 1000.0 },
			opacity: OpacityCurve {
				gain: 0.8,
				ceiling: 1.0,
			},
			hue: HueSource::Depth {
				base: 200.0,
				span: 60.0,
			},
			saturation: 80.0,
			lightness: 70.0,
			fill_alpha: 0.6,
			glow: 15.0,
			cull_margin: Some(50.0),
			trail_fade: 0.15,
			links: Some(LinkStyle {
				threshold: 150.0,
				max_opacity: 0.3,
				color: Color::rgb(100, 150, 255),
				line_width: 0.5,
			}),
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::starfield()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn color_css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(100, 150, 255).to_css(), "#6496ff");
		assert_eq!(
			Color::rgb(100, 150, 255).with_alpha(0.25).to_css(),
			"rgba(100, 150, 255, 0.25)"
		);
	}

	#[test]
	fn hsla_css_formats_percentages() {
		let c = Hsla {
			hue: 230.0,
			saturation: 70.0,
			lightness: 60.0,
			alpha: 0.5,
		};
		assert_eq!(c.to_css(), "hsla(230.0, 70%, 60%, 0.500)");
	}

	#[test]
	fn presets_keep_near_plane_below_far_plane() {
		for style in [FieldStyle::starfield(), FieldStyle::drift()] {
			assert!(style.near_plane >= 0.0 && style.near_plane < style.max_depth);
			assert!(style.depth_speed.0 > 0.0, "{} must always advance", style.name);
		}
	}
}
