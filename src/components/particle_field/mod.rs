//! Depth-projected particle field backgrounds.
//!
//! Renders a fixed population of particles on an HTML canvas with:
//! - Pseudo-3D perspective projection (near particles larger and brighter)
//! - Motion trails from a translucent per-frame wash
//! - Optional proximity links between nearby particles
//! - Seeded, injectable randomness for reproducible simulations
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{FieldStyle, ParticleCanvas};
//!
//! view! { <ParticleCanvas preset=FieldStyle::starfield() /> }
//! ```

mod component;
pub mod particles;
pub mod projection;
pub mod render;
pub mod theme;

pub use component::{CanvasSizing, ParticleCanvas};
pub use particles::{FRAME_DT, Particle, ParticleField, TickReport};
pub use theme::FieldStyle;
