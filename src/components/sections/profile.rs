//! Hero section: starfield, tilting portrait, name and typewriter tagline.

use leptos::html;
use leptos::prelude::*;

use crate::components::particle_field::{FieldStyle, ParticleCanvas};
use crate::components::typewriter::TypewriterText;
use crate::config;

/// Maximum rotation (degrees) at the portrait's edge.
const TILT_DEGREES: f64 = 20.0;
const TILT_SCALE: f64 = 1.05;
const REST_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

/// Pointer position relative to an element's center, as fractions of its
/// size clamped to `[-0.5, 0.5]`. A zero-sized element yields the center.
pub fn pointer_offset(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
	let norm = |p: f64, origin: f64, extent: f64| {
		if extent > 0.0 {
			((p - origin) / extent - 0.5).clamp(-0.5, 0.5)
		} else {
			0.0
		}
	};
	(norm(x, left, width), norm(y, top, height))
}

/// CSS transform for a normalized pointer offset.
pub fn tilt_transform(nx: f64, ny: f64) -> String {
	format!(
		"perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({TILT_SCALE}, {TILT_SCALE}, {TILT_SCALE})",
		-ny * TILT_DEGREES,
		nx * TILT_DEGREES
	)
}

#[component]
pub fn Profile(profile: config::Profile, #[prop(into)] base: String) -> impl IntoView {
	let portrait_ref = NodeRef::<html::Div>::new();
	let transform = RwSignal::new(REST_TRANSFORM.to_string());

	let on_move = move |ev: leptos::ev::MouseEvent| {
		let Some(el) = portrait_ref.get() else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		let (nx, ny) = pointer_offset(
			f64::from(ev.client_x()),
			f64::from(ev.client_y()),
			rect.left(),
			rect.top(),
			rect.width(),
			rect.height(),
		);
		transform.set(tilt_transform(nx, ny));
	};
	let on_leave = move |_| transform.set(REST_TRANSFORM.to_string());

	let portrait = config::asset_url(&base, &profile.portrait);
	let badges = profile
		.badges
		.into_iter()
		.map(|badge| {
			let icon = config::asset_url(&base, &badge.icon);
			view! {
				<div class="flex flex-col items-center gap-1 p-3 bg-gray-900/60 border border-gray-800 rounded-lg hover:border-white transition-colors">
					<img src=icon alt=badge.name.clone() class="w-8 h-8" loading="lazy" />
					<span class="text-xs text-gray-400">{badge.name}</span>
				</div>
			}
		})
		.collect_view();
	let socials = profile
		.socials
		.into_iter()
		.map(|link| {
			view! {
				<a
					href=link.href
					target="_blank"
					rel="noopener noreferrer"
					class="px-4 py-2 border border-gray-700 rounded-full text-sm font-bold hover:bg-white hover:text-black transition-all duration-300"
				>
					{link.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<section id="profile" class="relative min-h-screen flex items-center bg-black overflow-hidden pt-24">
			<ParticleCanvas preset=FieldStyle::starfield() />
			<div class="container mx-auto px-4 max-w-7xl relative z-10 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
				<div class="flex justify-center lg:order-2">
					<div
						node_ref=portrait_ref
						class="w-64 h-64 sm:w-80 sm:h-80 rounded-full overflow-hidden border-4 border-white/20 transition-transform duration-200 ease-out"
						style:transform=move || transform.get()
						on:mousemove=on_move
						on:mouseleave=on_leave
					>
						<img src=portrait alt=profile.name.clone() class="w-full h-full object-cover" />
					</div>
				</div>

				<div class="space-y-6 text-center lg:text-left lg:order-1">
					<h1 class="text-5xl sm:text-6xl font-black tracking-tighter">
						{profile.name}
					</h1>
					<p class="text-xl sm:text-2xl font-bold h-8">
						<TypewriterText phrases=profile.phrases />
					</p>
					<p class="text-lg text-gray-300">{profile.summary}</p>
					<p class="text-base text-gray-400">{profile.study}</p>
					<div class="grid grid-cols-3 sm:grid-cols-6 gap-3">{badges}</div>
					<div class="flex flex-wrap gap-3 justify-center lg:justify-start">{socials}</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_is_centered_and_clamped() {
		assert_eq!(pointer_offset(150.0, 50.0, 100.0, 0.0, 100.0, 100.0), (0.0, 0.0));
		assert_eq!(pointer_offset(100.0, 0.0, 100.0, 0.0, 100.0, 100.0), (-0.5, -0.5));
		assert_eq!(pointer_offset(500.0, 900.0, 100.0, 0.0, 100.0, 100.0), (0.5, 0.5));
		assert_eq!(pointer_offset(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
	}

	#[test]
	fn tilt_follows_pointer() {
		assert_eq!(
			tilt_transform(0.5, 0.25),
			"perspective(1000px) rotateX(-5.00deg) rotateY(10.00deg) scale3d(1.05, 1.05, 1.05)"
		);
		assert_eq!(
			tilt_transform(-0.5, -0.5),
			"perspective(1000px) rotateX(10.00deg) rotateY(-10.00deg) scale3d(1.05, 1.05, 1.05)"
		);
	}
}
