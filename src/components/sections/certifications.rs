//! Certifications over a drifting particle background.
//!
//! Cards flip on hover to show the credential id.

use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use super::reveal_class;
use crate::components::particle_field::{CanvasSizing, FieldStyle, ParticleCanvas};
use crate::components::reveal::{SECTION_THRESHOLD, use_reveal};
use crate::config::{self, Certification};

#[component]
pub fn Certifications(certifications: Vec<Certification>, #[prop(into)] base: String) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let revealed = use_reveal(move || section_ref.get().map(Element::from), SECTION_THRESHOLD);

	let cards = certifications
		.into_iter()
		.map(|cert| {
			let badge = config::asset_url(&base, &cert.badge);
			view! {
				<div class="group h-64 [perspective:1000px]">
					<div class="relative w-full h-full transition-transform duration-700 [transform-style:preserve-3d] group-hover:[transform:rotateY(180deg)]">
						<div class="absolute inset-0 flex flex-col items-center justify-center p-6 bg-gray-900/80 backdrop-blur-sm border border-gray-800 rounded-2xl [backface-visibility:hidden]">
							<img src=badge alt=cert.code.clone() class="w-20 h-20 object-contain mb-4" loading="lazy" />
							<h3 class="text-lg font-bold text-white text-center">{cert.name}</h3>
							<p class="text-sm text-gray-400">{cert.provider}</p>
						</div>
						<div class="absolute inset-0 flex flex-col items-center justify-center p-6 bg-white text-black rounded-2xl [transform:rotateY(180deg)] [backface-visibility:hidden]">
							<p class="text-2xl font-black">{cert.code}</p>
							<p class="text-xs uppercase tracking-wider mt-4">"Credential ID"</p>
							<p class="font-mono text-sm">{cert.credential_id}</p>
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="certifications" node_ref=section_ref class="relative py-24 sm:py-32 bg-black overflow-hidden">
			<ParticleCanvas
				preset=FieldStyle::drift()
				sizing=CanvasSizing::Window
				class="absolute inset-0 z-0 pointer-events-none"
			/>
			<div class=move || reveal_class("container mx-auto px-4 max-w-7xl relative z-10", revealed.get())>
				<div class="text-center mb-16">
					<h2 class="text-4xl sm:text-5xl font-black tracking-tighter mb-4 bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						"Certifications"
					</h2>
					<div class="h-1 w-24 bg-gradient-to-r from-transparent via-white to-transparent mx-auto"></div>
				</div>
				<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
			</div>
		</section>
	}
}
