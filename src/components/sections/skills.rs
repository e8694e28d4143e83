//! Skill groups rendered as chips.

use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use super::reveal_class;
use crate::components::reveal::{SECTION_THRESHOLD, use_reveal};
use crate::config::SkillGroup;

/// Grouped skill chips, faded in when the section scrolls into view.
#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let revealed = use_reveal(move || section_ref.get().map(Element::from), SECTION_THRESHOLD);

	let cards = groups
		.into_iter()
		.map(|group| {
			let chips = group
				.skills
				.into_iter()
				.map(|skill| {
					view! {
						<span class="px-3 py-1 bg-gray-800 border border-gray-700 rounded-full text-sm text-gray-200">
							{skill}
						</span>
					}
				})
				.collect_view();
			view! {
				<div class="bg-gradient-to-br from-gray-900 to-black p-6 rounded-2xl border border-gray-800 hover:border-white transition-colors">
					<h3 class="text-xl font-bold mb-4 text-white">{group.title}</h3>
					<div class="flex flex-wrap gap-2">{chips}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" node_ref=section_ref class="relative py-24 sm:py-32 bg-black">
			<div class=move || reveal_class("container mx-auto px-4 max-w-7xl", revealed.get())>
				<div class="text-center mb-16">
					<h2 class="text-4xl sm:text-5xl font-black tracking-tighter mb-4 bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						"Skills"
					</h2>
					<div class="h-1 w-24 bg-gradient-to-r from-transparent via-white to-transparent mx-auto"></div>
				</div>
				<div class="grid grid-cols-1 md:grid-cols-2 gap-8">{cards}</div>
			</div>
		</section>
	}
}
