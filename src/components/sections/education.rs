//! Education timeline. Each card reveals on its own as it scrolls into view.

use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use super::reveal_class;
use crate::components::reveal::{SECTION_THRESHOLD, use_reveal, use_reveal_set};
use crate::config::{self, EducationEntry};

const CARD_SELECTOR: &str = ".edu-card";

/// Even cards sit left of the timeline, odd cards right.
fn on_left(index: usize) -> bool {
	index % 2 == 0
}

/// Timeline cards alternating sides, each tagged with its `data-index`.
#[component]
pub fn Education(entries: Vec<EducationEntry>, #[prop(into)] base: String) -> impl IntoView {
	let title_ref = NodeRef::<html::Div>::new();
	let timeline_ref = NodeRef::<html::Div>::new();
	let title_revealed = use_reveal(move || title_ref.get().map(Element::from), SECTION_THRESHOLD);
	let cards_revealed = use_reveal_set(
		move || timeline_ref.get().map(Element::from),
		CARD_SELECTOR,
		SECTION_THRESHOLD,
	);

	let cards = entries
		.into_iter()
		.enumerate()
		.map(|(index, entry)| {
			let logo = config::asset_url(&base, &entry.logo);
			let side = if on_left(index) {
				"md:mr-auto md:pr-12"
			} else {
				"md:ml-auto md:pl-12"
			};
			let class = move || {
				reveal_class(
					&format!("edu-card relative w-full md:w-1/2 {side}"),
					cards_revealed.with(|set| set.contains(index)),
				)
			};
			view! {
				<div class=class data-index=index.to_string()>
					<div class="bg-gradient-to-br from-gray-900 to-black p-6 rounded-2xl border border-gray-800 hover:border-white transition-colors flex items-center gap-4">
						<img src=logo alt=entry.institution.clone() class="w-16 h-16 rounded-full object-contain bg-white p-1" loading="lazy" />
						<div>
							<p class="text-xs font-semibold text-gray-400 uppercase tracking-wider">{entry.period}</p>
							<h3 class="text-xl font-bold text-white">{entry.institution}</h3>
							<p class="text-gray-300">{entry.degree}</p>
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="education" class="relative py-24 sm:py-32 bg-black">
			<div class="container mx-auto px-4 max-w-5xl">
				<div node_ref=title_ref class=move || reveal_class("text-center mb-16", title_revealed.get())>
					<h2 class="text-4xl sm:text-5xl font-black tracking-tighter mb-4 bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						"Academic Journey"
					</h2>
					<div class="h-1 w-24 bg-gradient-to-r from-transparent via-white to-transparent mx-auto mb-6"></div>
					<p class="text-lg text-gray-400">"A timeline of my educational milestones"</p>
				</div>
				<div node_ref=timeline_ref class="relative space-y-12">
					<div class="hidden md:block absolute left-1/2 top-0 bottom-0 w-px bg-gray-800"></div>
					{cards}
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cards_alternate_sides() {
		let sides: Vec<_> = (0..4).map(on_left).collect();
		assert_eq!(sides, [true, false, true, false]);
	}
}
