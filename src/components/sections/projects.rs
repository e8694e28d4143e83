//! Featured projects with image, tech stack and link.

use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use super::reveal_class;
use crate::components::reveal::{TITLE_THRESHOLD, use_reveal};
use crate::config::{self, Project};

/// Featured project cards. The title reveals once half of it is visible.
#[component]
pub fn Projects(projects: Vec<Project>, #[prop(into)] base: String) -> impl IntoView {
	let title_ref = NodeRef::<html::Div>::new();
	let title_revealed = use_reveal(move || title_ref.get().map(Element::from), TITLE_THRESHOLD);

	let cards = projects
		.into_iter()
		.map(|project| {
			let image = config::asset_url(&base, &project.image);
			let tech = project
				.technologies
				.into_iter()
				.map(|t| {
					view! {
						<span class="px-3 py-1 bg-gray-800 border border-gray-700 rounded-full text-xs text-gray-300">{t}</span>
					}
				})
				.collect_view();
			view! {
				<article class="group bg-gradient-to-br from-gray-900 to-black rounded-2xl border border-gray-800 overflow-hidden hover:border-white transition-all duration-300">
					<div class="h-56 overflow-hidden">
						<img
							src=image
							alt=project.title.clone()
							class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
							loading="lazy"
						/>
					</div>
					<div class="p-6 space-y-4">
						<h3 class="text-2xl font-bold text-white">{project.title}</h3>
						<p class="text-gray-400">{project.description}</p>
						<div class="flex flex-wrap gap-2">{tech}</div>
						<a
							href=project.link
							target="_blank"
							rel="noopener noreferrer"
							class="inline-block px-6 py-2 bg-white text-black rounded-full font-bold hover:bg-gray-200 transition-colors"
						>
							"View Project"
						</a>
					</div>
				</article>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="relative py-24 sm:py-32 bg-black">
			<div class="container mx-auto px-4 max-w-7xl">
				<div node_ref=title_ref class=move || reveal_class("text-center mb-16", title_revealed.get())>
					<h2 class="text-4xl sm:text-5xl font-black tracking-tighter mb-4 bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						"Featured Projects"
					</h2>
					<div class="h-1 w-24 bg-gradient-to-r from-transparent via-white to-transparent mx-auto mb-6"></div>
					<p class="text-lg text-gray-400">
						"Explore my latest work in DevOps, automation, and cloud deployment."
					</p>
				</div>
				<div class="grid grid-cols-1 lg:grid-cols-2 gap-8">{cards}</div>
			</div>
		</section>
	}
}
