//! Page shell: fixed header with navigation, mobile menu and footer.

use leptos::prelude::*;

/// Scroll offset (px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// A navigation target within the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub label: &'static str,
	/// Fragment id of the target section.
	pub anchor: &'static str,
}

impl NavItem {
	pub fn href(&self) -> String {
		format!("#{}", self.anchor)
	}
}

/// Section links, in page order. Contact is rendered separately as a call to
/// action.
pub const NAV_ITEMS: [NavItem; 5] = [
	NavItem {
		label: "Profile",
		anchor: "profile",
	},
	NavItem {
		label: "Skills",
		anchor: "skills",
	},
	NavItem {
		label: "Certifications",
		anchor: "certifications",
	},
	NavItem {
		label: "Education",
		anchor: "education",
	},
	NavItem {
		label: "Projects",
		anchor: "projects",
	},
];

pub const CONTACT_ITEM: NavItem = NavItem {
	label: "Contact",
	anchor: "contact",
};

/// Presentation flags owned by the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
	pub scrolled: bool,
	pub mobile_menu_open: bool,
}

impl ShellState {
	/// Recompute `scrolled` from the current vertical offset.
	pub fn on_scroll(&mut self, offset: f64) {
		self.scrolled = offset > SCROLL_THRESHOLD;
	}

	pub fn toggle_menu(&mut self) {
		self.mobile_menu_open = !self.mobile_menu_open;
	}

	/// Any navigation link closes the mobile menu.
	pub fn navigate(&mut self) {
		self.mobile_menu_open = false;
	}

	pub fn header_class(&self) -> &'static str {
		if self.scrolled {
			"fixed top-0 w-full z-50 transition-all duration-300 bg-black/95 backdrop-blur-md border-b border-gray-800 py-3"
		} else {
			"fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-5"
		}
	}
}

/// Fixed site header. Listens to window scroll for the solid style.
#[component]
pub fn Header(#[prop(into)] brand: String) -> impl IntoView {
	let state = RwSignal::new(ShellState::default());

	let scroll = window_event_listener(leptos::ev::scroll, move |_| {
		let offset = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		let scrolled = offset > SCROLL_THRESHOLD;
		if state.with_untracked(|s| s.scrolled) != scrolled {
			state.update(|s| s.on_scroll(offset));
		}
	});
	on_cleanup(move || scroll.remove());

	let nav_link = move |item: NavItem, class: &'static str| {
		view! {
			<li>
				<a href=item.href() class=class on:click=move |_| state.update(ShellState::navigate)>
					{item.label}
				</a>
			</li>
		}
	};
	let cta_class = "px-6 py-2 bg-white text-black rounded-full font-black hover:bg-gray-200 transition-all duration-300 transform hover:scale-105";

	view! {
		<header class=move || state.with(ShellState::header_class)>
			<nav class="container mx-auto px-4 flex justify-between items-center">
				<h1 class="text-2xl font-black tracking-tight">
					<span class="bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						{brand}
					</span>
				</h1>

				<ul class="hidden md:flex space-x-8">
					{NAV_ITEMS
						.into_iter()
						.map(|item| nav_link(item, "hover:text-gray-300 transition-colors duration-300 font-extrabold"))
						.collect_view()}
					{nav_link(CONTACT_ITEM, cta_class)}
				</ul>

				<div class="md:hidden flex items-center">
					<button
						aria-label="Toggle navigation menu"
						aria-expanded=move || state.with(|s| s.mobile_menu_open).to_string()
						on:click=move |_| state.update(ShellState::toggle_menu)
					>
						{move || if state.with(|s| s.mobile_menu_open) { "✕" } else { "☰" }}
					</button>
				</div>
			</nav>

			<Show when=move || state.with(|s| s.mobile_menu_open)>
				<ul class="md:hidden flex flex-col items-center space-y-4 mt-4 pb-4 border-t border-gray-800">
					{NAV_ITEMS
						.into_iter()
						.map(|item| nav_link(item, "hover:text-gray-300 transition-colors duration-300 font-extrabold text-lg"))
						.collect_view()}
					{nav_link(CONTACT_ITEM, cta_class)}
				</ul>
			</Show>
		</header>
	}
}

/// Site footer.
#[component]
pub fn Footer(#[prop(into)] owner: String, year: u16) -> impl IntoView {
	view! {
		<footer class="relative bg-gradient-to-t from-gray-900 to-black text-center py-12 border-t border-gray-800 overflow-hidden">
			<div class="absolute inset-0 opacity-5 dot-grid"></div>
			<div class="relative z-10 space-y-4">
				<p class="text-gray-400 font-extrabold">
					{format!("© {year} {owner}. All rights reserved.")}
				</p>
			</div>
		</footer>
	}
}
