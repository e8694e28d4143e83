//! portfolio-site: single-page personal portfolio rendered client-side.
//!
//! The page is a fixed header over a column of sections (profile, skills,
//! certifications, education, projects, contact). Decorative behaviour
//! includes canvas particle backgrounds, scroll-triggered reveals and a
//! typewriter tagline. All of it degrades to static content when a browser
//! API is missing.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod error;

pub use components::particle_field::{FieldStyle, ParticleCanvas, ParticleField};
pub use components::sections::{ContactForm, ContactTransport, SimulatedTransport};
pub use config::{SiteContent, asset_url, load_site_content};
pub use error::SubmitError;

use components::sections::{
	Certifications, Contact, Education, Profile as ProfileSection, Projects, Skills,
};
use components::shell::{Footer, Header};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-site: logging initialized");
}

const CURSOR_CSS: &str = "
.blinking-cursor { display: inline-block; width: 2px; height: 1.1em; margin-left: 4px; vertical-align: text-bottom; background: currentColor; animation: blink 1s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }
";

/// Main application component.
/// Loads site content from the DOM and renders every section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = load_site_content();
	let base = site.base_path.clone();
	let title = format!("{} | Portfolio", site.owner);
	let description = site.profile.summary.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=description />
		<Style>{CURSOR_CSS}</Style>

		<div class="min-h-screen bg-black text-white font-sans">
			<Header brand=site.brand />
			<main>
				<ProfileSection profile=site.profile base=base.clone() />
				<Skills groups=site.skills />
				<Certifications certifications=site.certifications base=base.clone() />
				<Education entries=site.education base=base.clone() />
				<Projects projects=site.projects base=base />
				<Contact details=site.contact />
			</main>
			<Footer owner=site.owner year=site.year />
		</div>
	}
}
