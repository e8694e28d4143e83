//! Page sections, in scroll order.

mod certifications;
mod contact;
mod education;
mod profile;
mod projects;
mod skills;

pub use certifications::Certifications;
pub use contact::{
	Completion, Contact, ContactForm, ContactMessage, ContactTransport, Field, SimulatedTransport,
	SubmitStatus,
};
pub use education::Education;
pub use profile::{Profile, tilt_transform};
pub use projects::Projects;
pub use skills::Skills;

const HIDDEN: &str = "opacity-0 translate-y-10";
const SHOWN: &str = "opacity-100 translate-y-0";

/// Compose `base` classes with the enter transition state.
pub(crate) fn reveal_class(base: &str, revealed: bool) -> String {
	let state = if revealed { SHOWN } else { HIDDEN };
	format!("{base} transition-all duration-1000 {state}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveal_class_toggles_enter_state() {
		assert_eq!(
			reveal_class("card", false),
			"card transition-all duration-1000 opacity-0 translate-y-10"
		);
		assert!(reveal_class("card", true).ends_with("opacity-100 translate-y-0"));
	}
}
