//! Site content and its optional in-page override.
//!
//! Everything the sections render lives in [`SiteContent`]. The built-in
//! defaults describe the published site; a page may embed
//! `<script id="site-data" type="application/json">` with any subset of the
//! fields to replace them.

use log::{debug, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the script element holding content overrides.
pub const SITE_DATA_ID: &str = "site-data";

/// Base path the site is served under.
pub const DEFAULT_BASE_PATH: &str = "/mywebsite/";

/// Resolve a static asset against the site's base path. Absolute URLs are
/// returned unchanged.
pub fn asset_url(base: &str, path: &str) -> String {
	if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
		return path.to_string();
	}
	let base = base.trim_end_matches('/');
	let path = path.trim_start_matches('/');
	format!("{base}/{path}")
}

/// All content rendered by the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub owner: String,
	/// Short mark shown in the header.
	pub brand: String,
	pub year: u16,
	pub base_path: String,
	pub profile: Profile,
	pub skills: Vec<SkillGroup>,
	pub certifications: Vec<Certification>,
	pub education: Vec<EducationEntry>,
	pub projects: Vec<Project>,
	pub contact: ContactDetails,
}

impl SiteContent {
	/// Shorthand for [`asset_url`] with this site's base path.
	pub fn asset(&self, path: &str) -> String {
		asset_url(&self.base_path, path)
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	/// Phrases cycled by the typewriter.
	pub phrases: Vec<String>,
	pub summary: String,
	pub study: String,
	pub portrait: String,
	pub badges: Vec<SkillBadge>,
	pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillBadge {
	pub name: String,
	pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
	pub label: String,
	pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
	pub title: String,
	pub skills: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Certification {
	pub name: String,
	pub code: String,
	pub provider: String,
	pub credential_id: String,
	/// Badge image, relative to the base path or absolute.
	pub badge: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
	pub institution: String,
	pub degree: String,
	pub period: String,
	pub logo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Project {
	pub title: String,
	pub description: String,
	pub technologies: Vec<String>,
	pub link: String,
	pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
	pub email: String,
	/// Phone number as displayed.
	pub phone: String,
	/// Dialable form used in the `tel:` link.
	pub phone_dial: String,
	pub location: String,
}

impl ContactDetails {
	/// `(title, value, link)` rows for the details card.
	pub fn entries(&self) -> Vec<(String, String, Option<String>)> {
		vec![
			(
				"Email".into(),
				self.email.clone(),
				Some(format!("mailto:{}", self.email)),
			),
			(
				"Phone".into(),
				self.phone.clone(),
				Some(format!("tel:{}", self.phone_dial)),
			),
			("Location".into(), self.location.clone(), None),
		]
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			owner: "Chamindu Irosh".into(),
			brand: "CI".into(),
			year: 2025,
			base_path: DEFAULT_BASE_PATH.into(),
			profile: Profile::default(),
			skills: vec![
				SkillGroup {
					title: "Cloud".into(),
					skills: strings(&["AWS EC2", "AWS SES", "Azure", "Cloudflare"]),
				},
				SkillGroup {
					title: "CI/CD".into(),
					skills: strings(&["Jenkins", "GitHub Actions", "GitLab CI"]),
				},
				SkillGroup {
					title: "Containers & Servers".into(),
					skills: strings(&["Docker", "NGINX", "Certbot", "Linux"]),
				},
				SkillGroup {
					title: "Networking & Web".into(),
					skills: strings(&["Networking", "React", "Node.js"]),
				},
			],
			certifications: vec![
				Certification {
					name: "Microsoft Certified: Azure Fundamentals".into(),
					code: "AZ-900".into(),
					provider: "Microsoft".into(),
					credential_id: "AZ900-123456".into(),
					badge: "https://learn.microsoft.com/en-us/media/learn/certification/badges/microsoft-certified-fundamentals-badge.svg".into(),
				},
				Certification {
					name: "AWS Cloud Practitioner Essentials".into(),
					code: "CLF-C01".into(),
					provider: "Amazon Web Services".into(),
					credential_id: "CLF01-789012".into(),
					badge: "assets/amazon_web_services_logo.jpg".into(),
				},
				Certification {
					name: "Introduction to Linux".into(),
					code: "LFS101".into(),
					provider: "Linux Foundation".into(),
					credential_id: "LFS101-345678".into(),
					badge: "assets/lfs101-introduction-to-linux.png".into(),
				},
				Certification {
					name: "Introduction to Jenkins".into(),
					code: "LFS167".into(),
					provider: "Linux Foundation".into(),
					credential_id: "LFS167-901234".into(),
					badge: "assets/lfs167-introduction-to-jenkins.png".into(),
				},
				Certification {
					name: "Networking Basic".into(),
					code: "NET101".into(),
					provider: "Cisco".into(),
					credential_id: "NET101-567890".into(),
					badge: "assets/networking-basics.png".into(),
				},
			],
			education: vec![
				EducationEntry {
					institution: "University of Colombo".into(),
					degree: "Bachelor of Information and Communication Technology (BICT Honours)".into(),
					period: "2021 - Present".into(),
					logo: "assets/uoc.png".into(),
				},
				EducationEntry {
					institution: "Dehiwala Vocational Training Center".into(),
					degree: "Diploma in Computer Hardware and Networking".into(),
					period: "Completed".into(),
					logo: "assets/vocational.png".into(),
				},
				EducationEntry {
					institution: "G/Karandeniya Central College".into(),
					degree: "Technology Stream AL".into(),
					period: "2019-2021".into(),
					logo: "assets/advanced.png".into(),
				},
			],
			projects: vec![
				Project {
					title: "MERN Application Deployment with GitHub Actions".into(),
					description: "Automated the deployment of a MERN stack application to AWS EC2 using GitHub Actions. Containerised the frontend and backend with Docker and served them behind an NGINX reverse proxy.".into(),
					technologies: strings(&["GitHub Actions", "Docker", "AWS EC2", "NGINX", "React", "Node.js"]),
					link: "https://www.linkedin.com/in/chamindu-irosh-9b1844315/".into(),
					image: "assets/project1.jpg".into(),
				},
				Project {
					title: "Fully Automated MERN Stack Deployment with Jenkins".into(),
					description: "Built a Jenkins pipeline triggered from GitLab that builds, tests and deploys a containerised MERN application to AWS EC2, with Cloudflare DNS, Certbot TLS and build notifications through AWS SES.".into(),
					technologies: strings(&[
						"Jenkins",
						"GitLab",
						"Docker",
						"AWS EC2",
						"AWS SES",
						"Cloudflare",
						"NGINX",
						"Certbot",
						"React",
						"Node.js",
					]),
					link: "https://lnkd.in/daEgEDBW".into(),
					image: "assets/project2.jpg".into(),
				},
			],
			contact: ContactDetails::default(),
		}
	}
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Chamindu Irosh".into(),
			phrases: strings(&["Cloud｜Linux｜DevOps Enthusiast"]),
			summary: "Passionate about infrastructure and streamlining development workflows.".into(),
			study: "Currently studying Information and Communication Technology (Honours) at the University of Colombo.".into(),
			portrait: "assets/profile.jpg".into(),
			badges: ["AWS", "Docker", "Linux", "Jenkins", "GitHub", "Networking"]
				.iter()
				.map(|name| SkillBadge {
					name: name.to_string(),
					icon: format!("assets/icons/{}.svg", name.to_lowercase()),
				})
				.collect(),
			socials: vec![
				SocialLink {
					label: "GitHub".into(),
					href: "https://github.com/iro2002".into(),
				},
				SocialLink {
					label: "GitLab".into(),
					href: "https://gitlab.com/irosh2002".into(),
				},
				SocialLink {
					label: "LinkedIn".into(),
					href: "https://www.linkedin.com/in/chamindu-irosh-9b1844315/".into(),
				},
				SocialLink {
					label: "Email".into(),
					href: "mailto:chaminduirosh927@gmail.com".into(),
				},
			],
		}
	}
}

impl Default for ContactDetails {
	fn default() -> Self {
		Self {
			email: "chaminduirosh927@gmail.com".into(),
			phone: "+94 71 62193 38".into(),
			phone_dial: "+94716219338".into(),
			location: "Colombo, Sri Lanka".into(),
		}
	}
}

/// Parse content overrides. Fields missing from `json` keep their defaults.
pub fn parse_site_content(json: &str) -> Result<SiteContent, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load content from the `site-data` script element, falling back to the
/// built-in content when it is absent or malformed.
pub fn load_site_content() -> SiteContent {
	let Some(json_text) = site_data_text() else {
		debug!("site: no {} element, using built-in content", SITE_DATA_ID);
		return SiteContent::default();
	};

	match parse_site_content(&json_text) {
		Ok(content) => {
			info!(
				"site: loaded {} certifications, {} projects",
				content.certifications.len(),
				content.projects.len()
			);
			content
		}
		Err(e) => {
			warn!("site: failed to parse site data: {}", e);
			SiteContent::default()
		}
	}
}

fn site_data_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(SITE_DATA_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn asset_urls_join_under_base() {
		assert_eq!(asset_url("/mywebsite/", "assets/uoc.png"), "/mywebsite/assets/uoc.png");
		assert_eq!(asset_url("/mywebsite", "/assets/uoc.png"), "/mywebsite/assets/uoc.png");
		assert_eq!(asset_url("/", "favicon.ico"), "/favicon.ico");
	}

	#[test]
	fn absolute_asset_urls_pass_through() {
		let url = "https://learn.microsoft.com/badge.svg";
		assert_eq!(asset_url("/mywebsite/", url), url);
	}

	#[test]
	fn partial_override_keeps_remaining_defaults() {
		let content = parse_site_content(r#"{ "owner": "Someone Else", "contact": { "location": "Kandy" } }"#)
			.expect("valid json");
		let defaults = SiteContent::default();

		assert_eq!(content.owner, "Someone Else");
		assert_eq!(content.contact.location, "Kandy");
		assert_eq!(content.contact.email, defaults.contact.email);
		assert_eq!(content.certifications, defaults.certifications);
		assert_eq!(content.base_path, DEFAULT_BASE_PATH);
	}

	#[test]
	fn list_override_replaces_whole_list() {
		let content = parse_site_content(
			r#"{ "projects": [ { "title": "Homelab", "technologies": ["Proxmox"] } ] }"#,
		)
		.expect("valid json");
		assert_eq!(content.projects.len(), 1);
		assert_eq!(content.projects[0].title, "Homelab");
		assert!(content.projects[0].link.is_empty());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(parse_site_content("{ owner: }").is_err());
	}

	#[test]
	fn built_in_content_matches_published_site() {
		let content = SiteContent::default();
		assert_eq!(content.certifications.len(), 5);
		assert_eq!(content.education.len(), 3);
		assert_eq!(content.projects.len(), 2);
		assert_eq!(content.profile.phrases, ["Cloud｜Linux｜DevOps Enthusiast"]);
		assert_eq!(content.asset("assets/project1.jpg"), "/mywebsite/assets/project1.jpg");
	}

	#[test]
	fn contact_entries_link_email_and_phone() {
		let entries = ContactDetails::default().entries();
		assert_eq!(entries[0].2.as_deref(), Some("mailto:chaminduirosh927@gmail.com"));
		assert_eq!(entries[1].2.as_deref(), Some("tel:+94716219338"));
		assert_eq!(entries[2].2, None);
	}
}
