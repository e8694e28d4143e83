//! Contact section: details card and message form.
//!
//! The form is a small state machine ([`ContactForm`]) driven by the view and
//! resolved by a [`ContactTransport`]. The shipped transport only simulates
//! delivery; a real backend plugs in behind the same trait.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};
use serde::Serialize;

use crate::config::ContactDetails;
use crate::error::SubmitError;

/// How long a success message stays visible.
const STATUS_DISMISS: Duration = Duration::from_secs(5);

/// A message as submitted by a visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// Form fields, for routing input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	Email,
	Message,
}

/// Lifecycle of a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Sending,
	Sent,
	Failed(SubmitError),
}

/// Draft message plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub draft: ContactMessage,
	pub status: SubmitStatus,
}

impl ContactForm {
	pub fn set(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.draft.name = value,
			Field::Email => self.draft.email = value,
			Field::Message => self.draft.message = value,
		}
	}

	pub fn is_sending(&self) -> bool {
		self.status == SubmitStatus::Sending
	}

	/// Validate the draft and move to `Sending`, returning the message to hand
	/// to the transport.
	///
	/// Validation failures are recorded in `status` and leave the draft
	/// untouched. A submission while one is in flight is rejected without
	/// touching `status`.
	pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
		if self.is_sending() {
			return Err(SubmitError::InFlight);
		}
		if let Err(err) = validate(&self.draft) {
			self.status = SubmitStatus::Failed(err.clone());
			return Err(err);
		}
		self.status = SubmitStatus::Sending;
		Ok(self.draft.clone())
	}

	/// Apply the transport's verdict. Success clears the draft; failure keeps
	/// it so the visitor can retry.
	pub fn resolve(&mut self, result: Result<(), SubmitError>) {
		match result {
			Ok(()) => {
				self.draft = ContactMessage::default();
				self.status = SubmitStatus::Sent;
			}
			Err(err) => self.status = SubmitStatus::Failed(err),
		}
	}

	/// Hide a success message. Failures stay until the next submit.
	pub fn dismiss_status(&mut self) {
		if self.status == SubmitStatus::Sent {
			self.status = SubmitStatus::Idle;
		}
	}
}

fn validate(draft: &ContactMessage) -> Result<(), SubmitError> {
	for (label, value) in [
		("name", &draft.name),
		("email", &draft.email),
		("message", &draft.message),
	] {
		if value.trim().is_empty() {
			return Err(SubmitError::MissingField(label));
		}
	}

	let email = draft.email.trim();
	match email.split_once('@') {
		Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
			Ok(())
		}
		_ => Err(SubmitError::InvalidEmail(email.to_string())),
	}
}

/// Log line for an outgoing message. Carries no visitor details.
fn delivery_note(message: &ContactMessage) -> String {
	format!(
		"contact: simulating delivery of a {}-character message",
		message.message.chars().count()
	)
}

/// Completion callback handed to a transport.
pub type Completion = Box<dyn FnOnce(Result<(), SubmitError>)>;

/// Delivers contact messages somewhere.
pub trait ContactTransport {
	/// Start delivering `message`; `done` must be called exactly once.
	fn send(&self, message: ContactMessage, done: Completion);
}

/// Pretends to deliver after a fixed delay, always succeeding.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport {
	pub delay: Duration,
}

impl Default for SimulatedTransport {
	fn default() -> Self {
		Self {
			delay: Duration::from_secs(1),
		}
	}
}

impl ContactTransport for SimulatedTransport {
	fn send(&self, message: ContactMessage, done: Completion) {
		info!("{}", delivery_note(&message));
		set_timeout(move || done(Ok(())), self.delay);
	}
}

const INPUT_CLASS: &str = "w-full p-4 bg-gray-900/50 backdrop-blur-sm border border-gray-700 rounded-lg text-white placeholder-gray-500 focus:border-white focus:outline-none focus:ring-2 focus:ring-white/20 transition-all duration-300";

/// Contact section with details card and form.
#[component]
pub fn Contact(details: ContactDetails) -> impl IntoView {
	let form = RwSignal::new(ContactForm::default());
	let transport: Rc<dyn ContactTransport> = Rc::new(SimulatedTransport::default());

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let mut outcome = None;
		form.update(|f| outcome = Some(f.begin_submit()));
		let message = match outcome {
			Some(Ok(message)) => message,
			Some(Err(err)) => {
				warn!("contact: submission rejected: {}", err);
				return;
			}
			None => return,
		};

		transport.send(
			message,
			Box::new(move |result| {
				let sent = result.is_ok();
				form.update(|f| f.resolve(result));
				if sent {
					set_timeout(move || form.update(ContactForm::dismiss_status), STATUS_DISMISS);
				}
			}),
		);
	};

	let field_value = move |field: Field| {
		move || {
			form.with(|f| match field {
				Field::Name => f.draft.name.clone(),
				Field::Email => f.draft.email.clone(),
				Field::Message => f.draft.message.clone(),
			})
		}
	};
	let on_input = move |field: Field| {
		move |ev: leptos::ev::Event| {
			let value = event_target_value(&ev);
			form.update(|f| f.set(field, value));
		}
	};

	let entries = details.entries();

	view! {
		<section id="contact" class="relative py-24 sm:py-32 bg-black overflow-hidden">
			<div class="absolute inset-0 bg-gradient-to-b from-black via-gray-900 to-black opacity-50"></div>
			<div class="container mx-auto px-4 max-w-7xl relative z-10">
				<div class="text-center mb-16">
					<h2 class="text-4xl sm:text-5xl font-black tracking-tighter mb-4 bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
						"Let's Connect"
					</h2>
					<div class="h-1 w-24 bg-gradient-to-r from-transparent via-white to-transparent mx-auto mb-6"></div>
					<p class="text-lg text-gray-400 max-w-2xl mx-auto">
						"Have a project in mind? Let's discuss how we can work together."
					</p>
				</div>

				<div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16 items-start">
					<div class="space-y-6 lg:order-2">
						<div class="bg-gradient-to-br from-gray-900 to-black p-8 rounded-2xl border border-gray-800 h-full">
							<h3 class="text-2xl font-bold mb-6 text-white">"Get in Touch"</h3>
							<div class="space-y-6">
								{entries
									.into_iter()
									.map(|(title, value, link)| {
										view! {
											<div class="flex items-center space-x-4 group">
												<div>
													<p class="text-xs font-semibold text-gray-400 uppercase tracking-wider">{title}</p>
													{match link {
														Some(href) => view! {
															<a href=href class="text-white hover:text-blue-400 transition-colors text-base">{value}</a>
														}.into_any(),
														None => view! { <p class="text-white text-base">{value}</p> }.into_any(),
													}}
												</div>
											</div>
										}
									})
									.collect_view()}
							</div>
						</div>
					</div>

					<div class="space-y-4 lg:order-1">
						<form on:submit=on_submit>
							<div class="group mb-4">
								<label class="block text-sm font-semibold text-gray-400 mb-2">"Your Name"</label>
								<input
									type="text"
									name="name"
									placeholder="John Doe"
									required
									class=INPUT_CLASS
									prop:value=field_value(Field::Name)
									on:input=on_input(Field::Name)
								/>
							</div>
							<div class="group mb-4">
								<label class="block text-sm font-semibold text-gray-400 mb-2">"Your Email"</label>
								<input
									type="email"
									name="email"
									placeholder="john@example.com"
									required
									class=INPUT_CLASS
									prop:value=field_value(Field::Email)
									on:input=on_input(Field::Email)
								/>
							</div>
							<div class="group mb-4">
								<label class="block text-sm font-semibold text-gray-400 mb-2">"Your Message"</label>
								<textarea
									name="message"
									placeholder="Tell me about your project..."
									required
									rows=5
									class=format!("{INPUT_CLASS} resize-none")
									prop:value=field_value(Field::Message)
									on:input=on_input(Field::Message)
								></textarea>
							</div>

							<button
								type="submit"
								disabled=move || form.with(ContactForm::is_sending)
								class="w-full bg-white text-black p-4 rounded-lg font-bold text-base hover:bg-gray-200 transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed"
							>
								{move || if form.with(ContactForm::is_sending) { "Sending..." } else { "Send Message" }}
							</button>

							{move || match form.with(|f| f.status.clone()) {
								SubmitStatus::Sent => view! {
									<p class="text-center mt-4 text-green-400">"Message sent successfully!"</p>
								}.into_any(),
								SubmitStatus::Failed(err) => view! {
									<p class="text-center mt-4 text-red-400" role="alert">{err.to_string()}</p>
								}.into_any(),
								_ => ().into_any(),
							}}
						</form>
					</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	fn filled() -> ContactForm {
		let mut form = ContactForm::default();
		form.set(Field::Name, "Ada".into());
		form.set(Field::Email, "ada@example.com".into());
		form.set(Field::Message, "Hello there".into());
		form
	}

	/// Resolves synchronously with a canned result, recording what it saw.
	struct Canned {
		result: Result<(), SubmitError>,
		seen: RefCell<Vec<ContactMessage>>,
	}

	impl ContactTransport for Canned {
		fn send(&self, message: ContactMessage, done: Completion) {
			self.seen.borrow_mut().push(message);
			done(self.result.clone());
		}
	}

	#[test]
	fn successful_submit_clears_draft() {
		let mut form = filled();
		let message = form.begin_submit().expect("valid draft");
		assert!(form.is_sending());
		assert_eq!(message.name, "Ada");

		form.resolve(Ok(()));
		assert_eq!(form.status, SubmitStatus::Sent);
		assert_eq!(form.draft, ContactMessage::default());

		form.dismiss_status();
		assert_eq!(form.status, SubmitStatus::Idle);
	}

	#[test]
	fn failed_delivery_keeps_draft_and_reports_reason() {
		let mut form = filled();
		form.begin_submit().expect("valid draft");
		let err = SubmitError::Delivery {
			reason: "mailbox full".into(),
		};
		form.resolve(Err(err.clone()));

		assert_eq!(form.status, SubmitStatus::Failed(err));
		assert_eq!(form.draft.message, "Hello there");
		form.dismiss_status();
		assert!(matches!(form.status, SubmitStatus::Failed(_)));
	}

	#[test]
	fn second_submit_while_sending_is_rejected() {
		let mut form = filled();
		form.begin_submit().expect("valid draft");
		assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
		assert!(form.is_sending());
	}

	#[test]
	fn blank_fields_are_reported() {
		let mut form = filled();
		form.set(Field::Message, "   ".into());
		assert_eq!(form.begin_submit(), Err(SubmitError::MissingField("message")));
		assert!(!form.is_sending());
	}

	#[test]
	fn malformed_email_is_rejected() {
		for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
			let mut form = filled();
			form.set(Field::Email, bad.into());
			assert!(
				matches!(form.begin_submit(), Err(SubmitError::InvalidEmail(_))),
				"{bad} accepted"
			);
		}
	}

	#[test]
	fn transport_round_trip_applies_result() {
		let transport = Canned {
			result: Err(SubmitError::Delivery {
				reason: "offline".into(),
			}),
			seen: RefCell::new(Vec::new()),
		};
		let form = Rc::new(RefCell::new(filled()));
		let message = form.borrow_mut().begin_submit().expect("valid draft");

		let sink = form.clone();
		transport.send(message, Box::new(move |r| sink.borrow_mut().resolve(r)));

		assert_eq!(transport.seen.borrow().len(), 1);
		assert_eq!(
			form.borrow().status.to_owned(),
			SubmitStatus::Failed(SubmitError::Delivery {
				reason: "offline".into()
			})
		);
	}

	#[test]
	fn delivery_note_omits_visitor_details() {
		let message = filled().draft;
		let note = delivery_note(&message);
		assert_eq!(note, "contact: simulating delivery of a 11-character message");
		assert!(!note.contains(&message.email));
		assert!(!note.contains(&message.name));
	}

	#[test]
	fn error_messages_read_naturally() {
		assert_eq!(
			SubmitError::MissingField("email").to_string(),
			"please fill in your email"
		);
		assert_eq!(
			SubmitError::Delivery {
				reason: "timeout".into()
			}
			.to_string(),
			"message could not be sent: timeout"
		);
	}
}
