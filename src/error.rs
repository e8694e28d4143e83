//! Error types surfaced to visitors.

use thiserror::Error;

/// Reasons a contact form submission did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
	/// A required field was left blank.
	#[error("please fill in your {0}")]
	MissingField(&'static str),

	/// The email address is not plausibly deliverable.
	#[error("'{0}' does not look like an email address")]
	InvalidEmail(String),

	/// A previous submission has not resolved yet.
	#[error("a message is already being sent")]
	InFlight,

	/// The delivery service refused or failed to deliver the message.
	#[error("message could not be sent: {reason}")]
	Delivery {
		/// Reason reported by the transport.
		reason: String,
	},
}
