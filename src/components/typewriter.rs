//! Typewriter text effect.
//!
//! [`Typewriter`] is a timer-driven state machine: each [`Typewriter::tick`]
//! types or deletes exactly one character and returns how long to wait before
//! the next tick. The [`TypewriterText`] component owns the single pending
//! timer and reschedules it after every tick.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;

/// Delays between typewriter ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTimings {
	/// After typing a character.
	pub type_delay: Duration,
	/// After the phrase is fully typed, before deleting starts.
	pub pause: Duration,
	/// After deleting a character.
	pub delete_delay: Duration,
	/// After the phrase is fully deleted, before the next phrase starts.
	pub restart: Duration,
}

impl Default for TypewriterTimings {
	fn default() -> Self {
		Self {
			type_delay: Duration::from_millis(150),
			pause: Duration::from_millis(2000),
			delete_delay: Duration::from_millis(75),
			restart: Duration::from_millis(500),
		}
	}
}

/// Types and deletes a cycle of phrases one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
	phrases: Vec<String>,
	timings: TypewriterTimings,
	phrase_index: usize,
	/// Number of characters currently shown.
	shown: usize,
	deleting: bool,
	delay: Duration,
}

impl Typewriter {
	pub fn new(phrases: Vec<String>, timings: TypewriterTimings) -> Self {
		Self {
			phrases,
			timings,
			phrase_index: 0,
			shown: 0,
			deleting: false,
			delay: timings.type_delay,
		}
	}

	/// The phrase currently being typed or deleted.
	pub fn phrase(&self) -> &str {
		self.phrases
			.get(self.phrase_index)
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn phrase_index(&self) -> usize {
		self.phrase_index
	}

	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Delay to wait before the next tick.
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// The visible prefix of the current phrase.
	pub fn text(&self) -> &str {
		let phrase = self.phrase();
		match phrase.char_indices().nth(self.shown) {
			Some((end, _)) => &phrase[..end],
			None => phrase,
		}
	}

	/// Perform one character of work and return the delay until the next tick.
	pub fn tick(&mut self) -> Duration {
		if self.phrases.is_empty() {
			return self.delay;
		}
		let len = self.phrase().chars().count();

		if self.deleting {
			self.shown = self.shown.saturating_sub(1);
			if self.shown == 0 {
				self.deleting = false;
				self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
				self.delay = self.timings.restart;
			} else {
				self.delay = self.timings.delete_delay;
			}
		} else {
			self.shown = (self.shown + 1).min(len);
			if self.shown == len {
				self.deleting = true;
				self.delay = self.timings.pause;
			} else {
				self.delay = self.timings.type_delay;
			}
		}

		self.delay
	}
}

/// Renders the typewriter's current text, ticking on a timer until unmounted.
#[component]
pub fn TypewriterText(
	phrases: Vec<String>,
	#[prop(optional)] timings: Option<TypewriterTimings>,
) -> impl IntoView {
	let writer = Rc::new(RefCell::new(Typewriter::new(phrases, timings.unwrap_or_default())));
	let text = RwSignal::new(String::new());
	let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));

	let first_delay = writer.borrow().delay();
	schedule(writer, text, pending.clone(), first_delay);

	let pending = SendWrapper::new(pending);
	on_cleanup(move || {
		if let Some(handle) = pending.take().take() {
			handle.clear();
		}
	});

	view! {
		<span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
			{move || text.get()}
		</span>
		<span class="blinking-cursor"></span>
	}
}

/// Arm the single pending timer. The callback ticks once and re-arms.
fn schedule(
	writer: Rc<RefCell<Typewriter>>,
	text: RwSignal<String>,
	pending: Rc<Cell<Option<TimeoutHandle>>>,
	delay: Duration,
) {
	let pending_next = pending.clone();
	let result = set_timeout_with_handle(
		move || {
			let next = {
				let mut w = writer.borrow_mut();
				let next = w.tick();
				text.set(w.text().to_string());
				next
			};
			schedule(writer, text, pending_next, next);
		},
		delay,
	);

	match result {
		Ok(handle) => pending.set(Some(handle)),
		Err(err) => warn!("typewriter: failed to schedule tick: {:?}", err),
	}
}
