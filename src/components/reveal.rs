//! Scroll-triggered reveal tracking.
//!
//! Visibility is a one-way latch: the first time an element intersects the
//! viewport with at least the configured ratio it is marked revealed, and it
//! stays revealed when scrolled away. Single elements use [`RevealLatch`];
//! lists of cards tagged with `data-index` accumulate into a [`RevealSet`].
//!
//! The browser `IntersectionObserver` is wrapped by [`IntersectionWatcher`],
//! which turns observer callbacks into [`Crossing`] events. The latches never
//! see browser types, so they are tested natively.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Threshold used by content sections.
pub const SECTION_THRESHOLD: f64 = 0.2;
/// Threshold used by prominent titles.
pub const TITLE_THRESHOLD: f64 = 0.5;

/// Slack for observers reporting a ratio just under their own threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Attribute carrying a card's position within its list.
pub const INDEX_ATTR: &str = "data-index";

/// One intersection report for an observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
	/// Index tag of the element (0 for untagged elements).
	pub index: usize,
	/// Fraction of the element inside the viewport.
	pub ratio: f64,
	pub intersecting: bool,
}

impl Crossing {
	/// Whether this report reveals an element configured with `threshold`.
	pub fn reveals(&self, threshold: f64) -> bool {
		self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
	}
}

/// Monotonic visibility flag for a single element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
	threshold: f64,
	revealed: bool,
}

impl RevealLatch {
	pub fn new(threshold: f64) -> Self {
		Self {
			threshold,
			revealed: false,
		}
	}

	/// Feed one crossing. Returns `true` only on the event that flips the latch.
	pub fn observe(&mut self, crossing: &Crossing) -> bool {
		if self.revealed || !crossing.reveals(self.threshold) {
			return false;
		}
		self.revealed = true;
		true
	}

	pub fn is_revealed(&self) -> bool {
		self.revealed
	}
}

/// Monotonic set of revealed indices for a list of elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
	threshold: f64,
	revealed: BTreeSet<usize>,
}

impl RevealSet {
	pub fn new(threshold: f64) -> Self {
		Self {
			threshold,
			revealed: BTreeSet::new(),
		}
	}

	/// Feed one crossing. Returns `true` if its index was newly revealed.
	pub fn observe(&mut self, crossing: &Crossing) -> bool {
		crossing.reveals(self.threshold) && self.revealed.insert(crossing.index)
	}

	pub fn contains(&self, index: usize) -> bool {
		self.revealed.contains(&index)
	}

	pub fn len(&self) -> usize {
		self.revealed.len()
	}

	pub fn is_empty(&self) -> bool {
		self.revealed.is_empty()
	}
}

/// Parses an element's `data-index` value.
pub fn parse_index(raw: Option<String>) -> Option<usize> {
	raw?.trim().parse().ok()
}

/// A registered browser intersection observer.
///
/// Dropping the watcher disconnects the observer and releases its callback.
pub struct IntersectionWatcher {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
	/// Create an observer reporting crossings of `threshold` to `on_crossing`.
	///
	/// Returns `None` (after logging) when the browser refuses to construct
	/// the observer.
	pub fn new(threshold: f64, mut on_crossing: impl FnMut(Crossing) + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					let target = entry.target();
					let index = match target.get_attribute(INDEX_ATTR) {
						Some(raw) => match parse_index(Some(raw)) {
							Some(index) => index,
							None => continue,
						},
						None => 0,
					};
					on_crossing(Crossing {
						index,
						ratio: entry.intersection_ratio(),
						intersecting: entry.is_intersecting(),
					});
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(threshold));

		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => Some(Self {
				observer,
				_callback: callback,
			}),
			Err(err) => {
				warn!("reveal: failed to create IntersectionObserver: {:?}", err);
				None
			}
		}
	}

	pub fn observe(&self, element: &Element) {
		self.observer.observe(element);
	}
}

impl Drop for IntersectionWatcher {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Tracks a single element, returning a signal that latches `true` once the
/// element has been seen.
///
/// `locate` is re-run until it yields the mounted element. If the element
/// never mounts, nothing is registered and the signal stays `false`.
pub fn use_reveal(locate: impl Fn() -> Option<Element> + 'static, threshold: f64) -> ReadSignal<bool> {
	let (revealed, set_revealed) = signal(false);
	let watcher: Rc<RefCell<Option<IntersectionWatcher>>> = Rc::new(RefCell::new(None));
	let watcher_init = watcher.clone();

	Effect::new(move |_| {
		let Some(element) = locate() else {
			debug!("reveal: element absent, skipping registration");
			return;
		};
		if watcher_init.borrow().is_some() {
			return;
		}

		let mut latch = RevealLatch::new(threshold);
		let Some(w) = IntersectionWatcher::new(threshold, move |crossing| {
			if latch.observe(&crossing) {
				set_revealed.set(true);
			}
		}) else {
			return;
		};
		w.observe(&element);
		*watcher_init.borrow_mut() = Some(w);
	});

	let watcher = SendWrapper::new(watcher);
	on_cleanup(move || {
		watcher.take().borrow_mut().take();
	});

	revealed
}

/// Tracks every element under a container matching `selector`, keyed by each
/// element's `data-index`.
pub fn use_reveal_set(
	locate: impl Fn() -> Option<Element> + 'static,
	selector: &'static str,
	threshold: f64,
) -> RwSignal<RevealSet> {
	let revealed = RwSignal::new(RevealSet::new(threshold));
	let watcher: Rc<RefCell<Option<IntersectionWatcher>>> = Rc::new(RefCell::new(None));
	let watcher_init = watcher.clone();

	Effect::new(move |_| {
		let Some(container) = locate() else {
			debug!("reveal: container absent, skipping registration");
			return;
		};
		if watcher_init.borrow().is_some() {
			return;
		}
		let Ok(cards) = container.query_selector_all(selector) else {
			warn!("reveal: invalid selector '{}'", selector);
			return;
		};

		let Some(w) = IntersectionWatcher::new(threshold, move |crossing| {
			let fresh = crossing.reveals(threshold)
				&& !revealed.with_untracked(|set| set.contains(crossing.index));
			if fresh {
				revealed.update(|set| {
					set.observe(&crossing);
				});
			}
		}) else {
			return;
		};
		for i in 0..cards.length() {
			if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
				w.observe(&card);
			}
		}
		*watcher_init.borrow_mut() = Some(w);
	});

	let watcher = SendWrapper::new(watcher);
	on_cleanup(move || {
		watcher.take().borrow_mut().take();
	});

	revealed
}
