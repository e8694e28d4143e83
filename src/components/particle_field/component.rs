//! Leptos component wrapping a particle field canvas.
//!
//! The component creates a canvas, sizes it to its parent (or the window),
//! and drives the simulation from a `requestAnimationFrame` loop. A window
//! resize listener keeps the canvas pixel size in sync. Both the frame loop
//! and the listener are released when the owning section unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::{FRAME_DT, ParticleField};
use super::render;
use super::theme::FieldStyle;

/// What the canvas pixel size follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CanvasSizing {
	/// The parent element's client box.
	#[default]
	Container,
	/// The browser viewport.
	Window,
}

/// Closures and handles that must outlive a single frame.
#[derive(Default)]
struct LoopHandles {
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
}

/// Renders an animated particle field on a canvas element.
///
/// `seed` pins the random source; when omitted a seed is drawn from
/// `Math.random()` at mount.
#[component]
pub fn ParticleCanvas(
	preset: FieldStyle,
	#[prop(default = CanvasSizing::Container)] sizing: CanvasSizing,
	#[prop(default = None)] seed: Option<u64>,
	#[prop(default = "absolute inset-0 z-0")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let handles: Rc<RefCell<LoopHandles>> = Rc::new(RefCell::new(LoopHandles::default()));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let running = Rc::new(Cell::new(true));

	let (field_init, handles_init, frame_init, running_init) = (
		field.clone(),
		handles.clone(),
		frame_id.clone(),
		running.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = surface_size(&window, &canvas, sizing);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("particle field: 2d context unavailable, skipping animation");
			return;
		};

		let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
		debug!(
			"particle field '{}': {}x{} seed {}",
			preset.name, w, h, seed
		);
		*field_init.borrow_mut() = Some(ParticleField::seeded(preset.clone(), w, h, seed));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		let resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = surface_size(&win, &canvas_resize, sizing);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
		handles_init.borrow_mut().resize = Some(resize);

		let (field_anim, handles_anim, frame_anim, running_anim) = (
			field_init.clone(),
			handles_init.clone(),
			frame_init.clone(),
			running_init.clone(),
		);
		let animate = Closure::<dyn FnMut()>::new(move || {
			if !running_anim.get() {
				return;
			}
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick(FRAME_DT);
				render::render(f, &mut ctx);
			}
			if let Some(ref cb) = handles_anim.borrow().animate {
				frame_anim.set(request_frame(cb));
			}
		});
		frame_init.set(request_frame(&animate));
		handles_init.borrow_mut().animate = Some(animate);
	});

	let teardown = SendWrapper::new((handles, frame_id, running, field));
	on_cleanup(move || {
		let (handles, frame_id, running, field) = teardown.take();
		running.set(false);
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		let mut handles = handles.borrow_mut();
		if let Some(resize) = handles.resize.take() {
			let _ = window
				.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
		}
		handles.animate = None;
		field.borrow_mut().take();
		debug!("particle field torn down");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			style="display: block; pointer-events: none;"
		/>
	}
}

fn surface_size(window: &Window, canvas: &HtmlCanvasElement, sizing: CanvasSizing) -> (f64, f64) {
	match sizing {
		CanvasSizing::Window => (
			window
				.inner_width()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(800.0),
			window
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(600.0),
		),
		CanvasSizing::Container => canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((800.0, 600.0)),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}
