//! Leptos component wrapping the mood canvas.
//!
//! The component creates a full-window canvas, seeds a [`CanvasScene`] from
//! the current visual parameters and starts a `requestAnimationFrame` loop that
//! ticks and paints the scene every frame. New visual parameters reseed the
//! scene in place; window resizes resize the canvas and reseed. Unmounting
//! stops the loop through its [`LoopHandle`] and removes the resize listener
//! right away.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame_loop::LoopHandle;
use super::render;
use super::state::CanvasScene;
use super::types::VisualParams;

type SharedScene = Rc<RefCell<Option<CanvasScene>>>;
type ResizeListener = Closure<dyn FnMut()>;

/// Inline style of the canvas: fills its positioned parent on the bottom layer.
pub(crate) const CANVAS_STYLE: &str = "position: absolute; inset: 0; z-index: 0; display: block;";

/// Canvas size used when the window cannot be measured.
const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

/// One mounted render loop and the scene it paints.
struct FrameTask {
	scene: SharedScene,
	ctx: CanvasRenderingContext2d,
	handle: LoopHandle,
}

impl FrameTask {
	/// Ask the browser for the next frame. Each request owns a one-shot
	/// closure, so nothing lingers once the loop stops re-arming.
	fn schedule(self: Rc<Self>) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let task = Rc::clone(&self);
		let callback = Closure::once_into_js(move || task.run());
		if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
			warn!("mood-weather: could not schedule frame: {:?}", e);
		}
	}

	fn run(self: Rc<Self>) {
		if !self.handle.is_running() {
			debug!("mood-weather: render loop stopped");
			return;
		}
		if let Some(ref mut scene) = *self.scene.borrow_mut() {
			scene.tick();
			render::render(scene, &self.ctx);
		}
		self.schedule();
	}
}

fn remove_resize_listener(listener: ResizeListener) {
	if let Some(window) = web_sys::window() {
		let _ =
			window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	let width = window.inner_width().ok().and_then(|v| v.as_f64());
	let height = window.inner_height().ok().and_then(|v| v.as_f64());
	match (width, height) {
		(Some(w), Some(h)) => (w, h),
		_ => FALLBACK_SIZE,
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Renders the animated emoji field for the current visual parameters.
///
/// The canvas fills the window and keeps animating regardless of what is
/// layered on top of it.
#[component]
pub fn MoodCanvas(#[prop(into)] visuals: Signal<VisualParams>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: SharedScene = Rc::new(RefCell::new(None));
	let handle = LoopHandle::start();
	let resize_listener = StoredValue::new_local(None::<ResizeListener>);
	let (scene_mount, handle_mount) = (scene.clone(), handle.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene_mount.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("mood-weather: canvas has no 2d context");
			return;
		};

		*scene_mount.borrow_mut() = Some(CanvasScene::new(
			visuals.get_untracked(),
			w,
			h,
			&mut rand::thread_rng(),
		));

		let (scene_resize, canvas_resize) = (scene_mount.clone(), canvas.clone());
		let on_resize = ResizeListener::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *scene_resize.borrow_mut() {
				s.resize(nw, nh, &mut rand::thread_rng());
			}
		});
		if let Err(e) =
			window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
		{
			warn!("mood-weather: could not listen for resize: {:?}", e);
		}
		resize_listener.set_value(Some(on_resize));

		let task = Rc::new(FrameTask {
			scene: scene_mount.clone(),
			ctx,
			handle: handle_mount.clone(),
		});
		task.schedule();
	});

	let scene_visuals = scene.clone();
	Effect::new(move |_| {
		let next = visuals.get();
		if let Some(ref mut s) = *scene_visuals.borrow_mut() {
			if s.visuals != next {
				s.apply_visuals(next, &mut rand::thread_rng());
			}
		}
	});

	on_cleanup(move || {
		resize_listener.update_value(|slot| handle.stop_releasing(slot, remove_resize_listener));
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="mood-canvas"
			style={CANVAS_STYLE}
		/>
	}
}
