use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::state::RadialGraphState;
use super::types::{GraphConfig, GraphNode};

type SharedState = Rc<RefCell<Option<RadialGraphState>>>;

/// Animated radial graph on a canvas.
///
/// Mounting starts the frame loop; unmounting flips the run flag and
/// cancels the pending frame, so no callback keeps scheduling after the
/// canvas is gone. The layout is recomputed only when `nodes` or the
/// surface size changes, never per frame.
#[component]
pub fn RadialGraphCanvas(
	#[prop(into)] nodes: Signal<Vec<GraphNode>>,
	config: GraphConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	// Handle ids live in signals so the cleanup closure stays Send.
	let running = RwSignal::new(false);
	let frame_id = RwSignal::new(None::<i32>);

	let state_init = state.clone();
	Effect::new(move |_| {
		let node_set = nodes.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(ref mut s) = *state_init.borrow_mut() {
			s.set_nodes(node_set);
			return;
		}

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// A surface without a 2d context cannot be drawn to; skip the
		// whole loop rather than schedule callbacks that can only fail.
		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("radial graph: no 2d context available, not starting");
				return;
			}
		};

		let mut initial = RadialGraphState::new(node_set, w, h, config);
		initial.start();
		*state_init.borrow_mut() = Some(initial);
		running.set(true);

		run_frame(state_init.clone(), canvas, ctx, running, frame_id);
	});

	on_cleanup(move || {
		running.try_set(false);
		if let (Some(window), Some(Some(id))) = (web_sys::window(), frame_id.try_get_untracked())
		{
			let _ = window.cancel_animation_frame(id);
		}
	});

	view! { <canvas node_ref=canvas_ref class="radial-graph-canvas" /> }
}

/// Draw one frame and schedule the next. Each callback is one-shot; the
/// chain breaks as soon as the run flag goes false (or its signal is
/// disposed), which is the loop's stop transition.
fn run_frame(
	state: SharedState,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	running: RwSignal<bool>,
	frame_id: RwSignal<Option<i32>>,
) {
	if !running.try_get_untracked().unwrap_or(false) {
		if let Some(ref mut s) = *state.borrow_mut() {
			s.stop();
		}
		return;
	}

	{
		let mut st = state.borrow_mut();
		let Some(s) = st.as_mut() else {
			return;
		};
		if !s.is_running() {
			return;
		}

		let (w, h) = parent_size(&canvas);
		if w != s.width || h != s.height {
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			s.resize(w, h);
		}

		s.tick();
		render::render(s, &ctx);
	}

	let next = {
		let state = state.clone();
		let canvas = canvas.clone();
		let ctx = ctx.clone();
		move || run_frame(state, canvas, ctx, running, frame_id)
	};
	let cb = Closure::once_into_js(next);
	if let Ok(id) = web_sys::window()
		.unwrap()
		.request_animation_frame(cb.unchecked_ref())
	{
		frame_id.try_set(Some(id));
	}
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 360.0))
}
