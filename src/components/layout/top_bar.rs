use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::components::common::StatusIndicator;
use crate::store::{CognitiveMode, Dashboard, Progress, StatusKind};

fn wall_clock() -> String {
	js_sys::Date::new_0().to_locale_time_string("en-GB").into()
}

/// Fixed header: agent identity, cognitive-mode selector, load readout,
/// evolution status, and a once-per-second wall clock.
#[component]
pub fn TopBar() -> impl IntoView {
	let dashboard = Dashboard::expect();

	let clock = RwSignal::new(wall_clock());
	let interval_id = RwSignal::new(None::<i32>);
	if let Some(window) = web_sys::window() {
		let cb = Closure::<dyn FnMut()>::new(move || {
			let _ = clock.try_set(wall_clock());
		});
		if let Ok(id) = window
			.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 1000)
		{
			cb.forget();
			interval_id.set(Some(id));
		}
	}
	on_cleanup(move || {
		if let (Some(window), Some(Some(id))) = (web_sys::window(), interval_id.try_get_untracked())
		{
			window.clear_interval_with_handle(id);
		}
	});

	let session_tag = format!("#{:06}", (js_sys::Date::now() / 1000.0) as u64 % 1_000_000);

	let load_of = move |name: &str| {
		dashboard.with(|s| {
			s.resources
				.iter()
				.find(|r| r.name == name)
				.map(|r| r.current)
				.unwrap_or(0.0)
		})
	};
	let loads = move || {
		format!(
			"S1:{:.0}% S1.5:{:.0}% S2:{:.0}%",
			load_of("System 1 (edge)"),
			load_of("System 1.5 (cache)"),
			load_of("System 2 (cloud)")
		)
	};

	let stage = move || {
		dashboard.with(|s| {
			s.evolution_stages
				.iter()
				.find(|stage| stage.status == Progress::InProgress)
				.map(|stage| format!("SSEP - {}", stage.name))
				.unwrap_or_else(|| "Genesis-0".into())
		})
	};

	view! {
		<header class="top-bar">
			<div class="top-bar-left">
				<div class="agent-identity">
					<div class="agent-avatar">"G0"</div>
					<div>
						<h1 class="agent-name">"Genesis-0"</h1>
						<p class="agent-subtitle">"AI agent self-awareness center"</p>
					</div>
				</div>
				<div class="mode-selector">
					{CognitiveMode::ALL
						.into_iter()
						.map(|mode| {
							let active = move || dashboard.with(|s| s.cognitive_mode == mode);
							view! {
								<button
									class=move || {
										format!(
											"mode-button {} {}",
											mode.css_class(),
											if active() { "active" } else { "" },
										)
									}
									on:click=move |_| dashboard.set_cognitive_mode(mode)
								>
									{mode.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="top-bar-center">
				<div class="top-metric">
					<p class="top-metric-label">"Current goal"</p>
					<p class="top-metric-value">"Handle complaint #2847"</p>
				</div>
				<div class="top-metric">
					<p class="top-metric-label">"Cognitive load"</p>
					<p class="top-metric-value mono">{loads}</p>
				</div>
				<div class="top-metric">
					<p class="top-metric-label">"Evolution status"</p>
					<p class="top-metric-value">{stage}</p>
				</div>
			</div>

			<div class="top-bar-right">
				<StatusIndicator status=StatusKind::Healthy label="online" />
				<span class="top-clock mono">{move || clock.get()}</span>
				<span class="session-tag mono">{session_tag}</span>
			</div>
		</header>
	}
}
