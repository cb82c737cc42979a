use leptos::prelude::*;

use crate::store::{Dashboard, DecisionRequest};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DrawerTab {
	Logs,
	Decisions,
}

/// Collapsible work drawer above the bottom nav: a log stream tab and a
/// pending-decision tab.
#[component]
pub fn BottomDrawer() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let tab = RwSignal::new(DrawerTab::Logs);

	let open = move || dashboard.with(|s| s.drawer_open);
	let has_decision = move || dashboard.with(|s| s.pending_decision.is_some());

	view! {
		<div class=move || format!("bottom-drawer {}", if open() { "open" } else { "closed" })>
			<div
				class="drawer-handle"
				on:click=move |_| {
					dashboard.set_drawer_open(!dashboard.with_untracked(|s| s.drawer_open))
				}
			>
				<span>{move || if open() { "▼ Collapse workbench" } else { "▲ Expand workbench" }}</span>
				{move || has_decision().then(|| view! { <span class="drawer-alert-dot"></span> })}
			</div>

			<div class="drawer-body">
				<div class="drawer-tabs">
					<button
						class=move || {
							format!(
								"drawer-tab {}",
								if tab.get() == DrawerTab::Logs { "active" } else { "" },
							)
						}
						on:click=move |_| tab.set(DrawerTab::Logs)
					>
						"Logs"
					</button>
					<button
						class=move || {
							format!(
								"drawer-tab {}",
								if tab.get() == DrawerTab::Decisions { "active" } else { "" },
							)
						}
						on:click=move |_| tab.set(DrawerTab::Decisions)
					>
						"Decisions"
						{move || has_decision().then(|| view! { <span class="drawer-alert-dot"></span> })}
					</button>
				</div>

				<div class="drawer-content">
					{move || match tab.get() {
						DrawerTab::Logs => view! { <LogStream /> }.into_any(),
						DrawerTab::Decisions => view! { <DecisionTab /> }.into_any(),
					}}
				</div>
			</div>
		</div>
	}
}

/// The capped, newest-first log stream.
#[component]
pub fn LogStream() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="log-stream">
			{move || {
				dashboard
					.with(|s| s.logs.clone())
					.into_iter()
					.map(|entry| {
						view! {
							<div class=format!("log-line {}", entry.kind.css_class())>
								<span class="log-timestamp mono">"[" {entry.timestamp} "]"</span>
								<span class="log-message">{entry.message}</span>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

#[component]
fn DecisionTab() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		{move || match dashboard.with(|s| s.pending_decision.clone()) {
			Some(decision) => view! { <DecisionPanel decision=decision /> }.into_any(),
			None => {
				view! {
					<div class="decision-empty">
						<p>"No pending decisions"</p>
					</div>
				}
					.into_any()
			}
		}}
	}
}

/// The pending decision with its options; choosing one resolves it.
#[component]
pub fn DecisionPanel(decision: DecisionRequest) -> impl IntoView {
	let dashboard = Dashboard::expect();
	let decision_id = decision.id.clone();

	view! {
		<div class="decision-panel">
			<h3 class="decision-title">{decision.title.clone()}</h3>
			<p class="decision-description">{decision.description.clone()}</p>
			<div class="decision-options">
				{decision
					.options
					.into_iter()
					.map(|option| {
						let decision_id = decision_id.clone();
						let option_id = option.id.clone();
						view! {
							<div class="decision-option">
								<div class="decision-option-text">
									<h4>{option.label}</h4>
									<p>{option.description}</p>
									{option
										.risk
										.map(|risk| {
											view! {
												<p class="decision-risk">"Risk: " {risk}</p>
											}
										})}
									{option
										.cost
										.map(|cost| {
											view! {
												<p class="decision-cost">"Cost: " {cost}</p>
											}
										})}
								</div>
								<button
									class="decision-choose"
									on:click=move |_| {
										dashboard.resolve_decision(&decision_id, &option_id)
									}
								>
									"Choose"
								</button>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
