use leptos::prelude::*;

use crate::components::layout::{DecisionPanel, LogStream};
use crate::store::{Dashboard, EvolutionStage, Progress};

/// Evolution workbench: the stage timeline, the active stage's tasks,
/// the build log stream, and the pending decision.
#[component]
pub fn EvolutionWorkbench() -> impl IntoView {
	let dashboard = Dashboard::expect();

	let current_stage = move || {
		dashboard.with(|s| {
			s.evolution_stages
				.iter()
				.find(|stage| stage.status == Progress::InProgress)
				.cloned()
		})
	};

	view! {
		<div class="view evolution-view">
			<div class="view-header">
				<div>
					<h2>"Evolution Workbench"</h2>
					<p class="view-subtitle">"Genesis-0 → Genesis-1 hardware evolution"</p>
				</div>
			</div>

			<StageProgress />

			<div class="view-grid">
				<div class="stack">
					{move || {
						current_stage()
							.map(|stage| view! { <TaskList stage=stage /> })
					}}
					<div class="card">
						<h3 class="card-title">"Build log"</h3>
						<LogStream />
					</div>
				</div>

				<div class="card">
					<h3 class="card-title">"Pending decision"</h3>
					{move || match dashboard.with(|s| s.pending_decision.clone()) {
						Some(decision) => {
							view! { <DecisionPanel decision=decision /> }.into_any()
						}
						None => {
							view! {
								<div class="decision-empty">
									<p>"No pending decisions"</p>
								</div>
							}
								.into_any()
						}
					}}
				</div>
			</div>
		</div>
	}
}

/// The six-stage pipeline with the in-progress stage highlighted.
#[component]
fn StageProgress() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="card stage-progress">
			{move || {
				dashboard
					.with(|s| s.evolution_stages.clone())
					.into_iter()
					.map(|stage| {
						let status_class = match stage.status {
							Progress::Completed => "completed",
							Progress::InProgress => "in-progress",
							Progress::Pending => "pending",
						};
						view! {
							<div class=format!("stage-node {status_class}")>
								<span class="stage-dot"></span>
								<span class="stage-name">{stage.name}</span>
								<span class="stage-duration">{stage.duration}</span>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

#[component]
fn TaskList(stage: EvolutionStage) -> impl IntoView {
	view! {
		<div class="card">
			<h3 class="card-title">{format!("{} tasks", stage.name)}</h3>
			<div class="stack">
				{stage
					.tasks
					.into_iter()
					.map(|task| {
						let status_class = match task.status {
							Progress::Completed => "completed",
							Progress::InProgress => "in-progress",
							Progress::Pending => "pending",
						};
						view! {
							<div class=format!("task-row {status_class}")>
								<span class="task-name">{task.name}</span>
								<div class="metric-card-bar">
									<div
										class="metric-card-fill"
										style=format!("width: {}%", task.progress)
									></div>
								</div>
								<span class="mono">{format!("{}%", task.progress)}</span>
								{task
									.estimated_completion
									.map(|eta| view! { <span class="task-eta">"ETA " {eta}</span> })}
								{task.cost.map(|cost| view! { <span class="task-cost">{cost}</span> })}
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
