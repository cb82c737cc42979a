use leptos::prelude::*;

use crate::components::common::{MetricCard, StatusIndicator};
use crate::store::{Dashboard, Goal, LogKind, Progress, walk_goals};

/// Cognitive panorama: goal hierarchy, the thinking core, collaborating
/// agents, and the resource gauges.
#[component]
pub fn CognitivePanorama() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="view panorama-view">
			<div class="view-header">
				<div>
					<h2>"Cognitive Panorama"</h2>
					<p class="view-subtitle">"Live thinking state and resource monitoring"</p>
				</div>
				<span class="view-header-note">"System 2 active"</span>
			</div>

			<div class="panorama-grid">
				<div class="card">
					<h3 class="card-title">"Goal hierarchy"</h3>
					<GoalTree />
				</div>

				<div class="card thinking-card">
					<ThinkingCore />
				</div>

				<div class="stack">
					<div class="card">
						<h3 class="card-title">"Cognitive resources"</h3>
						<div class="stack">
							{move || {
								dashboard
									.with(|s| s.resources.clone())
									.into_iter()
									.map(|r| {
										view! {
											<MetricCard
												title=r.name
												value=r.current
												max=r.max
												unit=r.unit
												trend=r.trend
												status=r.status
											/>
										}
									})
									.collect_view()
							}}
						</div>
					</div>
					<AgentRoster />
				</div>
			</div>

			<AdvisoryBar />
		</div>
	}
}

/// The goal forest flattened into indented rows; the tree is walked
/// iteratively, so depth costs nothing but indentation.
#[component]
fn GoalTree() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="goal-tree">
			{move || {
				dashboard.with(|s| {
					walk_goals(&s.goals)
						.into_iter()
						.map(|(depth, goal)| goal_row(depth, goal))
						.collect_view()
				})
			}}
		</div>
	}
}

fn goal_row(depth: usize, goal: &Goal) -> impl IntoView + use<> {
	let active = goal.status == Progress::InProgress;
	view! {
		<div
			class=format!("goal-row {}", if active { "active" } else { "" })
			style=format!("margin-left: {}px", depth * 16)
		>
			<span class=format!("goal-bullet {}", goal.kind.css_class())></span>
			<span class="goal-title">{goal.title.clone()}</span>
			{goal
				.progress
				.map(|p| view! { <span class="goal-progress mono">{format!("{p}%")}</span> })}
			{active.then(|| view! { <span class="goal-active-tag">"active"</span> })}
		</div>
	}
}

/// The pulsing center readout of the current simulation run.
#[component]
fn ThinkingCore() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let thinking = move || dashboard.with(|s| s.thinking.clone());

	view! {
		<div class="thinking-core">
			<div class="pulse-ring ring-outer"></div>
			<div class="pulse-ring ring-inner"></div>
			<div class="thinking-orb"></div>
			{move || {
				let t = thinking();
				view! {
					<div class="thinking-readout">
						<h3>{t.title}</h3>
						<p class="thinking-step">{t.current_step}</p>
						<div class="thinking-metrics">
							<div>
								<p class="top-metric-label">"Simulation steps"</p>
								<p class="mono">{format!("{}/{}", t.simulation_step, t.total_steps)}</p>
							</div>
							<div>
								<p class="top-metric-label">"Confidence"</p>
								<p class="mono accent-cyan">{format!("{}%", t.confidence)}</p>
							</div>
							<div>
								<p class="top-metric-label">"Target"</p>
								<p class="mono">{format!("{}%", t.target_confidence)}</p>
							</div>
						</div>
						<div class="thinking-cache">
							<span>
								"System 1.5 cache hits "
								<span class="mono accent-amber">{format!("{}%", t.cache_hit_rate)}</span>
							</span>
							<span>
								"Similar cases "
								<span class="mono accent-cyan">{t.similar_cases}</span>
							</span>
						</div>
					</div>
				}
			}}
		</div>
	}
}

/// Who else is working and how loaded they are.
#[component]
fn AgentRoster() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="card">
			<h3 class="card-title">"Agent collaboration"</h3>
			<div class="stack">
				{move || {
					dashboard
						.with(|s| s.agents.clone())
						.into_iter()
						.map(|agent| {
							view! {
								<div class="agent-row">
									<StatusIndicator status=agent.status />
									<div class="agent-row-text">
										<span>{agent.name} " · " {agent.role}</span>
										<span class="agent-task">{agent.current_task}</span>
									</div>
									<span class="mono">{format!("{}%", agent.load)}</span>
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}

/// Suggested-action bar. The actions are mock; each button only records
/// a log entry.
#[component]
fn AdvisoryBar() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="card advisory-card">
			<h4>"Detected: System 2 reasoning latency is hurting customer response time"</h4>
			<p>"Suggested action (confidence 87%): upgrade to an OCPU-Pro instance (latency -40%, cost +20%)"</p>
			<div class="advisory-actions">
				<button
					class="advisory-primary"
					on:click=move |_| {
						dashboard
							.log_action("Manual action: OCPU-Pro upgrade accepted", LogKind::Decision)
					}
				>
					"Run now"
				</button>
				<button on:click=move |_| {
					dashboard.log_action("Manual action: upgrade reminder deferred", LogKind::Info)
				}>"Remind me later"</button>
				<button on:click=move |_| {
					dashboard
						.log_action("Manual action: deep analysis of upgrade requested", LogKind::Info)
				}>"Deep analysis"</button>
			</div>
		</div>
	}
}
