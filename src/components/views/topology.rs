use leptos::prelude::*;

use crate::components::radial_graph::{GraphConfig, GraphNode, NodeKind, RadialGraphCanvas};
use crate::store::{Dashboard, HardwareStatus, NetworkNode, NetworkTier};

/// Map network nodes onto graph nodes: load over 100 is the intensity,
/// the tier picks the palette, and the current node keeps its flag.
pub fn network_graph_nodes(nodes: &[NetworkNode]) -> Vec<GraphNode> {
	nodes
		.iter()
		.map(|node| GraphNode {
			id: node.id.clone(),
			label: node.name.clone(),
			sublabel: Some(node.location.clone()),
			intensity: (node.load as f64 / 100.0).clamp(0.0, 1.0),
			kind: match node.tier {
				NetworkTier::Cloud => NodeKind::Cloud,
				NetworkTier::Edge => NodeKind::Edge,
			},
			is_current: node.is_current,
		})
		.collect()
}

/// Resource topology view: the deployment ring, local hardware, the
/// migration history, and cost metrics.
#[component]
pub fn ResourceTopology() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let nodes = Signal::derive(move || dashboard.with(|s| network_graph_nodes(&s.network_nodes)));

	view! {
		<div class="view topology-view">
			<div class="view-header">
				<div>
					<h2>"Resource Topology"</h2>
					<p class="view-subtitle">"Deployment, hardware, and cost at a glance"</p>
				</div>
			</div>

			<div class="view-grid">
				<div class="card graph-card">
					<h3 class="card-title">"Network topology"</h3>
					<div class="graph-surface">
						<RadialGraphCanvas nodes=nodes config=GraphConfig::topology() />
					</div>
					<div class="graph-legend">
						<span class="legend-item legend-cloud">"cloud"</span>
						<span class="legend-item legend-edge">"edge"</span>
						<span class="legend-item legend-current">"current location"</span>
					</div>
				</div>

				<div class="stack">
					<HardwareStatusCard />
					<MigrationTimeline />
				</div>
			</div>

			<div class="cost-row">
				{move || {
					dashboard
						.with(|s| s.cost_metrics.clone())
						.into_iter()
						.map(|metric| {
							view! {
								<div class="card cost-card">
									<p class="cost-name">{metric.name}</p>
									<p class="cost-current mono">{metric.current}</p>
									<p class="cost-average">"avg " {metric.average}</p>
									{metric
										.potential
										.map(|p| view! { <p class="cost-potential">{p}</p> })}
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}

#[component]
fn HardwareStatusCard() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let hardware = move || dashboard.with(|s| s.hardware.clone());

	view! {
		<div class="card">
			<h3 class="card-title">"Local hardware"</h3>
			<div class="stack">
				{move || {
					let hw: HardwareStatus = hardware();
					view! {
						<HardwareGauge
							label="CIM array"
							value=format!("{}/{} active", hw.cim_active, hw.cim_total)
							fraction=hw.cim_active as f64 / hw.cim_total as f64
						/>
						<HardwareGauge
							label="SRAM"
							value=format!("{:.0}/{:.0}MB", hw.sram_used, hw.sram_total)
							fraction=hw.sram_used / hw.sram_total
						/>
						<HardwareGauge
							label="HBM"
							value=format!("{:.1}/{:.0}GB", hw.hbm_used, hw.hbm_total)
							fraction=hw.hbm_used / hw.hbm_total
						/>
						<div class="hardware-readouts">
							<span>"Temperature " <span class="mono">{format!("{:.0}°C", hw.temperature)}</span></span>
							<span>"Power " <span class="mono">{format!("{:.1}W", hw.power)}</span></span>
						</div>
					}
				}}
			</div>
		</div>
	}
}

#[component]
fn HardwareGauge(
	label: &'static str,
	#[prop(into)] value: String,
	fraction: f64,
) -> impl IntoView {
	let percentage = (fraction * 100.0).clamp(0.0, 100.0);
	view! {
		<div class="hardware-gauge">
			<div class="hardware-gauge-head">
				<span>{label}</span>
				<span class="mono">{value}</span>
			</div>
			<div class="metric-card-bar">
				<div class="metric-card-fill" style=format!("width: {percentage:.0}%")></div>
			</div>
		</div>
	}
}

/// Where the agent has been running recently. Static sample data, like
/// everything else here.
#[component]
fn MigrationTimeline() -> impl IntoView {
	let migrations = [
		("now", "Edge node A (Singapore)", true),
		("-2 hours", "Cloud cluster (Tokyo)", false),
		("-1 day", "Edge node C (Frankfurt)", false),
		("-3 days", "Edge node A (Singapore)", false),
	];

	view! {
		<div class="card">
			<h3 class="card-title">"Migration history"</h3>
			<div class="stack">
				{migrations
					.into_iter()
					.map(|(time, location, current)| {
						view! {
							<div class=format!(
								"migration-row {}",
								if current { "current" } else { "" },
							)>
								<span class="migration-time mono">{time}</span>
								<span>{location}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::{SPOKE_ACTIVE, SPOKE_DIM, spoke_style};
	use crate::store::seed;

	#[test]
	fn seeded_ring_draws_one_active_and_three_dim_spokes() {
		let state = seed::initial_state();
		let nodes = network_graph_nodes(&state.network_nodes);
		assert_eq!(nodes.len(), 4);

		let current: Vec<&GraphNode> = nodes.iter().filter(|n| n.is_current).collect();
		assert_eq!(current.len(), 1);
		assert_eq!(current[0].intensity, 0.67);
		assert_eq!(spoke_style(current[0]).color, SPOKE_ACTIVE);

		for node in nodes.iter().filter(|n| !n.is_current) {
			assert_eq!(spoke_style(node).color, SPOKE_DIM);
		}

		let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
		assert_eq!(
			labels,
			["Cloud cluster", "Edge node A", "Edge node B", "Edge node C"]
		);
	}

	#[test]
	fn tier_picks_the_palette_kind() {
		let state = seed::initial_state();
		let nodes = network_graph_nodes(&state.network_nodes);
		assert_eq!(nodes[0].kind, NodeKind::Cloud);
		assert!(nodes[1..].iter().all(|n| n.kind == NodeKind::Edge));
	}
}
