use leptos::prelude::*;

use crate::components::radial_graph::{GraphConfig, GraphNode, NodeKind, RadialGraphCanvas};
use crate::store::{Consistency, Dashboard, LogKind, MemoryLayer, MemoryNode};

/// Map memory nodes onto graph nodes: activation is the intensity.
pub fn memory_graph_nodes(nodes: &[MemoryNode]) -> Vec<GraphNode> {
	nodes
		.iter()
		.map(|node| GraphNode {
			id: node.id.clone(),
			label: node.label.clone(),
			sublabel: None,
			intensity: node.activation.clamp(0.0, 1.0),
			kind: NodeKind::Memory,
			is_current: false,
		})
		.collect()
}

/// Memory activation view: the knowledge graph, the layer hierarchy, and
/// the sync health advisory.
#[component]
pub fn MemoryActivation() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let nodes = Signal::derive(move || dashboard.with(|s| memory_graph_nodes(&s.memory_nodes)));

	view! {
		<div class="view memory-view">
			<div class="view-header">
				<div>
					<h2>"Memory Activation"</h2>
					<p class="view-subtitle">"Knowledge flow and long-term memory state"</p>
				</div>
				<span class="view-header-note">"Current query: \"customer complaint handling\""</span>
			</div>

			<div class="view-grid">
				<div class="card graph-card">
					<h3 class="card-title">"Knowledge graph"</h3>
					<div class="graph-surface">
						<RadialGraphCanvas nodes=nodes config=GraphConfig::knowledge() />
					</div>
				</div>

				<div class="card">
					<h3 class="card-title">"Memory hierarchy"</h3>
					<div class="stack">
						{move || {
							dashboard
								.with(|s| s.memory_layers.clone())
								.into_iter()
								.map(|layer| view! { <MemoryLayerCard layer=layer /> })
								.collect_view()
						}}
					</div>
				</div>
			</div>

			<MemoryHealthCheck />
		</div>
	}
}

#[component]
fn MemoryLayerCard(layer: MemoryLayer) -> impl IntoView {
	let consistency_class = match layer.consistency {
		Consistency::Synced => "accent-emerald",
		Consistency::Warning => "accent-amber",
		Consistency::Disconnected => "accent-zinc",
	};

	view! {
		<div class="memory-layer-card">
			<div class="memory-layer-head">
				<span>{format!("L{}: {}", layer.level, layer.name)}</span>
				<span class=consistency_class>{layer.consistency.label()}</span>
			</div>
			<div class="memory-layer-grid">
				<span>"Capacity: " {layer.capacity}</span>
				<span>"Used: " {layer.current_usage}</span>
				<span>"Activation: " {layer.activation_mode}</span>
			</div>
		</div>
	}
}

/// Advisory card for the stale long-term layer. The actions are mock:
/// each one only records a log entry.
#[component]
fn MemoryHealthCheck() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="card advisory-card">
			<h4>"Memory health check"</h4>
			<p>"Found: L2 long-term memory has not fully synced for 12 hours"</p>
			<p class="advisory-risk">"Risk: a hardware fault could lose 12 hours of experience"</p>
			<div class="advisory-actions">
				<button
					class="advisory-primary"
					on:click=move |_| {
						dashboard.log_action("Manual action: L2 sync started", LogKind::Info)
					}
				>
					"Sync now"
				</button>
				<button on:click=move |_| {
					dashboard
						.log_action("Manual action: L2 sync deferred to off-peak", LogKind::Info)
				}>"Defer to off-peak"</button>
				<button on:click=move |_| {
					dashboard.log_action("Manual action: L2 sync warning ignored", LogKind::Warning)
				}>"Ignore"</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::seed;

	#[test]
	fn activation_maps_straight_onto_intensity() {
		let state = seed::initial_state();
		let nodes = memory_graph_nodes(&state.memory_nodes);
		assert_eq!(nodes.len(), 3);
		for (graph, memory) in nodes.iter().zip(&state.memory_nodes) {
			assert_eq!(graph.label, memory.label);
			assert_eq!(graph.intensity, memory.activation);
			assert_eq!(graph.kind, NodeKind::Memory);
			assert!(!graph.is_current);
		}
	}

	#[test]
	fn out_of_range_activation_is_clamped() {
		let nodes = memory_graph_nodes(&[MemoryNode {
			id: "x".into(),
			label: "x".into(),
			activation: 1.7,
			last_accessed: "now".into(),
		}]);
		assert_eq!(nodes[0].intensity, 1.0);
	}
}
