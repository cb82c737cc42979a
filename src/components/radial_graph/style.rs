//! Exhaustive category-to-style mapping for the radial graph.
//!
//! Every visual decision keys off [`NodeKind`] and the current flag through
//! a `match`, so a new category fails to compile until each style here
//! handles it.

use super::types::{GraphNode, NodeKind};

/// Accent color for the center node, current-node highlights, and pulses.
pub const GLOW_COLOR: &str = "#00d4ff";

/// Spoke stroke for the current node.
pub const SPOKE_ACTIVE: &str = "rgba(0, 212, 255, 0.30)";

/// Spoke stroke for non-current network nodes.
pub const SPOKE_DIM: &str = "rgba(100, 100, 120, 0.20)";

/// Stroke style of a center-to-node connection line.
#[derive(Clone, Debug, PartialEq)]
pub struct SpokeStyle {
	pub color: String,
	pub width: f64,
}

/// Connection line style: the current node gets the full-strength accent
/// stroke, other network nodes a thin dim one, and memory spokes scale
/// with activation.
pub fn spoke_style(node: &GraphNode) -> SpokeStyle {
	if node.is_current {
		return SpokeStyle {
			color: SPOKE_ACTIVE.into(),
			width: 2.0,
		};
	}
	match node.kind {
		NodeKind::Memory => SpokeStyle {
			color: format!("rgba(0, 212, 255, {:.3})", node.intensity * 0.3),
			width: (node.intensity * 2.0).max(0.5),
		},
		NodeKind::Cloud | NodeKind::Edge => SpokeStyle {
			color: SPOKE_DIM.into(),
			width: 1.0,
		},
	}
}

/// Fill color of the traveling pulse dot.
pub fn pulse_fill(node: &GraphNode) -> String {
	if node.is_current {
		return GLOW_COLOR.into();
	}
	match node.kind {
		NodeKind::Memory => format!("rgba(0, 212, 255, {:.3})", node.intensity),
		NodeKind::Cloud | NodeKind::Edge => {
			format!("rgba(0, 212, 255, {:.3})", 0.25 + node.intensity * 0.5)
		}
	}
}

/// Base RGB for a node body.
pub fn node_rgb(kind: NodeKind) -> (u8, u8, u8) {
	match kind {
		NodeKind::Memory => (124, 58, 237),
		NodeKind::Cloud => (124, 58, 237),
		NodeKind::Edge => (16, 185, 129),
	}
}

/// How to paint one node body.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub radius: f64,
	/// Gradient core color.
	pub core: String,
	/// Gradient edge color.
	pub edge: String,
	/// Soft halo behind the node, when it earns one.
	pub glow: Option<String>,
}

/// Body style: memory nodes grow and brighten with activation, network
/// nodes are solid with a size bump for the current one.
pub fn node_style(node: &GraphNode) -> NodeStyle {
	let (r, g, b) = node_rgb(node.kind);
	match node.kind {
		NodeKind::Memory => {
			let alpha = node.intensity.clamp(0.0, 1.0);
			NodeStyle {
				radius: 15.0 + node.intensity * 5.0,
				core: format!("rgba({r}, {g}, {b}, {alpha:.3})"),
				edge: format!("rgba({r}, {g}, {b}, {:.3})", alpha * 0.3),
				glow: (node.intensity > 0.8)
					.then(|| format!("rgba(0, 212, 255, {:.3})", 0.1 + node.intensity * 0.2)),
			}
		}
		NodeKind::Cloud | NodeKind::Edge => NodeStyle {
			radius: if node.is_current { 15.0 } else { 12.0 },
			core: format!("rgb({r}, {g}, {b})"),
			edge: format!("rgba({r}, {g}, {b}, 0.85)"),
			glow: node.is_current.then(|| "rgba(0, 212, 255, 0.25)".into()),
		},
	}
}

/// Load-ring stroke: amber once the node is running hot.
pub fn ring_color(intensity: f64) -> &'static str {
	if intensity > 0.7 { "#f59e0b" } else { "#10b981" }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(kind: NodeKind, intensity: f64, is_current: bool) -> GraphNode {
		GraphNode {
			id: "n".into(),
			label: "n".into(),
			sublabel: None,
			intensity,
			kind,
			is_current,
		}
	}

	#[test]
	fn current_node_gets_the_active_spoke() {
		let style = spoke_style(&node(NodeKind::Edge, 0.67, true));
		assert_eq!(style.color, SPOKE_ACTIVE);
		assert_eq!(style.width, 2.0);
	}

	#[test]
	fn non_current_network_nodes_get_the_dim_spoke() {
		for kind in [NodeKind::Cloud, NodeKind::Edge] {
			let style = spoke_style(&node(kind, 0.9, false));
			assert_eq!(style.color, SPOKE_DIM);
			assert_eq!(style.width, 1.0);
		}
	}

	#[test]
	fn memory_spokes_scale_with_activation() {
		let dim = spoke_style(&node(NodeKind::Memory, 0.1, false));
		let hot = spoke_style(&node(NodeKind::Memory, 0.9, false));
		assert!(hot.width > dim.width);
		assert_ne!(hot.color, dim.color);
	}

	#[test]
	fn ring_turns_amber_over_seventy_percent() {
		assert_eq!(ring_color(0.71), "#f59e0b");
		assert_eq!(ring_color(0.70), "#10b981");
	}

	#[test]
	fn only_hot_memory_nodes_glow() {
		assert!(node_style(&node(NodeKind::Memory, 0.92, false)).glow.is_some());
		assert!(node_style(&node(NodeKind::Memory, 0.5, false)).glow.is_none());
		assert!(node_style(&node(NodeKind::Edge, 0.5, true)).glow.is_some());
		assert!(node_style(&node(NodeKind::Edge, 0.5, false)).glow.is_none());
	}
}
