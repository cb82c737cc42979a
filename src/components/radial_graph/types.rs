//! Input types for the radial graph canvas.

/// Visual category of a node; decides its palette, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// A knowledge-graph memory node (intensity = activation).
	Memory,
	/// A cloud compute node (intensity = load).
	Cloud,
	/// An edge compute node (intensity = load).
	Edge,
}

/// One node on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	/// Secondary line under the label (e.g. a location).
	pub sublabel: Option<String>,
	/// Normalized prominence in `[0, 1]`.
	pub intensity: f64,
	pub kind: NodeKind,
	/// Marks the highlighted "this is me" node.
	pub is_current: bool,
}

/// Per-call-site rendering knobs. Geometry and animation are identical for
/// every caller; only labels, speeds, and decorations differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
	/// Label drawn under the fixed center node.
	pub center_label: &'static str,
	/// Radius of the center node in CSS pixels.
	pub center_radius: f64,
	/// Ring radius as a fraction of the smaller half-dimension.
	pub radius_fraction: f64,
	/// Pulse travel speed in pixels per clock unit.
	pub pulse_speed: f64,
	/// Radius of the traveling pulse dot.
	pub pulse_radius: f64,
	/// Print the intensity as a percentage inside each node.
	pub show_intensity_pct: bool,
	/// Draw a load ring around each node, swept by intensity.
	pub show_load_ring: bool,
}

impl GraphConfig {
	/// Knowledge-graph preset: slow pulse, tight ring, activation percent
	/// printed in the node.
	pub fn knowledge() -> Self {
		GraphConfig {
			center_label: "current query",
			center_radius: 25.0,
			radius_fraction: 0.5,
			pulse_speed: 30.0,
			pulse_radius: 2.0,
			show_intensity_pct: true,
			show_load_ring: false,
		}
	}

	/// Network-topology preset: fast pulse, wide ring, load ring drawn
	/// around each node.
	pub fn topology() -> Self {
		GraphConfig {
			center_label: "current location",
			center_radius: 20.0,
			radius_fraction: 0.6,
			pulse_speed: 50.0,
			pulse_radius: 3.0,
			show_intensity_pct: false,
			show_load_ring: true,
		}
	}
}
