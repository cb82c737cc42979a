//! Animation-loop state: node list, cached layout, clock, run flag.

use super::layout::{PulseClock, RadialLayout};
use super::types::{GraphConfig, GraphNode};

/// Everything the frame callback needs, owned in one place so the loop
/// has an explicit start/stop contract instead of captured closures.
pub struct RadialGraphState {
	pub nodes: Vec<GraphNode>,
	pub layout: RadialLayout,
	pub clock: PulseClock,
	pub config: GraphConfig,
	pub width: f64,
	pub height: f64,
	running: bool,
}

impl RadialGraphState {
	/// Build the initial state and compute the first layout.
	pub fn new(nodes: Vec<GraphNode>, width: f64, height: f64, config: GraphConfig) -> Self {
		let layout = RadialLayout::compute(nodes.len(), width, height, config.radius_fraction);
		RadialGraphState {
			nodes,
			layout,
			clock: PulseClock::default(),
			config,
			width,
			height,
			running: false,
		}
	}

	/// Replace the node set. The layout is recomputed only when the nodes
	/// actually changed; the clock keeps running either way.
	pub fn set_nodes(&mut self, nodes: Vec<GraphNode>) {
		if nodes == self.nodes {
			return;
		}
		self.layout =
			RadialLayout::compute(nodes.len(), self.width, self.height, self.config.radius_fraction);
		self.nodes = nodes;
	}

	/// Re-derive center and radius for a new surface size. The clock is
	/// deliberately not reset.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.layout =
			RadialLayout::compute(self.nodes.len(), width, height, self.config.radius_fraction);
	}

	/// Advance the animation one frame.
	pub fn tick(&mut self) {
		self.clock.tick();
	}

	/// Enter the running state.
	pub fn start(&mut self) {
		self.running = true;
	}

	/// Leave the running state; the frame callback bails out and stops
	/// rescheduling itself.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Whether frames should keep being scheduled.
	pub fn is_running(&self) -> bool {
		self.running
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::NodeKind;
	use super::*;

	fn nodes(n: usize) -> Vec<GraphNode> {
		(0..n)
			.map(|i| GraphNode {
				id: i.to_string(),
				label: format!("node {i}"),
				sublabel: None,
				intensity: 0.5,
				kind: NodeKind::Memory,
				is_current: false,
			})
			.collect()
	}

	#[test]
	fn unchanged_nodes_keep_the_cached_layout() {
		let mut state = RadialGraphState::new(nodes(4), 400.0, 300.0, GraphConfig::knowledge());
		let layout = state.layout.clone();
		state.set_nodes(nodes(4));
		assert_eq!(state.layout, layout);
	}

	#[test]
	fn changed_nodes_recompute_the_layout() {
		let mut state = RadialGraphState::new(nodes(4), 400.0, 300.0, GraphConfig::knowledge());
		state.set_nodes(nodes(6));
		assert_eq!(state.layout.positions.len(), 6);
	}

	#[test]
	fn resize_recomputes_geometry_but_keeps_the_clock() {
		let mut state = RadialGraphState::new(nodes(3), 400.0, 300.0, GraphConfig::topology());
		for _ in 0..10 {
			state.tick();
		}
		let clock = state.clock;
		state.resize(800.0, 600.0);
		assert_eq!(state.clock, clock);
		assert_eq!(state.layout.center.x, 400.0);
	}

	#[test]
	fn start_stop_toggles_the_run_flag() {
		let mut state = RadialGraphState::new(nodes(2), 100.0, 100.0, GraphConfig::knowledge());
		assert!(!state.is_running());
		state.start();
		assert!(state.is_running());
		state.stop();
		assert!(!state.is_running());
	}
}
