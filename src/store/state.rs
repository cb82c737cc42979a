//! The aggregate console state and its mutators.
//!
//! All mutation goes through the methods here; views only ever see shared
//! references. Every method is a total function over in-memory state.

use log::warn;

use super::types::*;

/// Logs beyond this many entries are discarded from the tail.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Single source of truth for everything the console shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
	pub current_view: ViewKind,
	pub cognitive_mode: CognitiveMode,
	pub drawer_open: bool,
	pub thinking: ThinkingState,
	pub resources: Vec<Resource>,
	pub goals: Vec<Goal>,
	pub memory_layers: Vec<MemoryLayer>,
	pub memory_nodes: Vec<MemoryNode>,
	pub skills: Vec<Skill>,
	pub evolution_stages: Vec<EvolutionStage>,
	pub logs: Vec<LogEntry>,
	pub pending_decision: Option<DecisionRequest>,
	pub agents: Vec<Agent>,
	pub network_nodes: Vec<NetworkNode>,
	pub hardware: HardwareStatus,
	pub cost_metrics: Vec<CostMetric>,
}

impl DashboardState {
	/// Switch the active top-level view.
	pub fn set_current_view(&mut self, view: ViewKind) {
		self.current_view = view;
	}

	/// Open or close the work drawer.
	pub fn set_drawer_open(&mut self, open: bool) {
		self.drawer_open = open;
	}

	/// Select the cognitive mode.
	pub fn set_cognitive_mode(&mut self, mode: CognitiveMode) {
		self.cognitive_mode = mode;
	}

	/// Merge `patch` into the resource whose name matches `name` exactly.
	///
	/// An unknown name leaves the collection untouched; it is reported on
	/// the log backend rather than surfaced to the caller.
	pub fn update_resource(&mut self, name: &str, patch: &ResourcePatch) {
		match self.resources.iter_mut().find(|r| r.name == name) {
			Some(resource) => resource.apply(patch),
			None => warn!("update_resource: no resource named {name:?}"),
		}
	}

	/// Merge `patch` into the thinking readout.
	pub fn update_thinking(&mut self, patch: ThinkingPatch) {
		self.thinking.apply(patch);
	}

	/// Prepend a log entry, keeping only the most recent
	/// [`MAX_LOG_ENTRIES`]. Newest entries sit at index 0.
	pub fn add_log(&mut self, entry: LogEntry) {
		self.logs.insert(0, entry);
		self.logs.truncate(MAX_LOG_ENTRIES);
	}

	/// Resolve the pending decision: clear it and record which option was
	/// chosen for which decision id as a decision-kind log entry.
	///
	/// With nothing pending this is a strict no-op: no spurious log entry
	/// is written for a decision that does not exist.
	pub fn resolve_decision(&mut self, decision_id: &str, option_id: &str, timestamp: &str) {
		if self.pending_decision.take().is_none() {
			return;
		}
		self.add_log(LogEntry {
			timestamp: timestamp.into(),
			message: format!("Decision executed: {decision_id} - option {option_id}"),
			kind: LogKind::Decision,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::super::seed;
	use super::*;

	fn entry(n: usize) -> LogEntry {
		LogEntry {
			timestamp: "14:32:07".into(),
			message: format!("entry {n}"),
			kind: LogKind::Info,
		}
	}

	#[test]
	fn logs_are_newest_first_and_capped() {
		let mut state = seed::initial_state();
		state.logs.clear();
		for n in 0..250 {
			state.add_log(entry(n));
		}
		assert_eq!(state.logs.len(), MAX_LOG_ENTRIES);
		assert_eq!(state.logs[0].message, "entry 249");
		assert_eq!(state.logs[MAX_LOG_ENTRIES - 1].message, "entry 150");
	}

	#[test]
	fn update_resource_merges_and_leaves_others_alone() {
		let mut state = seed::initial_state();
		let before = state.resources.clone();
		let name = before[1].name.clone();

		state.update_resource(
			&name,
			&ResourcePatch {
				current: Some(91.0),
				status: Some(StatusKind::Danger),
				..ResourcePatch::default()
			},
		);

		assert_eq!(state.resources[1].current, 91.0);
		assert_eq!(state.resources[1].status, StatusKind::Danger);
		assert_eq!(state.resources[1].trend, before[1].trend);
		for (i, resource) in state.resources.iter().enumerate() {
			if i != 1 {
				assert_eq!(resource, &before[i]);
			}
		}
	}

	#[test]
	fn update_resource_with_unknown_name_is_a_no_op() {
		let mut state = seed::initial_state();
		let before = state.resources.clone();
		state.update_resource("no such gauge", &ResourcePatch {
			current: Some(1.0),
			..ResourcePatch::default()
		});
		assert_eq!(state.resources, before);
	}

	#[test]
	fn resolve_decision_clears_and_logs_chosen_option() {
		let mut state = seed::initial_state();
		assert!(state.pending_decision.is_some());

		state.resolve_decision("timing-power", "optimize", "14:35:00");

		assert!(state.pending_decision.is_none());
		let newest = &state.logs[0];
		assert_eq!(newest.kind, LogKind::Decision);
		assert!(newest.message.contains("timing-power"));
		assert!(newest.message.contains("optimize"));
	}

	#[test]
	fn resolve_decision_with_nothing_pending_logs_nothing() {
		let mut state = seed::initial_state();
		state.pending_decision = None;
		let log_count = state.logs.len();

		state.resolve_decision("timing-power", "accept", "14:35:00");

		assert!(state.pending_decision.is_none());
		assert_eq!(state.logs.len(), log_count);
	}

	#[test]
	fn update_thinking_merges_present_fields() {
		let mut state = seed::initial_state();
		let title = state.thinking.title.clone();
		state.update_thinking(ThinkingPatch {
			simulation_step: Some(128),
			confidence: Some(74),
			..ThinkingPatch::default()
		});
		assert_eq!(state.thinking.simulation_step, 128);
		assert_eq!(state.thinking.confidence, 74);
		assert_eq!(state.thinking.title, title);
	}
}
