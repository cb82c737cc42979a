//! Entity model for the console: everything the store owns and the views read.

/// The five top-level screens. Selecting one swaps the whole main area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
	Panorama,
	Topology,
	Memory,
	Skills,
	Evolution,
}

impl ViewKind {
	/// All views in navigation order.
	pub const ALL: [ViewKind; 5] = [
		ViewKind::Panorama,
		ViewKind::Topology,
		ViewKind::Memory,
		ViewKind::Skills,
		ViewKind::Evolution,
	];

	/// Navigation label.
	pub fn label(self) -> &'static str {
		match self {
			ViewKind::Panorama => "Cognitive Panorama",
			ViewKind::Topology => "Resource Topology",
			ViewKind::Memory => "Memory Activation",
			ViewKind::Skills => "Skill Tree",
			ViewKind::Evolution => "Evolution Workbench",
		}
	}
}

/// How much of the driving the agent is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CognitiveMode {
	Auto,
	Assist,
	Manual,
	Evolution,
}

impl CognitiveMode {
	/// All modes in selector order.
	pub const ALL: [CognitiveMode; 4] = [
		CognitiveMode::Auto,
		CognitiveMode::Assist,
		CognitiveMode::Manual,
		CognitiveMode::Evolution,
	];

	/// Selector label.
	pub fn label(self) -> &'static str {
		match self {
			CognitiveMode::Auto => "Autopilot",
			CognitiveMode::Assist => "Assisted",
			CognitiveMode::Manual => "Manual",
			CognitiveMode::Evolution => "Evolution",
		}
	}

	/// CSS accent class for the mode badge.
	pub fn css_class(self) -> &'static str {
		match self {
			CognitiveMode::Auto => "accent-emerald",
			CognitiveMode::Assist => "accent-amber",
			CognitiveMode::Manual => "accent-red",
			CognitiveMode::Evolution => "accent-purple",
		}
	}
}

/// Health of a resource, agent, or the whole system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
	Healthy,
	Warning,
	Danger,
	Processing,
}

impl StatusKind {
	/// CSS class for the status dot / border.
	pub fn css_class(self) -> &'static str {
		match self {
			StatusKind::Healthy => "status-healthy",
			StatusKind::Warning => "status-warning",
			StatusKind::Danger => "status-danger",
			StatusKind::Processing => "status-processing",
		}
	}

	/// Human label.
	pub fn label(self) -> &'static str {
		match self {
			StatusKind::Healthy => "healthy",
			StatusKind::Warning => "warning",
			StatusKind::Danger => "danger",
			StatusKind::Processing => "processing",
		}
	}
}

/// Direction a metric has been moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	Up,
	Down,
	Stable,
}

impl Trend {
	/// Glyph shown next to the metric value.
	pub fn glyph(self) -> &'static str {
		match self {
			Trend::Up => "▲",
			Trend::Down => "▼",
			Trend::Stable => "—",
		}
	}
}

/// A cognitive resource gauge (compute tier or memory pool).
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
	pub name: String,
	pub current: f64,
	pub max: f64,
	pub unit: String,
	pub trend: Trend,
	pub status: StatusKind,
}

/// Field-wise update for a [`Resource`]; absent fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourcePatch {
	pub current: Option<f64>,
	pub trend: Option<Trend>,
	pub status: Option<StatusKind>,
}

impl Resource {
	/// Merge the present fields of `patch` into this resource.
	pub fn apply(&mut self, patch: &ResourcePatch) {
		if let Some(current) = patch.current {
			self.current = current;
		}
		if let Some(trend) = patch.trend {
			self.trend = trend;
		}
		if let Some(status) = patch.status {
			self.status = status;
		}
	}
}

/// Category of a goal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalKind {
	Mission,
	Subgoal,
	Task,
	Background,
	Evolution,
}

impl GoalKind {
	/// CSS accent class for the goal bullet.
	pub fn css_class(self) -> &'static str {
		match self {
			GoalKind::Mission => "accent-purple",
			GoalKind::Subgoal => "accent-cyan",
			GoalKind::Task => "accent-zinc",
			GoalKind::Background => "accent-zinc",
			GoalKind::Evolution => "accent-amber",
		}
	}
}

/// Progress state shared by goals, evolution stages, and tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
	Pending,
	InProgress,
	Completed,
}

/// A node in the goal hierarchy. Each node exclusively owns its children,
/// so the tree can be traversed without shared references.
#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
	pub id: String,
	pub title: String,
	pub kind: GoalKind,
	pub status: Progress,
	pub progress: Option<u8>,
	pub children: Vec<Goal>,
}

/// Flatten a goal forest into `(depth, goal)` rows in depth-first order.
///
/// Iterative with an explicit stack, so a pathological tree cannot blow
/// the call stack.
pub fn walk_goals(goals: &[Goal]) -> Vec<(usize, &Goal)> {
	let mut rows = Vec::new();
	let mut stack: Vec<(usize, &Goal)> = goals.iter().rev().map(|g| (0, g)).collect();
	while let Some((depth, goal)) = stack.pop() {
		rows.push((depth, goal));
		for child in goal.children.iter().rev() {
			stack.push((depth + 1, child));
		}
	}
	rows
}

/// The live simulation readout shown in the thinking core.
#[derive(Clone, Debug, PartialEq)]
pub struct ThinkingState {
	pub title: String,
	pub current_step: String,
	pub simulation_step: u32,
	pub total_steps: u32,
	pub confidence: u8,
	pub target_confidence: u8,
	pub cache_hit_rate: u8,
	pub similar_cases: u32,
}

/// Field-wise update for [`ThinkingState`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThinkingPatch {
	pub current_step: Option<String>,
	pub simulation_step: Option<u32>,
	pub confidence: Option<u8>,
	pub cache_hit_rate: Option<u8>,
}

impl ThinkingState {
	/// Merge the present fields of `patch` into this state.
	pub fn apply(&mut self, patch: ThinkingPatch) {
		if let Some(step) = patch.current_step {
			self.current_step = step;
		}
		if let Some(n) = patch.simulation_step {
			self.simulation_step = n;
		}
		if let Some(c) = patch.confidence {
			self.confidence = c;
		}
		if let Some(r) = patch.cache_hit_rate {
			self.cache_hit_rate = r;
		}
	}
}

/// Sync state of a memory layer against its backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consistency {
	Synced,
	Warning,
	Disconnected,
}

impl Consistency {
	/// Human label for the layer card.
	pub fn label(self) -> &'static str {
		match self {
			Consistency::Synced => "synced",
			Consistency::Warning => "synced 12h ago",
			Consistency::Disconnected => "disconnected",
		}
	}
}

/// One tier of the memory hierarchy (L0 working set through external archive).
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryLayer {
	pub level: u8,
	pub name: String,
	pub capacity: String,
	pub current_usage: String,
	pub activation_mode: String,
	pub consistency: Consistency,
}

/// A knowledge-graph node with its current activation in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryNode {
	pub id: String,
	pub label: String,
	pub activation: f64,
	pub last_accessed: String,
}

/// Branch of the skill tree a skill belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillBranch {
	Perception,
	Reasoning,
	Action,
	Evolution,
}

impl SkillBranch {
	/// All branches in display order.
	pub const ALL: [SkillBranch; 4] = [
		SkillBranch::Perception,
		SkillBranch::Reasoning,
		SkillBranch::Action,
		SkillBranch::Evolution,
	];

	/// Branch heading.
	pub fn label(self) -> &'static str {
		match self {
			SkillBranch::Perception => "Perception",
			SkillBranch::Reasoning => "Reasoning",
			SkillBranch::Action => "Action",
			SkillBranch::Evolution => "Evolution",
		}
	}

	/// CSS accent class for the branch.
	pub fn css_class(self) -> &'static str {
		match self {
			SkillBranch::Perception => "accent-emerald",
			SkillBranch::Reasoning => "accent-cyan",
			SkillBranch::Action => "accent-amber",
			SkillBranch::Evolution => "accent-purple",
		}
	}
}

/// A learned capability with its level and proficiency.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
	pub id: String,
	pub name: String,
	pub branch: SkillBranch,
	pub level: u8,
	pub max_level: u8,
	pub proficiency: u8,
	pub effects: Vec<String>,
	pub next_unlocks: Vec<String>,
	pub requirements: Option<String>,
	pub unlocking: bool,
}

/// One stage of the self-evolution pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolutionStage {
	pub id: String,
	pub name: String,
	pub status: Progress,
	pub duration: String,
	pub tasks: Vec<EvolutionTask>,
}

/// A task inside an evolution stage.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolutionTask {
	pub id: String,
	pub name: String,
	pub status: Progress,
	pub progress: u8,
	pub estimated_completion: Option<String>,
	pub cost: Option<String>,
}

/// Severity / category of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
	Info,
	Warning,
	Error,
	Decision,
}

impl LogKind {
	/// CSS class for the log line.
	pub fn css_class(self) -> &'static str {
		match self {
			LogKind::Info => "log-info",
			LogKind::Warning => "log-warning",
			LogKind::Error => "log-error",
			LogKind::Decision => "log-decision",
		}
	}
}

/// One line in the work-drawer log stream.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
	pub timestamp: String,
	pub message: String,
	pub kind: LogKind,
}

/// A decision the agent has escalated to the operator.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionRequest {
	pub id: String,
	pub title: String,
	pub description: String,
	pub options: Vec<DecisionOption>,
}

/// One selectable option of a [`DecisionRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionOption {
	pub id: String,
	pub label: String,
	pub description: String,
	pub risk: Option<String>,
	pub cost: Option<String>,
}

/// A collaborating agent and its current load.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
	pub id: String,
	pub name: String,
	pub role: String,
	pub current_task: String,
	pub load: u8,
	pub status: StatusKind,
}

/// Where a compute node sits in the deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkTier {
	Cloud,
	Edge,
}

/// A compute node the agent can run on.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	pub id: String,
	pub name: String,
	pub tier: NetworkTier,
	pub location: String,
	pub load: u8,
	pub is_current: bool,
}

/// Snapshot of the local accelerator hardware.
#[derive(Clone, Debug, PartialEq)]
pub struct HardwareStatus {
	pub cim_active: u32,
	pub cim_total: u32,
	pub sram_used: f64,
	pub sram_total: f64,
	pub hbm_used: f64,
	pub hbm_total: f64,
	pub temperature: f64,
	pub power: f64,
}

/// A cost/efficiency metric row.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMetric {
	pub name: String,
	pub current: String,
	pub average: String,
	pub potential: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn goal(id: &str, children: Vec<Goal>) -> Goal {
		Goal {
			id: id.into(),
			title: format!("goal {id}"),
			kind: GoalKind::Task,
			status: Progress::Pending,
			progress: None,
			children,
		}
	}

	#[test]
	fn walk_is_depth_first_with_depths() {
		let forest = vec![
			goal("a", vec![goal("a1", vec![goal("a1x", vec![])]), goal("a2", vec![])]),
			goal("b", vec![]),
		];
		let rows: Vec<(usize, &str)> = walk_goals(&forest)
			.into_iter()
			.map(|(depth, g)| (depth, g.id.as_str()))
			.collect();
		assert_eq!(
			rows,
			vec![(0, "a"), (1, "a1"), (2, "a1x"), (1, "a2"), (0, "b")]
		);
	}

	#[test]
	fn walk_empty_forest_is_empty() {
		assert!(walk_goals(&[]).is_empty());
	}

	#[test]
	fn resource_patch_merges_only_present_fields() {
		let mut resource = Resource {
			name: "cache".into(),
			current: 78.0,
			max: 100.0,
			unit: "%".into(),
			trend: Trend::Stable,
			status: StatusKind::Warning,
		};
		resource.apply(&ResourcePatch {
			current: Some(81.0),
			..ResourcePatch::default()
		});
		assert_eq!(resource.current, 81.0);
		assert_eq!(resource.trend, Trend::Stable);
		assert_eq!(resource.status, StatusKind::Warning);
	}
}
