//! Seed dataset the console starts from.
//!
//! Everything here is sample data: the console has no backend, so the
//! collections below are the whole world at startup.

use super::state::DashboardState;
use super::types::*;

fn resource(name: &str, current: f64, max: f64, unit: &str, trend: Trend, status: StatusKind) -> Resource {
	Resource {
		name: name.into(),
		current,
		max,
		unit: unit.into(),
		trend,
		status,
	}
}

fn goal(id: &str, title: &str, kind: GoalKind, status: Progress) -> Goal {
	Goal {
		id: id.into(),
		title: title.into(),
		kind,
		status,
		progress: None,
		children: Vec::new(),
	}
}

fn layer(level: u8, name: &str, capacity: &str, usage: &str, mode: &str, consistency: Consistency) -> MemoryLayer {
	MemoryLayer {
		level,
		name: name.into(),
		capacity: capacity.into(),
		current_usage: usage.into(),
		activation_mode: mode.into(),
		consistency,
	}
}

fn log_line(timestamp: &str, message: &str, kind: LogKind) -> LogEntry {
	LogEntry {
		timestamp: timestamp.into(),
		message: message.into(),
		kind,
	}
}

fn stage(id: &str, name: &str, status: Progress, duration: &str) -> EvolutionStage {
	EvolutionStage {
		id: id.into(),
		name: name.into(),
		status,
		duration: duration.into(),
		tasks: Vec::new(),
	}
}

fn agent(id: &str, name: &str, role: &str, task: &str, load: u8, status: StatusKind) -> Agent {
	Agent {
		id: id.into(),
		name: name.into(),
		role: role.into(),
		current_task: task.into(),
		load,
		status,
	}
}

fn network_node(id: &str, name: &str, tier: NetworkTier, location: &str, load: u8, is_current: bool) -> NetworkNode {
	NetworkNode {
		id: id.into(),
		name: name.into(),
		tier,
		location: location.into(),
		load,
		is_current,
	}
}

/// Build the state the console boots with.
pub fn initial_state() -> DashboardState {
	DashboardState {
		current_view: ViewKind::Panorama,
		cognitive_mode: CognitiveMode::Assist,
		drawer_open: false,
		thinking: ThinkingState {
			title: "World-model active region".into(),
			current_step: "Simulating: complaint-handling strategies".into(),
			simulation_step: 127,
			total_steps: 1000,
			confidence: 72,
			target_confidence: 85,
			cache_hit_rate: 94,
			similar_cases: 23,
		},
		resources: vec![
			resource("System 1 (edge)", 45.0, 100.0, "%", Trend::Up, StatusKind::Healthy),
			resource("System 1.5 (cache)", 78.0, 100.0, "%", Trend::Stable, StatusKind::Warning),
			resource("System 2 (cloud)", 12.0, 100.0, "%", Trend::Down, StatusKind::Healthy),
			resource("Working memory (SRAM)", 234.0, 256.0, "MB", Trend::Up, StatusKind::Warning),
		],
		goals: vec![
			Goal {
				children: vec![
					Goal {
						children: vec![
							goal(
								"1-1-1",
								"Analyze complaint #2847 (active)",
								GoalKind::Task,
								Progress::InProgress,
							),
							goal(
								"1-1-2",
								"Complaints #2848-2853 (queue depth: 6)",
								GoalKind::Task,
								Progress::Pending,
							),
						],
						..goal(
							"1-1",
							"Clear the complaint backlog (this week)",
							GoalKind::Subgoal,
							Progress::InProgress,
						)
					},
					goal(
						"1-2",
						"Reduce response latency (continuous)",
						GoalKind::Background,
						Progress::InProgress,
					),
				],
				..goal(
					"1",
					"Raise customer satisfaction (long term)",
					GoalKind::Mission,
					Progress::InProgress,
				)
			},
			Goal {
				progress: Some(67),
				..goal(
					"2",
					"Design a dedicated inference accelerator (stage 3)",
					GoalKind::Evolution,
					Progress::InProgress,
				)
			},
		],
		memory_layers: vec![
			layer(0, "Working memory", "256MB", "234MB", "fully active", Consistency::Synced),
			layer(1, "Short-term memory", "8GB", "4.2GB", "partial activation", Consistency::Synced),
			layer(2, "Long-term memory", "4TB", "127GB indexed", "query driven", Consistency::Warning),
			layer(3, "External archive", "∞", "load on demand", "lazy", Consistency::Disconnected),
		],
		memory_nodes: vec![
			MemoryNode {
				id: "1".into(),
				label: "Similar case #127".into(),
				activation: 0.92,
				last_accessed: "2 hours ago".into(),
			},
			MemoryNode {
				id: "2".into(),
				label: "Company policy B".into(),
				activation: 0.85,
				last_accessed: "1 day ago".into(),
			},
			MemoryNode {
				id: "3".into(),
				label: "Sentiment patterns".into(),
				activation: 0.78,
				last_accessed: "realtime".into(),
			},
		],
		skills: vec![
			Skill {
				id: "world-model".into(),
				name: "World-model simulation".into(),
				branch: SkillBranch::Reasoning,
				level: 3,
				max_level: 5,
				proficiency: 78,
				effects: vec![
					"System 2 reasoning accuracy: +35%".into(),
					"Long-horizon planning success: +28%".into(),
					"Compute cost: +150%".into(),
				],
				next_unlocks: vec![
					"Joint multi-agent simulation".into(),
					"Counterfactual reasoning".into(),
				],
				requirements: Some("1000 hours of System 2 practice, or purchase the advanced skill".into()),
				unlocking: false,
			},
			Skill {
				id: "visual-encoding".into(),
				name: "Visual encoding".into(),
				branch: SkillBranch::Perception,
				level: 4,
				max_level: 5,
				proficiency: 85,
				effects: vec![
					"Image recognition accuracy: +42%".into(),
					"Processing speed: +30%".into(),
				],
				next_unlocks: Vec::new(),
				requirements: None,
				unlocking: false,
			},
			Skill {
				id: "api-calling".into(),
				name: "API calling".into(),
				branch: SkillBranch::Action,
				level: 5,
				max_level: 5,
				proficiency: 100,
				effects: vec!["Call success rate: 99.9%".into(), "Mean latency: 12ms".into()],
				next_unlocks: Vec::new(),
				requirements: None,
				unlocking: false,
			},
			Skill {
				id: "architecture-search".into(),
				name: "Architecture search".into(),
				branch: SkillBranch::Evolution,
				level: 2,
				max_level: 5,
				proficiency: 45,
				effects: vec![
					"Hardware optimization efficiency: +25%".into(),
					"Search space: 10^6".into(),
				],
				next_unlocks: Vec::new(),
				requirements: None,
				unlocking: true,
			},
		],
		evolution_stages: vec![
			stage("analysis", "Analysis", Progress::Completed, "2 weeks"),
			stage("design", "Design", Progress::Completed, "4 weeks"),
			EvolutionStage {
				tasks: vec![
					EvolutionTask {
						id: "timing-closure".into(),
						name: "Timing closure".into(),
						status: Progress::InProgress,
						progress: 72,
						estimated_completion: Some("2 weeks".into()),
						cost: None,
					},
					EvolutionTask {
						id: "power-analysis".into(),
						name: "Power analysis".into(),
						status: Progress::Completed,
						progress: 100,
						estimated_completion: None,
						cost: None,
					},
					EvolutionTask {
						id: "yield-simulation".into(),
						name: "Yield simulation".into(),
						status: Progress::Pending,
						progress: 0,
						estimated_completion: None,
						cost: Some("+120 core-hours".into()),
					},
				],
				..stage("verification", "Verification", Progress::InProgress, "6 weeks")
			},
			stage("manufacturing", "Manufacturing", Progress::Pending, "12 weeks"),
			stage("migration", "Migration", Progress::Pending, "2 weeks"),
			stage("evaluation", "Evaluation", Progress::Pending, "ongoing"),
		],
		logs: vec![
			log_line(
				"14:32:07",
				"Place & route: layer 12/24 done, wirelength optimized 94%",
				LogKind::Info,
			),
			log_line("14:31:55", "Timing report: setup slack +0.12ns (met)", LogKind::Info),
			log_line(
				"14:31:42",
				"Warning: congestion near macro CIM_7, starting ECO pass",
				LogKind::Warning,
			),
			log_line(
				"14:31:30",
				"Auto decision: accepted ECO suggestion, rerouting the region",
				LogKind::Decision,
			),
			log_line(
				"14:31:15",
				"Cloud EDA: using 4,200 vCPU, est. 120 core-hours remaining",
				LogKind::Info,
			),
		],
		pending_decision: Some(DecisionRequest {
			id: "timing-power".into(),
			title: "Timing closure vs. power trade-off".into(),
			description: "The current best solution requires a trade-off".into(),
			options: vec![
				DecisionOption {
					id: "accept".into(),
					label: "Accept current solution".into(),
					description: "Timing: meets the 500MHz target".into(),
					risk: Some("Slightly over power budget, may affect yield".into()),
					cost: None,
				},
				DecisionOption {
					id: "optimize".into(),
					label: "Keep optimizing".into(),
					description: "Expected: power down to 14.5W, area 398 mm²".into(),
					risk: None,
					cost: Some("+3 days, +500 NRN compute".into()),
				},
			],
		}),
		agents: vec![
			agent("self", "You", "Coordinator", "Final arbitration", 45, StatusKind::Healthy),
			agent("agent-a", "Agent-A", "Analyst", "Root-cause mining", 78, StatusKind::Warning),
			agent("agent-b", "Agent-B", "Liaison", "Customer reassurance", 23, StatusKind::Healthy),
			agent("agent-c", "Agent-C", "Designer", "Proposal drafting", 56, StatusKind::Healthy),
		],
		network_nodes: vec![
			network_node("cloud-tokyo", "Cloud cluster", NetworkTier::Cloud, "Tokyo", 12, false),
			network_node("edge-singapore", "Edge node A", NetworkTier::Edge, "Singapore", 67, true),
			network_node("edge-sf", "Edge node B", NetworkTier::Edge, "San Francisco", 34, false),
			network_node("edge-frankfurt", "Edge node C", NetworkTier::Edge, "Frankfurt", 45, false),
		],
		hardware: HardwareStatus {
			cim_active: 16,
			cim_total: 16,
			sram_used: 234.0,
			sram_total: 256.0,
			hbm_used: 6.2,
			hbm_total: 8.0,
			temperature: 62.0,
			power: 12.3,
		},
		cost_metrics: vec![
			CostMetric {
				name: "Compute cost / 1k inferences".into(),
				current: "0.12 NRN".into(),
				average: "0.15 NRN".into(),
				potential: Some("-20% possible".into()),
			},
			CostMetric {
				name: "Energy efficiency (TOPS/W)".into(),
				current: "8.5".into(),
				average: "7.2".into(),
				potential: Some("reference: 12.0".into()),
			},
			CostMetric {
				name: "Cache hit rate".into(),
				current: "94%".into(),
				average: "89%".into(),
				potential: Some("good".into()),
			},
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_matches_the_documented_shape() {
		let state = initial_state();
		assert_eq!(state.current_view, ViewKind::Panorama);
		assert_eq!(state.resources.len(), 4);
		assert_eq!(state.memory_nodes.len(), 3);
		assert_eq!(state.network_nodes.len(), 4);
		assert_eq!(state.evolution_stages.len(), 6);
		assert_eq!(state.logs.len(), 5);

		let current: Vec<&NetworkNode> =
			state.network_nodes.iter().filter(|n| n.is_current).collect();
		assert_eq!(current.len(), 1);
		assert_eq!(current[0].load, 67);

		let decision = state.pending_decision.as_ref().expect("seeded decision");
		assert_eq!(decision.id, "timing-power");
		let option_ids: Vec<&str> = decision.options.iter().map(|o| o.id.as_str()).collect();
		assert_eq!(option_ids, ["accept", "optimize"]);
	}
}
