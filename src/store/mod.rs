//! Shared console state: one explicitly constructed store, handed to the
//! component tree through the reactive context.
//!
//! All writes funnel through [`Dashboard`] mutators; each one is a single
//! atomic signal update on the main thread, so a mutation committed before
//! a frame is scheduled is visible to that frame.

use leptos::prelude::*;

pub mod seed;
pub mod state;
pub mod types;

pub use state::DashboardState;
pub use types::*;

/// Handle to the console store.
///
/// Constructed once per application by [`Dashboard::provide`] and looked
/// up by consumers with [`Dashboard::expect`]; there is no ambient global.
#[derive(Clone, Copy)]
pub struct Dashboard(RwSignal<DashboardState>);

impl Dashboard {
	/// Create the store from seed data and install it in the reactive
	/// context for the subtree being built. Returns the handle as well.
	pub fn provide() -> Self {
		let dashboard = Dashboard(RwSignal::new(seed::initial_state()));
		provide_context(dashboard);
		dashboard
	}

	/// Look up the store installed by [`Dashboard::provide`].
	///
	/// Panics if no provider ran higher in the tree; an uninitialized
	/// store is an integration bug that should fail fast, not read
	/// defaults.
	pub fn expect() -> Self {
		use_context::<Dashboard>()
			.expect("Dashboard store not provided; call Dashboard::provide() at the app root")
	}

	/// Read a projection of the current state, tracking it reactively.
	pub fn with<R>(self, f: impl FnOnce(&DashboardState) -> R) -> R {
		self.0.with(f)
	}

	/// Read without tracking, for event handlers and other one-shot reads.
	pub fn with_untracked<R>(self, f: impl FnOnce(&DashboardState) -> R) -> R {
		self.0.with_untracked(f)
	}

	fn update(self, f: impl FnOnce(&mut DashboardState)) {
		self.0.update(f);
	}

	/// Switch the active view.
	pub fn set_current_view(self, view: ViewKind) {
		self.update(|s| s.set_current_view(view));
	}

	/// Open or close the work drawer.
	pub fn set_drawer_open(self, open: bool) {
		self.update(|s| s.set_drawer_open(open));
	}

	/// Select the cognitive mode.
	pub fn set_cognitive_mode(self, mode: CognitiveMode) {
		self.update(|s| s.set_cognitive_mode(mode));
	}

	/// Merge a patch into the named resource gauge.
	pub fn update_resource(self, name: &str, patch: &ResourcePatch) {
		self.update(|s| s.update_resource(name, patch));
	}

	/// Merge a patch into the thinking readout.
	pub fn update_thinking(self, patch: ThinkingPatch) {
		self.update(|s| s.update_thinking(patch));
	}

	/// Append a log entry (newest first, capped).
	pub fn add_log(self, entry: LogEntry) {
		self.update(|s| s.add_log(entry));
	}

	/// Append a timestamped log entry for a UI action.
	pub fn log_action(self, message: &str, kind: LogKind) {
		let entry = LogEntry {
			timestamp: now_hms(),
			message: message.into(),
			kind,
		};
		self.add_log(entry);
	}

	/// Resolve the pending decision with the chosen option.
	pub fn resolve_decision(self, decision_id: &str, option_id: &str) {
		let timestamp = now_hms();
		self.update(|s| s.resolve_decision(decision_id, option_id, &timestamp));
	}
}

/// Wall-clock `HH:MM:SS`, as the host browser formats it.
fn now_hms() -> String {
	js_sys::Date::new_0().to_locale_time_string("en-GB").into()
}
