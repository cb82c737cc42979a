use leptos::prelude::*;

use crate::components::layout::{BottomDrawer, BottomNav, TopBar};
use crate::components::views::{
	CognitivePanorama, EvolutionWorkbench, MemoryActivation, ResourceTopology, SkillTree,
};
use crate::store::{Dashboard, ViewKind};

/// The console shell: header, the active view, the work drawer, and the
/// bottom navigation. Which view renders is store state, not a route.
#[component]
pub fn Home() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<div class="console">
			<TopBar />
			<main class="view-container">
				{move || match dashboard.with(|s| s.current_view) {
					ViewKind::Panorama => view! { <CognitivePanorama /> }.into_any(),
					ViewKind::Topology => view! { <ResourceTopology /> }.into_any(),
					ViewKind::Memory => view! { <MemoryActivation /> }.into_any(),
					ViewKind::Skills => view! { <SkillTree /> }.into_any(),
					ViewKind::Evolution => view! { <EvolutionWorkbench /> }.into_any(),
				}}
			</main>
			<BottomDrawer />
			<BottomNav />
		</div>
	}
}
