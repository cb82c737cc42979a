use leptos::prelude::*;

use crate::store::{Dashboard, Skill, SkillBranch};

/// Skill tree view: the grid grouped by branch on the left, the selected
/// skill's detail card on the right.
#[component]
pub fn SkillTree() -> impl IntoView {
	let dashboard = Dashboard::expect();
	let selected =
		RwSignal::new(dashboard.with_untracked(|s| s.skills.first().map(|sk| sk.id.clone())));

	view! {
		<div class="view skills-view">
			<div class="view-header">
				<div>
					<h2>"Skill Tree"</h2>
					<p class="view-subtitle">"Capabilities by branch, with what unlocks next"</p>
				</div>
			</div>

			<div class="view-grid">
				<div class="card">
					{SkillBranch::ALL
						.into_iter()
						.map(|branch| {
							view! {
								<div class="skill-branch">
									<h3 class=format!("skill-branch-title {}", branch.css_class())>
										{branch.label()}
									</h3>
									<div class="skill-grid">
										{move || {
											dashboard
												.with(|s| {
													s.skills
														.iter()
														.filter(|sk| sk.branch == branch)
														.cloned()
														.collect::<Vec<_>>()
												})
												.into_iter()
												.map(|skill| {
													let id = skill.id.clone();
													let branch_class = skill.branch.css_class();
													let unlocking = skill.unlocking;
													let is_selected = {
														let id = id.clone();
														move || selected.get().as_deref() == Some(id.as_str())
													};
													view! {
														<button
															class=move || {
																format!(
																	"skill-node {} {} {}",
																	branch_class,
																	if is_selected() { "selected" } else { "" },
																	if unlocking { "unlocking" } else { "" },
																)
															}
															on:click=move |_| selected.set(Some(id.clone()))
														>
															<span class="skill-level-badge">{skill.level}</span>
															<span class="skill-name">{skill.name}</span>
															<span class="skill-proficiency">
																<span
																	class="skill-proficiency-fill"
																	style=format!("width: {}%", skill.proficiency)
																></span>
															</span>
															<span class="mono">{format!("{}%", skill.proficiency)}</span>
														</button>
													}
												})
												.collect_view()
										}}
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>

				<div class="stack">
					{move || {
						let skill = dashboard
							.with(|s| {
								let id = selected.get();
								s.skills
									.iter()
									.find(|sk| Some(sk.id.as_str()) == id.as_deref())
									.cloned()
							});
						skill.map(|skill| view! { <SkillDetailCard skill=skill /> })
					}}
				</div>
			</div>
		</div>
	}
}

#[component]
fn SkillDetailCard(skill: Skill) -> impl IntoView {
	view! {
		<div class="card skill-detail">
			<h3 class=skill.branch.css_class()>{skill.name.clone()}</h3>
			<p class="skill-detail-meta">
				{format!("Level {} / {} · proficiency {}%", skill.level, skill.max_level, skill.proficiency)}
			</p>
			<div class="metric-card-bar">
				<div
					class="metric-card-fill"
					style=format!("width: {}%", skill.proficiency)
				></div>
			</div>

			<h4>"Current effects"</h4>
			<ul class="skill-effects">
				{skill
					.effects
					.into_iter()
					.map(|effect| view! { <li>{effect}</li> })
					.collect_view()}
			</ul>

			{(!skill.next_unlocks.is_empty())
				.then(|| {
					view! {
						<h4>"Next unlocks"</h4>
						<ul class="skill-effects">
							{skill
								.next_unlocks
								.into_iter()
								.map(|unlock| view! { <li>{unlock}</li> })
								.collect_view()}
						</ul>
					}
				})}

			{skill
				.requirements
				.map(|req| view! { <p class="skill-requirements">"Requires: " {req}</p> })}
		</div>
	}
}
