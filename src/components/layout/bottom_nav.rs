use leptos::prelude::*;

use crate::store::{Dashboard, ViewKind};

/// Fixed footer: one button per view, the active one highlighted.
#[component]
pub fn BottomNav() -> impl IntoView {
	let dashboard = Dashboard::expect();

	view! {
		<nav class="bottom-nav">
			{ViewKind::ALL
				.into_iter()
				.map(|view_kind| {
					let active = move || dashboard.with(|s| s.current_view == view_kind);
					view! {
						<button
							class=move || {
								format!("nav-button {}", if active() { "active" } else { "" })
							}
							on:click=move |_| dashboard.set_current_view(view_kind)
						>
							<span class="nav-label">{view_kind.label()}</span>
							{move || active().then(|| view! { <span class="nav-active-dot"></span> })}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}
