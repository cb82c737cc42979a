use leptos::prelude::*;

use crate::store::StatusKind;

/// A colored status dot with an optional label next to it.
#[component]
pub fn StatusIndicator(
	status: StatusKind,
	#[prop(optional, into)] label: String,
) -> impl IntoView {
	view! {
		<span class="status-indicator">
			<span class=format!("status-dot {}", status.css_class())></span>
			{(!label.is_empty()).then(|| view! { <span class="status-label">{label}</span> })}
		</span>
	}
}
