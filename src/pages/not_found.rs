use leptos::prelude::*;

/// 404 fallback for routes the console does not know.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This console has no such screen."</p>
			<a href="/">"Back to the console"</a>
		</div>
	}
}
