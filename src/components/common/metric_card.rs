use leptos::prelude::*;

use crate::store::{StatusKind, Trend};

/// A gauge card: value over max with a trend glyph and a status-colored
/// fill bar.
#[component]
pub fn MetricCard(
	#[prop(into)] title: String,
	value: f64,
	max: f64,
	#[prop(into)] unit: String,
	trend: Trend,
	status: StatusKind,
) -> impl IntoView {
	let percentage = if max > 0.0 {
		(value / max * 100.0).min(100.0)
	} else {
		0.0
	};

	view! {
		<div class=format!("metric-card {}", status.css_class())>
			<div class="metric-card-head">
				<span class="metric-card-title">{title}</span>
				<span class="metric-card-trend">{trend.glyph()}</span>
			</div>
			<div class="metric-card-value">
				<span class="metric-card-current">{format!("{value:.0}")}</span>
				<span class="metric-card-max">{format!("/ {max:.0} {unit}")}</span>
			</div>
			<div class="metric-card-bar">
				<div
					class="metric-card-fill"
					style=format!("width: {percentage:.0}%")
				></div>
			</div>
		</div>
	}
}
