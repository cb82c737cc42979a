//! Per-frame canvas drawing for the radial graph.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::RadialGraphState;
use super::style::{self, GLOW_COLOR};

/// Draw one frame: spokes with their traveling pulses, the glowing center
/// node, then every ring node with its labels.
pub fn render(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_spokes(state, ctx);
	draw_center(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_spokes(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	let layout = &state.layout;
	let pulse_offset = state.clock.offset(state.config.pulse_speed, layout.radius);
	let pulse_fraction = if layout.radius > 0.0 {
		pulse_offset / layout.radius
	} else {
		0.0
	};

	for (i, node) in state.nodes.iter().enumerate() {
		let pos = layout.positions[i];
		let spoke = style::spoke_style(node);

		ctx.begin_path();
		ctx.move_to(layout.center.x, layout.center.y);
		ctx.line_to(pos.x, pos.y);
		ctx.set_stroke_style_str(&spoke.color);
		ctx.set_line_width(spoke.width);
		ctx.stroke();

		let pulse = layout.along_spoke(i, pulse_fraction);
		ctx.begin_path();
		let _ = ctx.arc(pulse.x, pulse.y, state.config.pulse_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style::pulse_fill(node));
		ctx.fill();
	}
}

fn draw_center(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	let center = state.layout.center;
	let radius = state.config.center_radius;

	ctx.begin_path();
	let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(GLOW_COLOR);
	ctx.set_shadow_color(GLOW_COLOR);
	ctx.set_shadow_blur(20.0);
	ctx.fill();
	ctx.set_shadow_blur(0.0);

	ctx.set_font("10px Inter, sans-serif");
	ctx.set_fill_style_str("#fff");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(state.config.center_label, center.x, center.y + radius + 15.0);
}

fn draw_nodes(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	for (i, node) in state.nodes.iter().enumerate() {
		let pos = state.layout.positions[i];
		let body = style::node_style(node);

		if let Some(glow) = &body.glow {
			ctx.begin_path();
			let _ = ctx.arc(pos.x, pos.y, body.radius + 5.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(glow);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(pos.x, pos.y, body.radius, 0.0, 2.0 * PI);
		if let Ok(gradient) =
			ctx.create_radial_gradient(pos.x, pos.y, 0.0, pos.x, pos.y, body.radius)
		{
			let _ = gradient.add_color_stop(0.0, &body.core);
			let _ = gradient.add_color_stop(1.0, &body.edge);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		} else {
			ctx.set_fill_style_str(&body.core);
		}
		if node.is_current {
			ctx.set_shadow_color(GLOW_COLOR);
			ctx.set_shadow_blur(15.0);
		}
		ctx.fill();
		ctx.set_shadow_blur(0.0);

		if state.config.show_load_ring {
			let sweep = node.intensity.clamp(0.0, 1.0) * 2.0 * PI;
			ctx.begin_path();
			let _ = ctx.arc(pos.x, pos.y, body.radius + 4.0, -PI / 2.0, -PI / 2.0 + sweep);
			ctx.set_stroke_style_str(style::ring_color(node.intensity));
			ctx.set_line_width(3.0);
			ctx.stroke();
		}

		ctx.set_font("10px Inter, sans-serif");
		ctx.set_fill_style_str("#fff");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&node.label, pos.x, pos.y + body.radius + 14.0);

		if let Some(sublabel) = &node.sublabel {
			ctx.set_fill_style_str("#71717a");
			let _ = ctx.fill_text(sublabel, pos.x, pos.y + body.radius + 26.0);
		}

		if state.config.show_intensity_pct {
			ctx.set_fill_style_str(GLOW_COLOR);
			let _ = ctx.fill_text(
				&format!("{:.0}%", node.intensity * 100.0),
				pos.x,
				pos.y + 4.0,
			);
		}
	}
}
