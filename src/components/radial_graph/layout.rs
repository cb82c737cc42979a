//! Closed-form ring geometry and the pulse clock.
//!
//! Pure math, no canvas types: everything here is host-testable.

use std::f64::consts::PI;

/// Phase advance per animation frame.
pub const CLOCK_STEP: f64 = 0.02;

/// A point on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Angle of node `i` out of `n`: node 0 sits at 12 o'clock and the rest
/// proceed clockwise at even spacing.
pub fn node_angle(i: usize, n: usize) -> f64 {
	(i as f64 / n as f64) * 2.0 * PI - PI / 2.0
}

/// Derived node positions for one surface size and node count.
///
/// Recomputed only when the node set or the surface changes, never per
/// frame, so positions cannot jitter between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialLayout {
	pub center: Point,
	pub radius: f64,
	pub positions: Vec<Point>,
}

impl RadialLayout {
	/// Place `n` nodes on a ring centered on a `width` x `height` surface.
	/// The ring radius is `fraction` of the smaller half-dimension.
	pub fn compute(n: usize, width: f64, height: f64, fraction: f64) -> Self {
		let center = Point {
			x: width / 2.0,
			y: height / 2.0,
		};
		let radius = center.x.min(center.y) * fraction;
		let positions = (0..n)
			.map(|i| {
				let angle = node_angle(i, n);
				Point {
					x: center.x + angle.cos() * radius,
					y: center.y + angle.sin() * radius,
				}
			})
			.collect();
		RadialLayout {
			center,
			radius,
			positions,
		}
	}

	/// Point at `fraction` of the way from the center to node `i`.
	pub fn along_spoke(&self, i: usize, fraction: f64) -> Point {
		let pos = self.positions[i];
		Point {
			x: self.center.x + (pos.x - self.center.x) * fraction,
			y: self.center.y + (pos.y - self.center.y) * fraction,
		}
	}
}

/// Monotonic phase accumulator driving the traveling pulse dots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PulseClock {
	time: f64,
}

impl PulseClock {
	/// Advance one frame.
	pub fn tick(&mut self) {
		self.time += CLOCK_STEP;
	}

	/// Pulse distance from the center along a spoke of length `radius`,
	/// always in `[0, radius)`.
	pub fn offset(&self, speed: f64, radius: f64) -> f64 {
		if radius <= 0.0 {
			return 0.0;
		}
		(self.time * speed) % radius
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn angles_follow_the_even_distribution() {
		let n = 8;
		for i in 0..n {
			let expected = (i as f64 / n as f64) * 2.0 * PI - PI / 2.0;
			assert!((node_angle(i, n) - expected).abs() < EPS);
		}
	}

	#[test]
	fn node_zero_sits_at_twelve_oclock() {
		let layout = RadialLayout::compute(4, 200.0, 200.0, 0.5);
		assert_eq!(layout.radius, 50.0);
		let top = layout.positions[0];
		assert!((top.x - 100.0).abs() < EPS);
		assert!((top.y - 50.0).abs() < EPS);
	}

	#[test]
	fn layout_is_idempotent_for_the_same_input() {
		let a = RadialLayout::compute(7, 640.0, 360.0, 0.6);
		let b = RadialLayout::compute(7, 640.0, 360.0, 0.6);
		assert_eq!(a, b);
	}

	#[test]
	fn radius_uses_the_smaller_half_dimension() {
		let layout = RadialLayout::compute(3, 640.0, 360.0, 0.6);
		assert!((layout.radius - 180.0 * 0.6).abs() < EPS);
	}

	#[test]
	fn spoke_interpolation_hits_both_ends() {
		let layout = RadialLayout::compute(5, 300.0, 300.0, 0.5);
		for i in 0..5 {
			let start = layout.along_spoke(i, 0.0);
			let end = layout.along_spoke(i, 1.0);
			assert!((start.x - layout.center.x).abs() < EPS);
			assert!((start.y - layout.center.y).abs() < EPS);
			assert!((end.x - layout.positions[i].x).abs() < EPS);
			assert!((end.y - layout.positions[i].y).abs() < EPS);
		}
	}

	#[test]
	fn pulse_offset_is_periodic_and_bounded() {
		let mut clock = PulseClock::default();
		let radius = 90.0;
		for _ in 0..10_000 {
			clock.tick();
			let offset = clock.offset(50.0, radius);
			assert!(offset >= 0.0);
			assert!(offset < radius);
		}
	}

	#[test]
	fn pulse_offset_on_degenerate_radius_is_zero() {
		let mut clock = PulseClock::default();
		clock.tick();
		assert_eq!(clock.offset(50.0, 0.0), 0.0);
	}
}
