//! Reusable animated radial graph: nodes on a ring around a glowing
//! center, spokes pulsing with simulated data flow.

mod component;
mod layout;
mod render;
mod state;
mod style;
mod types;

pub use component::RadialGraphCanvas;
pub use style::{SPOKE_ACTIVE, SPOKE_DIM, spoke_style};
pub use types::{GraphConfig, GraphNode, NodeKind};
