//! The five top-level dashboard views.

mod evolution;
mod memory;
mod panorama;
mod skills;
mod topology;

pub use evolution::EvolutionWorkbench;
pub use memory::MemoryActivation;
pub use panorama::CognitivePanorama;
pub use skills::SkillTree;
pub use topology::ResourceTopology;
