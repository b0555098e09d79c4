//! In-memory reference collaborators.
//!
//! These allow the optimiser to be driven outside of a game engine,
//! for example from tests, benchmarks or offline tooling.

pub mod boxes;
pub mod light;
pub mod network;
pub mod segments;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use boxes::{BoxScene, Occluder};
#[doc(inline)]
pub use light::DirectionalLight;
#[doc(inline)]
pub use network::WaypointGraph;
#[doc(inline)]
pub use segments::{RoadSegment, SegmentIndex};
