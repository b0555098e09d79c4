//! Candidate routes, and their generation over the navigable surface.

#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod generator;

#[doc(inline)]
pub use entity::Candidate;
#[doc(inline)]
pub use generator::CandidateGenerator;
