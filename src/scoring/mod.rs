//! Shadow coverage scoring of candidate routes.

#[doc(hidden)]
pub mod exposure;

#[doc(inline)]
pub use exposure::ExposureScorer;
