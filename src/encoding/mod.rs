//! Per-segment exposure codes for a chosen route.
//!
//! A route is first sampled densely to discover which road segments it
//! crosses, and over which span of the route ([`CoverageInterval`]). Each
//! span is then split into equal parts, and each part voted on as shaded
//! or lit, producing an [`ExposureCode`] per segment.

#[doc(hidden)]
pub mod code;
#[doc(hidden)]
pub mod encoder;
#[doc(hidden)]
pub mod interval;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use code::ExposureCode;
#[doc(inline)]
pub use encoder::{SegmentEncoder, SegmentExposure};
#[doc(inline)]
pub use interval::CoverageInterval;
