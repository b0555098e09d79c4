#![doc = include_str!("../README.md")]

pub mod candidate;
pub mod encoding;
pub mod error;
pub mod geometry;
pub mod optimise;
pub mod scene;
pub mod scoring;
pub mod selection;
pub mod util;

#[cfg(test)]
pub(crate) mod fixtures;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use geometry::{Point3, Route};
#[doc(inline)]
pub use optimise::{Optimisation, OptimisationConfig, Optimiser};
#[doc(inline)]
pub use scene::{
    Category, CategoryMask, LightSource, NavigableSurface, OcclusionOracle, SceneContext,
    SegmentLocator,
};
