//! The collaborators an optimisation is run against.
//!
//! The optimiser never owns scene geometry. It reaches the host through
//! the four traits defined here, bundled in a [`SceneContext`]. In-memory
//! reference implementations live in [`impls`].

#[doc(hidden)]
pub mod category;
#[doc(hidden)]
pub mod definition;
pub mod impls;

#[doc(inline)]
pub use category::{Category, CategoryMask};
#[doc(inline)]
pub use definition::{LightSource, NavigableSurface, OcclusionOracle, SegmentLocator};

use crate::geometry::Point3;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("no navigable path connects {start:?} to {end:?}")]
    Unreachable { start: Point3, end: Point3 },

    #[error("no navigable position within {max_distance} of {point:?}")]
    NotFound { point: Point3, max_distance: f64 },
}

/// A borrowed bundle of the collaborators an optimisation queries.
///
/// Provides access to the navigable [`surface`](#field.surface), the occlusion
/// [`oracle`](#field.oracle), the segment [`locator`](#field.locator) and the scene's
/// [`light`](#field.light).
pub struct SceneContext<'a, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    pub surface: &'a N,
    pub oracle: &'a O,
    pub locator: &'a S,
    pub light: &'a L,
}

impl<'a, N, O, S, L> SceneContext<'a, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    pub fn new(surface: &'a N, oracle: &'a O, locator: &'a S, light: &'a L) -> Self {
        SceneContext {
            surface,
            oracle,
            locator,
            light,
        }
    }
}

impl<N, O, S, L> Clone for SceneContext<'_, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, O, S, L> Copy for SceneContext<'_, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
}
