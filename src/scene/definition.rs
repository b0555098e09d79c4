use crate::geometry::{Point3, Route};
use crate::scene::{CategoryMask, NavigationError};

use std::fmt::Debug;
use std::hash::Hash;

/// The navigable surface over which routes are planned.
///
/// Both operations are blocking. Failures are not fatal to an
/// optimisation, candidates which cannot be resolved are skipped.
pub trait NavigableSurface {
    /// Finds the shortest corner polyline between two points on the surface.
    ///
    /// Returns [`NavigationError::Unreachable`] should no connection exist.
    fn shortest_path(&self, start: Point3, end: Point3) -> Result<Route, NavigationError>;

    /// Projects an arbitrary point onto the nearest navigable position,
    /// provided one lies within `max_distance`.
    ///
    /// Returns [`NavigationError::NotFound`] otherwise.
    fn snap(&self, point: Point3, max_distance: f64) -> Result<Point3, NavigationError>;
}

/// Line-of-sight queries against scene geometry.
pub trait OcclusionOracle {
    /// Whether any geometry within `mask` blocks the ray leaving `origin`
    /// along `direction`, within `max_distance` of the origin.
    fn is_occluded(
        &self,
        origin: Point3,
        direction: Point3,
        max_distance: f64,
        mask: CategoryMask,
    ) -> bool;
}

/// Spatial lookup of the ground segment containing a point.
pub trait SegmentLocator {
    /// The opaque identity of a segment. It is only ever referenced,
    /// never created or mutated, by the optimiser.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the segment within `search_radius` of `point`, restricted
    /// to segments whose category lies in `mask`.
    fn locate(&self, point: Point3, search_radius: f64, mask: CategoryMask) -> Option<Self::Id>;
}

/// The scene's directional light.
pub trait LightSource {
    /// The direction the light faces (travels along), read fresh on every call.
    ///
    /// Returns `None` when the scene has no directional light, in which
    /// case nothing can be occluded from it.
    fn facing(&self) -> Option<Point3>;

    /// The direction pointing back towards the light, the inverse
    /// of [`LightSource::facing`], normalised.
    fn towards(&self) -> Option<Point3> {
        self.facing().and_then(|facing| (-facing).normalized())
    }
}

impl<T: LightSource> LightSource for Option<T> {
    fn facing(&self) -> Option<Point3> {
        self.as_ref().and_then(LightSource::facing)
    }
}
