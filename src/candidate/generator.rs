use crate::geometry::{Point3, Route};
use crate::optimise::OptimisationConfig;
use crate::scene::{NavigableSurface, NavigationError};

use log::{debug, trace};
use rand::Rng;
use std::f64::consts::TAU;

/// Produces the pool of candidate routes for one optimisation round.
///
/// Every round attempts the direct route, and then a fixed number of two-leg
/// detours through random waypoints near the start. Waypoints are drawn
/// uniformly from a horizontal disk around the start and snapped onto the
/// navigable surface.
///
/// Generation never fails. Detours which cannot be snapped or routed are
/// skipped, so the pool only comes back empty when the start and end
/// cannot be connected at all.
pub struct CandidateGenerator<'a, N>
where
    N: NavigableSurface,
{
    surface: &'a N,

    /// The number of detour routes attempted per round.
    pub detour_count: usize,

    /// The radius of the disk detour waypoints are drawn from.
    pub detour_radius: f64,

    /// The furthest a waypoint may be moved to land on the surface.
    pub snap_distance: f64,
}

impl<'a, N> CandidateGenerator<'a, N>
where
    N: NavigableSurface,
{
    pub fn new(surface: &'a N, detour_count: usize, detour_radius: f64, snap_distance: f64) -> Self {
        CandidateGenerator {
            surface,
            detour_count,
            detour_radius,
            snap_distance,
        }
    }

    pub fn from_config(surface: &'a N, config: &OptimisationConfig) -> Self {
        Self::new(
            surface,
            config.detour_count,
            config.detour_radius,
            config.snap_distance,
        )
    }

    /// Generates the round's routes, the direct route first when reachable.
    ///
    /// The output is unordered in meaning and may contain duplicates.
    pub fn generate<R>(&self, start: Point3, end: Point3, rng: &mut R) -> Vec<Route>
    where
        R: Rng + ?Sized,
    {
        let mut routes = Vec::with_capacity(self.detour_count + 1);

        match self.surface.shortest_path(start, end) {
            Ok(route) if route.is_traversable() => routes.push(route),
            Ok(_) => debug!("Direct route collapsed to a single corner, skipping"),
            Err(err) => debug!("Direct route unavailable: {err}"),
        }

        for _ in 0..self.detour_count {
            let waypoint = self.waypoint(start, rng);

            match self.detour(start, waypoint, end) {
                Ok(route) if route.is_traversable() => routes.push(route),
                Ok(_) => trace!("Detour through {waypoint:?} collapsed, skipping"),
                Err(err) => trace!("Detour through {waypoint:?} dropped: {err}"),
            }
        }

        debug!("Generated {} candidate routes", routes.len());
        routes
    }

    /// Draws a point uniformly from the horizontal disk around `centre`.
    pub fn waypoint<R>(&self, centre: Point3, rng: &mut R) -> Point3
    where
        R: Rng + ?Sized,
    {
        // Square-root radius keeps the distribution uniform over the disk's area.
        let radius = self.detour_radius * rng.random::<f64>().sqrt();
        let angle = TAU * rng.random::<f64>();

        Point3::new(
            centre.x + radius * angle.cos(),
            centre.y,
            centre.z + radius * angle.sin(),
        )
    }

    /// Routes `start -> waypoint -> end`, with the waypoint snapped to the surface.
    fn detour(&self, start: Point3, waypoint: Point3, end: Point3) -> Result<Route, NavigationError> {
        let waypoint = self.surface.snap(waypoint, self.snap_distance)?;

        let first = self.surface.shortest_path(start, waypoint)?;
        let second = self.surface.shortest_path(waypoint, end)?;

        Ok(Route::join(first, second))
    }
}
