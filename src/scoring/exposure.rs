use crate::geometry::Route;
use crate::optimise::OptimisationConfig;
use crate::scene::{CategoryMask, LightSource, OcclusionOracle};

use log::trace;

/// Scores a route by the fraction of it which lies in shadow.
///
/// The route is sampled uniformly by arc-length. Each sample is lifted
/// slightly off the ground, and a ray is cast from it back towards the
/// light. Any geometry blocking the ray counts the sample as shadowed.
///
/// ### Coarse Scoring
///
/// The scorer deliberately does not filter by category: a ray meeting the
/// ground or a road also counts as shadow. This keeps scoring fast while
/// searching over many candidates. The final per-segment report is made by
/// the [`SegmentEncoder`](crate::encoding::SegmentEncoder), which does
/// exclude ground and road hits, and so can disagree with the search score.
pub struct ExposureScorer<'a, O, L>
where
    O: OcclusionOracle,
    L: LightSource,
{
    oracle: &'a O,
    light: &'a L,

    /// The number of positions sampled along each route.
    pub samples: usize,

    /// The vertical offset applied to samples, avoiding self-occlusion by the ground.
    pub lift: f64,

    /// The furthest an occluder may be from a sample.
    pub ray_distance: f64,
}

impl<'a, O, L> ExposureScorer<'a, O, L>
where
    O: OcclusionOracle,
    L: LightSource,
{
    pub fn new(oracle: &'a O, light: &'a L, samples: usize, lift: f64, ray_distance: f64) -> Self {
        ExposureScorer {
            oracle,
            light,
            samples,
            lift,
            ray_distance,
        }
    }

    pub fn from_config(oracle: &'a O, light: &'a L, config: &OptimisationConfig) -> Self {
        Self::new(
            oracle,
            light,
            config.samples_per_path,
            config.sample_lift,
            config.ray_distance,
        )
    }

    /// The shadow coverage ratio of the route, in `[0, 1]`.
    ///
    /// Routes with fewer than two corners, and scenes without a
    /// directional light, score zero.
    pub fn score(&self, route: &Route) -> f64 {
        if !route.is_traversable() || self.samples == 0 {
            return 0.0;
        }

        // The light is read once per route, as it may move between calls.
        let Some(towards) = self.light.towards() else {
            trace!("No directional light present, route is unshaded");
            return 0.0;
        };

        let shadowed = route
            .samples(self.samples)
            .filter(|(_, point)| {
                self.oracle.is_occluded(
                    point.lifted(self.lift),
                    towards,
                    self.ray_distance,
                    CategoryMask::ALL,
                )
            })
            .count();

        shadowed as f64 / self.samples as f64
    }
}
