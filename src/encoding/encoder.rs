use crate::encoding::{CoverageInterval, ExposureCode};
use crate::geometry::{Point3, Route};
use crate::optimise::OptimisationConfig;
use crate::scene::{CategoryMask, LightSource, OcclusionOracle, SegmentLocator};

use indexmap::IndexMap;
use log::{debug, trace};

/// The width given to a segment observed at a single route position.
const DEGENERATE_WIDTH: f64 = 1e-4;

/// The exposure code of a single road segment along the route.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentExposure<Id> {
    pub segment: Id,

    /// The span of the route over which the segment was observed,
    /// widened when observed only once.
    pub interval: CoverageInterval,
    pub code: ExposureCode,
}

/// Encodes the shadow pattern of a route onto the road segments it crosses.
///
/// ### Discovery
///
/// The route is sampled at [`dense_samples`](#field.dense_samples) positions.
/// Each position is lifted and located against the road segments in
/// [`road_mask`](#field.road_mask). Every segment found records the smallest
/// and largest `t` at which it was seen. Segments keep the order in which they
/// were first seen, and positions matching no segment are ignored.
///
/// ### Encoding
///
/// Each segment's interval is split into [`code_length`](#field.code_length)
/// equal parts. Every part casts [`votes`](#field.votes) rays towards the light,
/// only counting hits against [`occlusion_mask`](#field.occlusion_mask). A part is
/// shaded when strictly more than half of its votes are occluded.
///
/// Unlike the [`ExposureScorer`](crate::scoring::ExposureScorer), hits against
/// the ground and roads are excluded by the default mask.
pub struct SegmentEncoder<'a, O, S, L>
where
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    oracle: &'a O,
    locator: &'a S,
    light: &'a L,

    pub dense_samples: usize,
    pub votes: usize,
    pub code_length: usize,

    pub lift: f64,
    pub ray_distance: f64,
    pub search_radius: f64,

    pub road_mask: CategoryMask,
    pub occlusion_mask: CategoryMask,
}

impl<'a, O, S, L> SegmentEncoder<'a, O, S, L>
where
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    /// Creates an encoder with the default configuration.
    pub fn new(oracle: &'a O, locator: &'a S, light: &'a L) -> Self {
        Self::from_config(oracle, locator, light, &OptimisationConfig::default())
    }

    pub fn from_config(
        oracle: &'a O,
        locator: &'a S,
        light: &'a L,
        config: &OptimisationConfig,
    ) -> Self {
        SegmentEncoder {
            oracle,
            locator,
            light,
            dense_samples: config.dense_sample_count,
            votes: config.sub_segment_vote_count,
            code_length: config.output_code_length,
            lift: config.sample_lift,
            ray_distance: config.ray_distance,
            search_radius: config.segment_search_radius,
            road_mask: config.road_category_mask,
            occlusion_mask: config.occlusion_category_mask,
        }
    }

    /// Finds the segments crossed by the route, in first-seen order.
    pub fn discover(&self, route: &Route) -> IndexMap<S::Id, CoverageInterval> {
        let mut intervals = IndexMap::<S::Id, CoverageInterval>::new();
        if !route.is_traversable() {
            return intervals;
        }

        for (t, point) in route.samples(self.dense_samples) {
            let Some(segment) =
                self.locator
                    .locate(point.lifted(self.lift), self.search_radius, self.road_mask)
            else {
                continue;
            };

            intervals
                .entry(segment)
                .and_modify(|interval| interval.observe(t))
                .or_insert_with(|| CoverageInterval::at(t));
        }

        intervals
    }

    /// Produces one exposure code per segment the route crosses.
    ///
    /// Segments the route never touches are absent, rather than reported
    /// with an all-zero code. Without a directional light every code is lit.
    pub fn encode(&self, route: &Route) -> Vec<SegmentExposure<S::Id>> {
        // Read once, such that every segment sees the same light.
        let towards = self.light.towards();

        let exposures = self
            .discover(route)
            .into_iter()
            .map(|(segment, interval)| {
                if interval.is_degenerate() {
                    trace!(
                        "Segment {segment:?} observed only at t={:.4}, widening",
                        interval.start
                    );
                }

                let interval = interval.widened(DEGENERATE_WIDTH);
                let code = match towards {
                    Some(towards) => self.code(route, interval, towards),
                    None => ExposureCode::from(vec![false; self.code_length]),
                };

                SegmentExposure {
                    segment,
                    interval,
                    code,
                }
            })
            .collect::<Vec<_>>();

        debug!("Encoded {} segments along the route", exposures.len());
        exposures
    }

    fn code(&self, route: &Route, interval: CoverageInterval, towards: Point3) -> ExposureCode {
        (0..self.code_length)
            .map(|index| {
                let (a, b) = interval.part(index, self.code_length);
                let shaded = CoverageInterval::votes(a, b, self.votes)
                    .filter(|t| {
                        self.oracle.is_occluded(
                            route.point_at(*t).lifted(self.lift),
                            towards,
                            self.ray_distance,
                            self.occlusion_mask,
                        )
                    })
                    .count();

                shaded * 2 > self.votes
            })
            .collect()
    }
}
