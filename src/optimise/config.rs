use crate::optimise::OptimiseError;
use crate::scene::CategoryMask;
use crate::selection::Preference;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How candidates are selected across rounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Folds each round's near-optimal shortest candidate into a running best.
    /// See [`RunningBest`](crate::selection::RunningBest).
    #[default]
    RunningBest,

    /// Pools every round, and additionally produces a display set.
    /// See [`PooledSelection`](crate::selection::PooledSelection).
    Pooled,
}

/// Parameters of an optimisation run.
///
/// Every field has a default, such that partial configurations
/// deserialize into a complete one.
///
/// ```rust
/// use shadepath::optimise::{OptimisationConfig, SelectionPolicy};
///
/// let config = OptimisationConfig::default()
///     .with_iterations(3)
///     .with_policy(SelectionPolicy::Pooled)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimisationConfig {
    /// Detour routes attempted per round, alongside the direct route.
    pub detour_count: usize,
    pub detour_radius: f64,

    /// How far a detour waypoint may move to land on the navigable surface.
    pub snap_distance: f64,

    /// Positions sampled along each candidate when scoring.
    pub samples_per_path: usize,
    pub optimization_iterations: usize,

    /// Candidates within this distance of a round's best score survive the round's filter.
    pub shadow_tolerance: f64,

    /// Segment categories a route is encoded against.
    pub road_category_mask: CategoryMask,

    /// Geometry categories which cast shade in the per-segment encoding.
    pub occlusion_category_mask: CategoryMask,

    pub output_code_length: usize,
    pub dense_sample_count: usize,
    pub sub_segment_vote_count: usize,

    pub max_display_results: usize,
    pub longest_to_drop: usize,

    pub policy: SelectionPolicy,
    pub preference: Preference,

    /// Vertical offset applied to every sample before a ray is cast.
    pub sample_lift: f64,
    pub ray_distance: f64,
    pub segment_search_radius: f64,

    /// Seeds the detour sampling of [`Optimiser::run_seeded`](crate::Optimiser::run_seeded).
    pub seed: Option<u64>,
}

impl Default for OptimisationConfig {
    fn default() -> Self {
        OptimisationConfig {
            detour_count: 8,
            detour_radius: 50.0,
            snap_distance: 10.0,
            samples_per_path: 50,
            optimization_iterations: 5,
            shadow_tolerance: 0.05,
            road_category_mask: CategoryMask::ROADS,
            occlusion_category_mask: CategoryMask::OCCLUDERS,
            output_code_length: 10,
            dense_sample_count: 500,
            sub_segment_vote_count: 5,
            max_display_results: 30,
            longest_to_drop: 5,
            policy: SelectionPolicy::default(),
            preference: Preference::default(),
            sample_lift: 0.1,
            ray_distance: 1000.0,
            segment_search_radius: 0.5,
            seed: None,
        }
    }
}

impl OptimisationConfig {
    pub fn with_detours(mut self, count: usize, radius: f64) -> Self {
        self.detour_count = count;
        self.detour_radius = radius;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.optimization_iterations = iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.shadow_tolerance = tolerance;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples_per_path = samples;
        self
    }

    pub fn with_code_length(mut self, length: usize) -> Self {
        self.output_code_length = length;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations no optimisation can be run with.
    pub fn validate(&self) -> Result<(), OptimiseError> {
        let invalid = |reason: &str| Err(OptimiseError::InvalidConfig(reason.to_string()));

        if self.samples_per_path < 2 {
            return invalid("samples_per_path must be at least 2");
        }

        if self.dense_sample_count < 2 {
            return invalid("dense_sample_count must be at least 2");
        }

        if self.optimization_iterations == 0 {
            return invalid("optimization_iterations must be positive");
        }

        if self.output_code_length == 0 {
            return invalid("output_code_length must be positive");
        }

        if self.sub_segment_vote_count == 0 {
            return invalid("sub_segment_vote_count must be positive");
        }

        let distances = [
            ("shadow_tolerance", self.shadow_tolerance),
            ("detour_radius", self.detour_radius),
            ("snap_distance", self.snap_distance),
            ("sample_lift", self.sample_lift),
            ("ray_distance", self.ray_distance),
            ("segment_search_radius", self.segment_search_radius),
        ];

        if let Some((name, _)) = distances
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(OptimiseError::InvalidConfig(format!(
                "{name} must be finite and non-negative"
            )));
        }

        Ok(())
    }
}
