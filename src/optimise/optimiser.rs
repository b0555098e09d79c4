use crate::candidate::{Candidate, CandidateGenerator};
use crate::encoding::SegmentEncoder;
use crate::geometry::Point3;
use crate::optimise::{Optimisation, OptimisationConfig, OptimiseError, SelectionPolicy};
use crate::scene::{LightSource, NavigableSurface, OcclusionOracle, SceneContext, SegmentLocator};
use crate::scoring::ExposureScorer;
use crate::selection::{PooledSelection, RunningBest};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Runs optimisations against a borrowed scene.
///
/// ### Example
///
/// ```rust
/// use shadepath::scene::impls::{BoxScene, DirectionalLight, RoadSegment, SegmentIndex, WaypointGraph};
/// use shadepath::{OptimisationConfig, Optimiser, Point3, SceneContext};
///
/// let (start, end) = (Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0));
///
/// let network = WaypointGraph::from_streets([vec![start, end]], 1.0);
/// let segments = SegmentIndex::new(vec![RoadSegment::strip("main", start, end, 4.0)]);
/// let scene = BoxScene::default();
/// let light = DirectionalLight::overhead();
///
/// let context = SceneContext::new(&network, &scene, &segments, &light);
/// let optimiser = Optimiser::new(context, OptimisationConfig::default().with_seed(1));
///
/// let result = optimiser.run_seeded(start, end).unwrap();
/// assert_eq!(result.best_score(), 0.0);
/// assert_eq!(result.codes[0].code.to_string(), "0000000000");
/// ```
pub struct Optimiser<'a, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    pub context: SceneContext<'a, N, O, S, L>,
    pub config: OptimisationConfig,
}

impl<'a, N, O, S, L> Optimiser<'a, N, O, S, L>
where
    N: NavigableSurface,
    O: OcclusionOracle,
    S: SegmentLocator,
    L: LightSource,
{
    pub fn new(context: SceneContext<'a, N, O, S, L>, config: OptimisationConfig) -> Self {
        Optimiser { context, config }
    }

    /// Runs with an RNG seeded from [`OptimisationConfig::seed`],
    /// or from the thread-local generator when unset.
    pub fn run_seeded(
        &self,
        start: Point3,
        end: Point3,
    ) -> Result<Optimisation<S::Id>, OptimiseError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        self.run(start, end, &mut rng)
    }

    /// Finds the route from `start` to `end` best matching the configured preference.
    ///
    /// Returns [`OptimiseError::EmptyCandidatePool`] when no round produced a
    /// usable route, and [`OptimiseError::InvalidConfig`] before doing any work
    /// should the configuration be unusable.
    pub fn run<R>(
        &self,
        start: Point3,
        end: Point3,
        rng: &mut R,
    ) -> Result<Optimisation<S::Id>, OptimiseError>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;

        let config = &self.config;
        let generator = CandidateGenerator::from_config(self.context.surface, config);
        let scorer = ExposureScorer::from_config(self.context.oracle, self.context.light, config);

        let mut running = RunningBest::new(config.shadow_tolerance, config.preference);
        let mut pooled = PooledSelection::new(
            config.preference,
            config.longest_to_drop,
            config.max_display_results,
        );

        let rounds = (0..config.optimization_iterations)
            .map(|_| {
                let candidates = generator
                    .generate(start, end, rng)
                    .into_iter()
                    .map(|route| {
                        let score = scorer.score(&route);
                        Candidate::new(route, score)
                    })
                    .collect::<Vec<_>>();

                match config.policy {
                    SelectionPolicy::RunningBest => running.consider(candidates),
                    SelectionPolicy::Pooled => pooled.consider(candidates),
                }
            })
            .collect::<Vec<_>>();

        let selected = match config.policy {
            SelectionPolicy::RunningBest => running.into_best().map(|best| (best, None)),
            SelectionPolicy::Pooled => pooled
                .finish()
                .map(|(best, display)| (best, Some(display))),
        };

        let Some((best, display)) = selected else {
            warn!(
                "No viable path from {start:?} to {end:?} after {} rounds",
                rounds.len()
            );
            return Err(OptimiseError::EmptyCandidatePool {
                rounds: rounds.len(),
            });
        };

        let encoder = SegmentEncoder::from_config(
            self.context.oracle,
            self.context.locator,
            self.context.light,
            config,
        );
        let codes = encoder.encode(&best.route);

        info!(
            "Selected route with shadow score {:.3} and length {:.2} under {} selection",
            best.shadow_score, best.length, config.policy
        );
        debug!("Route crosses {} segments", codes.len());

        Ok(Optimisation {
            best,
            codes,
            display,
            rounds,
        })
    }
}
