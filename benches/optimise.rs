use criterion::criterion_main;
use shadepath::optimise::SelectionPolicy;
use shadepath::scene::impls::{
    BoxScene, DirectionalLight, Occluder, RoadSegment, SegmentIndex, WaypointGraph,
};
use shadepath::{Category, OptimisationConfig, Optimiser, Point3, SceneContext};

struct OptimiseScenario {
    name: &'static str,
    policy: SelectionPolicy,
    detours: usize,
}

const OPTIMISE_CASES: [OptimiseScenario; 3] = [
    OptimiseScenario {
        name: "DIRECT_ONLY",
        policy: SelectionPolicy::RunningBest,
        detours: 0,
    },
    OptimiseScenario {
        name: "RUNNING_BEST",
        policy: SelectionPolicy::RunningBest,
        detours: 8,
    },
    OptimiseScenario {
        name: "POOLED",
        policy: SelectionPolicy::Pooled,
        detours: 8,
    },
];

/// A grid of streets every 20 units, with a building in every block.
fn grid(blocks: usize) -> (WaypointGraph, BoxScene, SegmentIndex<(usize, usize, bool)>) {
    let at = |i: usize, j: usize| Point3::new(i as f64 * 20.0, 0.0, j as f64 * 20.0);

    let mut streets = Vec::new();
    let mut segments = Vec::new();
    let mut scene = BoxScene::default();

    for i in 0..=blocks {
        for j in 0..=blocks {
            if i < blocks {
                streets.push(vec![at(i, j), at(i + 1, j)]);
                segments.push(RoadSegment::strip((i, j, true), at(i, j), at(i + 1, j), 4.0));
            }

            if j < blocks {
                streets.push(vec![at(i, j), at(i, j + 1)]);
                segments.push(RoadSegment::strip((i, j, false), at(i, j), at(i, j + 1), 4.0));
            }

            if i < blocks && j < blocks {
                let height = 4.0 + ((i * 7 + j * 3) % 5) as f64 * 3.0;
                scene.push(Occluder::new(
                    at(i, j) + Point3::new(4.0, 0.0, 4.0),
                    at(i + 1, j + 1) + Point3::new(-4.0, height, -4.0),
                    Category::Building,
                ));
            }
        }
    }

    (
        WaypointGraph::from_streets(streets, 1.0),
        scene,
        SegmentIndex::new(segments),
    )
}

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("optimise");
    group.significance_level(0.1).sample_size(30);

    let (network, scene, segments) = grid(8);
    let light = DirectionalLight::from_sun(135.0, 35.0);
    let context = SceneContext::new(&network, &scene, &segments, &light);

    let (start, end) = (Point3::new(0.0, 0.0, 0.0), Point3::new(160.0, 0.0, 160.0));

    OPTIMISE_CASES.into_iter().for_each(|sc| {
        let config = OptimisationConfig::default()
            .with_detours(sc.detours, 60.0)
            .with_policy(sc.policy)
            .with_seed(7);

        let optimiser = Optimiser::new(context, config);

        group.bench_function(format!("optimise: {}", sc.name), |b| {
            b.iter(|| {
                let result = optimiser
                    .run_seeded(start, end)
                    .expect("Optimisation must find a route");

                assert!(!result.codes.is_empty());
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
