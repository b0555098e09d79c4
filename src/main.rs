use log::info;
use shadepath::optimise::SelectionPolicy;
use shadepath::scene::impls::{
    BoxScene, DirectionalLight, Occluder, RoadSegment, SegmentIndex, WaypointGraph,
};
use shadepath::selection::Preference;
use shadepath::{Category, OptimisationConfig, Optimiser, Point3, SceneContext};

/// Two parallel streets, the northern one lined by a terrace of buildings.
fn scene() -> (WaypointGraph, BoxScene, SegmentIndex<&'static str>) {
    let sw = Point3::new(0.0, 0.0, 0.0);
    let se = Point3::new(120.0, 0.0, 0.0);
    let nw = Point3::new(0.0, 0.0, 25.0);
    let ne = Point3::new(120.0, 0.0, 25.0);

    let network = WaypointGraph::from_streets(
        [vec![sw, se], vec![nw, ne], vec![sw, nw], vec![se, ne]],
        1.0,
    );

    let mut scene = BoxScene::new([Occluder::new(
        Point3::new(-50.0, -1.0, -50.0),
        Point3::new(170.0, 0.0, 75.0),
        Category::Ground,
    )]);

    for block in 0..4 {
        let x = block as f64 * 32.0;
        scene.push(Occluder::new(
            Point3::new(x, 0.0, 28.0),
            Point3::new(x + 24.0, 12.0, 40.0),
            Category::Building,
        ));
    }

    scene.push(Occluder::new(
        Point3::new(55.0, 2.0, -6.0),
        Point3::new(65.0, 8.0, -4.0),
        Category::Vegetation,
    ));

    let segments = SegmentIndex::new(vec![
        RoadSegment::strip("high_street", sw, se, 5.0),
        RoadSegment::strip("terrace_row", nw, ne, 5.0),
        RoadSegment::strip("west_lane", sw, nw, 5.0),
        RoadSegment::strip("east_lane", se, ne, 5.0),
    ]);

    (network, scene, segments)
}

fn main() -> shadepath::Result<()> {
    shadepath::util::init_logger();

    let (network, scene, segments) = scene();
    let light = DirectionalLight::from_sun(0.0, 25.0);
    let context = SceneContext::new(&network, &scene, &segments, &light);

    let (start, end) = (Point3::new(0.0, 0.0, 0.0), Point3::new(120.0, 0.0, 0.0));

    for (policy, preference) in [
        (SelectionPolicy::RunningBest, Preference::Shade),
        (SelectionPolicy::Pooled, Preference::Shade),
        (SelectionPolicy::RunningBest, Preference::Sun),
    ] {
        let config = OptimisationConfig::default()
            .with_detours(12, 40.0)
            .with_policy(policy)
            .with_preference(preference)
            .with_seed(2024);

        let result = Optimiser::new(context, config).run_seeded(start, end)?;
        info!("{policy} / {preference}: {} rounds", result.rounds.len());

        println!(
            "[{policy}, {preference}] shadow score {:.3}, length {:.1}, {} corners",
            result.best_score(),
            result.best.length,
            result.best_route().corners().len()
        );

        for (segment, code) in result.segment_codes() {
            println!("  {segment:<12} {code}");
        }

        if let Some(display) = &result.display {
            println!("  {} routes in the display set", display.len());
        }
    }

    Ok(())
}
