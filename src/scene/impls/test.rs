use crate::geometry::Point3;
use crate::scene::impls::*;
use crate::scene::{
    Category, CategoryMask, LightSource, NavigableSurface, NavigationError, OcclusionOracle,
    SegmentLocator,
};

use approx::assert_relative_eq;

fn ladder() -> WaypointGraph {
    // Two parallel streets joined at both ends.
    WaypointGraph::from_streets(
        [
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0)],
            vec![Point3::new(0.0, 0.0, 20.0), Point3::new(100.0, 0.0, 20.0)],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 20.0)],
            vec![Point3::new(100.0, 0.0, 0.0), Point3::new(100.0, 0.0, 20.0)],
        ],
        1.0,
    )
}

#[test_log::test]
fn network_merges_shared_corners() {
    assert_eq!(ladder().waypoints(), 4);
}

#[test_log::test]
fn network_routes_along_streets() {
    let network = ladder();

    let route = network
        .shortest_path(Point3::new(50.0, 0.0, 0.0), Point3::new(50.0, 0.0, 20.0))
        .expect("connected");

    // Either way around the ladder is 50 + 20 + 50.
    assert_relative_eq!(route.length(), 120.0);
    assert_eq!(route.corners().len(), 4);
    assert_eq!(route.start(), Point3::new(50.0, 0.0, 0.0));
    assert_eq!(route.end(), Point3::new(50.0, 0.0, 20.0));
}

#[test_log::test]
fn network_prefers_the_shorter_exit() {
    let network = ladder();

    let route = network
        .shortest_path(Point3::new(10.0, 0.0, 0.0), Point3::new(0.0, 0.0, 15.0))
        .expect("connected");

    assert_relative_eq!(route.length(), 25.0);
    assert_eq!(
        route.corners(),
        &[
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 15.0)
        ]
    );
}

#[test_log::test]
fn network_rejects_points_off_the_surface() {
    let network = ladder();
    let far = Point3::new(50.0, 0.0, 60.0);

    assert!(matches!(
        network.shortest_path(far, Point3::ZERO),
        Err(NavigationError::Unreachable { .. })
    ));

    assert!(matches!(
        network.snap(far, 5.0),
        Err(NavigationError::NotFound { .. })
    ));

    let snapped = network.snap(Point3::new(50.0, 0.0, 24.0), 5.0).expect("near street");
    assert_eq!(snapped, Point3::new(50.0, 0.0, 20.0));
}

#[test_log::test]
fn disconnected_streets_are_unreachable() {
    let network = WaypointGraph::from_streets(
        [
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
            vec![Point3::new(50.0, 0.0, 0.0), Point3::new(60.0, 0.0, 0.0)],
        ],
        1.0,
    );

    assert!(network
        .shortest_path(Point3::new(5.0, 0.0, 0.0), Point3::new(55.0, 0.0, 0.0))
        .is_err());
}

#[test_log::test]
fn boxes_respect_the_category_mask() {
    let scene = BoxScene::new([
        Occluder::new(
            Point3::new(-1.0, 5.0, -1.0),
            Point3::new(1.0, 6.0, 1.0),
            Category::Vegetation,
        ),
        Occluder::new(
            Point3::new(-50.0, -1.0, -50.0),
            Point3::new(50.0, 0.0, 50.0),
            Category::Ground,
        ),
    ]);

    let origin = Point3::new(0.0, 0.1, 0.0);

    assert!(scene.is_occluded(origin, Point3::UP, 100.0, CategoryMask::ALL));
    assert!(!scene.is_occluded(origin, Point3::UP, 100.0, CategoryMask::ROADS));
    assert!(!scene.is_occluded(origin, Point3::UP, 4.0, CategoryMask::ALL));

    // Looking down only meets the ground, which occluder masks exclude.
    assert!(scene.is_occluded(origin, -Point3::UP, 100.0, CategoryMask::ALL));
    assert!(!scene.is_occluded(origin, -Point3::UP, 100.0, CategoryMask::OCCLUDERS));
}

#[test_log::test]
fn boxes_miss_parallel_rays_outside_the_slab() {
    let occluder = Occluder::new(
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(50.0, 10.0, 3.0),
        Category::Building,
    );

    let towards = Point3::new(0.0, 0.2, 1.0).normalized().expect("non-zero");

    assert!(occluder.entry(Point3::new(50.0, 0.1, 0.0), towards).is_some());
    assert!(occluder.entry(Point3::new(50.5, 0.1, 0.0), towards).is_none());
    assert!(occluder.entry(Point3::new(25.0, 0.1, 0.0), -towards).is_none());
}

#[test_log::test]
fn segments_are_located_by_category() {
    let index = SegmentIndex::new(vec![
        RoadSegment::strip(
            "north",
            Point3::new(0.0, 0.0, 20.0),
            Point3::new(100.0, 0.0, 20.0),
            4.0,
        ),
        RoadSegment::strip(
            "south",
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(100.0, 0.0, 0.0),
            4.0,
        ),
    ]);

    let on_south = Point3::new(40.0, 0.5, 1.0);
    assert_eq!(index.locate(on_south, 0.5, CategoryMask::ROADS), Some("south"));
    assert_eq!(index.locate(on_south, 0.5, Category::Building.into()), None);

    // Between the two roads, only reachable with a generous radius.
    let between = Point3::new(40.0, 0.0, 10.0);
    assert_eq!(index.locate(between, 0.5, CategoryMask::ROADS), None);
    assert_eq!(index.locate(Point3::new(40.0, 0.0, 15.0), 4.0, CategoryMask::ROADS), Some("north"));
}

#[test]
fn segment_distance_is_horizontal() {
    let south = RoadSegment::strip(
        "south",
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(100.0, 0.0, 0.0),
        4.0,
    );

    // Inside the strip, at any height.
    assert_eq!(south.distance(Point3::new(40.0, 25.0, 1.5)), 0.0);

    // Beside the long edge, and beyond a corner.
    assert_relative_eq!(south.distance(Point3::new(40.0, 0.0, 3.0)), 1.0, epsilon = 1e-9);
    assert_relative_eq!(south.distance(Point3::new(-3.0, 0.0, -6.0)), 5.0, epsilon = 1e-9);
}

#[test_log::test]
fn sun_angles_convert_to_facing() {
    let east = DirectionalLight::from_sun(90.0, 30.0).expect("above horizon");
    let towards = east.towards().expect("has direction");

    assert_relative_eq!(towards.x, 30f64.to_radians().cos(), epsilon = 1e-12);
    assert_relative_eq!(towards.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(towards.z, 0.0, epsilon = 1e-12);

    assert!(DirectionalLight::from_sun(90.0, 0.0).is_none());

    let absent: Option<DirectionalLight> = None;
    assert_eq!(absent.towards(), None);
}
