//! Synthetic scenes shared across tests.

use crate::geometry::Point3;
use crate::scene::impls::{BoxScene, DirectionalLight, Occluder, RoadSegment, SegmentIndex, WaypointGraph};
use crate::scene::{Category, SceneContext};

pub(crate) const START: Point3 = Point3::new(0.0, 0.0, 0.0);
pub(crate) const END: Point3 = Point3::new(100.0, 0.0, 0.0);

/// A light low in the sky, shining from `+z` towards `-z`.
pub(crate) fn low_light() -> DirectionalLight {
    DirectionalLight::new(Point3::new(0.0, -0.2, -1.0))
}

pub(crate) struct Fixture {
    pub network: WaypointGraph,
    pub boxes: BoxScene,
    pub segments: SegmentIndex<&'static str>,
    pub light: DirectionalLight,
}

impl Fixture {
    pub fn context(
        &self,
    ) -> SceneContext<'_, WaypointGraph, BoxScene, SegmentIndex<&'static str>, DirectionalLight>
    {
        SceneContext::new(&self.network, &self.boxes, &self.segments, &self.light)
    }
}

fn ground() -> [Occluder; 2] {
    [
        Occluder::new(
            Point3::new(-200.0, -1.0, -200.0),
            Point3::new(200.0, -0.05, 200.0),
            Category::Ground,
        ),
        Occluder::new(
            Point3::new(-2.0, -0.05, -2.0),
            Point3::new(102.0, 0.0, 22.0),
            Category::Road,
        ),
    ]
}

/// A single straight 100-unit street, lit from directly overhead.
pub(crate) fn straight_street() -> Fixture {
    Fixture {
        network: WaypointGraph::from_streets([vec![START, END]], 1.0),
        boxes: BoxScene::new(ground()),
        segments: SegmentIndex::new(vec![RoadSegment::strip("main", START, END, 4.0)]),
        light: DirectionalLight::overhead(),
    }
}

/// The straight street, with a wall shading exactly its first half under a low light.
pub(crate) fn half_shaded_street() -> Fixture {
    let mut boxes = BoxScene::new(ground());
    boxes.push(Occluder::new(
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(50.0, 10.0, 3.0),
        Category::Building,
    ));

    Fixture {
        light: low_light(),
        boxes,
        ..straight_street()
    }
}

/// Two parallel streets twenty units apart, joined at both ends.
///
/// The northern street runs alongside a low wall, and so is shaded under
/// the low light. The southern street, the direct route, is fully lit.
pub(crate) fn ladder() -> Fixture {
    let north_start = Point3::new(0.0, 0.0, 20.0);
    let north_end = Point3::new(100.0, 0.0, 20.0);

    let mut boxes = BoxScene::new(ground());
    boxes.push(Occluder::new(
        Point3::new(-5.0, 0.0, 22.0),
        Point3::new(105.0, 3.0, 23.0),
        Category::Building,
    ));

    Fixture {
        network: WaypointGraph::from_streets(
            [
                vec![START, END],
                vec![north_start, north_end],
                vec![START, north_start],
                vec![END, north_end],
            ],
            1.0,
        ),
        boxes,
        segments: SegmentIndex::new(vec![
            RoadSegment::strip("south", START, END, 4.0),
            RoadSegment::strip("north", north_start, north_end, 4.0),
            RoadSegment::strip("west", START, north_start, 4.0),
            RoadSegment::strip("east", END, north_end, 4.0),
        ]),
        light: low_light(),
    }
}
