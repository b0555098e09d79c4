use crate::encoding::*;
use crate::fixtures::{self, END, START};
use crate::geometry::{Point3, Route};
use crate::scene::impls::DirectionalLight;
use crate::scene::{CategoryMask, SegmentLocator};

use approx::assert_relative_eq;

fn direct() -> Route {
    Route::new(vec![START, END]).expect("route")
}

#[test_log::test]
fn lit_street_encodes_to_zeros() {
    let fixture = fixtures::straight_street();
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    let exposures = encoder.encode(&direct());
    assert_eq!(exposures.len(), 1);

    let main = &exposures[0];
    assert_eq!(main.segment, "main");
    assert_eq!(main.code.to_string(), "0000000000");
    assert_relative_eq!(main.interval.start, 0.0);
    assert_relative_eq!(main.interval.end, 1.0);
}

#[test_log::test]
fn half_shaded_street_encodes_leading_ones() {
    let fixture = fixtures::half_shaded_street();
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    let exposures = encoder.encode(&direct());
    assert_eq!(exposures.len(), 1);
    assert_eq!(exposures[0].code.to_string(), "1111100000");
    assert_eq!(exposures[0].code.shaded(), 5);
}

#[test_log::test]
fn codes_have_the_configured_length() {
    let fixture = fixtures::half_shaded_street();
    let mut encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);
    encoder.code_length = 7;

    for exposure in encoder.encode(&direct()) {
        let code = exposure.code.to_string();
        assert_eq!(code.len(), 7);
        assert!(code.chars().all(|symbol| symbol == '0' || symbol == '1'));
    }
}

#[test_log::test]
fn evenly_split_votes_are_lit() {
    let fixture = fixtures::half_shaded_street();
    let mut encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    // Votes at x = 0, 33.3, 66.7 and 100: two shaded, two lit.
    encoder.code_length = 1;
    encoder.votes = 4;
    assert_eq!(encoder.encode(&direct())[0].code.to_string(), "0");

    // Votes at x = 0, 50 and 100, the wall's far edge included.
    encoder.votes = 3;
    assert_eq!(encoder.encode(&direct())[0].code.to_string(), "1");
}

#[test_log::test]
fn single_vote_sits_at_the_midpoint() {
    let fixture = fixtures::half_shaded_street();
    let mut encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);
    encoder.code_length = 2;
    encoder.votes = 1;

    assert_eq!(encoder.encode(&direct())[0].code.to_string(), "10");
}

#[test_log::test]
fn ground_hits_are_not_shade() {
    let fixture = fixtures::straight_street();

    // Shining upwards, so the path back to the light passes through the road.
    let light = DirectionalLight::new(Point3::UP);
    let mut encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &light);
    assert_eq!(encoder.encode(&direct())[0].code.to_string(), "0000000000");

    encoder.occlusion_mask = CategoryMask::ALL;
    assert_eq!(encoder.encode(&direct())[0].code.to_string(), "1111111111");
}

#[test_log::test]
fn missing_light_still_reports_segments() {
    let fixture = fixtures::half_shaded_street();
    let light: Option<DirectionalLight> = None;
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &light);

    let exposures = encoder.encode(&direct());
    assert_eq!(exposures.len(), 1);
    assert_eq!(exposures[0].code.to_string(), "0000000000");
}

#[test_log::test]
fn only_crossed_segments_are_reported() {
    let fixture = fixtures::ladder();
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    let direct = encoder.encode(&direct());
    assert_eq!(
        direct.iter().map(|exposure| exposure.segment).collect::<Vec<_>>(),
        vec!["south"]
    );

    let detour = Route::new(vec![
        START,
        Point3::new(0.0, 0.0, 20.0),
        Point3::new(100.0, 0.0, 20.0),
        END,
    ])
    .expect("route");

    let segments = encoder
        .encode(&detour)
        .into_iter()
        .map(|exposure| exposure.segment)
        .collect::<Vec<_>>();

    // Shared corners resolve to the first segment, so the route starts on the south street.
    assert_eq!(segments, vec!["south", "west", "north", "east"]);

    let away = Route::new(vec![Point3::new(0.0, 0.0, 60.0), Point3::new(100.0, 0.0, 60.0)])
        .expect("route");
    assert!(encoder.encode(&away).is_empty());
}

#[test_log::test]
fn discovery_keeps_first_seen_order() {
    let fixture = fixtures::ladder();
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    let reversed = Route::new(vec![
        END,
        Point3::new(100.0, 0.0, 20.0),
        Point3::new(0.0, 0.0, 20.0),
        START,
    ])
    .expect("route");

    let intervals = encoder.discover(&reversed);
    let order = intervals.keys().copied().collect::<Vec<_>>();
    assert_eq!(order, vec!["south", "east", "north", "west"]);

    let north = intervals["north"];
    assert!(north.start > 0.0 && north.end < 1.0);
    assert!(north.start < north.end);
}

#[test_log::test]
fn untraversable_routes_have_no_segments() {
    let fixture = fixtures::straight_street();
    let encoder = SegmentEncoder::new(&fixture.boxes, &fixture.segments, &fixture.light);

    let single = Route::new(vec![START]).expect("route");
    assert!(encoder.encode(&single).is_empty());
}

/// Matches a narrow band around the middle of the street.
struct Midpoint;

impl SegmentLocator for Midpoint {
    type Id = u32;

    fn locate(&self, point: Point3, _: f64, _: CategoryMask) -> Option<u32> {
        ((point.x - 50.0).abs() < 1.0).then_some(7)
    }
}

#[test_log::test]
fn single_observations_are_widened() {
    let fixture = fixtures::half_shaded_street();
    let mut encoder = SegmentEncoder::new(&fixture.boxes, &Midpoint, &fixture.light);
    encoder.dense_samples = 3;

    let exposures = encoder.encode(&direct());
    assert_eq!(exposures.len(), 1);

    let exposure = &exposures[0];
    assert_eq!(exposure.segment, 7);
    assert_relative_eq!(exposure.interval.start, 0.5);
    assert!(exposure.interval.end > exposure.interval.start);
    assert_eq!(exposure.code.len(), 10);
}

#[test]
fn interval_parts_and_votes() {
    let mut interval = CoverageInterval::at(0.4);
    assert!(interval.is_degenerate());

    interval.observe(0.2);
    interval.observe(0.6);
    interval.observe(0.3);
    assert_relative_eq!(interval.start, 0.2);
    assert_relative_eq!(interval.end, 0.6);
    assert_eq!(interval.widened(0.5), interval);

    let (a, b) = interval.part(3, 4);
    assert_relative_eq!(a, 0.5, epsilon = 1e-12);
    assert_relative_eq!(b, 0.6, epsilon = 1e-12);

    let votes = CoverageInterval::votes(0.0, 1.0, 5).collect::<Vec<_>>();
    assert_eq!(votes, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(CoverageInterval::votes(0.2, 0.4, 1).collect::<Vec<_>>().len(), 1);
    assert_relative_eq!(CoverageInterval::votes(0.2, 0.4, 1).sum::<f64>(), 0.3);
}

#[test]
fn codes_display_as_binary() {
    let code = [true, false, false, true].into_iter().collect::<ExposureCode>();
    assert_eq!(code.to_string(), "1001");
    assert_eq!(code.len(), 4);
    assert!(ExposureCode::default().is_empty());
}
