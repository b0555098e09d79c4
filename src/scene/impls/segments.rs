use crate::geometry::Point3;
use crate::scene::{Category, CategoryMask, SegmentLocator};

use geo::{coord, BoundingRect, Distance, Euclidean, Polygon};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use std::fmt::Debug;
use std::hash::Hash;

type Footprint = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// A ground segment, outlined in the horizontal `(x, z)` plane.
#[derive(Debug, Clone)]
pub struct RoadSegment<Id> {
    pub id: Id,
    pub category: Category,
    pub outline: Polygon<f64>,
}

impl<Id> RoadSegment<Id> {
    pub fn new(id: Id, category: Category, outline: Polygon<f64>) -> Self {
        RoadSegment {
            id,
            category,
            outline,
        }
    }

    /// A road strip of the given `width`, centred on the line from `a` to `b`.
    pub fn strip(id: Id, a: Point3, b: Point3, width: f64) -> Self {
        let (dx, dz) = (b.x - a.x, b.z - a.z);
        let length = dx.hypot(dz).max(f64::EPSILON);

        // Half-width offset perpendicular to the centre line.
        let (ox, oz) = (-dz / length * width / 2.0, dx / length * width / 2.0);

        let outline = Polygon::new(
            vec![
                coord! { x: a.x + ox, y: a.z + oz },
                coord! { x: b.x + ox, y: b.z + oz },
                coord! { x: b.x - ox, y: b.z - oz },
                coord! { x: a.x - ox, y: a.z - oz },
            ]
            .into(),
            vec![],
        );

        RoadSegment::new(id, Category::Road, outline)
    }

    /// The horizontal distance from `point` to the segment, zero when inside it.
    pub fn distance(&self, point: Point3) -> f64 {
        Euclidean.distance(&point.horizontal(), &self.outline)
    }
}

/// An R-tree index of ground segments for point lookup.
///
/// Lookups are two-dimensional: a point's height is ignored.
pub struct SegmentIndex<Id> {
    segments: Vec<RoadSegment<Id>>,
    tree: RTree<Footprint>,
}

impl<Id> SegmentIndex<Id> {
    pub fn new(segments: Vec<RoadSegment<Id>>) -> Self {
        let footprints = segments
            .iter()
            .enumerate()
            .filter_map(|(position, segment)| {
                let rect = segment.outline.bounding_rect()?;
                let envelope = Rectangle::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                );
                Some(GeomWithData::new(envelope, position))
            })
            .collect::<Vec<_>>();

        SegmentIndex {
            segments,
            tree: RTree::bulk_load(footprints),
        }
    }

    pub fn segments(&self) -> &[RoadSegment<Id>] {
        &self.segments
    }
}

impl<Id> SegmentLocator for SegmentIndex<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    type Id = Id;

    fn locate(&self, point: Point3, search_radius: f64, mask: CategoryMask) -> Option<Id> {
        let radius = search_radius.max(0.0);
        let envelope = AABB::from_corners(
            [point.x - radius, point.z - radius],
            [point.x + radius, point.z + radius],
        );

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|footprint| (footprint.data, &self.segments[footprint.data]))
            .filter(|(_, segment)| mask.contains(segment.category))
            .map(|(position, segment)| (segment.distance(point), position, segment))
            .filter(|(distance, _, _)| *distance <= radius)
            .min_by(|(a, i, _), (b, j, _)| a.total_cmp(b).then(i.cmp(j)))
            .map(|(_, _, segment)| segment.id.clone())
    }
}
