use crate::geometry::Point3;
use crate::scene::{Category, CategoryMask, OcclusionOracle};

/// An axis-aligned box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occluder {
    pub min: Point3,
    pub max: Point3,
    pub category: Category,
}

impl Occluder {
    /// Creates an occluder spanning the two corners, in any order.
    pub fn new(a: Point3, b: Point3, category: Category) -> Self {
        Occluder {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
            category,
        }
    }

    /// The distance along a unit `direction` at which the ray enters the box.
    ///
    /// Uses the slab method. A ray starting inside the box does not
    /// enter it, and so does not hit.
    pub fn entry(&self, origin: Point3, direction: Point3) -> Option<f64> {
        let axes = [
            (origin.x, direction.x, self.min.x, self.max.x),
            (origin.y, direction.y, self.min.y, self.max.y),
            (origin.z, direction.z, self.min.z, self.max.z),
        ];

        let mut near = f64::NEG_INFINITY;
        let mut far = f64::INFINITY;

        for (o, d, lo, hi) in axes {
            if d.abs() <= f64::EPSILON {
                // Parallel to the slab, must already lie within it.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let (a, b) = ((lo - o) / d, (hi - o) / d);
            near = near.max(a.min(b));
            far = far.min(a.max(b));

            if near > far {
                return None;
            }
        }

        (near >= 0.0 && near <= far).then_some(near)
    }
}

/// A scene made from categorised axis-aligned boxes.
///
/// Suited to block-style city models and to tests. Queries are linear
/// in the number of boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxScene {
    occluders: Vec<Occluder>,
}

impl BoxScene {
    pub fn new(occluders: impl IntoIterator<Item = Occluder>) -> Self {
        BoxScene {
            occluders: occluders.into_iter().collect(),
        }
    }

    pub fn push(&mut self, occluder: Occluder) {
        self.occluders.push(occluder);
    }

    pub fn occluders(&self) -> &[Occluder] {
        &self.occluders
    }
}

impl OcclusionOracle for BoxScene {
    fn is_occluded(
        &self,
        origin: Point3,
        direction: Point3,
        max_distance: f64,
        mask: CategoryMask,
    ) -> bool {
        let Some(direction) = direction.normalized() else {
            return false;
        };

        self.occluders
            .iter()
            .filter(|occluder| mask.contains(occluder.category))
            .filter_map(|occluder| occluder.entry(origin, direction))
            .any(|distance| distance <= max_distance)
    }
}
