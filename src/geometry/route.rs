use crate::geometry::{Point3, RouteError};

/// Corners closer than this are treated as the same corner when joining legs.
const COINCIDENT_TOLERANCE: f64 = 1e-6;

/// Sums the distances between consecutive corners.
///
/// An empty or single-corner slice has no length.
pub fn path_length(corners: &[Point3]) -> f64 {
    corners
        .windows(2)
        .map(|pair| match pair {
            [a, b] => a.distance(*b),
            _ => 0.0,
        })
        .sum()
}

fn cumulative_lengths(corners: &[Point3]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(corners.windows(2).scan(0.0, |running, pair| {
            *running += pair[0].distance(pair[1]);
            Some(*running)
        }))
        .collect()
}

/// An arc-length parameterised polyline over the navigable surface.
///
/// A route is immutable once built. Alongside its corners it stores the
/// cumulative length at each corner, such that [`Route::point_at`] can walk
/// the table to interpolate any normalised position `t` along the route.
///
/// ### Example
/// ```rust
/// use shadepath::{Point3, Route};
///
/// let route = Route::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 10.0),
/// ]).unwrap();
///
/// assert_eq!(route.length(), 20.0);
/// assert_eq!(route.point_at(0.75), Point3::new(10.0, 0.0, 5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    corners: Vec<Point3>,
    cumulative: Vec<f64>,
}

impl Route {
    /// Builds a route from its corners, which must contain at least one point.
    /// Every coordinate must be finite.
    pub fn new(corners: Vec<Point3>) -> Result<Route, RouteError> {
        if corners.is_empty() {
            return Err(RouteError::NoCorners);
        }

        if let Some(index) = corners.iter().position(|corner| !corner.is_finite()) {
            return Err(RouteError::NonFinite { index });
        }

        Ok(Route {
            cumulative: cumulative_lengths(&corners),
            corners,
        })
    }

    /// Joins two legs sharing a corner into a single route.
    ///
    /// The first corner of `second` is dropped when it coincides with the last
    /// corner of `first`, so the combined polyline never repeats a corner.
    pub fn join(first: Route, second: Route) -> Route {
        let mut corners = first.corners;
        let mut rest = second.corners.into_iter().peekable();

        let shared = match (corners.last(), rest.peek()) {
            (Some(last), Some(next)) => last.coincides(*next, COINCIDENT_TOLERANCE),
            _ => false,
        };

        if shared {
            rest.next();
        }

        corners.extend(rest);

        // Both legs were non-empty, therefore so is the join.
        Route {
            cumulative: cumulative_lengths(&corners),
            corners,
        }
    }

    #[inline]
    pub fn corners(&self) -> &[Point3] {
        &self.corners
    }

    #[inline]
    pub fn start(&self) -> Point3 {
        self.corners[0]
    }

    #[inline]
    pub fn end(&self) -> Point3 {
        self.corners[self.corners.len() - 1]
    }

    /// Whether the route has enough corners to be travelled and scored.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.corners.len() >= 2
    }

    /// The total length of the route, the sum of its segment lengths.
    #[inline]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// The length of each segment between consecutive corners.
    pub fn segment_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.cumulative.windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Interpolates the position at normalised arc-length `t`.
    ///
    /// `t <= 0` yields the first corner and `t >= 1` the last. Otherwise the
    /// segment containing `t * length` is found and linearly interpolated.
    /// A route without length degenerates to its first corner.
    pub fn point_at(&self, t: f64) -> Point3 {
        let total = self.length();
        if t <= 0.0 || total <= f64::EPSILON {
            return self.start();
        }

        if t >= 1.0 {
            return self.end();
        }

        let target = t * total;

        // First corner whose cumulative length reaches the target.
        let upper = self
            .cumulative
            .partition_point(|&distance| distance < target)
            .clamp(1, self.corners.len() - 1);

        let lower = upper - 1;
        let span = self.cumulative[upper] - self.cumulative[lower];
        if span <= f64::EPSILON {
            return self.corners[upper];
        }

        let local = (target - self.cumulative[lower]) / span;
        self.corners[lower].lerp(self.corners[upper], local)
    }

    /// Samples `count` points evenly by arc-length, at `t = i / (count - 1)`.
    ///
    /// Returns the `(t, point)` pairs, a single sample sits at `t = 0`.
    pub fn samples(&self, count: usize) -> impl Iterator<Item = (f64, Point3)> + '_ {
        let denominator = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |index| {
            let t = index as f64 / denominator;
            (t, self.point_at(t))
        })
    }

    /// A key identifying the route's horizontal shape, with each
    /// corner's `(x, z)` rounded to the given number of decimals.
    ///
    /// Corners are finite, so only coordinates beyond `i64::MAX / 10^decimals`
    /// saturate.
    pub fn horizontal_key(&self, decimals: i32) -> Vec<(i64, i64)> {
        let scale = 10f64.powi(decimals);
        self.corners
            .iter()
            .map(|corner| {
                (
                    (corner.x * scale).round() as i64,
                    (corner.z * scale).round() as i64,
                )
            })
            .collect()
    }
}
