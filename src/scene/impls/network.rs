use crate::geometry::{Point3, Route};
use crate::scene::{NavigableSurface, NavigationError};

use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rstar::primitives::{GeomWithData, Line};
use rstar::RTree;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

type Street = GeomWithData<Line<[f64; 3]>, (NodeIndex, NodeIndex)>;

/// Waypoints are keyed at this many steps per world unit, merging nearby corners.
const WAYPOINT_PRECISION: f64 = 1_000.0;

/// A navigable network of straight streets between waypoints.
///
/// Any point along a street is navigable. Points are snapped onto the
/// network through an R-tree over the street lines, and routed between
/// using A* over the waypoint graph.
///
/// ### Example
/// ```rust
/// use shadepath::scene::impls::WaypointGraph;
/// use shadepath::{NavigableSurface, Point3};
///
/// let network = WaypointGraph::from_streets(
///     [vec![Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0)]],
///     1.0,
/// );
///
/// let route = network
///     .shortest_path(Point3::new(10.0, 0.0, 0.0), Point3::new(90.0, 0.0, 0.0))
///     .unwrap();
///
/// assert_eq!(route.length(), 80.0);
/// ```
pub struct WaypointGraph {
    graph: UnGraph<Point3, f64>,
    index: RTree<Street>,
    reach: f64,
}

impl Debug for WaypointGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WaypointGraph with Waypoints: {}, Streets: {}",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}

impl WaypointGraph {
    /// Builds the network from street polylines.
    ///
    /// Coincident corners across streets are merged so that streets
    /// meeting at a corner connect. `reach` is the furthest a route's
    /// start or end may lie from the network.
    pub fn from_streets(streets: impl IntoIterator<Item = Vec<Point3>>, reach: f64) -> Self {
        let mut graph = UnGraph::<Point3, f64>::default();
        let mut waypoints: FxHashMap<(i64, i64, i64), NodeIndex> = FxHashMap::default();

        let mut waypoint = |graph: &mut UnGraph<Point3, f64>, point: Point3| {
            let key = (
                (point.x * WAYPOINT_PRECISION).round() as i64,
                (point.y * WAYPOINT_PRECISION).round() as i64,
                (point.z * WAYPOINT_PRECISION).round() as i64,
            );

            *waypoints
                .entry(key)
                .or_insert_with(|| graph.add_node(point))
        };

        for street in streets {
            for pair in street.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (ia, ib) = (waypoint(&mut graph, a), waypoint(&mut graph, b));
                if ia != ib {
                    graph.update_edge(ia, ib, a.distance(b));
                }
            }
        }

        let index: RTree<Street> = RTree::bulk_load(
            graph
                .edge_indices()
                .filter_map(|edge| graph.edge_endpoints(edge))
                .map(|(a, b)| {
                    let line = Line::new(graph[a].into(), graph[b].into());
                    GeomWithData::new(line, (a, b))
                })
                .collect(),
        );

        WaypointGraph {
            graph,
            index,
            reach,
        }
    }

    pub fn waypoints(&self) -> usize {
        self.graph.node_count()
    }

    /// The street nearest to `point`, and the projection of the point onto it.
    fn nearest_street(&self, point: Point3) -> Option<(&Street, Point3)> {
        let query: [f64; 3] = point.into();
        let street = self.index.nearest_neighbor(&query)?;
        let projected = Point3::from(street.geom().nearest_point(&query));

        Some((street, projected))
    }

    /// Routes between two waypoints, returning the total cost and visited waypoints.
    fn route_waypoints(&self, from: NodeIndex, to: NodeIndex) -> Option<(f64, Vec<NodeIndex>)> {
        let goal = self.graph[to];

        petgraph::algo::astar(
            &self.graph,
            from,
            |node| node == to,
            |edge| *edge.weight(),
            |node| self.graph[node].distance(goal),
        )
    }
}

impl NavigableSurface for WaypointGraph {
    fn shortest_path(&self, start: Point3, end: Point3) -> Result<Route, NavigationError> {
        let unreachable = || NavigationError::Unreachable { start, end };

        let (entry, from) = self
            .nearest_street(start)
            .filter(|(_, projected)| projected.distance(start) <= self.reach)
            .ok_or_else(unreachable)?;

        let (exit, to) = self
            .nearest_street(end)
            .filter(|(_, projected)| projected.distance(end) <= self.reach)
            .ok_or_else(unreachable)?;

        let mut corners = if entry.data == exit.data {
            vec![from, to]
        } else {
            let (a, b) = entry.data;
            let (c, d) = exit.data;

            // Leave the entry street from either end, join the exit street at either end.
            let (_, waypoints) = [(a, c), (a, d), (b, c), (b, d)]
                .into_iter()
                .filter_map(|(source, target)| {
                    let (cost, path) = self.route_waypoints(source, target)?;
                    let total = from.distance(self.graph[source])
                        + cost
                        + self.graph[target].distance(to);
                    Some((total, path))
                })
                .min_by(|(x, _), (y, _)| x.total_cmp(y))
                .ok_or_else(unreachable)?;

            std::iter::once(from)
                .chain(waypoints.into_iter().map(|node| self.graph[node]))
                .chain(std::iter::once(to))
                .collect::<Vec<_>>()
        };

        corners.dedup_by(|a, b| a.coincides(*b, WAYPOINT_PRECISION.recip()));
        debug!("Routed {start:?} -> {end:?} through {} corners", corners.len());

        Route::new(corners).map_err(|_| unreachable())
    }

    fn snap(&self, point: Point3, max_distance: f64) -> Result<Point3, NavigationError> {
        self.nearest_street(point)
            .map(|(_, projected)| projected)
            .filter(|projected| projected.distance(point) <= max_distance)
            .ok_or(NavigationError::NotFound {
                point,
                max_distance,
            })
    }
}
