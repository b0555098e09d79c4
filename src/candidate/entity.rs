use crate::geometry::{path_length, Route};
use crate::selection::Preference;

/// A route alongside its shadow coverage score and length.
///
/// Candidates are produced by scoring the routes of a single optimisation
/// round, and are not modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub route: Route,

    /// The fraction of sampled positions along the route which are
    /// occluded from the light, in `[0, 1]`.
    pub shadow_score: f64,

    /// The summative length of the route between consecutive corners.
    pub length: f64,
}

impl Candidate {
    pub fn new(route: Route, shadow_score: f64) -> Self {
        let length = path_length(route.corners());

        Candidate {
            route,
            shadow_score,
            length,
        }
    }

    /// The score a selector maximises, given the traveller's preference.
    #[inline]
    pub fn utility(&self, preference: Preference) -> f64 {
        preference.utility(self.shadow_score)
    }
}
