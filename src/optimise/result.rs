use crate::candidate::Candidate;
use crate::encoding::SegmentExposure;
use crate::geometry::Route;
use crate::selection::{DisplayRoute, RoundReport};

/// The outcome of a single optimisation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimisation<Id> {
    /// The selected route, with its raw shadow score and length.
    pub best: Candidate,

    /// One exposure code per road segment the best route crosses,
    /// in the order the route first reaches them.
    pub codes: Vec<SegmentExposure<Id>>,

    /// The colour-coded display set, present only under pooled selection.
    pub display: Option<Vec<DisplayRoute>>,

    pub rounds: Vec<RoundReport>,
}

impl<Id> Optimisation<Id> {
    #[inline]
    pub fn best_route(&self) -> &Route {
        &self.best.route
    }

    #[inline]
    pub fn best_score(&self) -> f64 {
        self.best.shadow_score
    }

    /// Pairs each segment with its code rendered as a binary string.
    pub fn segment_codes(&self) -> impl Iterator<Item = (&Id, String)> + '_ {
        self.codes
            .iter()
            .map(|exposure| (&exposure.segment, exposure.code.to_string()))
    }
}
