//! Selection of the best candidate across optimisation rounds.
//!
//! Two policies are offered, which can produce different results on
//! identical input and so are never merged:
//!
//! - [`RunningBest`] filters each round to its near-optimal candidates,
//!   picks the shortest, and folds the winners into a single best route.
//! - [`PooledSelection`] ranks the candidates of every round together,
//!   and keeps a deduplicated, colour-coded set for display.

#[doc(hidden)]
pub mod color;
#[doc(hidden)]
pub mod pooled;
#[doc(hidden)]
pub mod running;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use pooled::{DisplayRoute, PooledSelection};
#[doc(inline)]
pub use running::{RoundReport, RunningBest, SCORE_EQUALITY};

use crate::candidate::Candidate;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};

/// Whether the traveller seeks shade or sunlight.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Maximise the fraction of the route in shadow.
    #[default]
    Shade,

    /// Maximise the fraction of the route in direct sunlight.
    Sun,
}

impl Preference {
    /// Converts a shadow score into the score to be maximised.
    #[inline]
    pub fn utility(self, shadow_score: f64) -> f64 {
        match self {
            Preference::Shade => shadow_score,
            Preference::Sun => 1.0 - shadow_score,
        }
    }
}

/// Orders candidates best-first: by utility descending, then length ascending.
pub fn rank(preference: Preference) -> impl Fn(&Candidate, &Candidate) -> Ordering {
    move |a, b| {
        b.utility(preference)
            .total_cmp(&a.utility(preference))
            .then(a.length.total_cmp(&b.length))
    }
}
