use crate::candidate::Candidate;
use crate::geometry::Route;
use crate::selection::{rank, Color, Preference, RoundReport};

use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;

/// Routes are deduplicated on their corners rounded to this many decimals.
const DEDUP_DECIMALS: i32 = 2;

/// A route selected for display, with its assigned colour.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRoute {
    pub route: Route,
    pub shadow_score: f64,
    pub length: f64,
    pub color: Color,
}

/// Selection policy which pools every round's candidates.
///
/// No per-round filtering takes place. Once all rounds are pooled, the
/// candidates are ranked by score (descending) then length (ascending), and
/// the first is the best. For display, routes with matching corners
/// (to two decimals, horizontally) are deduplicated, keeping the
/// highest-ranked. The best is always kept, and from the rest the
/// [`longest_to_drop`](#field.longest_to_drop) longest are removed before capping the set at
/// [`max_results`](#field.max_results).
#[derive(Debug, Clone)]
pub struct PooledSelection {
    pub preference: Preference,
    pub longest_to_drop: usize,
    pub max_results: usize,

    pool: Vec<Candidate>,
    rounds: usize,
}

impl PooledSelection {
    pub fn new(preference: Preference, longest_to_drop: usize, max_results: usize) -> Self {
        PooledSelection {
            preference,
            longest_to_drop,
            max_results,
            pool: Vec::new(),
            rounds: 0,
        }
    }

    /// Adds a round's candidates to the pool.
    pub fn extend(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        self.pool.extend(candidates);
    }

    /// Pools a round's candidates, reporting whether its best now leads the pool.
    pub fn consider(&mut self, candidates: Vec<Candidate>) -> RoundReport {
        let round = self.rounds;
        self.rounds += 1;

        let order = rank(self.preference);
        let leader = candidates.iter().min_by(|a, b| order(a, b));

        let winner = leader.map(|candidate| (candidate.shadow_score, candidate.length));
        let promoted = match (leader, self.best()) {
            (Some(challenger), Some(incumbent)) => order(challenger, incumbent).is_lt(),
            (Some(_), None) => true,
            (None, _) => false,
        };

        debug!(
            "Round {round}: pooled {} candidates, {} in total",
            candidates.len(),
            self.pool.len() + candidates.len()
        );

        let report = RoundReport {
            round,
            candidates: candidates.len(),
            winner,
            promoted,
        };

        self.pool.extend(candidates);
        report
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// The best-ranked candidate of the pool.
    pub fn best(&self) -> Option<&Candidate> {
        let order = rank(self.preference);
        self.pool.iter().min_by(|a, b| order(a, b))
    }

    /// Ranks and trims the pool, returning the best candidate and the display set.
    ///
    /// The display set starts with the best route, in the highlight colour,
    /// and the remaining routes follow in rank order with evenly spaced hues.
    pub fn finish(self) -> Option<(Candidate, Vec<DisplayRoute>)> {
        let mut pool = self.pool;
        pool.sort_by(rank(self.preference));

        let mut unique = pool
            .into_iter()
            .unique_by(|candidate| candidate.route.horizontal_key(DEDUP_DECIMALS));

        let best = unique.next()?;
        let rest = unique.collect::<Vec<_>>();

        // The longest of the remainder are dropped, lowest-ranked first among equals.
        let dropped = rest
            .iter()
            .enumerate()
            .sorted_by(|(i, a), (j, b)| b.length.total_cmp(&a.length).then(j.cmp(i)))
            .take(self.longest_to_drop)
            .map(|(index, _)| index)
            .collect::<FxHashSet<_>>();

        let kept = rest
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !dropped.contains(index))
            .map(|(_, candidate)| candidate)
            .take(self.max_results.saturating_sub(1))
            .collect::<Vec<_>>();

        debug!(
            "Pooled selection kept {} of the deduplicated routes, best score={:.3}",
            kept.len() + 1,
            best.shadow_score
        );

        let colors = Color::spaced(kept.len());
        let display = std::iter::once(to_display(best.clone(), Color::HIGHLIGHT))
            .chain(
                kept.into_iter()
                    .zip(colors)
                    .map(|(candidate, color)| to_display(candidate, color)),
            )
            .collect();

        Some((best, display))
    }
}

fn to_display(candidate: Candidate, color: Color) -> DisplayRoute {
    DisplayRoute {
        route: candidate.route,
        shadow_score: candidate.shadow_score,
        length: candidate.length,
        color,
    }
}
