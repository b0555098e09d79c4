use crate::candidate::Candidate;
use crate::selection::Preference;

use log::debug;

/// Scores within this distance of one another are considered equal
/// when comparing a round winner against the running best.
pub const SCORE_EQUALITY: f64 = 0.001;

/// A summary of a single optimisation round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub round: usize,

    /// The number of scored candidates the round produced.
    pub candidates: usize,

    /// The round winner's shadow score and length, if the round produced any candidate.
    pub winner: Option<(f64, f64)>,

    /// Whether the round winner replaced the running best.
    pub promoted: bool,
}

/// Selection policy which folds round winners into a running best.
///
/// Each round is first filtered to the candidates whose score lies within
/// [`tolerance`](#field.tolerance) of the round's best. The shortest of these
/// wins the round. The winner replaces the running best if it scores higher by
/// at least [`SCORE_EQUALITY`]. Inside that window it must also be strictly
/// shorter, or no longer and strictly higher. A lower score never replaces the
/// running best, so the best score does not decrease from round to round.
///
/// The comparison is sequential, not a maximum over the whole pool, so the
/// result depends on the order in which rounds are offered.
#[derive(Debug, Clone)]
pub struct RunningBest {
    pub tolerance: f64,
    pub preference: Preference,

    best: Option<Candidate>,
    rounds: usize,
}

impl RunningBest {
    pub fn new(tolerance: f64, preference: Preference) -> Self {
        RunningBest {
            tolerance,
            preference,
            best: None,
            rounds: 0,
        }
    }

    /// Picks the shortest candidate among those within tolerance of the round's best score.
    ///
    /// Returns `None` for an empty round.
    pub fn round_winner(&self, candidates: Vec<Candidate>) -> Option<Candidate> {
        let preference = self.preference;
        let max = candidates
            .iter()
            .map(|candidate| candidate.utility(preference))
            .max_by(f64::total_cmp)?;

        candidates
            .into_iter()
            .filter(|candidate| candidate.utility(preference) >= max - self.tolerance)
            .min_by(|a, b| a.length.total_cmp(&b.length))
    }

    /// Offers a round winner, returning whether it replaced the running best.
    pub fn offer(&mut self, winner: Candidate) -> bool {
        let promote = match &self.best {
            None => true,
            Some(best) => {
                let (challenger, incumbent) = (
                    winner.utility(self.preference),
                    best.utility(self.preference),
                );

                let gain = challenger - incumbent;
                if gain < 0.0 {
                    false
                } else if gain < SCORE_EQUALITY {
                    winner.length < best.length || (winner.length <= best.length && gain > 0.0)
                } else {
                    true
                }
            }
        };

        if promote {
            self.best = Some(winner);
        }

        promote
    }

    /// Selects the round's winner and offers it to the running best.
    ///
    /// A round without candidates leaves the running best untouched.
    pub fn consider(&mut self, candidates: Vec<Candidate>) -> RoundReport {
        let round = self.rounds;
        self.rounds += 1;

        let count = candidates.len();
        let Some(winner) = self.round_winner(candidates) else {
            debug!("Round {round} produced no candidates");
            return RoundReport {
                round,
                candidates: 0,
                winner: None,
                promoted: false,
            };
        };

        let summary = (winner.shadow_score, winner.length);
        let promoted = self.offer(winner);

        debug!(
            "Round {round}: {count} candidates, winner score={:.3} length={:.2}, promoted={promoted}",
            summary.0, summary.1
        );

        RoundReport {
            round,
            candidates: count,
            winner: Some(summary),
            promoted,
        }
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }
}
