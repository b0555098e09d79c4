use serde::{Deserialize, Serialize};

/// The span of route parameter `t` over which a segment was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageInterval {
    pub start: f64,
    pub end: f64,
}

impl CoverageInterval {
    /// An interval covering the single observation `t`.
    pub fn at(t: f64) -> Self {
        CoverageInterval { start: t, end: t }
    }

    /// Grows the interval to include the observation `t`.
    pub fn observe(&mut self, t: f64) {
        self.start = self.start.min(t);
        self.end = self.end.max(t);
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    /// Returns the interval with its end pushed out by `epsilon` if it has no span.
    pub fn widened(self, epsilon: f64) -> Self {
        if self.is_degenerate() {
            CoverageInterval {
                start: self.start,
                end: self.start + epsilon,
            }
        } else {
            self
        }
    }

    /// The bounds of the `index`-th of `count` equal sub-intervals.
    pub fn part(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.span() / count.max(1) as f64;
        let start = self.start + width * index as f64;
        (start, start + width)
    }

    /// `votes` positions evenly spread over `[a, b]`, both ends included.
    ///
    /// A single vote sits at the midpoint.
    pub fn votes(a: f64, b: f64, votes: usize) -> impl Iterator<Item = f64> {
        (0..votes).map(move |index| match votes {
            1 => (a + b) / 2.0,
            _ => a + (b - a) * index as f64 / (votes - 1) as f64,
        })
    }
}
