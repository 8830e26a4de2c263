use std::time::Duration;

/// Referee's answer to a claim. Carries the freeze the claimant must
/// serve, so no other party ever writes a player's freeze state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Legal triple: score awarded, cards replaced.
    Point(Duration),
    /// Illegal triple: no score, board untouched.
    Penalty(Duration),
    /// The board changed under the claim before it was examined.
    Stale,
}

impl Verdict {
    pub fn freeze(&self) -> Duration {
        match self {
            Verdict::Point(d) | Verdict::Penalty(d) => *d,
            Verdict::Stale => Duration::ZERO,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Point(d) => write!(f, "point (freeze {}ms)", d.as_millis()),
            Verdict::Penalty(d) => write!(f, "penalty (freeze {}ms)", d.as_millis()),
            Verdict::Stale => write!(f, "stale"),
        }
    }
}
