use super::*;
use crate::Position;
use crate::Score;

/// Outcome of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scores: Vec<Score>,
    pub winners: Vec<Position>,
    pub phase: Phase,
}

impl Summary {
    /// Every player sharing the top score wins. No players, no winners.
    pub fn winners(scores: &[Score]) -> Vec<Position> {
        let best = scores.iter().copied().max();
        scores
            .iter()
            .enumerate()
            .filter(|(_, s)| Some(**s) == best)
            .map(|(p, _)| p)
            .collect()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "game {} | scores {} | winners {}",
            self.phase,
            self.scores
                .iter()
                .enumerate()
                .map(|(p, s)| format!("P{}={}", p, s))
                .collect::<Vec<_>>()
                .join(" "),
            self.winners
                .iter()
                .map(|p| format!("P{}", p))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn single_winner() {
        assert_eq!(Summary::winners(&[1, 4, 2]), vec![1]);
    }
    #[test]
    fn ties_all_win() {
        assert_eq!(Summary::winners(&[3, 1, 3]), vec![0, 2]);
        assert_eq!(Summary::winners(&[0, 0]), vec![0, 1]);
    }
    #[test]
    fn nobody_playing() {
        assert!(Summary::winners(&[]).is_empty());
    }
}
