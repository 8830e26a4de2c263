use crate::claims::Verdict;

/// Claims an agent submitted and the verdicts it received, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub claims: usize,
    pub verdicts: Vec<Verdict>,
}

impl Tally {
    pub fn points(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Point(_)))
    }
    pub fn penalties(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Penalty(_)))
    }
    pub fn stale(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Stale))
    }
    fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&Verdict) -> bool,
    {
        self.verdicts.iter().filter(|v| f(v)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[test]
    fn counts_by_kind() {
        let tally = Tally {
            claims: 4,
            verdicts: vec![
                Verdict::Point(Duration::ZERO),
                Verdict::Stale,
                Verdict::Penalty(Duration::ZERO),
                Verdict::Point(Duration::ZERO),
            ],
        };
        assert_eq!(tally.points(), 2);
        assert_eq!(tally.penalties(), 1);
        assert_eq!(tally.stale(), 1);
    }
}
