/// Round-loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Filling empty slots from the pile.
    #[default]
    Dealing,
    /// Waiting for claims, the turn deadline, or a display tick.
    Running,
    /// Draining the claim queue.
    Evaluating,
    /// Returning the whole board to the pile.
    Resetting,
    /// No legal triple remains in pile and board.
    Finished,
    /// Stopped by a shutdown request.
    Terminated,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Finished | Phase::Terminated)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Dealing => write!(f, "dealing"),
            Phase::Running => write!(f, "running"),
            Phase::Evaluating => write!(f, "evaluating"),
            Phase::Resetting => write!(f, "resetting"),
            Phase::Finished => write!(f, "finished"),
            Phase::Terminated => write!(f, "terminated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn only_terminal_phases_are_over() {
        assert!(Phase::Finished.is_over());
        assert!(Phase::Terminated.is_over());
        assert!(!Phase::default().is_over());
        assert!(!Phase::Resetting.is_over());
    }
}
