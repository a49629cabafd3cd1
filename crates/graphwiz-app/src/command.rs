use graphwiz_core::Algorithm;
use std::fmt;

/// Buttons on the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    RunBfs,
    RunDfs,
    Undo,
    /// Clears traversal colours and the path, keeps the graph.
    Reset,
    /// Empties graph and history.
    Clear,
    /// Cancels the running traversal and waits for it.
    Stop,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::RunBfs,
        Command::RunDfs,
        Command::Undo,
        Command::Reset,
        Command::Clear,
        Command::Stop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RunBfs => "Run BFS",
            Self::RunDfs => "Run DFS",
            Self::Undo => "Undo",
            Self::Reset => "Reset",
            Self::Clear => "Clear",
            Self::Stop => "Stop",
        }
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Self::RunBfs => Some(Algorithm::BreadthFirst),
            Self::RunDfs => Some(Algorithm::DepthFirst),
            _ => None,
        }
    }

    /// Whether the command may be issued while a traversal is running.
    pub fn allowed_while_traversing(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl From<Algorithm> for Command {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Self::RunBfs,
            Algorithm::DepthFirst => Self::RunDfs,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_stop_is_allowed_while_traversing() {
        let allowed: Vec<_> = Command::ALL
            .iter()
            .filter(|c| c.allowed_while_traversing())
            .collect();
        assert_eq!(allowed, vec![&Command::Stop]);
    }

    #[test]
    fn test_algorithm_round_trip() {
        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            assert_eq!(Command::from(algorithm).algorithm(), Some(algorithm));
        }
        assert_eq!(Command::Undo.algorithm(), None);
    }
}
