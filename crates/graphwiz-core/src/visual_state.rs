use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-node display state. Ephemeral: reset before every traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualState {
    #[default]
    Unvisited,
    /// Start node of a breadth-first run.
    Frontier,
    Enqueued,
    Processing,
    Done,
    /// Pending edge source picked by the user.
    Selected,
}

impl VisualState {
    pub const ALL: [VisualState; 6] = [
        VisualState::Unvisited,
        VisualState::Frontier,
        VisualState::Enqueued,
        VisualState::Processing,
        VisualState::Done,
        VisualState::Selected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unvisited => "Unvisited",
            Self::Frontier => "Start",
            Self::Enqueued => "Enqueued",
            Self::Processing => "Processing",
            Self::Done => "Done",
            Self::Selected => "Selected",
        }
    }

    /// States a traversal can leave a node in.
    pub fn is_traversal_state(&self) -> bool {
        !matches!(self, Self::Unvisited | Self::Selected)
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unvisited() {
        assert_eq!(VisualState::default(), VisualState::Unvisited);
    }

    #[test]
    fn test_traversal_states() {
        assert!(VisualState::Processing.is_traversal_state());
        assert!(VisualState::Frontier.is_traversal_state());
        assert!(!VisualState::Selected.is_traversal_state());
        assert!(!VisualState::Unvisited.is_traversal_state());
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&VisualState::Enqueued).unwrap();
        assert_eq!(json, "\"Enqueued\"");
        let back: VisualState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VisualState::Enqueued);
    }
}
