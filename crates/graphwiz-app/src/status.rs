use std::fmt;

const PATH_PREFIX: &str = "Traversal Path: ";

/// What the status bar shows: the visit order of the current run and a
/// short note about the last action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    path: String,
    message: String,
}

impl StatusLine {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `"Traversal Path: 0-1-2"`; just the prefix when nothing ran.
    pub fn text(&self) -> String {
        format!("{}{}", PATH_PREFIX, self.path)
    }

    pub(crate) fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub(crate) fn clear_path(&mut self) {
        self.path.clear();
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PATH_PREFIX, self.path)
    }
}
