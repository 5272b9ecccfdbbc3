use std::fmt;

/// Marker shown in front of a completed task
pub const COMPLETE_MARKER: &str = "[X]";
/// Marker shown in front of an open task
pub const INCOMPLETE_MARKER: &str = "[  ]";

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Human-readable text, never empty
    pub description: String,
    /// Completion flag
    pub complete: bool,
}

impl Task {
    /// Create a new open task
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            complete: false,
        }
    }

    /// The checkbox marker for the current completion state
    pub fn marker(&self) -> &'static str {
        if self.complete {
            COMPLETE_MARKER
        } else {
            INCOMPLETE_MARKER
        }
    }
}

/// Display form used by the list view: marker, one space, description verbatim
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.description)
    }
}
