//! Graph Nodes and Links
//!
//! This module defines the course nodes and prerequisite links that make up a
//! curriculum graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single curriculum entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique, non-empty identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Scheduled semester. `0` marks an elective with no fixed column.
    pub semester: u32,

    /// Subject area, used by renderers for grouping and colour.
    pub area: String,
}

impl Course {
    /// Create a new course.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        semester: u32,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semester,
            area: area.into(),
        }
    }

    /// Whether this course is unscheduled.
    pub fn is_elective(&self) -> bool {
        self.semester == 0
    }
}

/// A prerequisite relation: `source` must be completed before `target`.
///
/// Links always hold ids. Resolution to node positions happens in the graph's
/// own index and never rewrites a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// The prerequisite course id.
    pub source: String,

    /// The course that requires `source`.
    pub target: String,
}

impl Link {
    /// Create a new link from a prerequisite to the course that requires it.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// A course listed as its own prerequisite.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_zero_is_elective() {
        assert!(Course::new("ART", "Art History", 0, "Other").is_elective());
        assert!(!Course::new("CALC1", "Calculus I", 1, "Core Math").is_elective());
    }

    #[test]
    fn link_display_and_self_loop() {
        let link = Link::new("CALC1", "CALC2");
        assert_eq!(link.to_string(), "CALC1 -> CALC2");
        assert!(!link.is_self_loop());
        assert!(Link::new("X", "X").is_self_loop());
    }
}
