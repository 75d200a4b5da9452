//! Completion Tracker
//!
//! Tracks which courses a student has completed and derives every course's
//! status from that set.
//!
//! # State Machine
//!
//! Toggling a course moves it in or out of the completed set:
//!
//! - **completed → not completed**: the course is removed, then every
//!   completed course that depends on it (directly or transitively) is
//!   removed too.
//! - **available → completed**: the course is added.
//! - **locked → completed**: every missing transitive prerequisite is added
//!   first, deepest first, then the course itself.
//!
//! Both cascades keep a visited set, so shared ancestors and descendants are
//! processed once. After any toggle on an acyclic graph, no completed course
//! has an incomplete prerequisite.
//!
//! Toggling twice restores the toggled course's own membership only. Courses
//! pulled in or knocked out by a cascade stay where the cascade left them.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::graph::CurriculumGraph;

/// Derived completion status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// In the completed set.
    Completed,

    /// Not completed; every direct prerequisite is completed.
    Available,

    /// Not completed; some direct prerequisite is not.
    Locked,
}

impl Status {
    /// Lowercase name, as rendered.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Available => "available",
            Status::Locked => "locked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single toggle changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// The toggled course.
    pub course: String,

    /// Whether the toggled course is now completed.
    pub completed: bool,

    /// Courses newly marked completed, prerequisites before dependents.
    pub added: Vec<String>,

    /// Courses no longer completed, the toggled course first.
    pub removed: Vec<String>,
}

/// Status counts across the whole graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    /// Completed courses.
    pub completed: usize,

    /// Courses ready to take.
    pub available: usize,

    /// Courses blocked by prerequisites.
    pub locked: usize,
}

/// The completed-course set for one graph.
#[derive(Debug, Clone)]
pub struct CompletionTracker {
    graph: Arc<CurriculumGraph>,

    /// Completed course positions.
    completed: HashSet<usize>,
}

impl CompletionTracker {
    /// Create a tracker with nothing completed.
    pub fn new(graph: Arc<CurriculumGraph>) -> Self {
        Self {
            graph,
            completed: HashSet::new(),
        }
    }

    /// Rehydrate from externally stored ids.
    ///
    /// Each known id is marked completed along with its missing
    /// prerequisites, so the result is consistent even if the stored set was
    /// not. Unknown ids are skipped.
    pub fn with_completed<I, S>(graph: Arc<CurriculumGraph>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tracker = Self::new(graph);
        for id in ids {
            let id = id.as_ref();
            match tracker.graph.index_of(id) {
                Some(index) => {
                    tracker.mark(index);
                }
                None => warn!(id, "ignoring completed id that is not a known course"),
            }
        }
        debug!(completed = tracker.completed.len(), "rehydrated completion state");
        tracker
    }

    /// The graph this tracker derives statuses from.
    pub fn graph(&self) -> &CurriculumGraph {
        &self.graph
    }

    /// Status of a course. `None` for unknown ids.
    pub fn status(&self, id: &str) -> Option<Status> {
        self.graph.index_of(id).map(|index| self.status_at(index))
    }

    /// Whether a course is in the completed set.
    pub fn is_completed(&self, id: &str) -> bool {
        self.graph
            .index_of(id)
            .is_some_and(|index| self.completed.contains(&index))
    }

    /// Completed course ids in node order.
    pub fn completed(&self) -> Vec<&str> {
        (0..self.graph.len())
            .filter(|index| self.completed.contains(index))
            .map(|index| self.graph.id_at(index))
            .collect()
    }

    /// Status of every course, in node order.
    pub fn statuses(&self) -> IndexMap<String, Status> {
        (0..self.graph.len())
            .map(|index| (self.graph.id_at(index).to_string(), self.status_at(index)))
            .collect()
    }

    /// Count courses per status.
    pub fn summary(&self) -> CompletionSummary {
        let mut summary = CompletionSummary::default();
        for index in 0..self.graph.len() {
            match self.status_at(index) {
                Status::Completed => summary.completed += 1,
                Status::Available => summary.available += 1,
                Status::Locked => summary.locked += 1,
            }
        }
        summary
    }

    /// Whether every completed course has all its prerequisites completed.
    ///
    /// Always true after toggles on an acyclic graph.
    pub fn is_consistent(&self) -> bool {
        self.completed.iter().all(|&index| {
            self.graph
                .prerequisite_indices(index)
                .iter()
                .all(|prerequisite| self.completed.contains(prerequisite))
        })
    }

    /// Clear the completed set.
    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Flip a course between completed and not completed, cascading as
    /// described in the module docs. Unknown ids change nothing and return
    /// `None`.
    pub fn toggle(&mut self, id: &str) -> Option<ToggleOutcome> {
        let Some(index) = self.graph.index_of(id) else {
            warn!(id, "toggle on unknown course ignored");
            return None;
        };

        let outcome = if self.completed.contains(&index) {
            let removed = self.uncheck(index);
            ToggleOutcome {
                course: id.to_string(),
                completed: false,
                added: Vec::new(),
                removed: self.names(&removed),
            }
        } else {
            let added = self.mark(index);
            ToggleOutcome {
                course: id.to_string(),
                completed: true,
                added: self.names(&added),
                removed: Vec::new(),
            }
        };

        debug!(
            course = id,
            completed = outcome.completed,
            added = outcome.added.len(),
            removed = outcome.removed.len(),
            "toggled course"
        );
        Some(outcome)
    }

    fn status_at(&self, index: usize) -> Status {
        if self.completed.contains(&index) {
            Status::Completed
        } else if self
            .graph
            .prerequisite_indices(index)
            .iter()
            .all(|prerequisite| self.completed.contains(prerequisite))
        {
            Status::Available
        } else {
            Status::Locked
        }
    }

    /// Complete a course, first completing missing prerequisites if it is
    /// locked. Returns the newly added positions in completion order.
    fn mark(&mut self, index: usize) -> Vec<usize> {
        let mut added = Vec::new();
        if self.completed.contains(&index) {
            return added;
        }

        if self.status_at(index) == Status::Locked {
            let graph = Arc::clone(&self.graph);
            let mut visited = HashSet::from([index]);
            // (position, prerequisites already pushed)
            let mut stack = vec![(index, false)];

            while let Some((current, expanded)) = stack.pop() {
                if expanded {
                    if current != index && self.completed.insert(current) {
                        trace!(course = graph.id_at(current), "completing prerequisite");
                        added.push(current);
                    }
                    continue;
                }
                stack.push((current, true));
                for &prerequisite in graph.prerequisite_indices(current).iter().rev() {
                    if visited.insert(prerequisite) {
                        stack.push((prerequisite, false));
                    }
                }
            }
        }

        self.completed.insert(index);
        added.push(index);
        added
    }

    /// Remove a course and every completed transitive dependent. Returns the
    /// removed positions, the course first.
    fn uncheck(&mut self, index: usize) -> Vec<usize> {
        let graph = Arc::clone(&self.graph);
        self.completed.remove(&index);

        let mut removed = vec![index];
        let mut visited = HashSet::from([index]);
        let mut frontier = vec![index];

        while let Some(current) = frontier.pop() {
            for &dependent in graph.dependent_indices(current) {
                if visited.insert(dependent) && self.completed.remove(&dependent) {
                    trace!(course = graph.id_at(dependent), "unchecking dependent");
                    removed.push(dependent);
                    frontier.push(dependent);
                }
            }
        }
        removed
    }

    fn names(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&index| self.graph.id_at(index).to_string())
            .collect()
    }
}
