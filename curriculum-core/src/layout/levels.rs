//! Level Assignment
//!
//! Computes a longest-path layering of the prerequisite graph. A course's
//! level is its distance from the furthest root, which layout uses as a
//! vertical position hint.
//!
//! # Algorithm
//!
//! 1. Count each course's known prerequisites (its in-degree).
//! 2. Run Kahn's algorithm: dequeue zero in-degree courses in node order,
//!    decrementing their dependents' in-degrees.
//! 3. Walk the resulting topological order; a course's level is `0` without
//!    prerequisites, else one more than its highest prerequisite.
//!
//! Courses on or downstream of a cycle never reach zero in-degree. The
//! lenient [`assign_levels`] leaves them at level `0` and lists them as
//! unresolved; [`try_assign_levels`] turns them into an error.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CurriculumError, Result};
use crate::graph::CurriculumGraph;

/// A level per course, in node order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Levels {
    levels: IndexMap<String, usize>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    unresolved: Vec<String>,
}

impl Levels {
    /// Level of a course. `None` for unknown ids.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// `(id, level)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.levels.iter().map(|(id, &level)| (id.as_str(), level))
    }

    /// Highest assigned level, or `0` for an empty graph.
    pub fn max_level(&self) -> usize {
        self.levels.values().copied().max().unwrap_or(0)
    }

    /// Courses the topological order never reached, in node order.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Whether every course was layered.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether there are no courses.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Compute a topological order of course positions.
///
/// Returns positions in dependency order plus the per-course flag of whether
/// the course was reached.
fn topological_order(graph: &CurriculumGraph) -> (Vec<usize>, Vec<bool>) {
    let count = graph.len();
    let mut in_degree: Vec<usize> = (0..count)
        .map(|index| graph.prerequisite_indices(index).len())
        .collect();
    let mut queue: VecDeque<usize> = (0..count).filter(|&index| in_degree[index] == 0).collect();
    let mut order = Vec::with_capacity(count);
    let mut reached = vec![false; count];

    // Kahn's algorithm
    while let Some(index) = queue.pop_front() {
        order.push(index);
        reached[index] = true;

        for &dependent in graph.dependent_indices(index) {
            let degree = &mut in_degree[dependent];
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                queue.push_back(dependent);
            }
        }
    }

    (order, reached)
}

/// Assign a longest-path level to every course.
///
/// Never fails. Courses that cannot be ordered because of a cycle get level
/// `0` and are listed in [`Levels::unresolved`].
pub fn assign_levels(graph: &CurriculumGraph) -> Levels {
    let (order, reached) = topological_order(graph);
    let mut level = vec![0usize; graph.len()];

    for &index in &order {
        level[index] = graph
            .prerequisite_indices(index)
            .iter()
            .map(|&prerequisite| level[prerequisite] + 1)
            .max()
            .unwrap_or(0);
    }

    let unresolved: Vec<String> = reached
        .iter()
        .enumerate()
        .filter(|&(_, &done)| !done)
        .map(|(index, _)| graph.id_at(index).to_string())
        .collect();
    if !unresolved.is_empty() {
        warn!(
            count = unresolved.len(),
            courses = ?unresolved,
            "prerequisite cycle; placing unordered courses at level 0"
        );
    }

    let levels: IndexMap<String, usize> = graph
        .ids()
        .zip(level)
        .map(|(id, level)| (id.to_string(), level))
        .collect();
    debug!(courses = levels.len(), "assigned levels");

    Levels { levels, unresolved }
}

/// Assign levels, failing if any course sits on or below a cycle.
pub fn try_assign_levels(graph: &CurriculumGraph) -> Result<Levels> {
    let levels = assign_levels(graph);
    if levels.is_complete() {
        Ok(levels)
    } else {
        Err(CurriculumError::CyclicGraph {
            courses: levels.unresolved,
        })
    }
}
