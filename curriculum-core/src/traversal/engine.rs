//! Traversal Engine
//!
//! Read-only neighbour, highlight and chain queries over a curriculum graph.
//! Results are ordered id sets: insertion order follows discovery, which
//! keeps output deterministic for a given graph.
//!
//! Unknown ids never error. They have no neighbours, and `highlight_set` /
//! `chain` return a set holding only the queried id.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::CurriculumError;
use crate::graph::CurriculumGraph;

/// Which way a chain walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards prerequisites.
    Up,

    /// Towards dependents.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

impl FromStr for Direction {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(CurriculumError::InvalidDirection(s.to_string())),
        }
    }
}

/// Direct prerequisites and dependents of a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Direct prerequisite ids.
    pub predecessors: IndexSet<String>,

    /// Direct dependent ids.
    pub successors: IndexSet<String>,
}

/// Traversal queries borrowing a graph.
#[derive(Debug, Clone, Copy)]
pub struct TraversalEngine<'g> {
    graph: &'g CurriculumGraph,
}

impl<'g> TraversalEngine<'g> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g CurriculumGraph) -> Self {
        Self { graph }
    }

    /// Direct prerequisites and dependents of `id`.
    pub fn neighbors_of(&self, id: &str) -> Neighbors {
        let Some(index) = self.graph.index_of(id) else {
            return Neighbors::default();
        };
        Neighbors {
            predecessors: self.ids(self.graph.prerequisite_indices(index)),
            successors: self.ids(self.graph.dependent_indices(index)),
        }
    }

    /// `id` together with its direct prerequisites and dependents.
    pub fn highlight_set(&self, id: &str) -> IndexSet<String> {
        let Neighbors {
            predecessors,
            successors,
        } = self.neighbors_of(id);

        let mut visible = IndexSet::with_capacity(1 + predecessors.len() + successors.len());
        visible.insert(id.to_string());
        visible.extend(predecessors);
        visible.extend(successors);
        visible
    }

    /// Breadth-first chain from `start`, at most `depth` steps in `direction`.
    ///
    /// Stops early once a step discovers nothing new. The result always
    /// contains `start`; `depth == 0` returns only `start`.
    pub fn chain(&self, start: &str, direction: Direction, depth: usize) -> IndexSet<String> {
        let Some(start_index) = self.graph.index_of(start) else {
            return IndexSet::from([start.to_string()]);
        };

        let mut visited = IndexSet::from([start_index]);
        let mut frontier = vec![start_index];

        for _ in 0..depth {
            let mut next = Vec::new();
            for &index in &frontier {
                for &neighbour in self.step(index, direction) {
                    if visited.insert(neighbour) {
                        next.push(neighbour);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        visited
            .into_iter()
            .map(|index| self.graph.id_at(index).to_string())
            .collect()
    }

    /// Everything `chain` can reach from `start` with unbounded depth.
    pub fn reachable(&self, start: &str, direction: Direction) -> IndexSet<String> {
        self.chain(start, direction, usize::MAX)
    }

    fn step(&self, index: usize, direction: Direction) -> &'g [usize] {
        match direction {
            Direction::Up => self.graph.prerequisite_indices(index),
            Direction::Down => self.graph.dependent_indices(index),
        }
    }

    fn ids(&self, indices: &[usize]) -> IndexSet<String> {
        indices
            .iter()
            .map(|&index| self.graph.id_at(index).to_string())
            .collect()
    }
}
