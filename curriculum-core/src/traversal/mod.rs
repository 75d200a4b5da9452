//! Graph Traversal
//!
//! Neighbour, highlight and bounded ancestor/descendant queries, plus the
//! course search used to pick a focus.
//!
//! All queries are pure reads over a [`CurriculumGraph`](crate::graph::CurriculumGraph).
//! They walk the resolved index only, so links naming unknown courses never
//! take part.

mod engine;
mod search;

pub use engine::{Direction, Neighbors, TraversalEngine};
pub use search::find_course;
