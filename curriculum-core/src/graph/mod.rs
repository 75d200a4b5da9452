//! Curriculum Graph
//!
//! This module turns tabular curriculum rows into a directed graph of courses
//! and prerequisite links.
//!
//! # Overview
//!
//! - Nodes are courses, identified by a unique id.
//! - An edge `A -> B` means `A` is a prerequisite of `B`.
//!
//! Input is imperfect in practice: rows without ids, repeated ids, and
//! prerequisites that name courses nobody defined. The builder never fails on
//! these; it keeps what it can and records the rest in a [`BuildReport`].
//!
//! # Design Decisions
//!
//! 1. Links are stored as id pairs and are never rewritten. Consumers that
//!    want object references build their own view.
//!
//! 2. The graph is indexed by course position for O(1) neighbour lookups.
//!
//! 3. We keep both prerequisite and dependent adjacency so traversal and
//!    completion cascades can walk in either direction.

mod builder;
mod course;
mod curriculum;
mod row;

pub use builder::{build, build_with_report, BuildReport, GraphBuilder, RowRef};
pub use course::{Course, Link};
pub use curriculum::CurriculumGraph;
pub use row::{parse_semester, rows_from_json, RawRow};
