//! Curriculum Core
//!
//! This crate turns a tabular curriculum (course id, name, semester, area,
//! prerequisite ids) into a prerequisite graph and derives everything an
//! interactive curriculum map needs to draw it:
//!
//! - A graph of courses and prerequisite links, built from raw rows
//! - Longest-path levels and position hints for layout
//! - Neighbour, ancestor and descendant sets for highlighting
//! - Completion tracking with `completed` / `available` / `locked` statuses
//!
//! Rendering, animation and input handling live outside this crate; they
//! consume the ids, sets and statuses produced here.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Row parsing, graph construction and the resolved index
//! - `layout`: Level assignment and position hints
//! - `traversal`: Neighbour/chain queries and course search
//! - `completion`: The completed-course set and its cascading toggle
//! - `view`: Focus and filter state for one view of the graph
//! - `config`: Tunables with defaults
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use curriculum_core::completion::{CompletionTracker, Status};
//! use curriculum_core::graph::{build, RawRow};
//! use curriculum_core::layout::assign_levels;
//! use curriculum_core::traversal::{Direction, TraversalEngine};
//!
//! let rows = vec![
//!     RawRow::new("CALC1", "Calculus I", "1", "Core Math", ""),
//!     RawRow::new("CALC2", "Calculus II", "2", "Core Math", "CALC1"),
//! ];
//! let graph = build(&rows);
//!
//! let levels = assign_levels(&graph);
//! assert_eq!(levels.get("CALC2"), Some(1));
//!
//! let chain = TraversalEngine::new(&graph).chain("CALC2", Direction::Up, 1);
//! assert!(chain.contains("CALC1"));
//!
//! let mut tracker = CompletionTracker::new(Arc::new(graph));
//! tracker.toggle("CALC2");
//! assert_eq!(tracker.status("CALC1"), Some(Status::Completed));
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod traversal;
pub mod view;

pub use error::{CurriculumError, Result};
