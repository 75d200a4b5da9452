//! Layout Support
//!
//! Derived data that drives course placement: a longest-path level per course
//! and position hints built from semesters and levels.
//!
//! Levels are a layout ordering, not a schedule. A course in semester 5 with a
//! single first-year prerequisite still sits at level 1.

mod hints;
mod levels;

pub use hints::{force_anchors, semester_grid, GridCell, GridSlot, PositionHint};
pub use levels::{assign_levels, try_assign_levels, Levels};
