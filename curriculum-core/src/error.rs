//! Error Types
//!
//! Data-quality problems in a curriculum (missing ids, duplicates, dangling
//! prerequisites, cycles) are tolerated and reported, not raised. The errors
//! here cover malformed documents and invalid programmatic usage.

use thiserror::Error;

/// Errors produced by the curriculum engine.
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// A row or configuration document could not be decoded.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict level assignment found courses that sit on, or downstream of,
    /// a prerequisite cycle.
    #[error("prerequisite cycle prevents layering of {} course(s): {}", courses.len(), courses.join(", "))]
    CyclicGraph {
        /// Courses that never reached zero in-degree, in node order.
        courses: Vec<String>,
    },

    /// A traversal direction other than `up` or `down`.
    #[error("invalid traversal direction `{0}` (expected `up` or `down`)")]
    InvalidDirection(String),

    /// A configuration value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CurriculumError>;
