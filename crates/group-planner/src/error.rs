//! Error types for group-planner operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid free range: start {start} is after end {end}")]
    InvertedRange { start: String, end: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
