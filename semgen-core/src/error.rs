//! Error types for course processing.

use thiserror::Error;

/// Errors that can occur while building a course model.
///
/// A failure is fatal to the course being processed but must never
/// leak a partially-built model; other courses in the same run are
/// unaffected.
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Invalid course config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{configured} configured days but {sequenced} class dates between start and end")]
    DayCountMismatch { configured: usize, sequenced: usize },

    #[error("Assignment '{assignment}' references day {reference}, but the calendar has {sessions} class sessions")]
    UnresolvedSession {
        assignment: String,
        reference: usize,
        sessions: usize,
    },
}

/// Result type alias for course processing.
pub type CourseResult<T> = Result<T, CourseError>;
