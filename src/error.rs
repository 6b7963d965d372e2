//! Error types for turtle evaluation and document output.

use thiserror::Error;

/// Failures surfaced by the interpreter and the output helpers.
///
/// Evaluation errors abort the whole run; no partial [`Trace`](crate::Trace) is ever returned.
#[derive(Debug, Error)]
pub enum TurtleError {
    /// Evaluation was requested without a starting pose.
    #[error("no initial pose was supplied")]
    MissingInitialPose,

    /// A `Repeat` carried a negative count.
    #[error("invalid repeat count {count}: must be zero or greater")]
    InvalidRepeatCount { count: i64 },

    /// A pen size that is not strictly positive (NaN included).
    #[error("invalid pen size {size}: must be greater than zero")]
    InvalidPenSize { size: f64 },

    /// Writing a rendered document failed.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TurtleError>;
