//! Error types for the scheduling crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by surgiplan.
///
/// The scheduling engine itself never returns these for well-typed input;
/// they come from parsing helpers and the command-line front end.
#[derive(Error, Debug)]
pub enum SurgiplanError {
    #[error("invalid clock time '{0}': expected HH:mm")]
    InvalidTime(String),

    #[error("case {case_id} overlaps existing bookings in room {room}")]
    SlotConflict { room: String, case_id: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SurgiplanError>;
