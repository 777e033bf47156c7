// File: src/error.rs
use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T, E = LessonError> = std::result::Result<T, E>;

/// Everything that can abort a generator run.
///
/// Per-record and per-level problems are not errors: they are counted in the
/// load and generation reports instead.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    /// A required input file does not exist.
    #[error("required input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary output file could not be moved over the destination.
    #[error("could not persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("invalid layout catalog: {0}")]
    InvalidLayout(String),

    #[error("invalid ligature table: {0}")]
    InvalidLigatureTable(String),

    #[error("unknown dialect '{0}' (expected gb or us)")]
    UnknownDialect(String),

    #[error("unknown lexicon format '{0}' (expected frequency or readlex)")]
    UnknownFormat(String),
}

impl LessonError {
    pub(crate) fn invalid_layout<S: Into<String>>(msg: S) -> Self {
        Self::InvalidLayout(msg.into())
    }
}
