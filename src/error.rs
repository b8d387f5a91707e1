//! Error type shared by the distance model, loader and annealer.

use std::fmt;

/// Errors surfaced by this crate.
#[derive(Debug)]
pub enum AnnealError {
    /// The annealing configuration failed validation.
    InvalidConfig(String),

    /// `initialize` was given an empty city set.
    NoCities,

    /// `run` was called before `initialize`.
    NotInitialized,

    /// The annealer already completed a run; its state is read-only.
    AlreadyFinished,

    /// A city record could not be parsed.
    Parse {
        /// 1-based record number.
        record: usize,
        /// What was wrong with it.
        message: String,
    },

    /// The underlying CSV reader failed.
    Csv(csv::Error),
}

impl fmt::Display for AnnealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnealError::InvalidConfig(msg) => write!(f, "invalid annealing config: {msg}"),
            AnnealError::NoCities => write!(f, "cannot anneal an empty city set"),
            AnnealError::NotInitialized => write!(f, "annealer has not been initialized"),
            AnnealError::AlreadyFinished => write!(f, "annealer has already finished its run"),
            AnnealError::Parse { record, message } => {
                write!(f, "record {record}: {message}")
            }
            AnnealError::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl std::error::Error for AnnealError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnnealError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for AnnealError {
    fn from(e: csv::Error) -> Self {
        AnnealError::Csv(e)
    }
}
