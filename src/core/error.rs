//! Error type shared by the carousel core.

use thiserror::Error;

/// Everything the core can reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A caller passed a value outside the operation's contract
    /// (e.g. a zero direction sign or an out-of-range slide index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A collaborator the carousel needs at construction is missing or
    /// unusable (no slides, widget pointing past the end, ...).
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
    /// A catalog file line could not be parsed.
    #[error("catalog line {line}: {message}")]
    Catalog { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
