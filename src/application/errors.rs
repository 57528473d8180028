use crate::core::decider::DecideError;
use crate::core::ports::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("movie not found: {0}")]
    UnknownMovie(String),

    #[error("Seat count must be at least 1.")]
    InvalidSeatCount,

    #[error("cannot reserve {requested} seats, {available} available")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("Incorrect username or password.")]
    InvalidCredentials,
}
