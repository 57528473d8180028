// Pure decision functions, one per form the cinema exposes.
//
// Structure
// - add_movie.rs: manager adds a movie to the catalog
// - schedule_showtime.rs: manager schedules a screening of a movie
// - sign_up.rs: visitor creates a client account
// - log_in.rs: resolve credentials to an account
//
// Boundaries
// - No input or output. Lookups are done by the application handlers and passed in.

use crate::core::account::ClientError;
use crate::core::movie::MovieError;
use thiserror::Error;

pub mod add_movie;
pub mod log_in;
pub mod schedule_showtime;
pub mod sign_up;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Please enter a movie title.")]
    MissingTitle,
    #[error("Please enter a genre.")]
    MissingGenre,
    #[error("Please enter a duration.")]
    MissingDuration,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Please select a time.")]
    MissingTime,
    #[error("Please select a room.")]
    MissingRoom,
    #[error(transparent)]
    Movie(#[from] MovieError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
