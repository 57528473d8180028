// Adding a movie from the manager's form.
//
// Rules
// - Title, genre and duration must be filled in, checked in that order.
// - A blank rating falls back to PG, the preselected choice on the form.
// - The duration text goes through the lenient duration parser.

use crate::core::decider::{DecideError, is_blank};
use crate::core::movie::Movie;

pub const DEFAULT_RATING: &str = "PG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMovie {
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub rating: String,
}

pub fn decide_add_movie(command: AddMovie) -> Result<Movie, DecideError> {
    if is_blank(&command.title) {
        return Err(DecideError::MissingTitle);
    }
    if is_blank(&command.genre) {
        return Err(DecideError::MissingGenre);
    }
    if is_blank(&command.duration) {
        return Err(DecideError::MissingDuration);
    }
    let rating = if is_blank(&command.rating) {
        DEFAULT_RATING.to_string()
    } else {
        command.rating
    };
    Ok(Movie::new(
        command.title,
        command.genre,
        &command.duration,
        rating,
    )?)
}
