// Scheduling a showtime from the manager's form.
//
// Rules
// - Date, time and room must be selected, checked in that order.
// - Capacity comes from the form when given, otherwise from the configured default.
// - The time text is kept as entered; an unparsable time still schedules (at noon).

use crate::core::decider::{DecideError, is_blank};
use crate::core::movie::Movie;
use crate::core::showtime::Showtime;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleShowtime {
    pub movie_title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub capacity: Option<u32>,
}

pub fn decide_schedule_showtime(
    command: ScheduleShowtime,
    movie: Arc<Movie>,
    default_capacity: u32,
) -> Result<Showtime, DecideError> {
    let date = command.date.ok_or(DecideError::MissingDate)?;
    let time = command
        .time
        .filter(|t| !is_blank(t))
        .ok_or(DecideError::MissingTime)?;
    let room = command
        .room
        .filter(|r| !is_blank(r))
        .ok_or(DecideError::MissingRoom)?;
    let capacity = command.capacity.unwrap_or(default_capacity);

    Ok(Showtime::with_capacity(movie, date, &time, room, capacity))
}
