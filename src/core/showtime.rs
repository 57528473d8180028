// Showtime entity: one screening of a movie in a room, with its seat counter.
//
// Responsibilities
// - Keep the show time text and its parsed value together (re-parsed on every update).
// - Delegate reservation and cancellation to the seat counter.
// - Order screenings by date, then time-of-day.
//
// Notes
// - The movie is shared with the catalog and with other showtimes, never owned.
// - Equality looks at movie, date, time text and room. Seat counts are not part of it,
//   which is why ordering is a separate comparison instead of `Ord`.

use crate::core::movie::Movie;
use crate::core::seats::{DEFAULT_CAPACITY, SeatCounter};
use crate::core::time_of_day::{ShowTime, TimeParse};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShowtimeId(Uuid);

impl ShowtimeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ShowtimeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShowtimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Showtime {
    movie: Arc<Movie>,
    date: NaiveDate,
    time: ShowTime,
    room: String,
    seats: SeatCounter,
}

impl Showtime {
    /// New screening with the default capacity.
    pub fn new(movie: Arc<Movie>, date: NaiveDate, time: &str, room: impl Into<String>) -> Self {
        Self::with_capacity(movie, date, time, room, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(
        movie: Arc<Movie>,
        date: NaiveDate,
        time: &str,
        room: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            movie,
            date,
            time: ShowTime::new(time),
            room: room.into(),
            seats: SeatCounter::new(capacity),
        }
    }

    pub fn movie(&self) -> &Arc<Movie> {
        &self.movie
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_text(&self) -> &str {
        self.time.text()
    }

    pub fn time_parse(&self) -> TimeParse {
        self.time.parsed()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.time.time()
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn seats(&self) -> SeatCounter {
        self.seats
    }

    pub fn total_capacity(&self) -> u32 {
        self.seats.capacity()
    }

    pub fn available_seats(&self) -> u32 {
        self.seats.available()
    }

    pub fn is_sold_out(&self) -> bool {
        self.seats.is_sold_out()
    }

    pub fn set_movie(&mut self, movie: Arc<Movie>) {
        self.movie = movie;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: &str) {
        self.time = ShowTime::new(time);
    }

    pub fn set_room(&mut self, room: impl Into<String>) {
        self.room = room.into();
    }

    pub fn set_total_capacity(&mut self, capacity: u32) {
        self.seats.resize(capacity);
    }

    pub fn reserve(&mut self, seats: u32) -> bool {
        self.seats.reserve(seats)
    }

    pub fn cancel(&mut self, seats: u32) {
        self.seats.cancel(seats)
    }

    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time_of_day().cmp(&other.time_of_day()))
    }
}

impl PartialEq for Showtime {
    fn eq(&self, other: &Self) -> bool {
        self.movie == other.movie
            && self.date == other.date
            && self.time.text() == other.time.text()
            && self.room == other.room
    }
}

impl Eq for Showtime {}

/// Stable sort by date, then time-of-day.
pub fn sort_chronologically(showtimes: &mut [Showtime]) {
    showtimes.sort_by(Showtime::chronological_cmp);
}
