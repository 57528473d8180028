// Movie value object and the Media capability it fulfils.
//
// Purpose
// - Hold what the cinema knows about a title: genre, running time, rating, director, year.
//
// Responsibilities
// - Parse running times given as "H", "H:MM" or "H:MM:SS". Anything else counts as 0 minutes.
// - Format running times as "HH:MM:00".
// - Reject blank titles.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UNKNOWN_DIRECTOR: &str = "Unknown";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovieError {
    #[error("Title cannot be empty")]
    EmptyTitle,
}

/// Shared behaviour of anything the cinema can screen.
pub trait Media {
    fn title(&self) -> &str;
    fn genre(&self) -> &str;
    fn duration_minutes(&self) -> u32;
    fn description(&self) -> String;
    fn media_type(&self) -> &'static str;

    fn formatted_duration(&self) -> String {
        format_duration(self.duration_minutes())
    }
}

pub fn format_duration(minutes: u32) -> String {
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

pub fn parse_duration_minutes(text: &str) -> u32 {
    let mut parts = text.trim().split(':');
    let hours = match parts.next().map(str::parse::<u32>) {
        Some(Ok(hours)) => hours,
        _ => return 0,
    };
    let minutes = match parts.next().map(str::parse::<u32>) {
        None => 0,
        Some(Ok(minutes)) => minutes,
        Some(Err(_)) => return 0,
    };
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .unwrap_or(0)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    title: String,
    genre: String,
    duration_minutes: u32,
    rating: String,
    director: String,
    release_year: i32,
}

impl Movie {
    /// Builds a movie from form input; the duration is free text.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration: &str,
        rating: impl Into<String>,
    ) -> Result<Self, MovieError> {
        Self::with_details(
            title,
            genre,
            parse_duration_minutes(duration),
            rating,
            UNKNOWN_DIRECTOR,
            current_year(),
        )
    }

    pub fn with_details(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration_minutes: u32,
        rating: impl Into<String>,
        director: impl Into<String>,
        release_year: i32,
    ) -> Result<Self, MovieError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MovieError::EmptyTitle);
        }
        Ok(Self {
            title,
            genre: genre.into(),
            duration_minutes,
            rating: rating.into(),
            director: director.into(),
            release_year,
        })
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), MovieError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MovieError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.rating = rating.into();
    }

    pub fn set_duration(&mut self, duration: &str) {
        self.duration_minutes = parse_duration_minutes(duration);
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.duration_minutes = minutes;
    }

    pub fn set_director(&mut self, director: impl Into<String>) {
        self.director = director.into();
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    /// G and PG are considered suitable for children.
    pub fn is_child_friendly(&self) -> bool {
        self.rating.eq_ignore_ascii_case("G") || self.rating.eq_ignore_ascii_case("PG")
    }

    pub fn is_new_release_in(&self, year: i32) -> bool {
        year - self.release_year <= 2
    }

    pub fn is_new_release(&self) -> bool {
        self.is_new_release_in(current_year())
    }
}

impl Media for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    fn description(&self) -> String {
        format!(
            "{} ({}) - {} | Rated: {} | Genre: {}",
            self.title, self.release_year, self.director, self.rating, self.genre
        )
    }

    fn media_type(&self) -> &'static str {
        "Movie"
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.media_type(), self.title)
    }
}
