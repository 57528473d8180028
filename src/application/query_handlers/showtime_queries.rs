// Read side: what a client sees when browsing a movie's screenings.
//
// Responsibilities
// - Resolve the movie by title, then list its showtimes in chronological order.
// - Flatten each showtime into a serializable view.

use crate::application::errors::ApplicationError;
use crate::core::movie::Media;
use crate::core::ports::{MovieCatalog, ShowtimeSchedule};
use crate::core::showtime::{Showtime, ShowtimeId};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowtimeView {
    pub showtime_id: ShowtimeId,
    pub movie_title: String,
    pub duration: String,
    pub rating: String,
    pub date: NaiveDate,
    pub time: String,
    pub starts_at: NaiveTime,
    pub room: String,
    pub available_seats: u32,
    pub total_capacity: u32,
    pub sold_out: bool,
}

impl From<(ShowtimeId, Showtime)> for ShowtimeView {
    fn from((showtime_id, showtime): (ShowtimeId, Showtime)) -> Self {
        let movie = showtime.movie();
        Self {
            showtime_id,
            movie_title: movie.title().to_string(),
            duration: movie.formatted_duration(),
            rating: movie.rating().to_string(),
            date: showtime.date(),
            time: showtime.time_text().to_string(),
            starts_at: showtime.time_of_day(),
            room: showtime.room().to_string(),
            available_seats: showtime.available_seats(),
            total_capacity: showtime.total_capacity(),
            sold_out: showtime.is_sold_out(),
        }
    }
}

pub struct ShowtimeQueries<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    catalog: Arc<TCatalog>,
    schedule: Arc<TSchedule>,
}

impl<TCatalog, TSchedule> ShowtimeQueries<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, schedule: Arc<TSchedule>) -> Self {
        Self { catalog, schedule }
    }

    pub async fn for_movie(&self, title: &str) -> Result<Vec<ShowtimeView>, ApplicationError> {
        let movie = self
            .catalog
            .find_by_title(title)
            .await?
            .ok_or_else(|| ApplicationError::UnknownMovie(title.to_string()))?;
        let showtimes = self.schedule.list_for_movie(&movie).await?;
        Ok(showtimes.into_iter().map(ShowtimeView::from).collect())
    }

    /// First upcoming screening of a movie, the one preselected on the detail view.
    pub async fn next_for_movie(
        &self,
        title: &str,
    ) -> Result<Option<ShowtimeView>, ApplicationError> {
        Ok(self.for_movie(title).await?.into_iter().next())
    }

    pub async fn all(&self) -> Result<Vec<ShowtimeView>, ApplicationError> {
        let showtimes = self.schedule.list().await?;
        Ok(showtimes.into_iter().map(ShowtimeView::from).collect())
    }
}
