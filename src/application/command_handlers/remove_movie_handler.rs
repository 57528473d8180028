use crate::application::errors::ApplicationError;
use crate::core::movie::Movie;
use crate::core::ports::{MovieCatalog, ShowtimeSchedule};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveMovie {
    pub title: String,
}

/// The movie taken out of the catalog and how many of its showtimes went with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedMovie {
    pub movie: Arc<Movie>,
    pub showtimes: usize,
}

pub struct RemoveMovieHandler<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    catalog: Arc<TCatalog>,
    schedule: Arc<TSchedule>,
}

impl<TCatalog, TSchedule> RemoveMovieHandler<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, schedule: Arc<TSchedule>) -> Self {
        Self { catalog, schedule }
    }

    // Showtimes go first: if the schedule is unavailable the movie stays in the catalog.
    pub async fn handle(&self, command: RemoveMovie) -> Result<RemovedMovie, ApplicationError> {
        let movie = self
            .catalog
            .find_by_title(&command.title)
            .await?
            .ok_or_else(|| ApplicationError::UnknownMovie(command.title.clone()))
            .inspect_err(|e| tracing::warn!(error = %e, "movie removal rejected"))?;

        let showtimes = self.schedule.remove_for_movie(&movie).await?;
        let movie = self
            .catalog
            .remove(&command.title)
            .await?
            .unwrap_or(movie);
        tracing::info!(title = %command.title, showtimes, "movie removed");
        Ok(RemovedMovie { movie, showtimes })
    }
}
