use crate::application::errors::ApplicationError;
use crate::core::decider::schedule_showtime::{ScheduleShowtime, decide_schedule_showtime};
use crate::core::ports::{MovieCatalog, ShowtimeSchedule};
use crate::core::showtime::ShowtimeId;
use std::sync::Arc;

pub struct ScheduleShowtimeHandler<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    catalog: Arc<TCatalog>,
    schedule: Arc<TSchedule>,
    default_capacity: u32,
}

impl<TCatalog, TSchedule> ScheduleShowtimeHandler<TCatalog, TSchedule>
where
    TCatalog: MovieCatalog + 'static,
    TSchedule: ShowtimeSchedule + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, schedule: Arc<TSchedule>, default_capacity: u32) -> Self {
        Self {
            catalog,
            schedule,
            default_capacity,
        }
    }

    pub async fn handle(&self, command: ScheduleShowtime) -> Result<ShowtimeId, ApplicationError> {
        let movie = self
            .catalog
            .find_by_title(&command.movie_title)
            .await?
            .ok_or_else(|| ApplicationError::UnknownMovie(command.movie_title.clone()))?;

        let showtime = decide_schedule_showtime(command, movie, self.default_capacity)
            .inspect_err(|e| tracing::warn!(error = %e, "showtime rejected"))?;
        if showtime.time_parse().is_defaulted() {
            tracing::warn!(
                time = showtime.time_text(),
                "show time not understood, scheduled at 12:00"
            );
        }
        Ok(self.schedule.add(showtime).await?)
    }
}
