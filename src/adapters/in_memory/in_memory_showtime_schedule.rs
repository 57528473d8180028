// In memory showtime schedule.
//
// Purpose
// - Store showtimes under generated ids and apply seat changes to the stored copy.
//
// Responsibilities
// - Return listings in chronological order (date, then time-of-day).
// - Run reserve and cancel under the write lock so the seat invariant holds for concurrent callers.
// - Drop a movie's showtimes when the movie leaves the catalog.

use crate::core::movie::{Media, Movie};
use crate::core::ports::{RepositoryError, SeatUpdate, ShowtimeSchedule};
use crate::core::seats::SeatCounter;
use crate::core::showtime::{Showtime, ShowtimeId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryShowtimeSchedule {
    showtimes: RwLock<HashMap<ShowtimeId, Showtime>>,
    is_offline: bool,
}

impl InMemoryShowtimeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Showtime schedule offline".into()));
        }
        Ok(())
    }

    async fn sorted<F>(&self, keep: F) -> Vec<(ShowtimeId, Showtime)>
    where
        F: Fn(&Showtime) -> bool,
    {
        let guard = self.showtimes.read().await;
        let mut items: Vec<(ShowtimeId, Showtime)> = guard
            .iter()
            .filter(|(_, showtime)| keep(showtime))
            .map(|(id, showtime)| (*id, showtime.clone()))
            .collect();
        // ids are v7 uuids, so equal slots fall back to insertion order
        items.sort_by(|(a_id, a), (b_id, b)| a.chronological_cmp(b).then_with(|| a_id.cmp(b_id)));
        items
    }
}

#[async_trait::async_trait]
impl ShowtimeSchedule for InMemoryShowtimeSchedule {
    async fn add(&self, showtime: Showtime) -> Result<ShowtimeId, RepositoryError> {
        self.ensure_online()?;

        let id = ShowtimeId::new();
        tracing::info!(
            %id,
            movie = showtime.movie().title(),
            date = %showtime.date(),
            time = showtime.time_text(),
            room = showtime.room(),
            "showtime scheduled"
        );
        self.showtimes.write().await.insert(id, showtime);
        Ok(id)
    }

    async fn get(&self, id: ShowtimeId) -> Result<Option<Showtime>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.showtimes.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<(ShowtimeId, Showtime)>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.sorted(|_| true).await)
    }

    async fn list_for_movie(
        &self,
        movie: &Movie,
    ) -> Result<Vec<(ShowtimeId, Showtime)>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.sorted(|showtime| showtime.movie().as_ref() == movie).await)
    }

    async fn reserve(&self, id: ShowtimeId, seats: u32) -> Result<SeatUpdate, RepositoryError> {
        self.ensure_online()?;

        let mut guard = self.showtimes.write().await;
        let showtime = guard
            .get_mut(&id)
            .ok_or(RepositoryError::ShowtimeNotFound(id))?;
        let accepted = showtime.reserve(seats);
        Ok(SeatUpdate {
            accepted,
            seats: showtime.seats(),
        })
    }

    async fn cancel(&self, id: ShowtimeId, seats: u32) -> Result<SeatCounter, RepositoryError> {
        self.ensure_online()?;

        let mut guard = self.showtimes.write().await;
        let showtime = guard
            .get_mut(&id)
            .ok_or(RepositoryError::ShowtimeNotFound(id))?;
        showtime.cancel(seats);
        Ok(showtime.seats())
    }

    async fn remove_for_movie(&self, movie: &Movie) -> Result<usize, RepositoryError> {
        self.ensure_online()?;

        let mut guard = self.showtimes.write().await;
        let before = guard.len();
        guard.retain(|_, showtime| showtime.movie().as_ref() != movie);
        let removed = before - guard.len();
        tracing::info!(movie = movie.title(), removed, "showtimes dropped");
        Ok(removed)
    }
}

#[cfg(test)]
mod in_memory_showtime_schedule_tests {
    use super::*;
    use crate::test_support::fixtures::movies::{inception, parasite};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    #[fixture]
    fn schedule() -> InMemoryShowtimeSchedule {
        InMemoryShowtimeSchedule::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_and_get_a_showtime(schedule: InMemoryShowtimeSchedule) {
        let showtime = Showtime::new(inception(), day(1), "19:00", "R101 - IMAX Hall");
        let id = schedule.add(showtime.clone()).await.unwrap();
        assert_eq!(schedule.get(id).await.unwrap(), Some(showtime));
        assert_eq!(schedule.get(ShowtimeId::new()).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_in_chronological_order(schedule: InMemoryShowtimeSchedule) {
        schedule
            .add(Showtime::new(inception(), day(2), "14:00", "Room 1"))
            .await
            .unwrap();
        schedule
            .add(Showtime::new(inception(), day(1), "19:00", "Room 1"))
            .await
            .unwrap();
        schedule
            .add(Showtime::new(inception(), day(1), "2:00 PM", "Room 2"))
            .await
            .unwrap();

        let listed: Vec<_> = schedule
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|(_, s)| (s.date(), s.time_text().to_string()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (day(1), "2:00 PM".to_string()),
                (day(1), "19:00".to_string()),
                (day(2), "14:00".to_string()),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_filter_by_movie(schedule: InMemoryShowtimeSchedule) {
        let movie = inception();
        schedule
            .add(Showtime::new(Arc::clone(&movie), day(3), "21:00", "Room 1"))
            .await
            .unwrap();
        schedule
            .add(Showtime::new(parasite(), day(1), "16:30", "Room 4"))
            .await
            .unwrap();

        let listed = schedule.list_for_movie(&movie).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].1.movie().as_ref(), movie.as_ref());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_seat_changes_to_the_stored_showtime(
        schedule: InMemoryShowtimeSchedule,
    ) {
        let id = schedule
            .add(Showtime::with_capacity(inception(), day(1), "19:00", "Room 1", 5))
            .await
            .unwrap();

        let update = schedule.reserve(id, 5).await.unwrap();
        assert!(update.accepted);
        assert!(update.seats.is_sold_out());

        let rejected = schedule.reserve(id, 1).await.unwrap();
        assert!(!rejected.accepted);
        assert_eq!(rejected.seats.available(), 0);

        let seats = schedule.cancel(id, 9).await.unwrap();
        assert_eq!(seats.available(), 5);
        assert_eq!(schedule.get(id).await.unwrap().unwrap().available_seats(), 5);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_showtime(schedule: InMemoryShowtimeSchedule) {
        let id = ShowtimeId::new();
        assert_eq!(
            schedule.reserve(id, 1).await,
            Err(RepositoryError::ShowtimeNotFound(id))
        );
        assert_eq!(
            schedule.cancel(id, 1).await,
            Err(RepositoryError::ShowtimeNotFound(id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drop_only_the_showtimes_of_the_given_movie(
        schedule: InMemoryShowtimeSchedule,
    ) {
        let movie = inception();
        for d in [1, 2] {
            schedule
                .add(Showtime::new(Arc::clone(&movie), day(d), "19:00", "Room 1"))
                .await
                .unwrap();
        }
        let kept = schedule
            .add(Showtime::new(parasite(), day(1), "16:30", "Room 4"))
            .await
            .unwrap();

        assert_eq!(schedule.remove_for_movie(&movie).await.unwrap(), 2);
        assert!(schedule.list_for_movie(&movie).await.unwrap().is_empty());
        let listed = schedule.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, kept);
        assert_eq!(schedule.remove_for_movie(&movie).await.unwrap(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_schedule_is_offline(mut schedule: InMemoryShowtimeSchedule) {
        schedule.toggle_offline();
        let result = schedule
            .add(Showtime::new(inception(), day(1), "19:00", "Room 1"))
            .await;
        assert_eq!(
            result,
            Err(RepositoryError::Backend("Showtime schedule offline".into()))
        );
        assert_eq!(
            schedule.remove_for_movie(&inception()).await,
            Err(RepositoryError::Backend("Showtime schedule offline".into()))
        );
    }
}
