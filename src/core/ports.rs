// Ports define what the application needs to store and look up, without implementing it.
//
// Purpose
// - Describe the client registry, the movie catalog and the showtime schedule as traits.
//
// Responsibilities
// - Handlers receive these as explicit objects. There is no process-wide registry.
// - Username uniqueness is enforced by `ClientRepository::register`, atomically with the insert.
// - Title uniqueness is enforced by `MovieCatalog::add` the same way, so a title names one movie.
//
// Testing guidance
// - The in memory adapters implement every port and can be switched offline to exercise failures.

use crate::core::account::Client;
use crate::core::movie::Movie;
use crate::core::seats::SeatCounter;
use crate::core::showtime::{Showtime, ShowtimeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Movie already exists: {0}")]
    DuplicateTitle(String),

    #[error("showtime not found: {0}")]
    ShowtimeNotFound(ShowtimeId),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Result of a reservation attempt against a stored showtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatUpdate {
    pub accepted: bool,
    pub seats: SeatCounter,
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn register(&self, client: Client) -> Result<(), RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Client>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;
}

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn add(&self, movie: Movie) -> Result<Arc<Movie>, RepositoryError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Arc<Movie>>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Arc<Movie>>, RepositoryError>;
    /// Takes the movie out of the catalog. `None` when no movie has that title.
    async fn remove(&self, title: &str) -> Result<Option<Arc<Movie>>, RepositoryError>;
}

#[async_trait]
pub trait ShowtimeSchedule: Send + Sync {
    async fn add(&self, showtime: Showtime) -> Result<ShowtimeId, RepositoryError>;
    async fn get(&self, id: ShowtimeId) -> Result<Option<Showtime>, RepositoryError>;
    /// Every showtime, in chronological order.
    async fn list(&self) -> Result<Vec<(ShowtimeId, Showtime)>, RepositoryError>;
    /// Showtimes screening `movie`, in chronological order.
    async fn list_for_movie(
        &self,
        movie: &Movie,
    ) -> Result<Vec<(ShowtimeId, Showtime)>, RepositoryError>;
    async fn reserve(&self, id: ShowtimeId, seats: u32) -> Result<SeatUpdate, RepositoryError>;
    async fn cancel(&self, id: ShowtimeId, seats: u32) -> Result<SeatCounter, RepositoryError>;
    /// Drops every showtime screening `movie` and returns how many were dropped.
    async fn remove_for_movie(&self, movie: &Movie) -> Result<usize, RepositoryError>;
}
