// Seed data for demos and local runs.
//
// Purpose
// - Fill the registries with a handful of rooms, movies, clients and showtimes.
//
// Responsibilities
// - Parse the embedded JSON document into transport shapes.
// - Build domain values through their constructors so every invariant is checked.
// - Resolve movie and room references; showtime capacity comes from the room.

use crate::core::account::{Client, ClientError};
use crate::core::movie::{Movie, MovieError};
use crate::core::ports::{ClientRepository, MovieCatalog, RepositoryError, ShowtimeSchedule};
use crate::core::room::Room;
use crate::core::showtime::Showtime;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

const SAMPLE_DATA: &str = include_str!("../../data/sample_data.json");

#[derive(Debug, Error)]
pub enum SampleDataError {
    #[error("malformed sample data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Movie(#[from] MovieError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("showtime references unknown movie {0}")]
    UnknownMovie(String),

    #[error("showtime references unknown room {0}")]
    UnknownRoom(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDto {
    pub movie_id: String,
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub rating: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowtimeDto {
    pub movie_id: String,
    pub room_id: String,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub rooms: Vec<Room>,
    pub movies: Vec<MovieDto>,
    pub clients: Vec<ClientDto>,
    pub showtimes: Vec<ShowtimeDto>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub movies: usize,
    pub clients: usize,
    pub showtimes: usize,
}

impl SampleData {
    pub fn load() -> Result<Self, SampleDataError> {
        Self::from_json(SAMPLE_DATA)
    }

    pub fn from_json(json: &str) -> Result<Self, SampleDataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn seed<TClients, TCatalog, TSchedule>(
        &self,
        clients: &TClients,
        catalog: &TCatalog,
        schedule: &TSchedule,
    ) -> Result<SeedSummary, SampleDataError>
    where
        TClients: ClientRepository + ?Sized,
        TCatalog: MovieCatalog + ?Sized,
        TSchedule: ShowtimeSchedule + ?Sized,
    {
        let rooms: HashMap<&str, &Room> = self
            .rooms
            .iter()
            .map(|room| (room.room_id.as_str(), room))
            .collect();

        let mut movies: HashMap<&str, Arc<Movie>> = HashMap::new();
        for dto in &self.movies {
            let movie = Movie::new(&dto.title, &dto.genre, &dto.duration, &dto.rating)?;
            movies.insert(dto.movie_id.as_str(), catalog.add(movie).await?);
        }

        for dto in &self.clients {
            clients
                .register(Client::new(&dto.username, &dto.password, &dto.email)?)
                .await?;
        }

        for dto in &self.showtimes {
            let movie = movies
                .get(dto.movie_id.as_str())
                .ok_or_else(|| SampleDataError::UnknownMovie(dto.movie_id.clone()))?;
            let room = rooms
                .get(dto.room_id.as_str())
                .ok_or_else(|| SampleDataError::UnknownRoom(dto.room_id.clone()))?;
            schedule
                .add(Showtime::with_capacity(
                    Arc::clone(movie),
                    dto.date,
                    &dto.time,
                    room.label(),
                    room.capacity,
                ))
                .await?;
        }

        let summary = SeedSummary {
            movies: self.movies.len(),
            clients: self.clients.len(),
            showtimes: self.showtimes.len(),
        };
        tracing::info!(?summary, "sample data seeded");
        Ok(summary)
    }
}
