// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory registries and hand them to the handlers.
// - Seed sample data, open a manager session and log the resulting schedule.

use cinema::adapters::in_memory::in_memory_client_registry::InMemoryClientRegistry;
use cinema::adapters::in_memory::in_memory_movie_catalog::InMemoryMovieCatalog;
use cinema::adapters::in_memory::in_memory_showtime_schedule::InMemoryShowtimeSchedule;
use cinema::application::command_handlers::log_in_handler::LogInHandler;
use cinema::application::command_handlers::schedule_showtime_handler::ScheduleShowtimeHandler;
use cinema::application::query_handlers::showtime_queries::ShowtimeQueries;
use cinema::application::sample_data::SampleData;
use cinema::config::Config;
use cinema::core::account::{MANAGER_PASSWORD, MANAGER_USERNAME, User};
use cinema::core::decider::log_in::LogIn;
use cinema::core::decider::schedule_showtime::ScheduleShowtime;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let clients = Arc::new(InMemoryClientRegistry::new());
    let catalog = Arc::new(InMemoryMovieCatalog::new());
    let schedule = Arc::new(InMemoryShowtimeSchedule::new());

    let schedule_showtime =
        ScheduleShowtimeHandler::new(catalog.clone(), schedule.clone(), config.default_capacity);

    if config.seed_sample_data {
        let data = SampleData::load()?;
        data.seed(clients.as_ref(), catalog.as_ref(), schedule.as_ref())
            .await?;

        // Matinee without an explicit capacity, so it gets the configured default.
        if let Some(first) = data.showtimes.first() {
            let movie = data
                .movies
                .iter()
                .find(|m| m.movie_id == first.movie_id)
                .map(|m| m.title.clone());
            if let Some(movie_title) = movie {
                schedule_showtime
                    .handle(ScheduleShowtime {
                        movie_title,
                        date: Some(first.date),
                        time: Some("11:30 A.M".to_string()),
                        room: Some("Room 1".to_string()),
                        capacity: None,
                    })
                    .await?;
            }
        }
    }

    let log_in = LogInHandler::new(clients.clone());
    let queries = ShowtimeQueries::new(catalog, schedule);

    let manager = log_in
        .handle(LogIn {
            username: MANAGER_USERNAME.to_string(),
            password: MANAGER_PASSWORD.to_string(),
        })
        .await?;
    tracing::info!(
        username = manager.username(),
        view = manager.landing_view().resource(),
        "manager session ready"
    );

    for view in queries.all().await? {
        tracing::info!(
            movie = %view.movie_title,
            date = %view.date,
            time = %view.time,
            room = %view.room,
            available = view.available_seats,
            capacity = view.total_capacity,
            "showtime"
        );
    }

    Ok(())
}
