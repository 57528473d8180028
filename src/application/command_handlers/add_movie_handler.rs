use crate::application::errors::ApplicationError;
use crate::core::decider::add_movie::{AddMovie, decide_add_movie};
use crate::core::movie::Movie;
use crate::core::ports::MovieCatalog;
use std::sync::Arc;

pub struct AddMovieHandler<TCatalog>
where
    TCatalog: MovieCatalog + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> AddMovieHandler<TCatalog>
where
    TCatalog: MovieCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, command: AddMovie) -> Result<Arc<Movie>, ApplicationError> {
        let movie = decide_add_movie(command).inspect_err(|e| {
            tracing::warn!(error = %e, "movie rejected");
        })?;
        Ok(self.catalog.add(movie).await?)
    }
}
