// In memory movie catalog. Movies are handed out as shared references so showtimes can point at them.
// Titles are unique: the duplicate check and the insert happen under one write lock.

use crate::core::movie::{Media, Movie};
use crate::core::ports::{MovieCatalog, RepositoryError};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMovieCatalog {
    movies: RwLock<Vec<Arc<Movie>>>,
    is_offline: bool,
}

impl InMemoryMovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Movie catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MovieCatalog for InMemoryMovieCatalog {
    async fn add(&self, movie: Movie) -> Result<Arc<Movie>, RepositoryError> {
        self.ensure_online()?;

        let mut movies = self.movies.write().await;
        if movies.iter().any(|m| m.title() == movie.title()) {
            return Err(RepositoryError::DuplicateTitle(movie.title().to_string()));
        }
        let movie = Arc::new(movie);
        tracing::info!(title = movie.title(), "movie added to catalog");
        movies.push(Arc::clone(&movie));
        Ok(movie)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Arc<Movie>>, RepositoryError> {
        self.ensure_online()?;

        Ok(self
            .movies
            .read()
            .await
            .iter()
            .find(|m| m.title() == title)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Arc<Movie>>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.movies.read().await.clone())
    }

    async fn remove(&self, title: &str) -> Result<Option<Arc<Movie>>, RepositoryError> {
        self.ensure_online()?;

        let mut movies = self.movies.write().await;
        let Some(index) = movies.iter().position(|m| m.title() == title) else {
            return Ok(None);
        };
        tracing::info!(title, "movie removed from catalog");
        Ok(Some(movies.remove(index)))
    }
}

#[cfg(test)]
mod in_memory_movie_catalog_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn movie() -> Movie {
        Movie::new("La La Land", "Musical", "2:08", "PG").unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hand_out_the_stored_reference(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        let added = catalog.add(movie).await.unwrap();
        let found = catalog.find_by_title("La La Land").await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&added, &found));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_movies_in_insertion_order(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        catalog.add(movie).await.unwrap();
        catalog
            .add(Movie::new("Parasite", "Thriller", "2:12", "R").unwrap())
            .await
            .unwrap();
        let titles: Vec<_> = catalog
            .list()
            .await
            .unwrap()
            .iter()
            .map(|m| m.title().to_string())
            .collect();
        assert_eq!(titles, vec!["La La Land", "Parasite"]);
        assert!(catalog.find_by_title("Inception").await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_movie_with_the_same_title(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        let first = catalog.add(movie).await.unwrap();
        let result = catalog
            .add(Movie::new("La La Land", "Romance", "2:00", "PG-13").unwrap())
            .await;
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::DuplicateTitle("La La Land".into())
        );
        assert_eq!(catalog.list().await.unwrap().len(), 1);
        let found = catalog.find_by_title("La La Land").await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &found));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_a_movie_by_title(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        let added = catalog.add(movie).await.unwrap();
        catalog
            .add(Movie::new("Parasite", "Thriller", "2:12", "R").unwrap())
            .await
            .unwrap();

        let removed = catalog.remove("La La Land").await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&added, &removed));
        assert!(catalog.find_by_title("La La Land").await.unwrap().is_none());
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_when_removing_an_unknown_title(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        catalog.add(movie).await.unwrap();
        assert!(catalog.remove("Inception").await.unwrap().is_none());
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_a_title_again_after_removal(movie: Movie) {
        let catalog = InMemoryMovieCatalog::new();
        catalog.add(movie.clone()).await.unwrap();
        catalog.remove("La La Land").await.unwrap();
        assert!(catalog.add(movie).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_catalog_is_offline(movie: Movie) {
        let mut catalog = InMemoryMovieCatalog::new();
        catalog.toggle_offline();
        assert_eq!(
            catalog.add(movie).await.unwrap_err(),
            RepositoryError::Backend("Movie catalog offline".into())
        );
        assert_eq!(
            catalog.remove("La La Land").await.unwrap_err(),
            RepositoryError::Backend("Movie catalog offline".into())
        );
    }
}
