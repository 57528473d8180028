// Shared movies for tests. Each call returns a fresh shared reference.

use crate::core::movie::Movie;
use std::sync::Arc;

pub fn inception() -> Arc<Movie> {
    Arc::new(
        Movie::with_details("Inception", "Sci-Fi", 148, "PG-13", "Christopher Nolan", 2010)
            .unwrap(),
    )
}

pub fn parasite() -> Arc<Movie> {
    Arc::new(Movie::with_details("Parasite", "Thriller", 132, "R", "Bong Joon-ho", 2019).unwrap())
}
