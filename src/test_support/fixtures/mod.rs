pub mod clients;
pub mod movies;
