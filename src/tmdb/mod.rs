pub mod adapter;
pub mod client;
pub mod models;

pub use client::TmdbClient;
pub use models::{Genre, MovieDetails, MoviePage, MovieQuery, MovieSummary};
