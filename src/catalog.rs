//! Seams between the orchestration layer and the two catalog clients.
//!
//! The resolver and explorer are generic over these traits so tests can
//! substitute in-memory catalogs for the HTTP clients.

use async_trait::async_trait;

use crate::deezer::{DeezerClient, SearchPage, Track};
use crate::error::Result;
use crate::tmdb::{MoviePage, TmdbClient};

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage>;
}

#[async_trait]
pub trait AudioCatalog: Send + Sync {
    async fn search_tracks(&self, query: &str) -> Result<SearchPage<Track>>;
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        TmdbClient::search_movies(self, query, page).await
    }
}

#[async_trait]
impl AudioCatalog for DeezerClient {
    async fn search_tracks(&self, query: &str) -> Result<SearchPage<Track>> {
        DeezerClient::search_tracks(self, query).await
    }
}
