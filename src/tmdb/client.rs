use reqwest::{Client, Request};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::http::fetch_json;
use crate::tmdb::models::{MovieDetails, MoviePage};

const LANGUAGE: &str = "en";

/// TMDB client. Authenticates with the `api_key` query parameter.
pub struct TmdbClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.clone(),
        }
    }

    pub async fn get_popular_movies(&self, page: u32) -> Result<MoviePage> {
        let request = self.popular_request(page)?;
        let movies: MoviePage = fetch_json(&self.http_client, request).await?;
        info!("Fetched {} popular movies (page {})", movies.results.len(), page);
        Ok(movies)
    }

    pub async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        debug!("Searching movies for '{}' (page {})", query, page);
        let request = self.search_request(query, page)?;
        let movies: MoviePage = fetch_json(&self.http_client, request).await?;
        info!("Found {} movies for '{}'", movies.results.len(), query);
        Ok(movies)
    }

    pub async fn get_movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let request = self.details_request(movie_id)?;
        fetch_json(&self.http_client, request).await
    }

    /// The soundtrack endpoint has no documented schema, so the body is
    /// returned undecoded beyond JSON.
    pub async fn get_movie_soundtrack(&self, movie_id: u64) -> Result<serde_json::Value> {
        let request = self.soundtrack_request(movie_id)?;
        fetch_json(&self.http_client, request).await
    }

    fn popular_request(&self, page: u32) -> Result<Request> {
        let page = page.to_string();
        Ok(self
            .http_client
            .get(format!("{}/movie/popular", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("page", page.as_str()),
                ("language", LANGUAGE),
            ])
            .build()?)
    }

    fn search_request(&self, query: &str, page: u32) -> Result<Request> {
        let page = page.to_string();
        Ok(self
            .http_client
            .get(format!("{}/search/movie", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("page", page.as_str()),
                ("language", LANGUAGE),
            ])
            .build()?)
    }

    fn details_request(&self, movie_id: u64) -> Result<Request> {
        Ok(self
            .http_client
            .get(format!("{}/movie/{}", self.base_url, movie_id))
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .build()?)
    }

    fn soundtrack_request(&self, movie_id: u64) -> Result<Request> {
        Ok(self
            .http_client
            .get(format!("{}/movie/{}/soundtrack", self.base_url, movie_id))
            .query(&[("api_key", self.api_key.as_str())])
            .build()?)
    }
}
