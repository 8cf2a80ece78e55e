use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::error::{AppError, Result};

/// A validated movie search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub query: String,
    pub page: u32,
}

impl MovieQuery {
    pub fn new(query: impl Into<String>, page: u32) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(AppError::InvalidQuery("search query is empty".into()));
        }
        if page < 1 {
            return Err(AppError::InvalidQuery(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        Ok(Self { query, page })
    }
}

/// Explicit nulls are absorbed like missing fields, so one sparse entry
/// never fails a whole page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
}

/// TMDB list envelope shared by `/movie/popular` and `/search/movie`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[cfg(test)]
impl MovieSummary {
    pub fn mock(title: &str) -> Self {
        Self {
            id: 603,
            title: title.to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
            vote_average: 8.7,
            release_date: "1999-03-31".to_string(),
            overview: "A revolutionary movie.".to_string(),
        }
    }
}
