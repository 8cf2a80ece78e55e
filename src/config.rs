use url::Url;

use crate::error::{AppError, Result};

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEEZER_API_BASE: &str = "https://deezerdevs-deezer.p.rapidapi.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub rapidapi_key: String,
    pub tmdb_base_url: String,
    pub deezer_base_url: String,
}

impl Config {
    pub fn new(tmdb_api_key: impl Into<String>, rapidapi_key: impl Into<String>) -> Self {
        Self {
            tmdb_api_key: tmdb_api_key.into(),
            rapidapi_key: rapidapi_key.into(),
            tmdb_base_url: TMDB_API_BASE.to_string(),
            deezer_base_url: DEEZER_API_BASE.to_string(),
        }
    }

    /// Reads credentials from the environment (and `.env`, if present).
    ///
    /// Missing keys are left empty rather than rejected: the providers answer
    /// with 401/403 in that case. Use [`Config::get_missing_config`] to warn early.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let tmdb_api_key = std::env::var("TMDB_API_KEY").unwrap_or_default();
        let rapidapi_key = std::env::var("RAPIDAPI_KEY").unwrap_or_default();

        let tmdb_base_url =
            std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| TMDB_API_BASE.to_string());
        let deezer_base_url =
            std::env::var("DEEZER_BASE_URL").unwrap_or_else(|_| DEEZER_API_BASE.to_string());

        Ok(Self {
            tmdb_api_key,
            rapidapi_key,
            tmdb_base_url: parse_base_url("TMDB_BASE_URL", &tmdb_base_url)?,
            deezer_base_url: parse_base_url("DEEZER_BASE_URL", &deezer_base_url)?,
        })
    }

    pub fn with_base_urls(
        mut self,
        tmdb_base_url: impl Into<String>,
        deezer_base_url: impl Into<String>,
    ) -> Self {
        self.tmdb_base_url = tmdb_base_url.into();
        self.deezer_base_url = deezer_base_url.into();
        self
    }

    pub fn get_missing_config(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.tmdb_api_key.is_empty() {
            missing.push("TMDB_API_KEY".to_string());
        }
        if self.rapidapi_key.is_empty() {
            missing.push("RAPIDAPI_KEY".to_string());
        }

        missing
    }
}

fn parse_base_url(name: &str, value: &str) -> Result<String> {
    let url = Url::parse(value)
        .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", name, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!("{} must be an http(s) URL", name)));
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_strips_trailing_slash() {
        assert_eq!(
            parse_base_url("TMDB_BASE_URL", "https://api.themoviedb.org/3/").unwrap(),
            "https://api.themoviedb.org/3"
        );
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("TMDB_BASE_URL", "not a url"),
            Err(AppError::Config(_))
        ));
        assert!(parse_base_url("DEEZER_BASE_URL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_new_uses_provider_defaults() {
        let config = Config::new("tmdb", "rapid");
        assert_eq!(config.tmdb_base_url, TMDB_API_BASE);
        assert_eq!(config.deezer_base_url, DEEZER_API_BASE);
        assert!(config.get_missing_config().is_empty());
    }

    #[test]
    fn test_missing_config_lists_empty_keys() {
        let config = Config::new("", "");
        assert_eq!(
            config.get_missing_config(),
            vec!["TMDB_API_KEY".to_string(), "RAPIDAPI_KEY".to_string()]
        );
    }
}
