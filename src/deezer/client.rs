use reqwest::{Client, Request};
use tracing::{debug, info};

use crate::config::Config;
use crate::deezer::adapter;
use crate::deezer::models::{Album, Artist, SearchPage, Track, TrackDetails};
use crate::error::Result;
use crate::http::fetch_json;

pub const RAPIDAPI_HOST: &str = "deezerdevs-deezer.p.rapidapi.com";

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

/// Deezer client behind the RapidAPI gateway.
///
/// Unlike TMDB, credentials travel in headers; the query string only ever
/// carries the search text.
pub struct DeezerClient {
    http_client: Client,
    gateway_key: String,
    base_url: String,
}

impl DeezerClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            gateway_key: config.rapidapi_key.clone(),
            base_url: config.deezer_base_url.clone(),
        }
    }

    pub async fn search_tracks(&self, query: &str) -> Result<SearchPage<Track>> {
        debug!("Searching tracks for '{}'", query);
        let request = self.search_request("search", query)?;
        let page: SearchPage<Track> = fetch_json(&self.http_client, request).await?;
        info!("Found {} tracks for '{}'", page.data.len(), query);
        Ok(page)
    }

    pub async fn search_artist(&self, query: &str) -> Result<SearchPage<Artist>> {
        let request = self.search_request("search/artist", query)?;
        fetch_json(&self.http_client, request).await
    }

    pub async fn search_album(&self, query: &str) -> Result<SearchPage<Album>> {
        let request = self.search_request("search/album", query)?;
        fetch_json(&self.http_client, request).await
    }

    pub async fn get_track_details(&self, track_id: u64) -> Result<Track> {
        let request = self.track_request(track_id)?;
        let details: TrackDetails = fetch_json(&self.http_client, request).await?;
        adapter::track_from_details(details)
    }

    fn search_request(&self, endpoint: &str, query: &str) -> Result<Request> {
        Ok(self
            .http_client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(&[("q", query)])
            .header(KEY_HEADER, &self.gateway_key)
            .header(HOST_HEADER, RAPIDAPI_HOST)
            .build()?)
    }

    fn track_request(&self, track_id: u64) -> Result<Request> {
        Ok(self
            .http_client
            .get(format!("{}/track/{}", self.base_url, track_id))
            .header(KEY_HEADER, &self.gateway_key)
            .header(HOST_HEADER, RAPIDAPI_HOST)
            .build()?)
    }
}
