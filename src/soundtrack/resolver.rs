use tracing::{info, warn};

use crate::catalog::AudioCatalog;
use crate::deezer::{adapter, Track};
use crate::error::Result;

/// Builds the audio search string for a movie title.
pub fn soundtrack_query(movie_title: &str) -> String {
    format!("{} soundtrack", movie_title)
}

/// Bridges a movie title to the audio catalog.
///
/// This is where audio lookup failures stop: `resolve_soundtrack` logs them
/// and returns `None` so a soundtrack outage never hides a movie result.
pub struct SoundtrackResolver<A> {
    audio: A,
}

impl<A: AudioCatalog> SoundtrackResolver<A> {
    pub fn new(audio: A) -> Self {
        Self { audio }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Strict lookup: propagates network, HTTP and decode failures.
    pub async fn lookup(&self, movie_title: &str) -> Result<Vec<Track>> {
        let query = soundtrack_query(movie_title);
        let page = self.audio.search_tracks(&query).await?;
        Ok(adapter::tracks_from_search(page))
    }

    pub async fn resolve_soundtrack(&self, movie_title: &str) -> Option<Vec<Track>> {
        match self.lookup(movie_title).await {
            Ok(tracks) => {
                info!("Resolved {} soundtrack tracks for '{}'", tracks.len(), movie_title);
                Some(tracks)
            }
            Err(e) => {
                warn!("Error searching soundtrack for '{}': {}", movie_title, e);
                None
            }
        }
    }
}
