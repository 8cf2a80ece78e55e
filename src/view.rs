//! Render-safe view models.
//!
//! These functions never fail: missing or malformed input is replaced with
//! the placeholder constants below, so every image field is always a URL.

use serde::Serialize;

use crate::deezer::Track;
use crate::tmdb::MovieSummary;

pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";
pub const COVER_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/200x200/667eea/ffffff?text=♪";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

pub const DEFAULT_ERROR_TITLE: &str = "Oops! Something went wrong";
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCardVm {
    pub title: String,
    pub poster_url: String,
    pub rating_text: String,
    pub year_text: String,
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicCardVm {
    pub title: String,
    pub artist_name: String,
    pub album_title: String,
    pub cover_url: String,
    pub duration_text: String,
    pub rank: i64,
    pub preview_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorNoticeVm {
    pub title: String,
    pub message: String,
    pub show_retry: bool,
}

pub fn to_movie_card_vm(movie: &MovieSummary) -> MovieCardVm {
    let poster_url = match non_empty(movie.poster_path.as_deref()) {
        Some(path) => format!("{}{}", TMDB_IMAGE_BASE, path),
        None => POSTER_PLACEHOLDER_URL.to_string(),
    };

    MovieCardVm {
        title: movie.title.clone(),
        poster_url,
        rating_text: movie.vote_average.to_string(),
        // Truncated, not parsed: a malformed date just yields odd text.
        year_text: movie.release_date.chars().take(4).collect(),
        overview: movie.overview.clone(),
    }
}

pub fn to_music_card_vm(track: &Track) -> MusicCardVm {
    let album = track.album.as_ref();
    let artist = track.artist.as_ref();

    MusicCardVm {
        title: track.title.clone(),
        artist_name: non_empty(artist.and_then(|a| a.name.as_deref()))
            .unwrap_or(UNKNOWN_ARTIST)
            .to_string(),
        album_title: non_empty(album.and_then(|a| a.title.as_deref()))
            .unwrap_or(UNKNOWN_ALBUM)
            .to_string(),
        cover_url: non_empty(album.and_then(|a| a.cover_medium.as_deref()))
            .unwrap_or(COVER_PLACEHOLDER_URL)
            .to_string(),
        duration_text: format_duration(track.duration),
        rank: track.rank,
        preview_url: track.preview.clone(),
        link: track.link.clone(),
    }
}

pub fn to_error_notice_vm(
    title: Option<&str>,
    message: Option<&str>,
    show_retry: bool,
) -> ErrorNoticeVm {
    ErrorNoticeVm {
        title: non_empty(title).unwrap_or(DEFAULT_ERROR_TITLE).to_string(),
        message: non_empty(message).unwrap_or(DEFAULT_ERROR_MESSAGE).to_string(),
        show_retry,
    }
}

/// Formats seconds as `m:ss`.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
