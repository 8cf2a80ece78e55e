use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Deezer list envelope. `data` is required so error bodies
/// (`{"error": {...}}`) fail to decode instead of looking like empty results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackArtist {
    pub id: u64,
    pub name: Option<String>,
    pub picture_medium: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackAlbum {
    pub id: u64,
    pub title: Option<String>,
    pub cover_medium: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub artist: Option<TrackArtist>,
    pub album: Option<TrackAlbum>,
    /// Length in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub preview: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

/// Error object Deezer returns, with status 200, in place of a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderError {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub code: i64,
}

/// Body of `/track/{id}`: either a track or an `error` object.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDetails {
    #[serde(default)]
    pub error: Option<ProviderError>,
    #[serde(flatten)]
    pub track: Track,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub picture_medium: Option<String>,
    pub nb_album: u32,
    pub nb_fan: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub cover_medium: Option<String>,
    pub nb_tracks: u32,
    pub artist: Option<TrackArtist>,
}

#[cfg(test)]
impl Track {
    pub fn mock(title: &str, artist: &str) -> Self {
        Self {
            id: 3135556,
            title: title.to_string(),
            artist: Some(TrackArtist {
                id: 27,
                name: Some(artist.to_string()),
                picture_medium: Some("artist.jpg".to_string()),
            }),
            album: Some(TrackAlbum {
                id: 302127,
                title: Some("Album".to_string()),
                cover_medium: Some("cover.jpg".to_string()),
            }),
            duration: 120,
            rank: 1000,
            preview: "preview.mp3".to_string(),
            link: "https://deezer.com/track/1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_tolerates_null_artist_and_album() {
        let track: Track = serde_json::from_str(
            r#"{"id": 1, "title": "Clubbed to Death", "artist": null, "album": null}"#,
        )
        .unwrap();
        assert_eq!(track.title, "Clubbed to Death");
        assert!(track.artist.is_none());
        assert!(track.album.is_none());
        assert_eq!(track.duration, 0);
    }

    #[test]
    fn test_track_absorbs_null_scalars() {
        let track: Track = serde_json::from_str(
            r#"{"id": 2, "title": null, "duration": null, "preview": null, "link": null}"#,
        )
        .unwrap();
        assert_eq!(track.id, 2);
        assert_eq!(track.title, "");
        assert_eq!(track.duration, 0);
        assert_eq!(track.preview, "");
    }

    #[test]
    fn test_error_body_is_not_a_search_page() {
        let body =
            r#"{"error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}}"#;
        assert!(serde_json::from_str::<SearchPage<Track>>(body).is_err());
    }

    #[test]
    fn test_track_details_keeps_error_object() {
        let body = r#"{"error": {"type": "DataException", "message": "no data", "code": 800}}"#;
        let details: TrackDetails = serde_json::from_str(body).unwrap();

        let error = details.error.unwrap();
        assert_eq!(error.kind, "DataException");
        assert_eq!(error.code, 800);
    }

    #[test]
    fn test_track_details_wraps_track() {
        let details: TrackDetails = serde_json::from_str(
            r#"{"id": 3135556, "title": "Harder, Better, Faster, Stronger"}"#,
        )
        .unwrap();
        assert!(details.error.is_none());
        assert_eq!(details.track.id, 3135556);
    }
}
