//! Unwraps Deezer response envelopes.
//!
//! Deezer nests list results one level down under `data`, and reports
//! failures as an `error` object with status 200. This is the only place
//! that knows about those shapes.

use serde::de::Error as _;

use crate::deezer::models::{SearchPage, Track, TrackDetails};
use crate::error::{AppError, Result};

pub fn tracks_from_search(page: SearchPage<Track>) -> Vec<Track> {
    page.data
}

/// A body carrying an `error` object is a decode failure, not a blank track.
pub fn track_from_details(details: TrackDetails) -> Result<Track> {
    match details.error {
        Some(err) => Err(AppError::Decode(serde_json::Error::custom(format!(
            "provider returned {} ({}): {}",
            err.kind, err.code, err.message
        )))),
        None => Ok(details.track),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_from_search_unwraps_data() {
        let page: SearchPage<Track> = serde_json::from_str(
            r#"{"data": [{"id": 1, "title": "Spybreak!"}], "total": 1}"#,
        )
        .unwrap();

        let tracks = tracks_from_search(page);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Spybreak!");
    }

    #[test]
    fn test_track_from_details_rejects_error_object() {
        let details: TrackDetails = serde_json::from_str(
            r#"{"error": {"type": "DataException", "message": "no data", "code": 800}}"#,
        )
        .unwrap();

        let err = track_from_details(details).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().contains("DataException"));
    }

    #[test]
    fn test_track_from_details_passes_track_through() {
        let details: TrackDetails =
            serde_json::from_str(r#"{"id": 1, "title": "Spybreak!"}"#).unwrap();
        assert_eq!(track_from_details(details).unwrap().title, "Spybreak!");
    }
}
