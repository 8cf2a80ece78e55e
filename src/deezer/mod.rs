pub mod adapter;
pub mod client;
pub mod models;

pub use client::DeezerClient;
pub use models::{
    Album, Artist, ProviderError, SearchPage, Track, TrackAlbum, TrackArtist, TrackDetails,
};
