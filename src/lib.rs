pub mod catalog;
pub mod config;
mod de;
pub mod deezer;
pub mod error;
mod http;
pub mod soundtrack;
pub mod tmdb;
#[cfg(test)]
mod test_utils;
pub mod view;

pub use catalog::{AudioCatalog, MovieCatalog};
pub use config::Config;
pub use deezer::{DeezerClient, Track};
pub use error::{AppError, Result};
pub use soundtrack::{Exploration, MovieExplorer, SoundtrackResolver};
pub use tmdb::{MovieQuery, MovieSummary, TmdbClient};
pub use view::{MovieCardVm, MusicCardVm};
