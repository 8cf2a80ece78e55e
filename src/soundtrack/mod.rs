pub mod explorer;
pub mod resolver;

pub use explorer::{Exploration, MovieExplorer};
pub use resolver::{soundtrack_query, SoundtrackResolver};
