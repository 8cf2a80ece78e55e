use serde::Serialize;
use tracing::info;

use crate::catalog::{AudioCatalog, MovieCatalog};
use crate::error::Result;
use crate::soundtrack::resolver::SoundtrackResolver;
use crate::tmdb::{adapter, MovieQuery};
use crate::view::{to_movie_card_vm, to_music_card_vm, MovieCardVm, MusicCardVm};

/// Outcome of one search-then-soundtrack flow, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Exploration {
    pub movies: Vec<MovieCardVm>,
    /// The movie the soundtrack was looked up for (first search hit).
    pub featured: Option<MovieCardVm>,
    /// `None` when there was nothing to look up or the lookup failed.
    pub soundtrack: Option<Vec<MusicCardVm>>,
}

pub struct MovieExplorer<M, A> {
    movies: M,
    resolver: SoundtrackResolver<A>,
}

impl<M: MovieCatalog, A: AudioCatalog> MovieExplorer<M, A> {
    pub fn new(movies: M, audio: A) -> Self {
        Self {
            movies,
            resolver: SoundtrackResolver::new(audio),
        }
    }

    /// Searches the movie catalog, then resolves a soundtrack for the first hit.
    ///
    /// Movie search failures propagate; soundtrack failures only leave
    /// `soundtrack` empty.
    pub async fn explore(&self, query: &MovieQuery) -> Result<Exploration> {
        let page = self.movies.search_movies(&query.query, query.page).await?;
        let summaries = adapter::movies_from_page(page);

        let soundtrack: Option<Vec<MusicCardVm>> = match summaries.first() {
            Some(movie) => self
                .resolver
                .resolve_soundtrack(&movie.title)
                .await
                .map(|tracks| tracks.iter().map(to_music_card_vm).collect()),
            None => None,
        };

        let movies: Vec<MovieCardVm> = summaries.iter().map(to_movie_card_vm).collect();

        info!(
            "Explored '{}': {} movies, soundtrack {}",
            query.query,
            movies.len(),
            if soundtrack.is_some() { "found" } else { "missing" }
        );

        Ok(Exploration {
            featured: movies.first().cloned(),
            movies,
            soundtrack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mocks::{MockMovies, MockTracks, Outcome};
    use crate::deezer::Track;
    use crate::error::AppError;
    use crate::tmdb::MovieSummary;
    use crate::view::COVER_PLACEHOLDER_URL;

    #[tokio::test]
    async fn test_explore_matrix_end_to_end() {
        let explorer = MovieExplorer::new(
            MockMovies::returning(vec![MovieSummary::mock("Matrix")]),
            MockTracks::returning(vec![Track::mock("Spybreak!", "Propellerheads")]),
        );

        let query = MovieQuery::new("Matrix", 1).unwrap();
        let result = explorer.explore(&query).await.unwrap();

        assert_eq!(
            *explorer.movies.calls.lock().unwrap(),
            vec![("Matrix".to_string(), 1)]
        );
        assert_eq!(
            explorer.resolver.audio().queries(),
            vec!["Matrix soundtrack".to_string()]
        );

        assert_eq!(result.featured.as_ref().unwrap().title, "Matrix");
        let soundtrack = result.soundtrack.unwrap();
        assert_eq!(soundtrack.len(), 1);
        assert_eq!(soundtrack[0].title, "Spybreak!");
        assert_ne!(soundtrack[0].cover_url, COVER_PLACEHOLDER_URL);
    }

    #[tokio::test]
    async fn test_audio_failure_leaves_movies_intact() {
        let explorer = MovieExplorer::new(
            MockMovies::returning(vec![MovieSummary::mock("Matrix")]),
            MockTracks::failing(Outcome::Http(503)),
        );

        let query = MovieQuery::new("Matrix", 1).unwrap();
        let result = explorer.explore(&query).await.unwrap();

        assert!(result.soundtrack.is_none());
        assert_eq!(result.movies.len(), 1);
        assert_eq!(result.movies[0], to_movie_card_vm(&MovieSummary::mock("Matrix")));
    }

    #[tokio::test]
    async fn test_movie_failure_propagates() {
        let explorer = MovieExplorer::new(
            MockMovies::failing(Outcome::Http(401)),
            MockTracks::returning(vec![Track::mock("Spybreak!", "Propellerheads")]),
        );

        let query = MovieQuery::new("Matrix", 1).unwrap();
        let err = explorer.explore(&query).await.unwrap_err();

        assert!(matches!(err, AppError::Http { status: 401, .. }));
        assert!(explorer.resolver.audio().queries().is_empty());
    }

    #[tokio::test]
    async fn test_no_movies_skips_soundtrack_lookup() {
        let explorer = MovieExplorer::new(
            MockMovies::returning(Vec::new()),
            MockTracks::returning(Vec::new()),
        );

        let query = MovieQuery::new("zzzz", 2).unwrap();
        let result = explorer.explore(&query).await.unwrap();

        assert!(result.movies.is_empty());
        assert!(result.featured.is_none());
        assert!(result.soundtrack.is_none());
        assert!(explorer.resolver.audio().queries().is_empty());
    }
}
