//! Unwraps TMDB response envelopes.
//!
//! TMDB nests list results under `results`; callers past this point only
//! see `MovieSummary` values.

use crate::tmdb::models::{MovieDetails, MoviePage, MovieSummary};

pub fn movies_from_page(page: MoviePage) -> Vec<MovieSummary> {
    page.results
}

pub fn summary_from_details(details: MovieDetails) -> MovieSummary {
    details.summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_from_page_keeps_order() {
        let page = MoviePage {
            page: 1,
            results: vec![MovieSummary::mock("Matrix"), MovieSummary::mock("Matrix Reloaded")],
            total_pages: 1,
            total_results: 2,
        };
        let movies = movies_from_page(page);
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].title, "Matrix Reloaded");
    }
}
