//! Catalog query state for the games listing.
//!
//! A search term takes precedence over a genre filter; with neither set the
//! full listing is requested. Picking a genre clears the search so the two
//! never fight over the endpoint.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api;

/// The inputs that decide which catalog endpoint is fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub genre: String,
}

impl CatalogQuery {
    /// Endpoint to fetch for this query.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let search = self.search.trim();
        if !search.is_empty() {
            return api::search_endpoint(search);
        }
        if !self.genre.is_empty() {
            return api::genre_endpoint(&self.genre);
        }
        api::GAMES.to_owned()
    }

    /// Select a genre (empty for all genres) and drop any search term.
    #[must_use]
    pub fn with_genre(&self, genre: impl Into<String>) -> Self {
        Self { search: String::new(), genre: genre.into() }
    }

    #[must_use]
    pub fn heading(&self) -> String {
        let search = self.search.trim();
        if !search.is_empty() {
            format!("Results for \"{search}\"")
        } else if !self.genre.is_empty() {
            format!("{} Games", self.genre)
        } else {
            "Featured Games".to_owned()
        }
    }
}

/// Empty-result copy for the listing grid.
#[must_use]
pub fn empty_listing_message(query: &CatalogQuery) -> &'static str {
    if query.search.trim().is_empty() && query.genre.is_empty() {
        "No games are available right now."
    } else {
        "No games match your filters."
    }
}
