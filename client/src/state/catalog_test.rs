use super::*;

#[test]
fn empty_query_fetches_full_listing() {
    assert_eq!(CatalogQuery::default().endpoint(), "/api/games");
}

#[test]
fn search_wins_over_genre() {
    let query = CatalogQuery { search: "halo".to_owned(), genre: "Shooter".to_owned() };
    assert_eq!(query.endpoint(), "/api/games/search/halo");
}

#[test]
fn whitespace_search_is_ignored() {
    let query = CatalogQuery { search: "   ".to_owned(), genre: "RPG".to_owned() };
    assert_eq!(query.endpoint(), "/api/games/filter/genre/RPG");
}

#[test]
fn search_is_trimmed_and_encoded() {
    let query = CatalogQuery { search: "  mario kart ".to_owned(), genre: String::new() };
    assert_eq!(query.endpoint(), "/api/games/search/mario%20kart");
}

#[test]
fn selecting_genre_clears_search() {
    let query = CatalogQuery { search: "zelda".to_owned(), genre: String::new() }.with_genre("Puzzle");
    assert_eq!(query, CatalogQuery { search: String::new(), genre: "Puzzle".to_owned() });
}

#[test]
fn heading_reflects_query() {
    assert_eq!(CatalogQuery::default().heading(), "Featured Games");
    assert_eq!(CatalogQuery::default().with_genre("RPG").heading(), "RPG Games");
    assert_eq!(CatalogQuery { search: "doom".to_owned(), genre: String::new() }.heading(), "Results for \"doom\"");
}

#[test]
fn empty_listing_message_depends_on_filters() {
    assert_eq!(empty_listing_message(&CatalogQuery::default()), "No games are available right now.");
    assert_eq!(
        empty_listing_message(&CatalogQuery::default().with_genre("RPG")),
        "No games match your filters."
    );
}
