use super::*;

fn listing_movie_json() -> String {
    serde_json::json!({
        "id": 603,
        "title": "The Matrix",
        "overview": "A computer hacker learns the truth.",
        "poster_path": "/matrix.jpg",
        "backdrop_path": null,
        "release_date": "1999-03-30",
        "vote_average": 8.2,
        "genre_ids": [28, 878]
    })
    .to_string()
}

fn detail_movie_json() -> String {
    serde_json::json!({
        "id": 603,
        "title": "The Matrix",
        "overview": "A computer hacker learns the truth.",
        "poster_path": "/matrix.jpg",
        "backdrop_path": "/matrix_bd.jpg",
        "release_date": "1999-03-30",
        "vote_average": 8.2,
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
        "runtime": 136,
        "tagline": "The fight for the future begins.",
        "homepage": "https://example.test/matrix",
        "status": "Released",
        "budget": 63000000u64,
        "revenue": 463517383u64
    })
    .to_string()
}

// =============================================================================
// Movie deserialization
// =============================================================================

#[test]
fn listing_record_deserializes() {
    let movie: Movie = serde_json::from_str(&listing_movie_json()).unwrap();
    assert_eq!(movie.id, 603);
    assert_eq!(movie.poster_path.as_deref(), Some("/matrix.jpg"));
    assert_eq!(movie.backdrop_path, None);
    assert_eq!(movie.genre_ids, Some(vec![28, 878]));
    assert_eq!(movie.runtime, None);
}

#[test]
fn detail_record_deserializes() {
    let movie: Movie = serde_json::from_str(&detail_movie_json()).unwrap();
    assert_eq!(movie.runtime, Some(136));
    assert_eq!(movie.status.as_deref(), Some("Released"));
    assert_eq!(movie.genres.as_ref().map(Vec::len), Some(2));
}

#[test]
fn sparse_record_fills_defaults() {
    // TMDB omits fields on barely-catalogued titles.
    let movie: Movie = serde_json::from_str(
        "{\"id\":1,\"title\":\"Obscure\",\"poster_path\":null,\"backdrop_path\":null}",
    )
    .unwrap();
    assert_eq!(movie.overview, "");
    assert_eq!(movie.release_date, "");
    assert!((movie.vote_average - 0.0).abs() < f64::EPSILON);
}

// =============================================================================
// genre_names
// =============================================================================

#[test]
fn genre_names_prefers_embedded_genres() {
    let movie: Movie = serde_json::from_str(&detail_movie_json()).unwrap();
    assert_eq!(movie.genre_names(), vec!["Action", "Science Fiction"]);
}

#[test]
fn genre_names_falls_back_to_id_table() {
    let movie: Movie = serde_json::from_str(&listing_movie_json()).unwrap();
    assert_eq!(movie.genre_names(), vec!["Action", "Sci-Fi"]);
}

#[test]
fn genre_names_without_either_is_empty() {
    let movie: Movie = serde_json::from_str(
        "{\"id\":1,\"title\":\"Bare\",\"poster_path\":null,\"backdrop_path\":null}",
    )
    .unwrap();
    assert!(movie.genre_names().is_empty());
}

// =============================================================================
// MoviePage
// =============================================================================

#[test]
fn page_deserializes() {
    let json = serde_json::json!({
        "page": 2,
        "results": [serde_json::from_str::<serde_json::Value>(&listing_movie_json()).unwrap()],
        "total_pages": 10,
        "total_results": 194
    })
    .to_string();
    let page: MoviePage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.total_results, 194);
}

#[test]
fn empty_page_shape() {
    let page = MoviePage::empty();
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_results, 0);
}

// =============================================================================
// ImageSize
// =============================================================================

#[test]
fn image_size_segments() {
    assert_eq!(ImageSize::W300.as_str(), "w300");
    assert_eq!(ImageSize::W500.as_str(), "w500");
    assert_eq!(ImageSize::Original.as_str(), "original");
    assert_eq!(ImageSize::default(), ImageSize::W500);
}
