use super::*;
use crate::catalog::config::CatalogTimeouts;

/// Client aimed at a port nothing listens on; any network call fails fast.
fn offline_client() -> CatalogClient {
    CatalogClient::new(CatalogConfig {
        api_key: "test-key".to_owned(),
        base_url: "http://127.0.0.1:9".to_owned(),
        image_base_url: "https://image.tmdb.org/t/p".to_owned(),
        timeouts: CatalogTimeouts { request_secs: 2, connect_secs: 2 },
    })
    .unwrap()
}

// =============================================================================
// search short-circuit
// =============================================================================

#[tokio::test]
async fn blank_search_resolves_without_network() {
    let page = offline_client().search("", 1).await.unwrap();
    assert_eq!(page, MoviePage::empty());
}

#[tokio::test]
async fn whitespace_search_resolves_without_network() {
    let page = offline_client().search("   \t", 3).await.unwrap();
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
    assert_eq!(page.total_results, 0);
}

// =============================================================================
// error surface
// =============================================================================

#[tokio::test]
async fn transport_failure_surfaces_request_error() {
    let err = offline_client().search("dune", 1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}

#[tokio::test]
async fn movie_transport_failure_surfaces_request_error() {
    let err = offline_client().movie(603).await.unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}

// =============================================================================
// movies_by_ids
// =============================================================================

#[tokio::test]
async fn batch_fetch_of_nothing_is_empty_without_network() {
    assert!(offline_client().movies_by_ids(&[]).await.is_empty());
}

#[tokio::test]
async fn batch_fetch_drops_unreachable_ids() {
    // Every fetch fails against the offline client; tolerance means an
    // empty result, not an error.
    assert!(offline_client().movies_by_ids(&[1, 2, 3]).await.is_empty());
}

// =============================================================================
// image_url
// =============================================================================

#[test]
fn image_url_joins_base_size_and_path() {
    let client = offline_client();
    assert_eq!(
        client.image_url(Some("/abc.jpg"), ImageSize::W500),
        "https://image.tmdb.org/t/p/w500/abc.jpg"
    );
    assert_eq!(
        client.image_url(Some("/abc.jpg"), ImageSize::W300),
        "https://image.tmdb.org/t/p/w300/abc.jpg"
    );
    assert_eq!(
        client.image_url(Some("/abc.jpg"), ImageSize::Original),
        "https://image.tmdb.org/t/p/original/abc.jpg"
    );
}

#[test]
fn image_url_without_path_is_the_placeholder() {
    assert_eq!(offline_client().image_url(None, ImageSize::default()), PLACEHOLDER_ASSET);
}
