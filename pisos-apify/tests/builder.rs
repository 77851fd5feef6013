use pisos_apify::ApifyConnector;
use pisos_core::{PisosError, ScrapeConnector};

#[test]
fn builder_requires_token_and_actor_id() {
    let err = ApifyConnector::builder().build().unwrap_err();
    assert!(matches!(err, PisosError::InvalidArg(_)));

    let err = ApifyConnector::builder().token("tok").build().unwrap_err();
    assert!(matches!(err, PisosError::InvalidArg(_)));
}

#[test]
fn built_connector_exposes_the_search_capability() {
    let connector = ApifyConnector::builder()
        .token("tok")
        .actor_id("user~idealista-scraper")
        .build()
        .unwrap();
    assert_eq!(connector.name(), "pisos-apify");
    assert_eq!(connector.vendor(), "Apify");
    assert!(connector.as_search_provider().is_some());
}
