use pisos::input::{RawSearchPayload, default_city, default_for_rent, default_max_price, resolve};
use pisos::{SearchDefaults, SearchSpec};

#[test]
fn city_falls_back_when_absent_or_blank() {
    let d = SearchDefaults::default();
    assert_eq!(default_city(None, &d), "madrid");
    assert_eq!(default_city(Some(String::new()), &d), "madrid");
    assert_eq!(default_city(Some("   ".into()), &d), "madrid");
    // A provided city is kept verbatim; casing is the normalizer's business.
    assert_eq!(default_city(Some("Barcelona".into()), &d), "Barcelona");
}

#[test]
fn max_price_falls_back_only_when_absent() {
    let d = SearchDefaults::default();
    assert_eq!(default_max_price(None, &d), Some(200_000));
    assert_eq!(default_max_price(Some(150_000), &d), Some(150_000));
    // An explicit zero means "no ceiling", not "use the default ceiling".
    assert_eq!(default_max_price(Some(0), &d), None);
}

#[test]
fn for_rent_defaults_to_sale() {
    let d = SearchDefaults::default();
    assert!(!default_for_rent(None, &d));
    assert!(default_for_rent(Some(true), &d));
}

#[test]
fn missing_payload_resolves_to_the_full_default_spec() {
    let spec = resolve(RawSearchPayload::from_json(None), &SearchDefaults::default());
    assert_eq!(
        spec,
        SearchSpec {
            city: "madrid".into(),
            max_price: Some(200_000),
            for_rent: false,
        }
    );
}

#[test]
fn malformed_payload_coerces_to_empty_instead_of_failing() {
    let payload = RawSearchPayload::from_json(Some("{not json"));
    assert_eq!(payload, RawSearchPayload::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let payload = RawSearchPayload::from_json(Some(
        r#"{"city": "Valencia", "debug": true, "page": 4}"#,
    ));
    assert_eq!(payload.city.as_deref(), Some("Valencia"));
    assert_eq!(payload.max_price, None);
    assert_eq!(payload.for_rent, None);
}

#[test]
fn host_key_spellings_are_honored() {
    let payload = RawSearchPayload::from_json(Some(
        r#"{"city": "Barcelona", "maxPrice": 150000, "forRent": true}"#,
    ));
    assert_eq!(payload.max_price, Some(150_000));
    assert_eq!(payload.for_rent, Some(true));
}

#[test]
fn custom_defaults_apply_per_field() {
    let d = SearchDefaults {
        city: "sevilla".into(),
        max_price: 90_000,
        for_rent: true,
    };
    let spec = resolve(RawSearchPayload::default(), &d);
    assert_eq!(spec.city, "sevilla");
    assert_eq!(spec.max_price, Some(90_000));
    assert!(spec.for_rent);
}
