use std::sync::Arc;

use pisos::{MemorySink, Pisos, PisosError, RawSearchPayload, ScrapeConnector};
use pisos_mock::MockConnector;

fn mock_relay() -> Pisos {
    Pisos::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn barcelona_rent_scenario_relays_all_records_verbatim() {
    let pisos = mock_relay();
    let mut sink = MemorySink::new();

    let report = pisos
        .run_json(
            Some(r#"{"city": "Barcelona", "maxPrice": 150000, "forRent": true}"#),
            &mut sink,
        )
        .await
        .unwrap();

    assert_eq!(report.spec.city, "Barcelona");
    assert_eq!(report.spec.max_price, Some(150_000));
    assert!(report.spec.for_rent);

    assert_eq!(report.count(), 3);
    // Identity map: the published sequence equals the fetched one exactly.
    assert_eq!(sink.records, report.records);
    assert_eq!(sink.records[0]["title"], "Piso reformado en Gràcia");
    assert_eq!(sink.records[2]["title"], "Dúplex en el Born");
}

#[tokio::test]
async fn empty_payload_runs_the_default_madrid_sale_search() {
    let pisos = mock_relay();
    let mut sink = MemorySink::new();

    let report = pisos.run_json(None, &mut sink).await.unwrap();

    assert_eq!(report.spec.city, "madrid");
    assert_eq!(report.spec.max_price, Some(200_000));
    assert!(!report.spec.for_rent);
    assert_eq!(report.count(), 2);
    assert_eq!(sink.records.len(), 2);
}

#[tokio::test]
async fn unknown_city_completes_successfully_with_empty_output() {
    let pisos = mock_relay();
    let mut sink = MemorySink::new();

    let report = pisos
        .run(
            RawSearchPayload {
                city: Some("Cuenca".into()),
                ..RawSearchPayload::default()
            },
            &mut sink,
        )
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(sink.records.is_empty());
}

#[tokio::test]
async fn remote_failure_propagates_and_publishes_nothing() {
    let pisos = mock_relay();
    let mut sink = MemorySink::new();

    let err = pisos
        .run(
            RawSearchPayload {
                city: Some("FAIL".into()),
                ..RawSearchPayload::default()
            },
            &mut sink,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, PisosError::Connector { .. }));
    assert!(sink.records.is_empty());
}

#[tokio::test]
async fn builder_rejects_missing_connector() {
    let err = Pisos::builder().build().unwrap_err();
    assert!(matches!(err, PisosError::InvalidArg(_)));
}

#[tokio::test]
async fn builder_rejects_connectors_without_search() {
    struct NoSearch;
    impl ScrapeConnector for NoSearch {
        fn name(&self) -> &'static str {
            "no-search"
        }
        fn vendor(&self) -> &'static str {
            "None"
        }
    }

    let err = Pisos::builder()
        .with_connector(Arc::new(NoSearch))
        .build()
        .unwrap_err();
    assert!(matches!(err, PisosError::Unsupported { .. }));
}
