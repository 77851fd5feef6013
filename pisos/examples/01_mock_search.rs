use std::sync::Arc;

use pisos::{JsonLinesSink, Pisos, TargetSchema};
use pisos_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Build the relay over the CI-safe mock connector.
    let pisos = Pisos::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .target_schema(TargetSchema::Idealista)
        .build()?;

    // 2. Run a rental search; listings are published as NDJSON on stdout.
    let payload = Some(r#"{"city": "Barcelona", "maxPrice": 1500, "forRent": true}"#);
    let mut sink = JsonLinesSink::new(std::io::stdout());
    let report = pisos.run_json(payload, &mut sink).await?;

    eprintln!(
        "relayed {} listings for {}",
        report.count(),
        report.spec.city
    );
    Ok(())
}
