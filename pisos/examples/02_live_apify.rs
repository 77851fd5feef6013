use std::sync::Arc;

use pisos::{JsonLinesSink, Pisos, TransportOptions};
use pisos_apify::ApifyConnector;

// Requires real platform credentials:
//   APIFY_TOKEN=...  APIFY_ACTOR_ID=user~idealista-scraper  cargo run --example 02_live_apify
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("APIFY_TOKEN")?;
    let actor_id = std::env::var("APIFY_ACTOR_ID")?;

    let connector = ApifyConnector::builder()
        .token(token)
        .actor_id(actor_id)
        .build()?;

    let pisos = Pisos::builder()
        .with_connector(Arc::new(connector))
        .transport(TransportOptions::with_proxy_groups(["RESIDENTIAL"]))
        .build()?;

    // Payload comes from the command line, if given; defaults apply otherwise.
    let raw = std::env::args().nth(1);
    let mut sink = JsonLinesSink::new(std::io::stdout());
    let report = pisos.run_json(raw.as_deref(), &mut sink).await?;

    eprintln!(
        "relayed {} listings for {}",
        report.count(),
        report.spec.city
    );
    Ok(())
}
