use pisos_core::ListingRecord;
use serde_json::{Value, json};

fn record(v: Value) -> ListingRecord {
    match v {
        Value::Object(map) => map,
        _ => ListingRecord::new(),
    }
}

/// Deterministic listings for a normalized location; unknown locations have
/// an empty dataset.
pub fn by_location(location: &str) -> Vec<ListingRecord> {
    match location {
        "madrid" => vec![
            record(json!({
                "title": "Piso luminoso en Lavapiés",
                "price": 189_000,
                "rooms": 2,
                "url": "https://example.test/madrid/1"
            })),
            record(json!({
                "title": "Ático con terraza en Chamberí",
                "price": 320_000,
                "rooms": 3,
                "url": "https://example.test/madrid/2"
            })),
        ],
        "barcelona" => vec![
            record(json!({
                "title": "Piso reformado en Gràcia",
                "price": 1_150,
                "rooms": 2,
                "url": "https://example.test/barcelona/1"
            })),
            record(json!({
                "title": "Estudio junto a la Sagrada Família",
                "price": 890,
                "rooms": 1,
                "url": "https://example.test/barcelona/2"
            })),
            record(json!({
                "title": "Dúplex en el Born",
                "price": 1_480,
                "rooms": 3,
                "url": "https://example.test/barcelona/3"
            })),
        ],
        "valencia" => vec![record(json!({
            "title": "Piso cerca de la Ciudad de las Artes",
            "price": 240_000,
            "rooms": 3,
            "url": "https://example.test/valencia/1"
        }))],
        _ => vec![],
    }
}
