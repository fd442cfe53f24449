//! Example: report from an async source with a custom error policy
//!
//! Streams an embedded JSON document through `JsonDeliveryStream::new`,
//! collects the rejected record indices with a custom `ErrorPolicy`, and
//! prints the report followed by the rejects.
//!
//! Usage:
//!   cargo run --example inline_report

use std::sync::{Arc, Mutex};

use recipe_stats::prelude::*;

const DELIVERIES: &[u8] = br#"[
  {"postcode": "10120", "recipe": "Creamy Dill Chicken", "delivery": "Wednesday 10AM - 3PM"},
  {"postcode": "10224", "recipe": "Mushroom Risotto", "delivery": "Friday 9AM - 5PM"},
  {"postcode": "10120", "recipe": "Grilled Cheese and Veggie Jumble", "delivery": "Sunday 10AM - 2PM"},
  {"postcode": "10120", "recipe": "Speedy Steak Fajitas", "delivery": "InvalidTimeFormat"},
  {"postcode": "10224", "recipe": "Mushroom Risotto", "delivery": "Monday 7AM - 11AM"}
]"#;

/// Keeps every rejected record index
#[derive(Clone, Default)]
struct CollectRejects(Arc<Mutex<Vec<String>>>);

impl ErrorPolicy for CollectRejects {
    fn handle_parse_error(&self, error: ParseError) {
        if let Ok(mut rejects) = self.0.lock() {
            rejects.push(error.to_string());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StatsConfig::default().with_words(["Veggie", "Mushroom"]);
    let rejects = CollectRejects::default();

    let stream = JsonDeliveryStream::new(DELIVERIES);
    let report = generate_with_policy(stream, &config, rejects.clone()).await?;

    write_report(&report, tokio::io::stdout()).await?;

    let rejects = rejects.0.lock().map_err(|_| "reject list poisoned")?;
    eprintln!("{} record(s) rejected", rejects.len());
    for reject in rejects.iter() {
        eprintln!("  {reject}");
    }
    Ok(())
}
