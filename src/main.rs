use std::{env, fs, process};

use env_logger::Env;
use serde::Deserialize;

use itinerary_pricing::models::itinerary::Itinerary;
use itinerary_pricing::models::rates::{MarkupTable, Segment, TcsRateTable};
use itinerary_pricing::services::pricing_service::PricingService;

/// Markup/TCS configuration file, matching the payload of the markup
/// settings API. Either section may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatesFile {
    #[serde(default)]
    markups: MarkupTable,
    #[serde(default)]
    tcs_rates: TcsRateTable,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let (Some(itinerary_path), Some(rates_path)) = (args.next(), args.next()) else {
        eprintln!("usage: itinerary-pricing <itinerary.json> <rates.json>");
        process::exit(2);
    };

    let itinerary: Itinerary = serde_json::from_str(&fs::read_to_string(&itinerary_path)?)?;
    let rates: RatesFile = serde_json::from_str(&fs::read_to_string(&rates_path)?)?;

    let totals = PricingService::aggregate(&itinerary, &rates.markups, &rates.tcs_rates);

    for segment in Segment::ALL {
        println!(
            "{:<12} {:>14.2}  (base {:.2})",
            segment.as_str(),
            totals.segment_totals.get(segment),
            totals.segment_base_totals.get(segment)
        );
    }
    println!("{:<12} {:>14.2}", "subtotal", totals.subtotal);
    println!(
        "{:<12} {:>14.2}",
        format!("TCS ({}%)", totals.tcs_rate),
        totals.tcs_amount
    );
    println!("{:<12} {:>14.2}", "grand total", totals.grand_total);

    Ok(())
}
