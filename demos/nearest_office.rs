//! Nearest office demo for kbri-rs
//!
//! This demo shows how to:
//! - Load the bundled catalogs once
//! - Answer a few queries with the default top-k
//! - Hand an outcome to a tool-calling host as JSON

use kbri_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== kbri-rs Nearest Office Demo ===\n");

    let catalog = Catalog::load()?;
    let stats = catalog.stats();
    println!(
        "Loaded {} cities and {} offices\n",
        stats.cities, stats.offices
    );
    let query = NearestOfficeQuery::from_catalog(catalog.clone());

    for place in ["Paris", "Lyon", "New Jersey", "Indonesia", "Atlantis"] {
        println!("--- {place} ---");
        match query.answer(place, DEFAULT_TOP_K) {
            QueryOutcome::Found { place, via, ranking, .. } => {
                println!("Resolved to {place} ({via:?})");
                for (i, r) in ranking.iter().enumerate() {
                    println!(
                        "{}. {} {} ({}) - {:.2} km",
                        i + 1,
                        r.office.kind.abbreviation(),
                        r.office.city,
                        r.office.country,
                        r.distance_km
                    );
                }
            }
            QueryOutcome::UnresolvedLocation { query } => println!("No city matches '{query}'"),
            QueryOutcome::NoDataAvailable => println!("Office catalog is empty"),
        }
        println!();
    }

    println!("--- JSON for a tool-calling agent ---");
    println!("{}", query.answer("Tokyo", 2).to_json_pretty()?);
    Ok(())
}
