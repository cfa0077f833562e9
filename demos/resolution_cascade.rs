//! Resolution cascade demo for kbri-rs
//!
//! Shows which step of the exact → substring → region/country cascade
//! picks each query, and how an external extractor plugs in.

use kbri_rs::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::load()?;
    let resolver = CityResolver::new(catalog.cities.clone());

    for q in ["paris", "sao paulo", "jersey", "Bavaria", "japan", "", "Atlantis"] {
        match resolver.resolve(q) {
            ResolutionResult::Resolved { matched_name, country, via, .. } => {
                println!("{q:>12} -> {matched_name}, {country} [{via:?}]")
            }
            ResolutionResult::NotFound { query } => println!("{query:>12} -> not found"),
        }
    }

    // A stand-in for the language-model extractor a chat host would use.
    let last_word = |utterance: &str| -> Result<String> {
        utterance
            .split_whitespace()
            .last()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .ok_or_else(|| GeoError::Extraction("empty utterance".into()))
    };

    let query = NearestOfficeQuery::from_catalog(catalog.clone());
    let outcome = query.answer_utterance(&last_word, "Saya sedang di Osaka", 1)?;
    println!("\n{}", outcome.to_json_pretty()?);
    Ok(())
}
