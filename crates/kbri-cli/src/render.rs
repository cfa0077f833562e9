//! Indonesian-language rendering of query outcomes.
use kbri_core::{MatchKind, QueryOutcome, RankedOffice, ResolutionResult};
use std::fmt::Write;

fn office_line(r: &RankedOffice<'_>) -> String {
    format!(
        "{} ({}) di {}, {}, sekitar {:.2} km",
        r.office.kind.abbreviation(),
        r.office.kind.indonesian_name(),
        r.office.city,
        r.office.country,
        r.distance_km
    )
}

/// Render an outcome for a person: nearest office first and prominent,
/// the rest as alternatives.
pub fn render_outcome(outcome: &QueryOutcome<'_>) -> String {
    match outcome {
        QueryOutcome::Found {
            place,
            country,
            via,
            ranking,
        } => {
            let mut out = String::new();
            if *via == MatchKind::RegionOrCountry {
                let _ = writeln!(
                    out,
                    "Catatan: lokasi ditafsirkan sebagai {place}, {country} (kota terbesar yang cocok)."
                );
            }
            // Found always carries at least one entry.
            if let Some((nearest, rest)) = ranking.split_first() {
                let _ = writeln!(
                    out,
                    "Kantor perwakilan RI terdekat dari {place}: {}.",
                    office_line(nearest)
                );
                if !rest.is_empty() {
                    let _ = writeln!(out, "Alternatif lain:");
                    for (i, r) in rest.iter().enumerate() {
                        let _ = writeln!(out, "  {}. {}", i + 2, office_line(r));
                    }
                }
            }
            out
        }
        QueryOutcome::UnresolvedLocation { query } => {
            format!("Maaf, saya tidak dapat menemukan kota '{query}' dalam database saya.\n")
        }
        QueryOutcome::NoDataAvailable => {
            "Maaf, saya tidak dapat menemukan informasi yang Anda cari.\n".to_string()
        }
    }
}

pub fn render_resolution(result: &ResolutionResult) -> String {
    match result {
        ResolutionResult::Resolved {
            point,
            matched_name,
            country,
            via,
        } => format!(
            "{matched_name}, {country} ({:.4}, {:.4}) via {via:?}\n",
            point.lat(),
            point.lon()
        ),
        ResolutionResult::NotFound { query } => format!("No city found for: {query}\n"),
    }
}
