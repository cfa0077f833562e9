// crates/kbri-core/src/resolver.rs
//! # City Resolver
//!
//! Turns an already-extracted place name into a single reference coordinate.
//!
//! Matching is a fixed cascade of strategies; the first one that finds a
//! city wins:
//!
//! 1. **Exact** — query equals a city name ignoring case; if no spelling
//!    matches as typed, the accent-folded forms are compared instead.
//! 2. **Substring** — folded query occurs inside a city name.
//! 3. **Region or country** — folded query occurs inside a city's admin
//!    region or country; the most populous such city is chosen.
//!
//! Within steps 1 and 2 the earliest city in catalog order wins. In step 3
//! population ties also fall back to catalog order, and a missing
//! population counts as zero.

use crate::geo::GeoPoint;
use crate::model::CityRecord;
use crate::text::fold_key;
use serde::Serialize;
use tracing::debug;

/// Which cascade step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Substring,
    RegionOrCountry,
}

/// Outcome of [`CityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    Resolved {
        point: GeoPoint,
        matched_name: String,
        country: String,
        via: MatchKind,
    },
    NotFound {
        query: String,
    },
}

impl ResolutionResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionResult::Resolved { .. })
    }
}

/// Pre-folded search keys for one city, parallel to the catalog.
#[derive(Debug, Clone)]
struct CityKeys {
    lower: String,
    name: String,
    admin: Option<String>,
    country: String,
}

/// The query as typed (lowercased) and folded.
struct QueryKeys {
    lower: String,
    folded: String,
}

/// A matching strategy: returns the catalog index of the chosen city.
type Strategy = fn(&CityResolver, &QueryKeys) -> Option<usize>;

/// Evaluated in order with early exit. Adding a strategy is one entry here.
const CASCADE: &[(MatchKind, Strategy)] = &[
    (MatchKind::Exact, CityResolver::match_exact),
    (MatchKind::Substring, CityResolver::match_substring),
    (MatchKind::RegionOrCountry, CityResolver::match_region_or_country),
];

/// Resolves place names against a read-only city catalog.
#[derive(Debug, Clone)]
pub struct CityResolver {
    cities: Vec<CityRecord>,
    keys: Vec<CityKeys>,
}

impl CityResolver {
    pub fn new(cities: Vec<CityRecord>) -> Self {
        let keys = cities
            .iter()
            .map(|c| CityKeys {
                lower: c.name.trim().to_lowercase(),
                name: fold_key(&c.name),
                admin: c.admin_name.as_deref().map(fold_key),
                country: fold_key(&c.country),
            })
            .collect();
        Self { cities, keys }
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Resolve `query` to a single city.
    ///
    /// Empty or whitespace-only input is `NotFound`.
    pub fn resolve(&self, query: &str) -> ResolutionResult {
        match self.resolve_record(query) {
            Some((city, kind)) => {
                debug!(query, city = %city.name, country = %city.country, ?kind, "resolved");
                ResolutionResult::Resolved {
                    point: city.location,
                    matched_name: city.name.clone(),
                    country: city.country.clone(),
                    via: kind,
                }
            }
            None => {
                debug!(query, "no city matched");
                ResolutionResult::NotFound {
                    query: query.to_string(),
                }
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but returns the matched record.
    pub fn resolve_record(&self, query: &str) -> Option<(&CityRecord, MatchKind)> {
        let q = QueryKeys {
            lower: query.trim().to_lowercase(),
            folded: fold_key(query),
        };
        if q.folded.is_empty() {
            return None;
        }
        CASCADE
            .iter()
            .find_map(|(kind, strategy)| strategy(self, &q).map(|i| (&self.cities[i], *kind)))
    }

    /// Plain case-insensitive equality first; the folded key only when
    /// no spelling matches as typed.
    fn match_exact(&self, q: &QueryKeys) -> Option<usize> {
        self.keys
            .iter()
            .position(|k| k.lower == q.lower)
            .or_else(|| self.keys.iter().position(|k| k.name == q.folded))
    }

    fn match_substring(&self, q: &QueryKeys) -> Option<usize> {
        self.keys.iter().position(|k| k.name.contains(q.folded.as_str()))
    }

    fn match_region_or_country(&self, q: &QueryKeys) -> Option<usize> {
        let q = q.folded.as_str();
        let mut best: Option<(usize, u64)> = None;
        for (i, k) in self.keys.iter().enumerate() {
            let hit = k.admin.as_deref().is_some_and(|a| a.contains(q)) || k.country.contains(q);
            if !hit {
                continue;
            }
            let pop = self.cities[i].population_or_zero();
            // Strictly greater keeps the earliest city on ties.
            if best.map_or(true, |(_, p)| pop > p) {
                best = Some((i, pop));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(
        name: &str,
        admin: Option<&str>,
        country: &str,
        pop: Option<u64>,
        lat: f64,
        lon: f64,
    ) -> CityRecord {
        CityRecord {
            name: name.into(),
            admin_name: admin.map(String::from),
            country: country.into(),
            population: pop,
            location: GeoPoint::new(lat, lon).unwrap(),
        }
    }

    fn catalog() -> CityResolver {
        CityResolver::new(vec![
            city("Paris", Some("Île-de-France"), "France", Some(11_020_000), 48.8566, 2.3522),
            city("Paris", Some("Texas"), "United States", Some(24_000), 33.6609, -95.5555),
            city("Parisot", Some("Occitanie"), "France", Some(800), 44.2644, 1.8572),
            city("Newark", Some("New Jersey"), "United States", Some(311_549), 40.7357, -74.1724),
            city("Jersey City", Some("New Jersey"), "United States", Some(292_449), 40.7178, -74.0431),
            city("Trenton", Some("New Jersey"), "United States", None, 40.2171, -74.7429),
            city("Jakarta", Some("DKI Jakarta"), "Indonesia", Some(33_756_000), -6.2088, 106.8456),
            city("Zürich", Some("Zürich"), "Switzerland", Some(1_300_000), 47.3769, 8.5417),
        ])
    }

    fn resolved_name(r: &ResolutionResult) -> Option<(&str, MatchKind)> {
        match r {
            ResolutionResult::Resolved {
                matched_name, via, ..
            } => Some((matched_name.as_str(), *via)),
            ResolutionResult::NotFound { .. } => None,
        }
    }

    #[test]
    fn exact_match_wins_over_substring() {
        let r = catalog().resolve("paris");
        assert_eq!(resolved_name(&r), Some(("Paris", MatchKind::Exact)));
        // First "Paris" in catalog order, not the Texas one.
        match r {
            ResolutionResult::Resolved { point, country, .. } => {
                assert_eq!(country, "France");
                assert_eq!(point.lat(), 48.8566);
            }
            _ => panic!("expected Resolved"),
        }
    }

    #[test]
    fn exact_match_is_deterministic() {
        let resolver = catalog();
        let first = resolver.resolve("PARIS");
        for _ in 0..10 {
            assert_eq!(resolver.resolve("PARIS"), first);
        }
    }

    #[test]
    fn substring_match_takes_first_in_catalog_order() {
        let r = catalog().resolve("jersey c");
        assert_eq!(resolved_name(&r), Some(("Jersey City", MatchKind::Substring)));

        let r = catalog().resolve("ris");
        assert_eq!(resolved_name(&r), Some(("Paris", MatchKind::Substring)));
    }

    #[test]
    fn region_match_picks_largest_population() {
        let r = catalog().resolve("New Jersey");
        assert_eq!(resolved_name(&r), Some(("Newark", MatchKind::RegionOrCountry)));
    }

    #[test]
    fn country_match_picks_largest_population() {
        let r = catalog().resolve("united states");
        assert_eq!(resolved_name(&r), Some(("Newark", MatchKind::RegionOrCountry)));

        let r = catalog().resolve("Indonesia");
        assert_eq!(resolved_name(&r), Some(("Jakarta", MatchKind::RegionOrCountry)));
    }

    #[test]
    fn missing_population_only_wins_when_alone() {
        let resolver = CityResolver::new(vec![
            city("Trenton", Some("New Jersey"), "United States", None, 40.2171, -74.7429),
            city("Camden", Some("New Jersey"), "United States", Some(71_791), 39.9259, -75.1196),
        ]);
        let r = resolver.resolve("new jersey");
        assert_eq!(resolved_name(&r), Some(("Camden", MatchKind::RegionOrCountry)));

        let alone = CityResolver::new(vec![city(
            "Trenton",
            Some("New Jersey"),
            "United States",
            None,
            40.2171,
            -74.7429,
        )]);
        let r = alone.resolve("new jersey");
        assert_eq!(resolved_name(&r), Some(("Trenton", MatchKind::RegionOrCountry)));
    }

    #[test]
    fn population_tie_keeps_catalog_order() {
        let resolver = CityResolver::new(vec![
            city("Alpha", Some("Region"), "Land", Some(100), 1.0, 1.0),
            city("Beta", Some("Region"), "Land", Some(100), 2.0, 2.0),
        ]);
        let r = resolver.resolve("region");
        assert_eq!(resolved_name(&r), Some(("Alpha", MatchKind::RegionOrCountry)));
    }

    #[test]
    fn accents_are_folded() {
        let r = catalog().resolve("zurich");
        assert_eq!(resolved_name(&r), Some(("Zürich", MatchKind::Exact)));
    }

    #[test]
    fn exact_spelling_beats_folded_spelling() {
        let resolver = CityResolver::new(vec![
            city("Zürich", Some("Zürich"), "Switzerland", Some(1_300_000), 47.3769, 8.5417),
            city("Zurich", Some("Texas"), "United States", Some(500), 31.0, -97.0),
        ]);
        match resolver.resolve("zurich") {
            ResolutionResult::Resolved { country, via, .. } => {
                assert_eq!(country, "United States");
                assert_eq!(via, MatchKind::Exact);
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
        let (rec, _) = resolver.resolve_record("ZÜRICH").unwrap();
        assert_eq!(rec.country, "Switzerland");
    }

    #[test]
    fn empty_and_whitespace_are_not_found() {
        assert_eq!(
            catalog().resolve(""),
            ResolutionResult::NotFound { query: String::new() }
        );
        assert!(!catalog().resolve("   \t").is_resolved());
    }

    #[test]
    fn unknown_place_is_not_found() {
        assert_eq!(
            catalog().resolve("Atlantis"),
            ResolutionResult::NotFound { query: "Atlantis".into() }
        );
    }

    #[test]
    fn resolve_record_reports_step() {
        let resolver = catalog();
        let (rec, kind) = resolver.resolve_record("Trenton").unwrap();
        assert_eq!(rec.name, "Trenton");
        assert_eq!(kind, MatchKind::Exact);
        assert!(resolver.resolve_record("").is_none());
    }
}
