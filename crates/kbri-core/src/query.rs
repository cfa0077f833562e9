// crates/kbri-core/src/query.rs
//! # Nearest Office Query
//!
//! Stateless orchestration of [`CityResolver`] and [`OfficeIndex`]: given a
//! place name, answer with the `k` nearest representative offices.
//!
//! The outcome vocabulary is language- and tone-neutral. Rendering it for a
//! user (which office to feature, how to apologise) is the host's job.

use crate::error::Result;
use crate::index::{DistanceRanking, OfficeIndex};
use crate::resolver::{CityResolver, MatchKind, ResolutionResult};
use crate::traits::PlaceExtractor;
use crate::Catalog;
use serde::Serialize;
use tracing::{debug, warn};

/// Number of offices returned when the caller does not ask for more.
pub const DEFAULT_TOP_K: usize = 3;

/// Result of [`NearestOfficeQuery::answer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome<'a> {
    /// The place resolved and at least one office exists. The first entry
    /// of `ranking` is the nearest office.
    Found {
        place: String,
        country: String,
        via: MatchKind,
        ranking: DistanceRanking<'a>,
    },
    /// Nothing in the city catalog matched; ask the user to clarify.
    UnresolvedLocation { query: String },
    /// The office catalog is empty. Hosts should treat this as a startup
    /// failure rather than a per-query condition.
    NoDataAvailable,
}

impl QueryOutcome<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found { .. })
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolver and office index bundled over their two immutable catalogs.
///
/// `answer` takes `&self`, so one instance can serve any number of
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct NearestOfficeQuery {
    resolver: CityResolver,
    index: OfficeIndex,
}

impl NearestOfficeQuery {
    pub fn new(resolver: CityResolver, index: OfficeIndex) -> Self {
        if index.is_empty() {
            warn!("office catalog is empty; every resolved query will report no data");
        }
        Self { resolver, index }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(
            CityResolver::new(catalog.cities),
            OfficeIndex::new(catalog.offices),
        )
    }

    pub fn resolver(&self) -> &CityResolver {
        &self.resolver
    }

    pub fn index(&self) -> &OfficeIndex {
        &self.index
    }

    /// Answer with the `k` nearest offices to the place named by `query`.
    pub fn answer(&self, query: &str, k: usize) -> QueryOutcome<'_> {
        let (point, place, country, via) = match self.resolver.resolve(query) {
            ResolutionResult::Resolved {
                point,
                matched_name,
                country,
                via,
            } => (point, matched_name, country, via),
            ResolutionResult::NotFound { query } => {
                return QueryOutcome::UnresolvedLocation { query };
            }
        };

        let ranking = self.index.rank(point, k);
        if ranking.is_empty() {
            return QueryOutcome::NoDataAvailable;
        }

        debug!(
            place = %place,
            nearest = %ranking[0].office.city,
            km = ranking[0].distance_km,
            "answered"
        );
        QueryOutcome::Found {
            place,
            country,
            via,
            ranking,
        }
    }

    /// [`answer`](Self::answer) with [`DEFAULT_TOP_K`].
    pub fn answer_default(&self, query: &str) -> QueryOutcome<'_> {
        self.answer(query, DEFAULT_TOP_K)
    }

    /// Run `extractor` over a raw chat utterance, then answer for the
    /// extracted place name.
    pub fn answer_utterance<E>(
        &self,
        extractor: &E,
        utterance: &str,
        k: usize,
    ) -> Result<QueryOutcome<'_>>
    where
        E: PlaceExtractor + ?Sized,
    {
        let place = extractor.extract(utterance)?;
        debug!(utterance, place = %place, "extracted place");
        Ok(self.answer(&place, k))
    }
}
