// crates/kbri-core/src/index.rs
use crate::geo::{distance, GeoPoint};
use crate::model::OfficeRecord;
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::Serialize;
use tracing::debug;

/// One office together with its distance from the query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOffice<'a> {
    pub office: &'a OfficeRecord,
    pub distance_km: f64,
}

/// Offices in ascending distance order; ties keep catalog order.
pub type DistanceRanking<'a> = Vec<RankedOffice<'a>>;

/// The fixed catalog of representative offices.
#[derive(Debug, Clone, Default)]
pub struct OfficeIndex {
    offices: Vec<OfficeRecord>,
}

impl OfficeIndex {
    pub fn new(offices: Vec<OfficeRecord>) -> Self {
        Self { offices }
    }

    pub fn offices(&self) -> &[OfficeRecord] {
        &self.offices
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }

    /// The `k` offices nearest to `point`.
    ///
    /// Returns every office when the catalog holds fewer than `k`, and an
    /// empty ranking only when the catalog itself is empty. `k == 0` is
    /// treated as `1`.
    pub fn rank(&self, point: GeoPoint, k: usize) -> DistanceRanking<'_> {
        let k = k.max(1);
        let mut ranking: DistanceRanking<'_> = self
            .offices
            .iter()
            .map(|office| RankedOffice {
                office,
                distance_km: distance(point, office.location),
            })
            .collect();

        // `sort_by` is stable, so equal distances keep catalog order.
        ranking.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranking.truncate(k);

        debug!(
            lat = point.lat(),
            lon = point.lon(),
            k,
            returned = ranking.len(),
            "ranked offices"
        );
        ranking
    }

    /// Offices whose city or country contains `filter` (folded).
    /// An empty filter returns every office.
    pub fn offices_matching(&self, filter: &str) -> Vec<&OfficeRecord> {
        let q = fold_key(filter);
        self.offices
            .iter()
            .filter(|o| q.is_empty() || o.name_contains(&q) || fold_key(&o.country).contains(&q))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfficeKind;

    fn office(city: &str, kind: OfficeKind, lat: f64, lon: f64) -> OfficeRecord {
        OfficeRecord {
            city: city.into(),
            country: "Testland".into(),
            kind,
            location: GeoPoint::new(lat, lon).unwrap(),
        }
    }

    fn five() -> OfficeIndex {
        OfficeIndex::new(vec![
            office("E", OfficeKind::Embassy, 0.0, 40.0),
            office("A", OfficeKind::Embassy, 0.0, 1.0),
            office("D", OfficeKind::Consulate, 0.0, 30.0),
            office("B", OfficeKind::Consulate, 0.0, 5.0),
            office("C", OfficeKind::Embassy, 0.0, 20.0),
        ])
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(0.0, 0.0).unwrap()
    }

    #[test]
    fn top_k_is_sorted_and_truncated() {
        let index = five();
        let ranking = index.rank(origin(), 3);
        assert_eq!(ranking.len(), 3);
        let cities: Vec<_> = ranking.iter().map(|r| r.office.city.as_str()).collect();
        assert_eq!(cities, ["A", "B", "C"]);
        assert!(ranking
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn k_larger_than_catalog_returns_everything() {
        let index = five();
        let ranking = index.rank(origin(), 10);
        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking.last().unwrap().office.city, "E");
    }

    #[test]
    fn zero_k_is_treated_as_one() {
        let index = five();
        assert_eq!(index.rank(origin(), 0).len(), 1);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let index = OfficeIndex::new(vec![
            office("East", OfficeKind::Embassy, 0.0, 10.0),
            office("West", OfficeKind::Consulate, 0.0, -10.0),
            office("North", OfficeKind::Embassy, 10.0, 0.0),
        ]);
        let ranking = index.rank(origin(), 2);
        assert_eq!(ranking[0].office.city, "East");
        assert_eq!(ranking[1].office.city, "West");
    }

    #[test]
    fn filter_matches_city_or_country() {
        let index = OfficeIndex::new(vec![
            office("Frankfurt", OfficeKind::Consulate, 50.1, 8.7),
            office("Berlin", OfficeKind::Embassy, 52.5, 13.4),
        ]);
        assert_eq!(index.offices_matching("frank").len(), 1);
        assert_eq!(index.offices_matching("TESTLAND").len(), 2);
        assert_eq!(index.offices_matching("").len(), 2);
        assert!(index.offices_matching("Osaka").is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_ranking() {
        let index = OfficeIndex::default();
        assert!(index.rank(origin(), 3).is_empty());
    }
}
