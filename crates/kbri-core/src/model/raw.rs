// crates/kbri-core/src/model/raw.rs
//! Raw CSV rows as they come from the source datasets.
//!
//! Every cell is read as an optional string and validated in
//! [`super::convert`], so one bad row never aborts a whole load.
use serde::Deserialize;

/// One row of the world-cities table.
///
/// Columns: `name` (or `city`), `admin_name`, `country`, `population`,
/// `lat`, `lng`. Any other columns are ignored.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    #[serde(alias = "city")]
    pub name: Option<String>,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(alias = "latitude")]
    pub lat: Option<String>,
    #[serde(alias = "lon", alias = "longitude")]
    pub lng: Option<String>,
}

/// One row of the representative-office table.
///
/// Columns: `City`, `Country`, `Type`, `Latitude`, `Longitude`.
#[derive(Debug, Deserialize)]
pub struct OfficeRaw {
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<String>,
}
