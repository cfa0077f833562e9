// crates/kbri-core/src/model/mod.rs
//! # Record Model
//!
//! The two read-only catalogs the core works over: reference cities (used
//! to resolve a place name to a coordinate) and representative offices
//! (ranked by distance from that coordinate).

pub mod convert;
pub mod raw;

use crate::error::GeoError;
use crate::geo::GeoPoint;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reference city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    /// First-level administrative region (state, province, prefecture).
    pub admin_name: Option<String>,
    pub country: String,
    pub population: Option<u64>,
    pub location: GeoPoint,
}

impl CityRecord {
    /// Population used when comparing candidates; missing counts as zero.
    #[inline]
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }
}

/// Kind of Indonesian representative office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficeKind {
    /// KBRI (Kedutaan Besar Republik Indonesia).
    Embassy,
    /// KJRI (Konsulat Jenderal Republik Indonesia).
    Consulate,
}

impl OfficeKind {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            OfficeKind::Embassy => "KBRI",
            OfficeKind::Consulate => "KJRI",
        }
    }

    /// Full Indonesian name of the office type.
    pub fn indonesian_name(&self) -> &'static str {
        match self {
            OfficeKind::Embassy => "Kedutaan Besar Republik Indonesia",
            OfficeKind::Consulate => "Konsulat Jenderal Republik Indonesia",
        }
    }
}

impl fmt::Display for OfficeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfficeKind::Embassy => f.write_str("Embassy"),
            OfficeKind::Consulate => f.write_str("Consulate"),
        }
    }
}

impl FromStr for OfficeKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let k = s.trim().to_ascii_lowercase();
        match k.as_str() {
            "embassy" | "kbri" | "kedutaan besar" => Ok(OfficeKind::Embassy),
            "consulate" | "consulate general" | "consulate-general" | "kjri"
            | "konsulat jenderal" => Ok(OfficeKind::Consulate),
            _ => Err(GeoError::InvalidData(format!("unknown office type: {s:?}"))),
        }
    }
}

/// An Indonesian embassy or consulate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OfficeRecord {
    pub city: String,
    pub country: String,
    pub kind: OfficeKind,
    pub location: GeoPoint,
}

impl NameMatch for OfficeRecord {
    fn name_str(&self) -> &str {
        &self.city
    }
}
