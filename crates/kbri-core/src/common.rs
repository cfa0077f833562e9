// crates/kbri-core/src/common.rs
use crate::model::{CityRecord, OfficeRecord};
use serde::{Deserialize, Serialize};

/// Both reference catalogs, as loaded.
///
/// Read-only after load; share it behind `&` or `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub cities: Vec<CityRecord>,
    pub offices: Vec<OfficeRecord>,
}

impl Catalog {
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.cities.len(),
            offices: self.offices.len(),
        }
    }
}

/// Simple aggregate counts for a loaded [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub offices: usize,
}
