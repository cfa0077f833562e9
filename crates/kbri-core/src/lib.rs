// crates/kbri-core/src/lib.rs
//! kbri-core
//! =========
//!
//! Find the nearest Indonesian embassy (KBRI) or consulate (KJRI) to a
//! place named in free text.
//!
//! ```rust
//! use kbri_core::prelude::*;
//!
//! let catalog = Catalog::from_csv_str(
//!     "name,admin_name,country,population,lat,lng\n\
//!      Lyon,Auvergne-Rhône-Alpes,France,522969,45.7640,4.8357\n",
//!     "City,Country,Type,Latitude,Longitude\n\
//!      Paris,France,Embassy,48.8566,2.3522\n",
//! )?;
//! let query = NearestOfficeQuery::from_catalog(catalog);
//!
//! match query.answer("lyon", DEFAULT_TOP_K) {
//!     QueryOutcome::Found { ranking, .. } => {
//!         assert_eq!(ranking[0].office.city, "Paris");
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok::<(), kbri_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod geo;
pub mod index;
pub mod loader; // The public loader
pub mod model;
pub mod query;
pub mod resolver;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{Catalog, CatalogStats};
pub use crate::error::{GeoError, Result};
pub use crate::geo::{distance, GeoPoint, EARTH_RADIUS_KM};
pub use crate::index::{DistanceRanking, OfficeIndex, RankedOffice};
pub use crate::model::{CityRecord, OfficeKind, OfficeRecord};
pub use crate::query::{NearestOfficeQuery, QueryOutcome, DEFAULT_TOP_K};
pub use crate::resolver::{CityResolver, MatchKind, ResolutionResult};

pub mod prelude {
    pub use crate::common::{Catalog, CatalogStats};
    pub use crate::error::{GeoError, Result};
    pub use crate::geo::{distance, GeoPoint};
    pub use crate::index::{DistanceRanking, OfficeIndex, RankedOffice};
    pub use crate::model::{CityRecord, OfficeKind, OfficeRecord};
    pub use crate::query::{NearestOfficeQuery, QueryOutcome, DEFAULT_TOP_K};
    pub use crate::resolver::{CityResolver, MatchKind, ResolutionResult};
    pub use crate::traits::{NameMatch, PlaceExtractor, Verbatim};
}
