//! Umbrella crate: re-exports [`kbri_core`] so demos can `use kbri_rs::prelude::*`.
pub use kbri_core::*;
