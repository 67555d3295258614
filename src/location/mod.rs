//! Food bank lookup subsystem.
//!
//! Holds the read-only catalog and the locator that runs geo and text
//! lookups against it.

pub mod catalog;
pub mod locator;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogListing};
pub use locator::{Locator, DEFAULT_RADIUS_KM};
pub use types::{CatalogSource, LocateError, LocateRequest, MatchResult, ResourceEntity};
