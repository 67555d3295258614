//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A food bank in the catalog. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntity {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One hit from a lookup, borrowed from the catalog.
///
/// `distance_km` is `Some` only for geo lookups and is already rounded to
/// two decimals. It serializes flat next to the entity fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    #[serde(flatten)]
    pub entity: &'a ResourceEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl<'a> MatchResult<'a> {
    pub fn plain(entity: &'a ResourceEntity) -> Self {
        Self { entity, distance_km: None }
    }

    pub fn with_distance(entity: &'a ResourceEntity, distance_km: f64) -> Self {
        Self { entity, distance_km: Some(distance_km) }
    }

    pub fn name(&self) -> &'a str {
        &self.entity.name
    }
}

/// A lookup request. Every field is optional, as at the HTTP boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocateRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub query: Option<String>,
}

impl LocateRequest {
    pub fn near(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    /// Both coordinates, or nothing. A lone latitude or longitude is ignored.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Validation failures. "No match" is not an error; see [`crate::envelope`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    #[error("Invalid coordinates ({latitude}, {longitude}). Lat: -90..90, Lon: -180..180")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    Inline,
    File(String),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "Built-in"),
            Self::Inline => write!(f, "Inline"),
            Self::File(path) => write!(f, "{}", path),
        }
    }
}
