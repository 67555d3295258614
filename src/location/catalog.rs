//! The food bank catalog: built-in dataset and JSON file loading.
//!
//! A catalog is validated once at load and never mutated afterwards. Search
//! keys (normalized name and address) are computed at load so text lookups
//! do not re-normalize every row per request.

use super::types::{CatalogSource, ResourceEntity};
use crate::geo;
use crate::text::normalize;
use serde::Serialize;
use std::fs;
use std::path::Path;

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinFoodBank {
    name: &'static str,
    address: &'static str,
    lat: f64,
    lon: f64,
}

const BUILTIN_FOOD_BANKS: &[BuiltinFoodBank] = &[
    BuiltinFoodBank {
        name: "Hope Food Center",
        address: "123 Hope Street, New York, NY 10001",
        lat: 40.753182, lon: -73.982253,
    },
    BuiltinFoodBank {
        name: "Second Harvest Community Bank",
        address: "987 Harvest Rd, Brooklyn, NY 11201",
        lat: 40.693943, lon: -73.985880,
    },
    BuiltinFoodBank {
        name: "Sunrise Pantry",
        address: "4321 Sunrise Ave, Bronx, NY 10453",
        lat: 40.856415, lon: -73.912834,
    },
    BuiltinFoodBank {
        name: "Feeding Hands Center",
        address: "284 Feeding Ln, Jersey City, NJ 07306",
        lat: 40.733125, lon: -74.071789,
    },
    BuiltinFoodBank {
        name: "Compassion Kitchen",
        address: "22 Kindness Blvd, Queens, NY 11375",
        lat: 40.720822, lon: -73.844849,
    },
    BuiltinFoodBank {
        name: "NeighborCare Food Distribution",
        address: "77 Community Way, Newark, NJ 07104",
        lat: 40.758231, lon: -74.171013,
    },
    BuiltinFoodBank {
        name: "Unity Food Relief",
        address: "101 Unity Rd, Harlem, NY 10027",
        lat: 40.811550, lon: -73.946477,
    },
    BuiltinFoodBank {
        name: "Bridge to Nourishment",
        address: "456 Bridge Street, Staten Island, NY 10301",
        lat: 40.643748, lon: -74.085081,
    },
    BuiltinFoodBank {
        name: "Helping Hands Food Program",
        address: "789 Giving Ave, Long Island, NY 11510",
        lat: 40.654321, lon: -73.609321,
    },
    BuiltinFoodBank {
        name: "Caring Community Meals",
        address: "369 Care St, White Plains, NY 10601",
        lat: 41.033986, lon: -73.762909,
    },
    BuiltinFoodBank {
        name: "Bengaluru Food Bank",
        address: "50 Food Street, Bengaluru, Karnataka 560001, India",
        lat: 12.971599, lon: 77.594566,
    },
    BuiltinFoodBank {
        name: "Mumbai Hunger Relief",
        address: "102 Hunger Lane, Mumbai, Maharashtra 400001, India",
        lat: 19.076090, lon: 72.877426,
    },
    BuiltinFoodBank {
        name: "Chennai Food Aid Center",
        address: "23 Relief Rd, Chennai, Tamil Nadu 600001, India",
        lat: 13.082680, lon: 80.270718,
    },
    BuiltinFoodBank {
        name: "Delhi Community Kitchen",
        address: "77 Hope Blvd, Delhi 110001, India",
        lat: 28.613939, lon: 77.209021,
    },
    BuiltinFoodBank {
        name: "Kolkata Food Help",
        address: "12 Kindness Ave, Kolkata, West Bengal 700001, India",
        lat: 22.572646, lon: 88.363895,
    },
];

// ─── Errors ─────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog entry #{index} is invalid: {reason}")]
    InvalidEntity { index: usize, reason: String },
    #[error("catalog is empty")]
    Empty,
}

// ─── Catalog ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct SearchKey {
    name: String,
    address: String,
}

/// Read-only set of food banks, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<ResourceEntity>,
    keys: Vec<SearchKey>,
    source: CatalogSource,
}

impl Catalog {
    /// The bundled dataset.
    pub fn builtin() -> Self {
        let entities = BUILTIN_FOOD_BANKS
            .iter()
            .map(|b| ResourceEntity {
                name: b.name.to_string(),
                address: b.address.to_string(),
                latitude: b.lat,
                longitude: b.lon,
            })
            .collect();
        Self::build(entities, CatalogSource::Builtin)
    }

    /// Build from caller-supplied rows, validating every one.
    pub fn from_entities(entities: Vec<ResourceEntity>) -> Result<Self, CatalogError> {
        validate(&entities)?;
        Ok(Self::build(entities, CatalogSource::Inline))
    }

    /// Load a JSON array of `{name, address, latitude, longitude}`.
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: shown.clone(),
            source,
        })?;
        let entities: Vec<ResourceEntity> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: shown.clone(),
                source,
            })?;
        validate(&entities)?;
        tracing::info!(path = %shown, entries = entities.len(), "loaded catalog");
        Ok(Self::build(entities, CatalogSource::File(shown)))
    }

    fn build(entities: Vec<ResourceEntity>, source: CatalogSource) -> Self {
        let keys = entities
            .iter()
            .map(|e| SearchKey {
                name: normalize(&e.name),
                address: normalize(&e.address),
            })
            .collect();
        Self { entities, keys, source }
    }

    pub fn entities(&self) -> &[ResourceEntity] {
        &self.entities
    }

    /// Entities paired with their normalized (name, address).
    pub fn with_keys(&self) -> impl Iterator<Item = (&ResourceEntity, &str, &str)> {
        self.entities
            .iter()
            .zip(&self.keys)
            .map(|(e, k)| (e, k.name.as_str(), k.address.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn listing(&self) -> CatalogListing<'_> {
        CatalogListing {
            source: self.source.to_string(),
            count: self.entities.len(),
            entries: &self.entities,
        }
    }
}

fn validate(entities: &[ResourceEntity]) -> Result<(), CatalogError> {
    if entities.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (index, e) in entities.iter().enumerate() {
        let invalid = |reason: &str| CatalogError::InvalidEntity {
            index,
            reason: reason.to_string(),
        };
        if e.name.trim().is_empty() {
            return Err(invalid("empty name"));
        }
        if e.address.trim().is_empty() {
            return Err(invalid("empty address"));
        }
        if !geo::valid_latitude(e.latitude) {
            return Err(invalid(&format!("latitude {} out of range", e.latitude)));
        }
        if !geo::valid_longitude(e.longitude) {
            return Err(invalid(&format!("longitude {} out of range", e.longitude)));
        }
    }
    Ok(())
}

/// The full catalog as served by the listing API.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing<'a> {
    pub source: String,
    pub count: usize,
    pub entries: &'a [ResourceEntity],
}
