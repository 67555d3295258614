//! Locator — runs the geo or text matcher and composes the envelope.
//!
//! Dispatch:  coordinates → geo matcher
//!            non-empty query → text matcher
//!            otherwise → "missing query" envelope

use super::catalog::Catalog;
use super::types::{LocateError, LocateRequest, MatchResult};
use crate::envelope::{Composer, NoMatchReason, ResponseEnvelope};
use crate::geo;
use crate::text::{normalize, query_matches};
use std::sync::Arc;

/// Default search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

/// Stateless lookups over a shared, read-only catalog. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Locator {
    catalog: Arc<Catalog>,
    composer: Composer,
    default_radius_km: f64,
}

impl Locator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            composer: Composer::default(),
            default_radius_km: DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_composer(mut self, composer: Composer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_default_radius(mut self, radius_km: f64) -> Self {
        self.default_radius_km = radius_km;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    /// Entry point: pick a matcher from whichever inputs are present.
    pub fn locate(&self, req: &LocateRequest) -> Result<ResponseEnvelope<'_>, LocateError> {
        if let Some((lat, lon)) = req.coordinates() {
            let radius = req.radius_km.unwrap_or(self.default_radius_km);
            return self.find_near(lat, lon, radius);
        }

        match req.query.as_deref() {
            Some(q) if !q.trim().is_empty() => Ok(self.find_by_query(q)),
            _ => {
                tracing::debug!("lookup without coordinates or query");
                Ok(self.composer.compose_empty(NoMatchReason::MissingQuery))
            }
        }
    }

    /// Food banks within `radius_km` of (lat, lon), nearest first.
    ///
    /// A negative or NaN radius yields an empty envelope. Zero keeps only
    /// entities at the exact point.
    pub fn find_near(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<ResponseEnvelope<'_>, LocateError> {
        if !geo::valid_coordinates(lat, lon) {
            tracing::warn!(lat, lon, "rejected invalid coordinates");
            return Err(LocateError::InvalidCoordinate { latitude: lat, longitude: lon });
        }

        let matches = self.nearby(lat, lon, radius_km);
        tracing::debug!(lat, lon, radius_km, found = matches.len(), "geo lookup");

        if matches.is_empty() {
            return Ok(self
                .composer
                .compose_empty(NoMatchReason::NoGeoMatch { radius_km }));
        }
        Ok(self.composer.compose_matches(matches, "near you"))
    }

    /// Food banks whose name or address contains the normalized query.
    ///
    /// Results keep catalog order. A query that normalizes to nothing
    /// (blank or punctuation only) is treated as a missing query.
    pub fn find_by_query(&self, query: &str) -> ResponseEnvelope<'_> {
        let needle = normalize(query);
        if needle.is_empty() {
            tracing::debug!(query, "query normalized to empty");
            return self.composer.compose_empty(NoMatchReason::MissingQuery);
        }

        let matches = self.matching(&needle);
        tracing::debug!(query, needle = %needle, found = matches.len(), "text lookup");

        if matches.is_empty() {
            return self.composer.compose_empty(NoMatchReason::NoTextMatch {
                query: query.to_string(),
            });
        }
        self.composer
            .compose_matches(matches, "that match your search")
    }

    /// Every entity within the radius, stably sorted by rounded distance.
    fn nearby(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<MatchResult<'_>> {
        if radius_km.is_nan() || radius_km < 0.0 {
            return Vec::new();
        }

        let mut kept: Vec<MatchResult<'_>> = self
            .catalog
            .entities()
            .iter()
            .filter_map(|e| {
                let d = geo::haversine_km(lat, lon, e.latitude, e.longitude);
                (d <= radius_km).then(|| MatchResult::with_distance(e, geo::round_km(d)))
            })
            .collect();

        // sort_by is stable: equal distances keep catalog order.
        kept.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(0.0);
            let db = b.distance_km.unwrap_or(0.0);
            da.total_cmp(&db)
        });
        kept
    }

    fn matching(&self, needle: &str) -> Vec<MatchResult<'_>> {
        self.catalog
            .with_keys()
            .filter(|(_, name, address)| query_matches(needle, name, address))
            .map(|(e, _, _)| MatchResult::plain(e))
            .collect()
    }
}
