//! Uniform response envelope for both lookup strategies.

use crate::location::MatchResult;
use serde::Serialize;
use std::fmt;

/// Default cap on `results` and `suggestions`.
pub const DEFAULT_RESULT_CAP: usize = 5;

/// Severity of the outcome: `Low` when something was found, `Medium` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Why a lookup produced no results.
#[derive(Debug, Clone, PartialEq)]
pub enum NoMatchReason {
    NoGeoMatch { radius_km: f64 },
    NoTextMatch { query: String },
    MissingQuery,
}

impl NoMatchReason {
    fn message(&self) -> String {
        match self {
            Self::NoGeoMatch { radius_km } if radius_km.is_nan() || *radius_km < 0.0 => {
                "I couldn't search around your location: the radius must be zero km or more."
                    .to_string()
            }
            Self::NoGeoMatch { radius_km } => format!(
                "I couldn't find any food banks within {} km of your location.",
                radius_km
            ),
            Self::NoTextMatch { query } => format!(
                "I couldn't find any food banks matching '{}'. Try another place or keyword.",
                query
            ),
            Self::MissingQuery => "Please provide either your location (latitude & longitude) \
                 or a keyword like city or area name."
                .to_string(),
        }
    }
}

/// The response shape returned for every lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<'a> {
    pub message: String,
    pub level: Level,
    pub suggestions: Vec<&'a str>,
    pub results: Vec<MatchResult<'a>>,
}

/// Shapes matcher output into envelopes, applying the payload caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composer {
    pub max_results: usize,
    pub max_suggestions: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESULT_CAP,
            max_suggestions: DEFAULT_RESULT_CAP,
        }
    }
}

impl Composer {
    pub fn new(max_results: usize, max_suggestions: usize) -> Self {
        Self { max_results, max_suggestions }
    }

    pub fn compose_empty<'a>(&self, reason: NoMatchReason) -> ResponseEnvelope<'a> {
        ResponseEnvelope {
            message: reason.message(),
            level: Level::Medium,
            suggestions: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Wrap an ordered, non-empty match list. The message carries the
    /// pre-truncation count; `suggestions` and `results` are capped.
    pub fn compose_matches<'a>(
        &self,
        mut matches: Vec<MatchResult<'a>>,
        count_label: &str,
    ) -> ResponseEnvelope<'a> {
        let total = matches.len();
        let suggestions = matches
            .iter()
            .take(self.max_suggestions)
            .map(|m| m.name())
            .collect();
        matches.truncate(self.max_results);

        ResponseEnvelope {
            message: format!("I found {} food bank(s) {}.", total, count_label),
            level: Level::Low,
            suggestions,
            results: matches,
        }
    }
}
