//! HungerHelp locator.
//!
//! Finds food banks near a coordinate or matching a free-text query, and
//! wraps the outcome in a uniform [`envelope::ResponseEnvelope`].

pub mod config;
pub mod envelope;
pub mod geo;
pub mod location;
pub mod server;
pub mod text;
