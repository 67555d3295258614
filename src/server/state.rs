use crate::location::Locator;

/// Shared by every request. The locator holds the catalog behind an `Arc`
/// and never mutates it, so no lock is needed.
pub struct AppState {
    pub locator: Locator,
}
