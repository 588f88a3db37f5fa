//! Application state for the work-hours ledger API.

use std::sync::{Arc, RwLock};

use crate::models::Settings;
use crate::repository::EntryRepository;

/// The mutable ledger behind the API: the entry repository plus the
/// settings singleton.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Stored entries.
    pub entries: EntryRepository,
    /// Current settings, read at entry creation and aggregation time.
    pub settings: Settings,
}

/// Shared application state.
///
/// Handlers take a read lock for reports and a write lock for mutations;
/// every calculation reads a consistent snapshot of entries and settings.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<RwLock<Ledger>>,
}

impl AppState {
    /// Creates application state with the given initial settings and an
    /// empty entry repository.
    pub fn new(settings: Settings) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger {
                entries: EntryRepository::new(),
                settings,
            })),
        }
    }

    /// Returns a handle to the shared ledger.
    pub fn ledger(&self) -> &RwLock<Ledger> {
        &self.ledger
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_has_default_settings() {
        let state = AppState::default();
        let ledger = state.ledger().read().unwrap();
        assert_eq!(ledger.settings, Settings::default());
        assert!(ledger.entries.is_empty());
    }
}
