//! Application state: the shared menu store.
//!
//! [`AppState`] wraps [`MenuStore`] in `Arc<tokio::sync::Mutex<>>` so it can
//! be shared across async handler tasks. Handlers acquire the lock with
//! `.lock().await` (non-blocking to the tokio runtime, unlike
//! `std::sync::Mutex`) and hold it for the duration of a single store
//! operation, so no request ever observes a partially-mutated sequence.

use std::sync::Arc;

use bistro_core::MenuStore;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared menu collection (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<MenuStore>>,
}

impl AppState {
    /// Creates the production state, seeded with the fixed dataset.
    pub fn new() -> Self {
        AppState::with_store(MenuStore::seeded())
    }

    /// Creates state around an arbitrary store (for testing with isolated
    /// instances).
    pub fn with_store(store: MenuStore) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
