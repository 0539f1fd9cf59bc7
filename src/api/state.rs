//! Shared application state for axum handlers.

use std::sync::Arc;

use crate::infrastructure::repositories::Store;

/// Application state shared across all handlers
///
/// Cloning only clones the `Arc`; every clone sees the same store.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
