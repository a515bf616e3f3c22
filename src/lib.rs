//! Local data service: a small REST backend for journal events and daily
//! OHLC-style metric series, held in memory.

pub mod config;
pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod store;

use std::sync::Arc;

use store::Store;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Backing store; the in-memory one in production, fakes in tests.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
