//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ServerConfig;
use crate::datasets::DatasetStore;
use crate::reactive::Dispatcher;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset store injected into builders and layout
    pub store: Arc<DatasetStore>,
    /// The session's reactive dispatcher; the lock serializes input
    /// changes so each change triggers one dispatch over current values
    pub session: Arc<RwLock<Dispatcher>>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the standard dashboard bindings
    pub fn new(store: Arc<DatasetStore>, config: ServerConfig) -> Self {
        let session = Dispatcher::standard(Arc::clone(&store));
        Self {
            store,
            session: Arc::new(RwLock::new(session)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
