use crate::storage::ResultsStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The results repository; writes are serialized through the lock
    pub store: Arc<RwLock<ResultsStore>>,
}

impl AppState {
    pub fn new(store: ResultsStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
