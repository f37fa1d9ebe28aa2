//! Shared application state, injected into every handler as `web::Data`.
//!
//! The store is synchronous (rusqlite), so handlers reach it through
//! [`AppState::with_store`], which runs the closure on tokio's blocking pool.

use crate::error::AppError;
use crate::location::ip::IpLocator;
use crate::store::{ContributionStore, StoreError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContributionStore>,
    pub locator: Arc<IpLocator>,
    /// Combined size cap for the files of one submission.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: ContributionStore, locator: IpLocator, max_upload_bytes: usize) -> Self {
        Self {
            store: Arc::new(store),
            locator: Arc::new(locator),
            max_upload_bytes,
        }
    }

    pub fn max_upload_mb(&self) -> usize {
        self.max_upload_bytes.div_ceil(1024 * 1024)
    }

    pub async fn with_store<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&ContributionStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?
            .map_err(AppError::from)
    }
}
