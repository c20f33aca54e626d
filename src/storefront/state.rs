//! Storefront State Management
//!
//! This module manages the application state: the shared catalog and one
//! storefront per connected front-end.

use super::controller::Storefront;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::notify::{NotificationSink, TracingSink};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and open storefronts
pub struct AppState {
    /// Read-only product data shared by every storefront
    pub catalog: Arc<Catalog>,

    /// Open storefronts, keyed by storefront id.
    /// DashMap allows concurrent access without external Mutexes.
    pub storefronts: DashMap<String, Storefront>,

    pub config: Config,

    /// Where storefront notices go
    sink: Arc<dyn NotificationSink>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::sample(), Config::default())
    }
}

impl AppState {
    /// Creates a new AppState with no storefronts open
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self::with_sink(catalog, config, Arc::new(TracingSink))
    }

    pub fn with_sink(catalog: Catalog, config: Config, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            storefronts: DashMap::new(),
            config,
            sink,
        }
    }

    /// Opens a storefront under `id`, or under a fresh id when `None`.
    /// An already open storefront is kept as is.
    pub fn open_storefront(&self, id: Option<String>) -> String {
        let id = get_or_create_storefront_id(id);
        self.storefronts.entry(id.clone()).or_insert_with(|| {
            info!(storefront_id = %id, "Storefront opened");
            Storefront::with_sink(self.catalog.clone(), self.sink.clone())
        });
        id
    }

    /// Removes storefront `id` along with its cart and session.
    pub fn close_storefront(&self, id: &str) -> StoreResult<()> {
        self.storefronts
            .remove(id)
            .ok_or_else(|| StoreError::UnknownStorefront(id.to_string()))?;
        info!(storefront_id = %id, "Storefront closed");
        Ok(())
    }

    /// Runs `f` with exclusive access to storefront `id`.
    ///
    /// The entry lock is held only while `f` runs, so `f` must not await.
    pub fn with_storefront<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Storefront) -> R,
    ) -> StoreResult<R> {
        let mut storefront = self
            .storefronts
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownStorefront(id.to_string()))?;
        Ok(f(storefront.value_mut()))
    }
}

/// Returns the provided `id` or creates a new UUID string when `None`.
pub fn get_or_create_storefront_id(id: Option<String>) -> String {
    id.filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}
