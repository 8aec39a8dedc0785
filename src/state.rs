// src/state.rs
use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};
use crate::database::{create_pool, MemoryProductStore, PgProductStore, ProductStore, RestProductStore, StoreError};
use crate::error::AppError;
use crate::views::Presentation;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub presentation: Arc<Presentation>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, presentation: Presentation) -> Self {
        Self {
            store,
            presentation: Arc::new(presentation),
        }
    }

    /// Builds the store selected by `config`. Only the Postgres backend
    /// touches the network here; the REST client connects lazily.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ProductStore> = match &config.backend {
            StoreBackend::Rest { url, api_key } => {
                tracing::info!(%url, table = %config.table, "Using REST table store");
                Arc::new(RestProductStore::new(url, api_key.clone(), &config.table))
            }
            StoreBackend::Postgres { database_url } => {
                let db_pool = create_pool(database_url)
                    .await
                    .map_err(StoreError::from)?;
                tracing::info!(table = %config.table, "Connected to Postgres store");
                Arc::new(PgProductStore::new(db_pool, &config.table))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store, data is lost on exit");
                Arc::new(MemoryProductStore::new())
            }
        };

        Ok(Self::new(store, config.presentation.clone()))
    }
}
