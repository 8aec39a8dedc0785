use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ProductStore, StoreError};
use crate::dtos::product::ProductInput;
use crate::models::product::Product;

/// In-process store with sequential ids starting at 1.
#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Rows>,
}

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.lock().await.by_id.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.inner.lock().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, input: &ProductInput) -> Result<Product, StoreError> {
        let mut rows = self.inner.lock().await;
        rows.last_id += 1;
        let product = input.clone().into_product(rows.last_id);
        rows.by_id.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), StoreError> {
        let mut rows = self.inner.lock().await;
        if let Some(row) = rows.by_id.get_mut(&id) {
            *row = input.clone().into_product(id);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner.lock().await.by_id.remove(&id);
        Ok(())
    }
}
