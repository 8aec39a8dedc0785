// src/database/mod.rs
//! Product storage. Handlers only see [`ProductStore`]; which backend sits
//! behind it is decided once at startup.

mod memory;
mod postgres;
mod rest;

pub use memory::MemoryProductStore;
pub use postgres::{create_pool, PgProductStore};
pub use rest::RestProductStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::dtos::product::ProductInput;
use crate::models::product::Product;

pub const DEFAULT_TABLE: &str = "sistema";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("postgres: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store responded {status}: {body}")]
    Api { status: u16, body: String },

    #[error("store returned no row")]
    MissingRow,
}

/// The four table operations the app needs, plus a single-row lookup.
///
/// `update` and `delete` are no-ops when no row has the given id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, ascending by id.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Inserts a row and returns it with the id the store assigned.
    async fn insert(&self, input: &ProductInput) -> Result<Product, StoreError>;

    /// Overwrites every mutable column of the row with `id`.
    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Table names are spliced into SQL and URLs, so only plain identifiers pass.
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
