use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{ProductStore, StoreError};
use crate::dtos::product::ProductInput;
use crate::models::product::Product;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Direct connection to the product table.
///
/// Column names are camelCase in the table, so they are quoted and aliased
/// to the struct's field names for `FromRow`.
pub struct PgProductStore {
    db_pool: PgPool,
    sql: Statements,
}

struct Statements {
    list: String,
    find: String,
    insert: String,
    update: String,
    delete: String,
}

const COLUMNS: &str = r#"id::INT8                  AS id,
       "nomeProduto"             AS name,
       "quantidadeEstoque"::INT8 AS stock_quantity,
       preco::FLOAT8             AS price,
       "fotoProduto"             AS photo_url"#;

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            list: format!(r#"SELECT {COLUMNS} FROM "{table}" ORDER BY id"#),
            find: format!(r#"SELECT {COLUMNS} FROM "{table}" WHERE id = $1"#),
            insert: format!(
                r#"INSERT INTO "{table}" ("nomeProduto", "quantidadeEstoque", preco, "fotoProduto")
                   VALUES ($1, $2, $3, $4)
                   RETURNING {COLUMNS}"#
            ),
            update: format!(
                r#"UPDATE "{table}" SET
                   "nomeProduto" = $2,
                   "quantidadeEstoque" = $3,
                   preco = $4,
                   "fotoProduto" = $5
                   WHERE id = $1"#
            ),
            delete: format!(r#"DELETE FROM "{table}" WHERE id = $1"#),
        }
    }
}

impl PgProductStore {
    /// `table` must already have passed [`super::is_valid_table_name`].
    pub fn new(db_pool: PgPool, table: &str) -> Self {
        Self {
            db_pool,
            sql: Statements::for_table(table),
        }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(&self.sql.list)
            .fetch_all(&self.db_pool)
            .await?;
        Ok(products)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(&self.sql.find)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?;
        Ok(product)
    }

    async fn insert(&self, input: &ProductInput) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(&self.sql.insert)
            .bind(&input.name)
            .bind(input.stock_quantity)
            .bind(input.price)
            .bind(&input.photo_url)
            .fetch_one(&self.db_pool)
            .await?;
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), StoreError> {
        sqlx::query(&self.sql.update)
            .bind(id)
            .bind(&input.name)
            .bind(input.stock_quantity)
            .bind(input.price)
            .bind(&input.photo_url)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }
}
