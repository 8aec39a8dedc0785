use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the product table.
///
/// Serde names follow the table's column names, which is what the REST
/// backend sends and receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nomeProduto")]
    pub name: String,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i64,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "fotoProduto")]
    pub photo_url: String,
}
