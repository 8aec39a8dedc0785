//! Client for a hosted table exposed over a PostgREST-style API
//! (`/rest/v1/{table}` with `apikey` + bearer auth).

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};

use super::{ProductStore, StoreError};
use crate::dtos::product::ProductInput;
use crate::models::product::Product;

pub struct RestProductStore {
    table_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestProductStore {
    /// `table` must already have passed [`super::is_valid_table_name`].
    pub fn new(base_url: &str, api_key: impl Into<String>, table: &str) -> Self {
        Self {
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self.authorized(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Api { status, body });
        }
        Ok(response)
    }
}

fn id_filter(id: i64) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

#[async_trait]
impl ProductStore for RestProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let request = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "id.asc")]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let request = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*")])
            .query(&id_filter(id));
        let rows: Vec<Product> = self.send(request).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, input: &ProductInput) -> Result<Product, StoreError> {
        let request = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(input);
        let rows: Vec<Product> = self.send(request).await?.json().await?;
        rows.into_iter().next().ok_or(StoreError::MissingRow)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), StoreError> {
        let request = self
            .client
            .patch(&self.table_url)
            .query(&id_filter(id))
            .json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let request = self.client.delete(&self.table_url).query(&id_filter(id));
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TABLE_PATH: &str = "/rest/v1/sistema";

    fn widget_row(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "nomeProduto": "Widget",
            "quantidadeEstoque": 10,
            "preco": 9.99,
            "fotoProduto": "http://x/img.png"
        })
    }

    fn widget_input() -> ProductInput {
        ProductInput {
            name: "Widget".into(),
            stock_quantity: 10,
            price: 9.99,
            photo_url: "http://x/img.png".into(),
        }
    }

    #[tokio::test]
    async fn list_sends_credentials_and_parses_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .and(query_param("select", "*"))
            .and(query_param("order", "id.asc"))
            .and(header("apikey", "secret"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([widget_row(1)])))
            .expect(1)
            .mount(&server)
            .await;

        let store = RestProductStore::new(&format!("{}/", server.uri()), "secret", "sistema");
        let rows = store.list().await.unwrap();

        assert_eq!(rows, vec![widget_input().into_product(1)]);
    }

    #[tokio::test]
    async fn find_returns_none_for_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let store = RestProductStore::new(&server.uri(), "k", "sistema");
        assert!(store.find(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_posts_columns_and_reads_back_assigned_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!({
                "nomeProduto": "Widget",
                "quantidadeEstoque": 10,
                "preco": 9.99,
                "fotoProduto": "http://x/img.png"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([widget_row(5)])))
            .mount(&server)
            .await;

        let store = RestProductStore::new(&server.uri(), "k", "sistema");
        let created = store.insert(&widget_input()).await.unwrap();
        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn update_and_delete_filter_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let store = RestProductStore::new(&server.uri(), "k", "sistema");
        store.update(5, &widget_input()).await.unwrap();
        store.delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn error_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let store = RestProductStore::new(&server.uri(), "bad", "sistema");
        match store.list().await {
            Err(StoreError::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
