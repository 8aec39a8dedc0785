// src/handlers/product.rs
//! Every mutation ends by re-reading the whole table and answering with the
//! list fragment. There is no incremental patching: the browser always
//! swaps in a snapshot of the store as it is after the write.

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use tracing::{error, info, instrument, warn};

use crate::dtos::product::{CreateProductForm, UpdateProductForm};
use crate::error::AppError;
use crate::state::AppState;
use crate::views;

async fn render_product_list(state: &AppState) -> Result<Html<String>, AppError> {
    match state.store.list().await {
        Ok(products) => Ok(Html(views::product_list(&state.presentation, &products))),
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET / - Full page
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = state.store.list().await.map_err(|e| {
        error!(?e, "Failed to fetch products");
        AppError::from(e)
    })?;

    Ok(Html(views::page(&state.presentation, &products)))
}

// POST /cadastrar-produto - Create product
#[instrument(skip(state, form))]
pub async fn create_product(
    State(state): State<AppState>,
    Form(form): Form<CreateProductForm>,
) -> Result<Html<String>, AppError> {
    let input = form.validate()?;

    let product = state.store.insert(&input).await.map_err(|e| {
        error!(?e, "Failed to create product");
        AppError::from(e)
    })?;
    info!(id = product.id, name = %product.name, "Product created");

    render_product_list(&state).await
}

// DELETE /deletar/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    state.store.delete(id).await.map_err(|e| {
        error!(?e, "Failed to delete product");
        AppError::from(e)
    })?;
    info!(id, "Product deleted");

    render_product_list(&state).await
}

// POST /editar-produto - Update product
#[instrument(skip(state, form))]
pub async fn update_product(
    State(state): State<AppState>,
    Form(form): Form<UpdateProductForm>,
) -> Result<Html<String>, AppError> {
    let (id, input) = form.validate()?;

    state.store.update(id, &input).await.map_err(|e| {
        error!(?e, id, "Failed to update product");
        AppError::from(e)
    })?;
    info!(id, "Product updated");

    render_product_list(&state).await
}

// GET /editar/{id} - Edit form for one product
#[instrument(skip(state))]
pub async fn edit_product_form(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let product = state
        .store
        .find(id)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch product");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            warn!(id, "Edit requested for missing product");
            AppError::not_found(format!("Product {id} not found"))
        })?;

    Ok(Html(views::edit_form(&state.presentation, &product)))
}
