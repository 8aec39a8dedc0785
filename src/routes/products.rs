use axum::{
    routing::{delete, get, post},
    Router,
};
use crate::handlers::product::{
    create_product, delete_product, edit_product_form, home, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/cadastrar-produto", post(create_product))
        .route("/deletar/{id}", delete(delete_product))
        .route("/editar-produto", post(update_product))
        .route("/editar/{id}", get(edit_product_form))
}
