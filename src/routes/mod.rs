pub mod products;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().merge(products::routes())
}

/// The complete application with state and request tracing attached.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
