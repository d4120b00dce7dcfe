use axum::{routing::get, Router};

use crate::handlers::shop::{legacy_index, list_products, view_product};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/products", get(list_products))
        .route("/products/{id}", get(view_product))
        .route("/index.html", get(legacy_index))
}
