// src/handlers/shop.rs
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::{error, instrument};

use crate::error::AppError;
use crate::handlers::ProductId;
use crate::models::product::Product;
use crate::state::AppState;
use crate::views;

// GET / and GET /products - In-stock products by name
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = Product::in_stock(&state.db_pool).await.map_err(|e| {
        error!(?e, "Failed to fetch storefront products");
        AppError::db(e)
    })?;

    Ok(Html(views::shop::product_list(&products)))
}

// GET /products/:id - Product detail
#[instrument(skip(state))]
pub async fn view_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let product = Product::find(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Html(views::shop::product_detail(&product)))
}

// GET /index.html - Legacy entry point
pub async fn legacy_index() -> Redirect {
    Redirect::to("/products")
}

pub async fn health_check() -> &'static str {
    "OK"
}

// Any path no route claims
pub async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
