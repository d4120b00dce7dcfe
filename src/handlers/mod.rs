pub mod product;
pub mod session;
pub mod shop;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// Product id from the `{id}` path segment. Anything that is not an `i64`
/// cannot name a product, so it is a 404 like any other unknown id.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for ProductId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Product not found"))?;

        raw.parse::<i64>()
            .map(ProductId)
            .map_err(|_| AppError::not_found("Product not found"))
    }
}
