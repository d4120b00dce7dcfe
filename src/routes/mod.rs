pub mod admin;
pub mod shop;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::shop::{health_check, not_found};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(shop::routes())
        .nest("/admin", admin::routes(state.clone()))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
