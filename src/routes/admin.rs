use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::product::{
    create_product, delete_product, edit_product_form, get_product_json, list_products,
    new_product_form, update_product,
};
use crate::handlers::session::{login, login_form, logout};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout));

    let protected = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/new", get(new_product_form))
        .route("/products/{id}/edit", get(edit_product_form).post(update_product))
        .route("/products/{id}/delete", post(delete_product))
        .route("/products/{id}/json", get(get_product_json))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    open.merge(protected)
}
