// src/handlers/product.rs
use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Extension, Form, Json,
};
use tracing::{error, info, instrument};

use crate::database::UnitOfWork;
use crate::dtos::product::{ProductForm, ProductResponse};
use crate::error::AppError;
use crate::handlers::ProductId;
use crate::flash::{self, Flash, IncomingFlash};
use crate::middleware::auth::AdminContext;
use crate::models::product::Product;
use crate::state::AppState;
use crate::views;

const LIST_PATH: &str = "/admin/products";
const NEW_TITLE: &str = "Add New Product";

fn edit_title(product: &Product) -> String {
    format!("Edit Product: {}", product.name)
}

fn edit_action(id: i64) -> String {
    format!("/admin/products/{id}/edit")
}

/// Re-renders a product form with an inline error and the given status.
fn form_error(status: StatusCode, title: &str, action: &str, values: &ProductForm, message: impl Into<String>) -> Response {
    let body = views::admin::product_form(title, action, values, Some(&Flash::danger(message)));
    IncomingFlash::default().page(status, body)
}

async fn find_or_404(state: &AppState, id: i64) -> Result<Product, AppError> {
    Product::find(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))
}

// GET /admin/products - List all products
#[instrument(skip(state, flash, _admin))]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(_admin): Extension<AdminContext>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let products = Product::all(&state.db_pool).await.map_err(|e| {
        error!(?e, "Failed to fetch products");
        AppError::db(e)
    })?;

    let body = views::admin::product_list(&products, flash.get());
    Ok(flash.page(StatusCode::OK, body))
}

// GET /admin/products/new - Empty creation form
pub async fn new_product_form(flash: IncomingFlash) -> Response {
    let body = views::admin::product_form(NEW_TITLE, LIST_PATH, &ProductForm::default(), flash.get());
    flash.page(StatusCode::OK, body)
}

// POST /admin/products - Create new product
#[instrument(skip(state, form, admin), fields(actor = %admin.subject, session_expires = ?admin.expires_at))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let input = match form.to_new_product() {
        Ok(input) => input,
        Err(e) => return Ok(form_error(StatusCode::BAD_REQUEST, NEW_TITLE, LIST_PATH, &form, e.to_string())),
    };

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let created = match Product::insert(uow.conn(), &input).await {
        Ok(product) => uow.commit().await.map(|()| product),
        Err(e) => {
            uow.rollback().await;
            Err(e)
        }
    };

    match created {
        Ok(product) => {
            info!(id = product.id, name = %product.name, "Product created");
            flash::redirect(
                &state.session,
                LIST_PATH,
                Flash::success(format!("Product \"{}\" created successfully!", product.name)),
            )
        }
        Err(e) => {
            error!(?e, "Failed to create product");
            Ok(form_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                NEW_TITLE,
                LIST_PATH,
                &form,
                format!("Error creating product: {e}"),
            ))
        }
    }
}

// GET /admin/products/:id/edit - Pre-filled edit form
#[instrument(skip(state, flash, _admin))]
pub async fn edit_product_form(
    ProductId(id): ProductId,
    State(state): State<AppState>,
    Extension(_admin): Extension<AdminContext>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let product = find_or_404(&state, id).await?;
    let body = views::admin::product_form(
        &edit_title(&product),
        &edit_action(id),
        &ProductForm::from(&product),
        flash.get(),
    );
    Ok(flash.page(StatusCode::OK, body))
}

// POST /admin/products/:id/edit - Update product in place
#[instrument(skip(state, form, admin), fields(actor = %admin.subject, session_expires = ?admin.expires_at))]
pub async fn update_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let product = find_or_404(&state, id).await?;
    let title = edit_title(&product);
    let action = edit_action(id);

    let input = match form.apply_to(&product) {
        Ok(input) => input,
        Err(e) => return Ok(form_error(StatusCode::BAD_REQUEST, &title, &action, &form, e.to_string())),
    };

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let updated = match Product::update(uow.conn(), id, &input).await {
        Ok(Some(product)) => uow.commit().await.map(|()| Some(product)),
        Ok(None) => {
            uow.rollback().await;
            Ok(None)
        }
        Err(e) => {
            uow.rollback().await;
            Err(e)
        }
    };

    match updated {
        Ok(Some(product)) => {
            info!(id, name = %product.name, "Product updated");
            flash::redirect(
                &state.session,
                LIST_PATH,
                Flash::success(format!("Product \"{}\" updated successfully!", product.name)),
            )
        }
        Ok(None) => Err(AppError::not_found("Product not found")),
        Err(e) => {
            error!(?e, id, "Failed to update product");
            Ok(form_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &title,
                &action,
                &form,
                format!("Error updating product: {e}"),
            ))
        }
    }
}

// POST /admin/products/:id/delete - Delete product
#[instrument(skip(state, admin), fields(actor = %admin.subject, session_expires = ?admin.expires_at))]
pub async fn delete_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
) -> Result<Response, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let product = match Product::find(uow.conn(), id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            uow.rollback().await;
            return Err(AppError::not_found("Product not found"));
        }
        Err(e) => {
            uow.rollback().await;
            return Err(e.into());
        }
    };

    let deleted = match Product::delete(uow.conn(), id).await {
        Ok(_) => uow.commit().await,
        Err(e) => {
            uow.rollback().await;
            Err(e)
        }
    };

    let flash = match deleted {
        Ok(()) => {
            info!(id, name = %product.name, "Product deleted");
            Flash::success(format!("Product \"{}\" deleted successfully!", product.name))
        }
        Err(e) => {
            error!(?e, id, "Failed to delete product");
            Flash::danger(format!("Error deleting product \"{}\": {e}", product.name))
        }
    };

    flash::redirect(&state.session, LIST_PATH, flash)
}

// GET /admin/products/:id/json - Flat JSON record
#[instrument(skip(state, _admin))]
pub async fn get_product_json(
    ProductId(id): ProductId,
    State(state): State<AppState>,
    Extension(_admin): Extension<AdminContext>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = find_or_404(&state, id).await?;
    Ok(Json(ProductResponse::from(product)))
}
