// src/handlers/session.rs
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use http::header::SET_COOKIE;
use tracing::{info, instrument, warn};

use crate::auth::session::{SESSION_COOKIE, SESSION_TTL_SECONDS};
use crate::cookies;
use crate::dtos::session::LoginForm;
use crate::error::AppError;
use crate::flash::{self, Flash, IncomingFlash};
use crate::middleware::auth::LOGIN_PATH;
use crate::state::AppState;
use crate::views;

// GET /admin/login
pub async fn login_form(flash: IncomingFlash) -> Response {
    let body = views::admin::login_page(flash.get());
    flash.page(StatusCode::OK, body)
}

// POST /admin/login
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.password.is_empty() {
        let body = views::admin::login_page(Some(&Flash::danger("Password is required.")));
        return Ok(IncomingFlash::default().page(StatusCode::BAD_REQUEST, body));
    }

    if !state.admin.verify(&form.password)? {
        warn!("Rejected admin login attempt");
        let body = views::admin::login_page(Some(&Flash::danger("Invalid password.")));
        return Ok(IncomingFlash::default().page(StatusCode::UNAUTHORIZED, body));
    }

    let token = state.session.issue_session()?;
    let welcome = flash::cookie(&state.session, Flash::success("Logged in successfully."))?;
    info!("Admin logged in");

    Ok((
        AppendHeaders([
            (SET_COOKIE, cookies::set(SESSION_COOKIE, &token, SESSION_TTL_SECONDS)),
            (SET_COOKIE, welcome),
        ]),
        Redirect::to("/admin/products"),
    )
        .into_response())
}

// GET /admin/logout
pub async fn logout(State(state): State<AppState>) -> Result<Response, AppError> {
    let goodbye = flash::cookie(&state.session, Flash::info("You have been logged out."))?;
    info!("Admin logged out");

    Ok((
        AppendHeaders([(SET_COOKIE, cookies::clear(SESSION_COOKIE)), (SET_COOKIE, goodbye)]),
        Redirect::to(LOGIN_PATH),
    )
        .into_response())
}
