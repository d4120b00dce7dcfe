// src/middleware/auth.rs
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::auth::session::SESSION_COOKIE;
use crate::cookies;
use crate::flash::{self, Flash};
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/admin/login";

/// Who is acting on this request. Only present behind [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub subject: String,
    pub expires_at: Option<DateTime<Utc>>,
}

pub async fn require_admin(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = match cookies::read(req.headers(), SESSION_COOKIE) {
        Some(token) => match state.session.verify_session(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "Rejected admin session cookie");
                None
            }
        },
        None => None,
    };

    let Some(claims) = claims else {
        return flash::redirect(
            &state.session,
            LOGIN_PATH,
            Flash::warning("Please log in to access the admin panel."),
        )
        .unwrap_or_else(IntoResponse::into_response);
    };

    req.extensions_mut().insert(AdminContext {
        expires_at: claims.expires_at(),
        subject: claims.sub,
    });

    next.run(req).await
}
