// src/flash.rs
//! One-shot messages carried across a redirect in a signed cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, HeaderValue, StatusCode};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use chrono::{Duration, Utc};
use http::header::SET_COOKIE;
use serde::{Deserialize, Serialize};

use crate::auth::session::SessionKeys;
use crate::cookies;
use crate::error::AppError;
use crate::state::AppState;

pub const FLASH_COOKIE: &str = "flash";
pub const FLASH_TTL_SECONDS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
            FlashKind::Warning => "warning",
            FlashKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn new(kind: FlashKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Danger, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashKind::Info, message)
    }
}

#[derive(Serialize, Deserialize)]
struct FlashClaims {
    flash: Flash,
    exp: usize,
}

/// `Set-Cookie` value carrying `flash` to the next rendered page.
pub fn cookie(keys: &SessionKeys, flash: Flash) -> Result<String, AppError> {
    let exp = (Utc::now() + Duration::seconds(FLASH_TTL_SECONDS)).timestamp() as usize;
    let token = keys.sign(&FlashClaims { flash, exp })?;
    Ok(cookies::set(FLASH_COOKIE, &token, FLASH_TTL_SECONDS))
}

pub fn redirect(keys: &SessionKeys, to: &str, flash: Flash) -> Result<Response, AppError> {
    let cookie = cookie(keys, flash)?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(to)).into_response())
}

/// The flash left by the previous response, if any. Rendering through
/// [`IncomingFlash::page`] clears the cookie so it is shown once.
#[derive(Debug, Default)]
pub struct IncomingFlash {
    flash: Option<Flash>,
    cookie_present: bool,
}

impl IncomingFlash {
    pub fn get(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn page(self, status: StatusCode, body: String) -> Response {
        let mut response = (status, Html(body)).into_response();
        if self.cookie_present {
            if let Ok(value) = HeaderValue::from_str(&cookies::clear(FLASH_COOKIE)) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

impl FromRequestParts<AppState> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = cookies::read(&parts.headers, FLASH_COOKIE) else {
            return Ok(Self::default());
        };

        let flash = state
            .session
            .verify::<FlashClaims>(token)
            .map(|claims| claims.flash)
            .ok();

        Ok(Self { flash, cookie_present: true })
    }
}
