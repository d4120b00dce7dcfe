#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use shop_catalog::auth::password::AdminCredentials;
use shop_catalog::auth::session::{SessionKeys, SESSION_COOKIE};
use shop_catalog::database::init_schema;
use shop_catalog::dtos::product::ProductInput;
use shop_catalog::models::product::Product;
use shop_catalog::state::AppState;
use shop_catalog::create_router;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "correct horse";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        // One connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        init_schema(&pool).await.expect("schema");

        let state = AppState::new(
            pool,
            AdminCredentials::from_password(ADMIN_PASSWORD, 4).expect("hash"),
            SessionKeys::from_secret("test-session-secret"),
        );
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("infallible router")
    }

    pub fn admin_cookie(&self) -> String {
        let token = self.state.session.issue_session().expect("session token");
        format!("{SESSION_COOKIE}={token}")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn admin_get(&self, uri: &str) -> Response {
        let request = Request::get(uri)
            .header(header::COOKIE, self.admin_cookie())
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    pub async fn admin_post(&self, uri: &str, body: &str) -> Response {
        let cookie = self.admin_cookie();
        self.post_form(uri, body, Some(&cookie)).await
    }

    pub async fn seed(&self, name: &str, price: f64, stock: i64) -> Product {
        let input = ProductInput {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            stock,
            image_url: String::new(),
        };
        Product::insert(&self.state.db_pool, &input).await.expect("seed product")
    }

    pub async fn find(&self, id: i64) -> Option<Product> {
        Product::find(&self.state.db_pool, id).await.expect("find product")
    }

    pub async fn find_by_name(&self, name: &str) -> Option<Product> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock, image_url, created_at FROM products WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.state.db_pool)
        .await
        .expect("query by name")
    }

    /// Makes every `event` (INSERT, UPDATE or DELETE) on products fail.
    pub async fn reject_writes(&self, event: &str) {
        let sql = format!(
            "CREATE TRIGGER reject_{event} BEFORE {event} ON products \
             BEGIN SELECT RAISE(ABORT, 'products are read-only'); END"
        );
        sqlx::query(&sql)
            .execute(&self.state.db_pool)
            .await
            .expect("create trigger");
    }

    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.state.db_pool)
            .await
            .expect("count")
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` pairs from every `Set-Cookie`, ready to send back.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().to_string())
        .collect()
}

/// Replays a response's flash cookie on an admin page and returns its body.
pub async fn follow_flash(app: &TestApp, response: &Response, uri: &str) -> String {
    let flash = set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with("flash="))
        .expect("flash cookie");
    let request = Request::get(uri)
        .header(header::COOKIE, format!("{}; {}", app.admin_cookie(), flash))
        .body(Body::empty())
        .unwrap();
    body_text(app.send(request).await).await
}

pub fn assert_redirect(response: &Response, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}
