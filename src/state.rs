// src/state.rs
use sqlx::SqlitePool;

use crate::auth::password::AdminCredentials;
use crate::auth::session::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub admin: AdminCredentials,
    pub session: SessionKeys,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, admin: AdminCredentials, session: SessionKeys) -> Self {
        Self { db_pool, admin, session }
    }
}
