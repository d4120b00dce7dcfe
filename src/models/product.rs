use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteExecutor;
use sqlx::FromRow;

use crate::dtos::product::ProductInput;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image_url: String,
    pub created_at: NaiveDateTime,
}

impl Product {
    pub async fn all<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock, image_url, created_at
             FROM products ORDER BY id",
        )
        .fetch_all(executor)
        .await
    }

    /// Storefront listing: only products with stock left, by name.
    pub async fn in_stock<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock, image_url, created_at
             FROM products WHERE stock > 0
             ORDER BY name COLLATE NOCASE ASC, id ASC",
        )
        .fetch_all(executor)
        .await
    }

    pub async fn find<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock, image_url, created_at
             FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    pub async fn insert<'e>(executor: impl SqliteExecutor<'e>, input: &ProductInput) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, stock, image_url)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, name, description, price, stock, image_url, created_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .bind(&input.image_url)
        .fetch_one(executor)
        .await
    }

    /// Overwrites every mutable field; `None` when the row is gone.
    pub async fn update<'e>(
        executor: impl SqliteExecutor<'e>,
        id: i64,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET
             name = ?, description = ?, price = ?, stock = ?, image_url = ?
             WHERE id = ?
             RETURNING id, name, description, price, stock, image_url, created_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .bind(&input.image_url)
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}
