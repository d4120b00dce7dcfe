// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::product::Product;

/// Raw admin form submission. Every field is optional so that missing
/// values reach validation instead of failing extraction.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub image_url: Option<String>,
}

/// Validated values ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name and Price are required fields.")]
    MissingRequired,
    #[error("Invalid price or stock format. Please enter valid numbers.")]
    InvalidNumber,
}

impl ProductForm {
    pub fn to_new_product(&self) -> Result<ProductInput, FormError> {
        let (name, price) = self.required()?;
        Ok(ProductInput {
            name,
            description: self.description.clone().unwrap_or_default(),
            price: parse_price(&price)?,
            stock: parse_stock(self.stock.as_deref(), 0)?,
            image_url: self.image_url.clone().unwrap_or_default(),
        })
    }

    /// Fields left out of the submission keep their stored values.
    pub fn apply_to(&self, existing: &Product) -> Result<ProductInput, FormError> {
        let (name, price) = self.required()?;
        Ok(ProductInput {
            name,
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            price: parse_price(&price)?,
            stock: parse_stock(self.stock.as_deref(), existing.stock)?,
            image_url: self
                .image_url
                .clone()
                .unwrap_or_else(|| existing.image_url.clone()),
        })
    }

    fn required(&self) -> Result<(String, String), FormError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let price = self.price.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() || price.is_empty() {
            return Err(FormError::MissingRequired);
        }
        Ok((name.to_string(), price.to_string()))
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            price: Some(product.price.to_string()),
            stock: Some(product.stock.to_string()),
            image_url: Some(product.image_url.clone()),
        }
    }
}

fn parse_price(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(FormError::InvalidNumber),
    }
}

// Absent means "keep", an empty field means zero.
fn parse_stock(raw: Option<&str>, fallback: i64) -> Result<i64, FormError> {
    let Some(raw) = raw else {
        return Ok(fallback);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i64>() {
        Ok(stock) if stock >= 0 => Ok(stock),
        _ => Err(FormError::InvalidNumber),
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image_url: String,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            image_url: product.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str) -> ProductForm {
        ProductForm {
            name: Some(name.into()),
            price: Some(price.into()),
            ..Default::default()
        }
    }

    fn stored() -> Product {
        Product {
            id: 7,
            name: "Mug".into(),
            description: "Stoneware".into(),
            price: 9.5,
            stock: 12,
            image_url: "http://img/mug.jpg".into(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn new_product_defaults_optional_fields() {
        let input = form("Mug", "12.99").to_new_product().unwrap();
        assert_eq!(input.name, "Mug");
        assert_eq!(input.price, 12.99);
        assert_eq!(input.stock, 0);
        assert_eq!(input.description, "");
        assert_eq!(input.image_url, "");
    }

    #[test]
    fn name_and_price_are_required() {
        assert_eq!(form("", "1").to_new_product(), Err(FormError::MissingRequired));
        assert_eq!(form("   ", "1").to_new_product(), Err(FormError::MissingRequired));
        assert_eq!(form("Mug", "").to_new_product(), Err(FormError::MissingRequired));
        assert_eq!(ProductForm::default().to_new_product(), Err(FormError::MissingRequired));
    }

    #[test]
    fn rejects_unparseable_or_negative_numbers() {
        assert_eq!(form("Mug", "abc").to_new_product(), Err(FormError::InvalidNumber));
        assert_eq!(form("Mug", "-1").to_new_product(), Err(FormError::InvalidNumber));
        assert_eq!(form("Mug", "NaN").to_new_product(), Err(FormError::InvalidNumber));
        assert_eq!(form("Mug", "inf").to_new_product(), Err(FormError::InvalidNumber));

        let mut bad_stock = form("Mug", "1");
        bad_stock.stock = Some("2.5".into());
        assert_eq!(bad_stock.to_new_product(), Err(FormError::InvalidNumber));
        bad_stock.stock = Some("-3".into());
        assert_eq!(bad_stock.to_new_product(), Err(FormError::InvalidNumber));
    }

    #[test]
    fn empty_stock_means_zero() {
        let mut f = form("Mug", "1");
        f.stock = Some(" ".into());
        assert_eq!(f.apply_to(&stored()).unwrap().stock, 0);
    }

    #[test]
    fn update_keeps_fields_missing_from_form() {
        let input = form("Big Mug", "11").apply_to(&stored()).unwrap();
        assert_eq!(input.name, "Big Mug");
        assert_eq!(input.price, 11.0);
        assert_eq!(input.stock, 12);
        assert_eq!(input.description, "Stoneware");
        assert_eq!(input.image_url, "http://img/mug.jpg");
    }

    #[test]
    fn update_can_blank_optional_text() {
        let mut f = form("Mug", "9.5");
        f.description = Some(String::new());
        assert_eq!(f.apply_to(&stored()).unwrap().description, "");
    }

    #[test]
    fn form_prefills_from_product() {
        let f = ProductForm::from(&stored());
        assert_eq!(f.price.as_deref(), Some("9.5"));
        assert_eq!(f.stock.as_deref(), Some("12"));
    }

    #[test]
    fn response_is_flat() {
        let json = serde_json::to_value(ProductResponse::from(stored())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Mug",
                "description": "Stoneware",
                "price": 9.5,
                "stock": 12,
                "image_url": "http://img/mug.jpg"
            })
        );
    }
}
