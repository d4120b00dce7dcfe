// src/views/shop.rs
use crate::models::product::Product;

use super::{escape, format_price, layout, Section};

fn image(product: &Product) -> String {
    if product.image_url.is_empty() {
        return String::new();
    }
    format!(
        r#"<img src="{}" alt="{}">"#,
        escape(&product.image_url),
        escape(&product.name)
    )
}

pub fn product_list(products: &[Product]) -> String {
    let content = if products.is_empty() {
        "<h1>Products</h1><p>No products available right now.</p>".to_string()
    } else {
        let cards: String = products
            .iter()
            .map(|p| {
                format!(
                    r#"<div class="product-card">{image}<h2><a href="/products/{id}">{name}</a></h2><p class="price">{price}</p></div>"#,
                    image = image(p),
                    id = p.id,
                    name = escape(&p.name),
                    price = format_price(p.price),
                )
            })
            .collect();
        format!(r#"<h1>Products</h1><div class="products">{cards}</div>"#)
    };
    layout("Products", Section::Shop, None, &content)
}

pub fn product_detail(product: &Product) -> String {
    let availability = if product.is_available() {
        format!("In stock ({})", product.stock)
    } else {
        "Out of stock".to_string()
    };

    let content = format!(
        r#"<div class="product-detail">{image}<h1>{name}</h1><p class="price">{price}</p><p class="stock">{availability}</p><p class="description">{description}</p><p><a href="/products">Back to products</a></p></div>"#,
        image = image(product),
        name = escape(&product.name),
        price = format_price(product.price),
        description = escape(&product.description),
    );
    layout(&product.name, Section::Shop, None, &content)
}
