// src/views/admin.rs
use crate::dtos::product::ProductForm;
use crate::flash::Flash;
use crate::models::product::Product;

use super::{escape, format_price, layout, Section};

pub fn login_page(flash: Option<&Flash>) -> String {
    let content = r#"<h1>Admin Login</h1>
<form method="post" action="/admin/login">
<label for="password">Password</label>
<input type="password" id="password" name="password" required autofocus>
<p><button type="submit">Log in</button></p>
</form>"#;
    layout("Admin Login", Section::Shop, flash, content)
}

pub fn product_list(products: &[Product], flash: Option<&Flash>) -> String {
    let rows: String = products
        .iter()
        .map(|p| {
            format!(
                r#"<tr><td>{id}</td><td>{name}</td><td>{price}</td><td>{stock}</td><td>{added}</td><td><a href="/admin/products/{id}/edit">Edit</a> <a href="/admin/products/{id}/json">JSON</a> <form class="inline" method="post" action="/admin/products/{id}/delete" onsubmit="return confirm('Delete this product?');"><button type="submit">Delete</button></form></td></tr>"#,
                id = p.id,
                name = escape(&p.name),
                price = format_price(p.price),
                stock = p.stock,
                added = p.created_at.format("%Y-%m-%d"),
            )
        })
        .collect();

    let table = if products.is_empty() {
        "<p>No products yet.</p>".to_string()
    } else {
        format!(
            "<table><thead><tr><th>ID</th><th>Name</th><th>Price</th><th>Stock</th><th>Added</th><th>Actions</th></tr></thead><tbody>{rows}</tbody></table>"
        )
    };

    let content = format!(
        r#"<h1>Manage Products</h1><p><a href="/admin/products/new">Add New Product</a></p>{table}"#
    );
    layout("Manage Products", Section::Admin, flash, &content)
}

/// Shared by create and edit; `values` pre-fills the inputs.
pub fn product_form(title: &str, action: &str, values: &ProductForm, flash: Option<&Flash>) -> String {
    let value = |field: &Option<String>| escape(field.as_deref().unwrap_or_default());

    let content = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
<label for="name">Name</label>
<input type="text" id="name" name="name" value="{name}" required>
<label for="description">Description</label>
<textarea id="description" name="description">{description}</textarea>
<label for="price">Price</label>
<input type="number" id="price" name="price" step="0.01" min="0" value="{price}" required>
<label for="stock">Stock</label>
<input type="number" id="stock" name="stock" step="1" min="0" value="{stock}">
<label for="image_url">Image URL</label>
<input type="url" id="image_url" name="image_url" value="{image_url}">
<p><button type="submit">Save</button> <a href="/admin/products">Cancel</a></p>
</form>"#,
        title = escape(title),
        action = escape(action),
        name = value(&values.name),
        description = value(&values.description),
        price = value(&values.price),
        stock = value(&values.stock),
        image_url = value(&values.image_url),
    );
    layout(title, Section::Admin, flash, &content)
}
