// src/views/mod.rs
//! Server-rendered HTML. Every page goes through [`layout`], which carries
//! the shared navbar and dark-mode toggle.

pub mod admin;
pub mod shop;

use axum::http::StatusCode;

use crate::flash::Flash;

const STYLE: &str = r#"<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #fff; color: #222; }
body.dark-mode { background: #1e1e1e; color: #eee; }
body.dark-mode a { color: #8ab4f8; }
nav.navbar { display: flex; gap: 1rem; align-items: center; padding: .75rem 1.5rem; background: #333; }
nav.navbar a { color: #fff; text-decoration: none; }
nav.navbar .spacer { flex: 1; }
main { padding: 1.5rem; max-width: 60rem; margin: 0 auto; }
.flash { padding: .75rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.flash-success { background: #d4edda; color: #155724; }
.flash-danger { background: #f8d7da; color: #721c24; }
.flash-warning { background: #fff3cd; color: #856404; }
.flash-info { background: #d1ecf1; color: #0c5460; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ccc; padding: .5rem; text-align: left; }
.products { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; }
.product-card { border: 1px solid #ccc; border-radius: 6px; padding: 1rem; }
.product-card img, .product-detail img { max-width: 100%; }
form.inline { display: inline; }
label { display: block; margin-top: .75rem; }
</style>"#;

const DARK_MODE_SCRIPT: &str = r#"<script>
(function () {
  var body = document.body;
  if (localStorage.getItem('dark-mode') === 'on') { body.classList.add('dark-mode'); }
  var toggle = document.getElementById('dark-mode-toggle');
  if (toggle) {
    toggle.addEventListener('click', function () {
      var on = body.classList.toggle('dark-mode');
      localStorage.setItem('dark-mode', on ? 'on' : 'off');
    });
  }
})();
</script>"#;

/// Which side of the site a page belongs to; picks the navbar links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Shop,
    Admin,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn navbar(section: Section) -> String {
    let session_link = match section {
        Section::Admin => r#"<a href="/admin/products">Manage Products</a><a href="/admin/logout">Logout</a>"#,
        Section::Shop => r#"<a href="/admin/login">Admin</a>"#,
    };
    format!(
        r#"<nav class="navbar"><a href="/products"><strong>Shop</strong></a><a href="/products">Products</a><span class="spacer"></span>{session_link}<button id="dark-mode-toggle" type="button">Dark mode</button></nav>"#
    )
}

pub fn flash_html(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => format!(
            r#"<div class="flash flash-{}">{}</div>"#,
            flash.kind.as_str(),
            escape(&flash.message)
        ),
        None => String::new(),
    }
}

pub fn layout(title: &str, section: Section, flash: Option<&Flash>, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{STYLE}
</head>
<body>
{nav}
<main>
{flash}
{content}
</main>
{DARK_MODE_SCRIPT}
</body>
</html>
"#,
        title = escape(title),
        nav = navbar(section),
        flash = flash_html(flash),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        r#"<h1>{} {}</h1><p>{}</p><p><a href="/products">Back to the shop</a></p>"#,
        status.as_u16(),
        escape(heading),
        escape(message)
    );
    layout(heading, Section::Shop, None, &content)
}
