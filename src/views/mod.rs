// src/views/mod.rs
//! HTML rendering. Every function here is pure: records in, markup out.
//!
//! The page is driven by htmx. Mutations answer with [`product_list`], which
//! replaces `#product-list` wholesale; the edit link fills the per-product
//! `#edit-form-{id}` slot with [`edit_form`].

mod presentation;

pub use presentation::{Labels, Locale, Presentation};

use crate::models::product::Product;

pub const PRODUCT_LIST_ID: &str = "product-list";

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@2.0.4";

pub fn edit_slot_id(id: i64) -> String {
    format!("edit-form-{id}")
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

/// Full document: title, create form and the current list.
pub fn page(p: &Presentation, products: &[Product]) -> String {
    let title = escape(p.labels.title);
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{PICO_CSS}">
<script src="{HTMX_JS}"></script>
</head>
<body>
<main class="container">
<h1>{title}</h1>
{form}
{list}
</main>
</body>
</html>
"#,
        form = create_form(p),
        list = product_list(p, products),
    )
}

pub fn create_form(p: &Presentation) -> String {
    let l = &p.labels;
    format!(
        r##"<form method="post" hx-post="/cadastrar-produto" hx-target="#{PRODUCT_LIST_ID}" hx-swap="outerHTML" hx-on::after-request="this.reset()"><fieldset><input type="text" name="nomeProduto" placeholder="{name}" required><input type="number" name="quantidadeEstoque" placeholder="{qty}" required><input type="number" name="preco" placeholder="{price}" required step="any"><input type="text" name="fotoProduto" placeholder="{photo}" required><button type="submit" class="secondary">{button}</button></fieldset></form>"##,
        name = escape(l.name_placeholder),
        qty = escape(l.quantity_placeholder),
        price = escape(l.price_placeholder),
        photo = escape(l.photo_placeholder),
        button = escape(l.create_button),
    )
}

/// Edit form pre-filled with the record's current values. Submitting it
/// replaces the whole list, which also discards this form.
pub fn edit_form(p: &Presentation, product: &Product) -> String {
    let l = &p.labels;
    format!(
        r##"<form method="post" hx-post="/editar-produto" hx-target="#{PRODUCT_LIST_ID}" hx-swap="outerHTML"><fieldset><input type="hidden" name="id" value="{id}"><input type="text" name="nomeProduto" value="{name}" required><input type="number" name="quantidadeEstoque" value="{qty}" required><input type="number" name="preco" value="{price}" required step="any"><input type="text" name="fotoProduto" placeholder="{photo_placeholder}" value="{photo}" required><button type="submit" class="secondary">{button}</button></fieldset></form>"##,
        id = product.id,
        name = escape(&product.name),
        qty = product.stock_quantity,
        price = product.price,
        photo_placeholder = escape(l.photo_placeholder),
        photo = escape(&product.photo_url),
        button = escape(l.save_button),
    )
}

pub fn product_card(p: &Presentation, product: &Product) -> String {
    let l = &p.labels;
    let id = product.id;
    format!(
        r##"<article><img src="{src}" width="200" height="200" alt="{alt}"><footer>{name_prefix}{name}<br>{price_prefix}{price}<br>{qty_prefix}{qty}<br><a class="contrast" hx-delete="/deletar/{id}" hx-target="#{PRODUCT_LIST_ID}" hx-swap="outerHTML">{delete}</a><br><a class="contrast" hx-get="/editar/{id}" hx-target="#{slot}" hx-swap="innerHTML">{edit}</a><br><div id="{slot}" class="edit-form"></div></footer></article>"##,
        src = escape(&product.photo_url),
        alt = escape(l.photo_alt),
        name_prefix = escape(l.name_prefix),
        name = escape(&product.name),
        price_prefix = escape(l.price_prefix),
        price = escape(&p.format_price(product.price)),
        qty_prefix = escape(l.quantity_prefix),
        qty = product.stock_quantity,
        delete = escape(l.delete_link),
        edit = escape(l.edit_link),
        slot = edit_slot_id(id),
    )
}

/// The swappable list container, one card per record in the given order.
pub fn product_list(p: &Presentation, products: &[Product]) -> String {
    let mut html = format!(r#"<div id="{PRODUCT_LIST_ID}">"#);
    for product in products {
        html.push_str(&product_card(p, product));
    }
    html.push_str("</div>");
    html
}
