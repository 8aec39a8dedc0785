// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::Product;

/// Create form as submitted by the browser. Every field is optional here so
/// that a missing one surfaces as a validation error instead of an
/// extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductForm {
    #[serde(rename = "nomeProduto")]
    pub name: Option<String>,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<String>,
    #[serde(rename = "fotoProduto")]
    pub photo_url: Option<String>,
}

/// Edit form: the create fields plus the hidden `id`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductForm {
    pub id: Option<String>,
    #[serde(rename = "nomeProduto")]
    pub name: Option<String>,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<String>,
    #[serde(rename = "fotoProduto")]
    pub photo_url: Option<String>,
}

/// The mutable fields of a product, validated. Sent to the store on insert
/// and update; the store owns `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInput {
    #[serde(rename = "nomeProduto")]
    pub name: String,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i64,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "fotoProduto")]
    pub photo_url: String,
}

impl ProductInput {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            stock_quantity: self.stock_quantity,
            price: self.price,
            photo_url: self.photo_url,
        }
    }
}

impl CreateProductForm {
    pub fn validate(self) -> Result<ProductInput, AppError> {
        let name = required_text(self.name, "nomeProduto")?;
        let stock_quantity = parse_quantity(self.stock_quantity)?;
        let price = parse_price(self.price)?;
        let photo_url = required_text(self.photo_url, "fotoProduto")?;

        Ok(ProductInput {
            name,
            stock_quantity,
            price,
            photo_url,
        })
    }
}

impl UpdateProductForm {
    pub fn validate(self) -> Result<(i64, ProductInput), AppError> {
        let id = parse_id(self.id)?;
        let input = CreateProductForm {
            name: self.name,
            stock_quantity: self.stock_quantity,
            price: self.price,
            photo_url: self.photo_url,
        }
        .validate()?;

        Ok((id, input))
    }
}

// ==================== Field coercion ====================

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

fn parse_id(value: Option<String>) -> Result<i64, AppError> {
    let raw = required_text(value, "id")?;
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(format!("id must be an integer, got '{raw}'")))
}

fn parse_quantity(value: Option<String>) -> Result<i64, AppError> {
    let raw = required_text(value, "quantidadeEstoque")?;
    let quantity = raw.parse::<i64>().map_err(|_| {
        AppError::validation(format!("quantidadeEstoque must be an integer, got '{raw}'"))
    })?;

    if quantity < 0 {
        return Err(AppError::validation("quantidadeEstoque cannot be negative"));
    }
    Ok(quantity)
}

fn parse_price(value: Option<String>) -> Result<f64, AppError> {
    let raw = required_text(value, "preco")?;
    let price = raw
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| AppError::validation(format!("preco must be a number, got '{raw}'")))?;

    if price < 0.0 {
        return Err(AppError::validation("preco cannot be negative"));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_form() -> CreateProductForm {
        CreateProductForm {
            name: Some("Widget".into()),
            stock_quantity: Some("10".into()),
            price: Some("9.99".into()),
            photo_url: Some("http://x/img.png".into()),
        }
    }

    #[test]
    fn valid_form_is_coerced() {
        let input = widget_form().validate().unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.stock_quantity, 10);
        assert_eq!(input.price, 9.99);
        assert_eq!(input.photo_url, "http://x/img.png");
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = CreateProductForm {
            name: Some("   ".into()),
            ..widget_form()
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_photo_is_rejected() {
        let form = CreateProductForm {
            photo_url: None,
            ..widget_form()
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn quantity_must_be_a_non_negative_integer() {
        for bad in ["ten", "1.5", "-3"] {
            let form = CreateProductForm {
                stock_quantity: Some(bad.into()),
                ..widget_form()
            };
            assert!(matches!(form.validate(), Err(AppError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn price_rejects_garbage_and_non_finite() {
        for bad in ["abc", "NaN", "inf", "-1"] {
            let form = CreateProductForm {
                price: Some(bad.into()),
                ..widget_form()
            };
            assert!(matches!(form.validate(), Err(AppError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn update_form_requires_integer_id() {
        let form = UpdateProductForm {
            id: Some("x1".into()),
            name: Some("Widget".into()),
            stock_quantity: Some("1".into()),
            price: Some("1".into()),
            photo_url: Some("p".into()),
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        let form = UpdateProductForm {
            id: Some("7".into()),
            name: Some("Widget".into()),
            stock_quantity: Some("1".into()),
            price: Some("2.5".into()),
            photo_url: Some("p".into()),
        };
        let (id, input) = form.validate().unwrap();
        assert_eq!(id, 7);
        assert_eq!(input.price, 2.5);
    }
}
