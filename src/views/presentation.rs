//! Locale-dependent text and currency formatting for the rendered pages.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    PtBr,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

/// Every piece of UI text the renderer emits.
#[derive(Debug, Clone)]
pub struct Labels {
    pub title: &'static str,
    pub name_placeholder: &'static str,
    pub quantity_placeholder: &'static str,
    pub price_placeholder: &'static str,
    pub photo_placeholder: &'static str,
    pub create_button: &'static str,
    pub save_button: &'static str,
    pub photo_alt: &'static str,
    pub name_prefix: &'static str,
    pub price_prefix: &'static str,
    pub quantity_prefix: &'static str,
    pub delete_link: &'static str,
    pub edit_link: &'static str,
}

const PT_BR: Labels = Labels {
    title: "Estoque",
    name_placeholder: "Nome Do Produto",
    quantity_placeholder: "Quantidade Do Produto",
    price_placeholder: "Preço Do Produto",
    photo_placeholder: "Link da Foto do Produto",
    create_button: "Cadastrar Produto",
    save_button: "Salvar Alterações",
    photo_alt: "Foto do Produto",
    name_prefix: "Produto: ",
    price_prefix: "Preço: ",
    quantity_prefix: "Quantidade em Estoque: ",
    delete_link: "Excluir Produto",
    edit_link: "Editar Produto",
};

const EN: Labels = Labels {
    title: "Inventory",
    name_placeholder: "Product Name",
    quantity_placeholder: "Product Quantity",
    price_placeholder: "Product Price",
    photo_placeholder: "Product Photo Link",
    create_button: "Add Product",
    save_button: "Save Changes",
    photo_alt: "Product Photo",
    name_prefix: "Product: ",
    price_prefix: "Price: ",
    quantity_prefix: "In Stock: ",
    delete_link: "Delete Product",
    edit_link: "Edit Product",
};

#[derive(Debug, Clone)]
pub struct Presentation {
    pub labels: Labels,
    pub currency_symbol: String,
}

impl Presentation {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self {
                labels: PT_BR,
                currency_symbol: "R$".to_string(),
            },
            Locale::En => Self {
                labels: EN,
                currency_symbol: "$".to_string(),
            },
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// `R$ 1,234.50`: symbol, two decimals, comma-grouped thousands.
    pub fn format_price(&self, price: f64) -> String {
        format!("{} {}", self.currency_symbol, group_thousands(price))
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::for_locale(Locale::PtBr)
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and keeps no sign
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_two_decimals_and_grouping() {
        let p = Presentation::default();
        assert_eq!(p.format_price(9.99), "R$ 9.99");
        assert_eq!(p.format_price(0.0), "R$ 0.00");
        assert_eq!(p.format_price(1234.5), "R$ 1,234.50");
        assert_eq!(p.format_price(1_000_000.0), "R$ 1,000,000.00");
        assert_eq!(p.format_price(999.999), "R$ 1,000.00");
        assert_eq!(p.format_price(-1234.5), "R$ -1,234.50");
    }

    #[test]
    fn currency_symbol_is_configurable() {
        let p = Presentation::for_locale(Locale::En).with_currency_symbol("€");
        assert_eq!(p.format_price(12.0), "€ 12.00");
        assert_eq!(p.labels.delete_link, "Delete Product");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
