// src/config.rs
use std::env;
use std::net::IpAddr;

use dotenvy::dotenv;

use crate::database::{is_valid_table_name, DEFAULT_TABLE};
use crate::error::AppError;
use crate::views::{Locale, Presentation};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// Hosted REST table API, reached with URL + key.
    Rest { url: String, api_key: String },
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub backend: StoreBackend,
    pub table: String,
    pub presentation: Presentation,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |key: &str| {
            get(key).ok_or_else(|| AppError::config(format!("Missing environment variable '{key}'")))
        };

        let host = get("HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|e| AppError::config(format!("Invalid HOST: {e}")))?;
        let port = get("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| AppError::config(format!("Invalid PORT: {e}")))?;

        let backend_name = get("STORE_BACKEND").unwrap_or_else(|| {
            if get("DATABASE_URL").is_some() { "postgres" } else { "rest" }.to_string()
        });
        let backend = match backend_name.as_str() {
            "rest" => StoreBackend::Rest {
                url: require("SUPABASE_URL")?,
                api_key: require("SUPABASE_KEY")?,
            },
            "postgres" => StoreBackend::Postgres {
                database_url: require("DATABASE_URL")?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(AppError::config(format!(
                    "Invalid STORE_BACKEND '{other}', expected rest, postgres or memory"
                )))
            }
        };

        let table = get("STORE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());
        if !is_valid_table_name(&table) {
            return Err(AppError::config(format!("Invalid STORE_TABLE '{table}'")));
        }

        let locale = get("UI_LOCALE")
            .map(|l| l.parse::<Locale>())
            .transpose()
            .map_err(|e| AppError::config(format!("Invalid UI_LOCALE: {e}")))?
            .unwrap_or(Locale::PtBr);
        let mut presentation = Presentation::for_locale(locale);
        if let Some(symbol) = get("CURRENCY_SYMBOL") {
            presentation = presentation.with_currency_symbol(symbol);
        }

        Ok(Self {
            host,
            port,
            backend,
            table,
            presentation,
        })
    }
}
