//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BAKEHOUSE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env::VarError;
use std::path::PathBuf;

use bakehouse_core::Money;
use directories::ProjectDirs;
use serde::Serialize;
use thiserror::Error;

pub const STORE_NAME_VAR: &str = "BAKEHOUSE_STORE_NAME";
pub const CURRENCY_SYMBOL_VAR: &str = "BAKEHOUSE_CURRENCY_SYMBOL";
pub const CATALOG_PATH_VAR: &str = "BAKEHOUSE_CATALOG_PATH";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set but holds nothing usable.
    #[error("{0} is set but empty")]
    Empty(&'static str),

    /// The variable is set to bytes that are not valid Unicode.
    #[error("{0} is not valid Unicode")]
    NotUnicode(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the greeting)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Explicit menu file; `None` means "look in the config dir, then use
    /// the built-in menu".
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Sweet Corner Bakehouse"
    /// - Currency: $
    /// - Menu: not set
    fn default() -> Self {
        ConfigState {
            store_name: "Sweet Corner Bakehouse".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAKEHOUSE_STORE_NAME`: Override store name
    /// - `BAKEHOUSE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BAKEHOUSE_CATALOG_PATH`: Menu JSON file to load
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = read_var(&lookup, STORE_NAME_VAR)? {
            config.store_name = store_name;
        }

        if let Some(symbol) = read_var(&lookup, CURRENCY_SYMBOL_VAR)? {
            config.currency_symbol = symbol;
        }

        if let Some(path) = read_var(&lookup, CATALOG_PATH_VAR)? {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Where a user-provided menu lives when no path is configured.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.bakehouse.storefront/menu.json`
    /// - **Windows**: `%APPDATA%\bakehouse\storefront\config\menu.json`
    /// - **Linux**: `~/.config/storefront/menu.json`
    pub fn default_catalog_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bakehouse", "storefront")
            .map(|dirs| dirs.config_dir().join("menu.json"))
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let amount = Money::from_cents(cents);
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }

    /// Same as [`format_currency`](Self::format_currency) for a [`Money`].
    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}

/// Reads one variable: unset is `None`, blank is an error.
fn read_var<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(-5), "-$0.05");
    }

    #[test]
    fn test_format_currency_large() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(123456789), "$1234567.89");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_money(Money::from_cents(950)), "€9.50");
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = ConfigState::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = ConfigState::from_vars(lookup(&[
            (STORE_NAME_VAR, "  Corner Cafe "),
            (CURRENCY_SYMBOL_VAR, "£"),
            (CATALOG_PATH_VAR, "/srv/menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Cafe");
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
    }

    #[test]
    fn test_from_vars_rejects_blank() {
        let err = ConfigState::from_vars(lookup(&[(CURRENCY_SYMBOL_VAR, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty(CURRENCY_SYMBOL_VAR));
    }
}
