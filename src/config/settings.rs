use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub files: FileSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Data file locations, relative to the config directory unless absolute or `~/`
#[derive(Debug, Deserialize, Serialize)]
pub struct FileSettings {
    #[serde(default = "default_catalog_file")]
    pub catalog: String,
    #[serde(default = "default_billing_file")]
    pub billing: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            catalog: default_catalog_file(),
            billing: default_billing_file(),
        }
    }
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_catalog_file() -> String {
    "catalog.toml".to_string()
}

fn default_billing_file() -> String {
    "billing.toml".to_string()
}
