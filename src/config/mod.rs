mod settings;

pub use settings::{Config, DisplaySettings, FileSettings};

use crate::billing::{is_valid_competencia, BillingRow};
use crate::catalog::Catalog;
use crate::error::{BillingError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Get the config directory path (~/.mpbill/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "mpbill") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.mpbill/
    let home = dirs_home().ok_or_else(|| {
        BillingError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".mpbill"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve a data file setting against the config directory
pub fn resolve_data_file(config_dir: &Path, file: &str) -> PathBuf {
    let path = expand_path(file);
    if path.is_absolute() {
        path
    } else {
        config_dir.join(path)
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(BillingError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| BillingError::ConfigParse { path, source: e })
}

/// Load config.toml (defaults if missing)
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        debug!(path = %path.display(), "no config.toml, using defaults");
        return Ok(Config::default());
    }
    read_toml(path)
}

/// Load the product catalog, one table per SKU
pub fn load_catalog(config_dir: &Path, config: &Config) -> Result<Catalog> {
    let path = resolve_data_file(config_dir, &config.files.catalog);
    let catalog: Catalog = read_toml(path.clone())?;
    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog is empty");
    }
    debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

#[derive(Debug, Deserialize)]
struct BillingFile {
    #[serde(default, rename = "row")]
    rows: Vec<BillingRow>,
}

/// Load billing rows, rejecting any whose competencia is not "YYYY-MM"
pub fn load_billing_rows(config_dir: &Path, config: &Config) -> Result<Vec<BillingRow>> {
    let path = resolve_data_file(config_dir, &config.files.billing);
    let file: BillingFile = read_toml(path.clone())?;

    if let Some((i, row)) = file
        .rows
        .iter()
        .enumerate()
        .find(|(_, row)| !is_valid_competencia(&row.competencia))
    {
        return Err(BillingError::InvalidRowCompetencia {
            path,
            row: i + 1,
            value: row.competencia.clone(),
        });
    }

    if file.rows.is_empty() {
        warn!(path = %path.display(), "billing file has no rows");
    }
    debug!(path = %path.display(), rows = file.rows.len(), "loaded billing rows");
    Ok(file.rows)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[display]
currency_symbol = "R$"

[files]
catalog = "catalog.toml"   # relative to this directory, or absolute / ~/
billing = "billing.toml"
"#;

/// Template content for catalog.toml
pub const CATALOG_TEMPLATE: &str = r#"# One table per product. The table name (e.g., [CAM-001]) is the SKU.
#
# Recognized fields:
#   ativo = true|false   # active/sellable; must be a boolean to match filters
#   e_kit = true|false   # bundle of other products
#   marca = "..."        # brand, matched ignoring case and surrounding spaces
# Any other field is kept and shown by 'mpbill show <SKU>'.

[CAM-001]
nome = "Camiseta Basica"
marca = "Nike"
ativo = true
e_kit = false

[CAM-002]
nome = "Camiseta Dry Fit"
marca = " nike "
ativo = false
e_kit = false

[KIT-010]
nome = "Kit Treino"
marca = "Adidas"
ativo = true
e_kit = true
"#;

/// Template content for billing.toml
pub const BILLING_TEMPLATE: &str = r#"# Rows from the Mercado Pago billing report, one [[row]] each.
# Only 'competencia' ("YYYY-MM") is required.

[[row]]
numero_nfe = "000123"
data_movimento = "2024-05-03"
numero_tarifa = "T-9001"
detalhe = "Tarifa de venda"
status_tarifa = "Cobrada"
tarifa_estornada = false
valor_tarifa = 12.5
tipo_operacao = "Venda"
cliente = "Loja Exemplo"
valor_operacao = 100.0
secoes_ml_mp = "mercado_pago"
competencia = "2024-05"

[[row]]
numero_nfe = "000124"
data_movimento = "2024-06-01"
tipo_operacao = "Estorno"
tarifa_estornada = true
valor_tarifa = 3.2
competencia = "2024-06"
"#;
