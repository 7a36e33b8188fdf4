use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use mpbill::config::{
    config_dir, load_billing_rows, load_catalog, load_config, BILLING_TEMPLATE, CATALOG_TEMPLATE,
    CONFIG_TEMPLATE,
};
use mpbill::{
    filter_active, filter_by_brand, filter_kits, find_by_sku, parse_competencia, ActiveFilter,
    BillingError, Product, Result,
};

#[derive(Parser)]
#[command(name = "mpbill")]
#[command(version, about = "Mercado Pago billing rows and product catalog filters", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.mpbill or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// List catalog products, optionally filtered
    Products {
        /// Only kits
        #[arg(long, conflicts_with = "no_kits")]
        kits: bool,

        /// Only products that are not kits
        #[arg(long)]
        no_kits: bool,

        /// Filter by the 'ativo' flag
        #[arg(long, value_enum, default_value_t = StatusArg::Active)]
        status: StatusArg,

        /// Brand to keep (can be repeated; case and spaces are ignored)
        #[arg(short, long, value_name = "NAME")]
        brand: Vec<String>,
    },

    /// Show every field of one product
    Show {
        /// Product SKU
        sku: String,
    },

    /// List billing rows
    Rows {
        /// Only rows of this accounting period (YYYY-MM)
        #[arg(long, value_name = "YYYY-MM")]
        competencia: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Inactive,
    Any,
}

impl From<StatusArg> for ActiveFilter {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Active => ActiveFilter::Active,
            StatusArg::Inactive => ActiveFilter::Inactive,
            StatusArg::Any => ActiveFilter::Unset,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Products {
            kits,
            no_kits,
            status,
            brand,
        } => {
            let kit = match (kits, no_kits) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd_products(&cfg_dir, kit, status.into(), &brand)
        }
        Commands::Show { sku } => cmd_show(&cfg_dir, &sku),
        Commands::Rows { competencia } => cmd_rows(&cfg_dir, competencia.as_deref()),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(BillingError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(cfg_dir.join("catalog.toml"), CATALOG_TEMPLATE)?;
    fs::write(cfg_dir.join("billing.toml"), BILLING_TEMPLATE)?;

    println!("Initialized mpbill config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Add your products:      $EDITOR {}/catalog.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Add billing rows:       $EDITOR {}/billing.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then list them:");
    println!("  mpbill products --brand <marca>");
    println!("  mpbill rows --competencia <YYYY-MM>");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "NOME")]
    nome: String,
    #[tabled(rename = "MARCA")]
    marca: String,
    #[tabled(rename = "ATIVO")]
    ativo: String,
    #[tabled(rename = "KIT")]
    kit: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

#[derive(Tabled)]
struct BillingTableRow {
    #[tabled(rename = "DATA")]
    data: String,
    #[tabled(rename = "NFE")]
    nfe: String,
    #[tabled(rename = "TIPO")]
    tipo: String,
    #[tabled(rename = "CLIENTE")]
    cliente: String,
    #[tabled(rename = "VALOR")]
    valor: String,
    #[tabled(rename = "TARIFA")]
    tarifa: String,
    #[tabled(rename = "COMPETENCIA")]
    competencia: String,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field_text(product: &Product, field: &str) -> String {
    product.get(field).map(value_text).unwrap_or_default()
}

fn format_money(value: Option<f64>, currency_symbol: &str) -> String {
    value
        .map(|v| format!("{currency_symbol}{v:.2}"))
        .unwrap_or_default()
}

fn ensure_config_dir(cfg_dir: &Path) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillingError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    Ok(())
}

/// List catalog products after applying the requested filters
fn cmd_products(
    cfg_dir: &Path,
    kit: Option<bool>,
    status: ActiveFilter,
    brands: &[String],
) -> Result<()> {
    ensure_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let catalog = load_catalog(cfg_dir, &config)?;

    let mut selected = filter_active(&catalog, status);
    if let Some(only_kits) = kit {
        selected = filter_kits(&selected, only_kits);
    }
    if !brands.is_empty() {
        selected = filter_by_brand(&selected, brands);
    }

    if selected.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    let mut sorted: Vec<_> = selected.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let rows: Vec<ProductRow> = sorted
        .iter()
        .map(|(sku, product)| ProductRow {
            sku: sku.to_string(),
            nome: field_text(product, "nome"),
            marca: field_text(product, "marca").trim().to_string(),
            ativo: field_text(product, "ativo"),
            kit: field_text(product, "e_kit"),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// Show every field of one product
fn cmd_show(cfg_dir: &Path, sku: &str) -> Result<()> {
    ensure_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let catalog = load_catalog(cfg_dir, &config)?;

    let product =
        find_by_sku(&catalog, sku).ok_or_else(|| BillingError::ProductNotFound(sku.to_string()))?;

    let mut fields: Vec<_> = product.iter().collect();
    fields.sort_by_key(|(k, _)| *k);

    let rows: Vec<FieldRow> = fields
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.to_string(),
            value: value_text(value),
        })
        .collect();

    println!("Product {sku}");
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// List billing rows, optionally for a single competencia
fn cmd_rows(cfg_dir: &Path, competencia: Option<&str>) -> Result<()> {
    let competencia = competencia.map(parse_competencia).transpose()?;

    ensure_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let rows = load_billing_rows(cfg_dir, &config)?;
    let symbol = &config.display.currency_symbol;

    let table_rows: Vec<BillingTableRow> = rows
        .iter()
        .filter(|row| competencia.as_ref().map_or(true, |c| &row.competencia == c))
        .map(|row| BillingTableRow {
            data: row
                .data_movimento
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            nfe: row.numero_nfe.clone().unwrap_or_default(),
            tipo: row.tipo_operacao.clone().unwrap_or_default(),
            cliente: row.cliente.clone().unwrap_or_default(),
            valor: format_money(row.valor_operacao, symbol),
            tarifa: format_money(row.valor_tarifa, symbol),
            competencia: row.competencia.clone(),
        })
        .collect();

    if table_rows.is_empty() {
        match competencia {
            Some(c) => println!("No billing rows for {c}."),
            None => println!("No billing rows."),
        }
        return Ok(());
    }

    let table = Table::new(table_rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}
