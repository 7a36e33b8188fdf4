pub mod billing;
pub mod catalog;
pub mod config;
pub mod error;

pub use billing::{is_valid_competencia, parse_competencia, BillingRow};
pub use catalog::{
    filter_active, filter_by_brand, filter_kits, find_by_sku, ActiveFilter, Catalog, Product,
};
pub use config::Config;
pub use error::{BillingError, Result};
