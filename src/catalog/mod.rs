mod filters;

pub use filters::{filter_active, filter_by_brand, filter_kits, find_by_sku, ActiveFilter};

use std::collections::HashMap;

/// A product as loaded from the catalog: field name to loosely typed value.
///
/// Recognized keys are `e_kit` (bool), `ativo` (bool) and `marca` (string);
/// anything else is carried along untouched.
pub type Product = serde_json::Map<String, serde_json::Value>;

/// Products keyed by SKU
pub type Catalog = HashMap<String, Product>;
