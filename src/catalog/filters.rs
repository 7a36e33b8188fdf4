use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use super::{Catalog, Product};

/// Which products `filter_active` keeps.
///
/// `Unset` means no filtering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    Unset,
    #[default]
    Active,
    Inactive,
}

impl ActiveFilter {
    fn wanted(self) -> Option<bool> {
        match self {
            ActiveFilter::Unset => None,
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }
}

impl From<bool> for ActiveFilter {
    fn from(active: bool) -> Self {
        if active {
            ActiveFilter::Active
        } else {
            ActiveFilter::Inactive
        }
    }
}

impl From<Option<bool>> for ActiveFilter {
    fn from(active: Option<bool>) -> Self {
        active.map_or(ActiveFilter::Unset, ActiveFilter::from)
    }
}

fn is_kit(product: &Product) -> bool {
    matches!(product.get("e_kit"), Some(Value::Bool(true)))
}

fn normalize_brand(brand: &str) -> String {
    brand.trim().to_lowercase()
}

fn retain<F>(catalog: &Catalog, keep: F) -> Catalog
where
    F: Fn(&Product) -> bool,
{
    catalog
        .iter()
        .filter(|(_, product)| keep(product))
        .map(|(sku, product)| (sku.clone(), product.clone()))
        .collect()
}

/// Keep only kits (`only_kits = true`) or only non-kits.
///
/// `e_kit` must be the boolean `true` to count as a kit; a missing or
/// non-boolean value is a plain product.
pub fn filter_kits(catalog: &Catalog, only_kits: bool) -> Catalog {
    let out = retain(catalog, |product| is_kit(product) == only_kits);
    debug!(only_kits, before = catalog.len(), after = out.len(), "filtered kits");
    out
}

/// Keep products whose `ativo` is exactly the requested boolean.
///
/// Values like `1`, `"true"` or a missing key never match a concrete flag.
pub fn filter_active(catalog: &Catalog, active: ActiveFilter) -> Catalog {
    let Some(wanted) = active.wanted() else {
        return catalog.clone();
    };

    let out = retain(catalog, |product| {
        matches!(product.get("ativo"), Some(Value::Bool(b)) if *b == wanted)
    });
    debug!(?active, before = catalog.len(), after = out.len(), "filtered by ativo");
    out
}

/// Look up a product by its SKU
pub fn find_by_sku<'a>(catalog: &'a Catalog, sku: &str) -> Option<&'a Product> {
    catalog.get(sku)
}

/// Keep products whose `marca` is one of `brands`, ignoring case and
/// surrounding whitespace on both sides.
///
/// A product without a string `marca` compares as the empty string.
pub fn filter_by_brand<I, S>(catalog: &Catalog, brands: I) -> Catalog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted: HashSet<String> = brands
        .into_iter()
        .map(|brand| normalize_brand(brand.as_ref()))
        .collect();

    let out = retain(catalog, |product| {
        let marca = product.get("marca").and_then(Value::as_str).unwrap_or("");
        wanted.contains(&normalize_brand(marca))
    });
    debug!(brands = wanted.len(), before = catalog.len(), after = out.len(), "filtered by marca");
    out
}
