//! Export document and aggregate metadata.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::row::ProductRecord;

/// Summary block computed over every exported product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMeta {
    /// Number of exported products
    pub total: usize,
    /// Distinct non-empty brands, sorted
    pub brands: Vec<String>,
    /// Distinct non-empty fuel types, sorted
    pub fuel_types: Vec<String>,
    /// 0 when no product has a current price
    pub price_min: f64,
    /// 0 when no product has a current price
    pub price_max: f64,
}

impl CatalogMeta {
    /// Aggregates metadata over `products`.
    ///
    /// The result does not depend on the order of `products`.
    pub fn from_products(products: &[ProductRecord]) -> Self {
        let brands = distinct_non_empty(products.iter().map(|p| p.brand.as_deref()));
        let fuel_types = distinct_non_empty(products.iter().map(|p| p.fuel_type.as_deref()));

        let range = products
            .iter()
            .filter_map(|p| p.price_current)
            .fold(None, |acc: Option<(f64, f64)>, price| match acc {
                None => Some((price, price)),
                Some((lo, hi)) => Some((lo.min(price), hi.max(price))),
            });
        let (price_min, price_max) = range.unwrap_or((0.0, 0.0));

        CatalogMeta {
            total: products.len(),
            brands,
            fuel_types,
            price_min,
            price_max,
        }
    }
}

/// The complete document written for the static site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Every product, in ascending `price_current` order
    pub products: Vec<ProductRecord>,
    /// Aggregates over `products`
    pub meta: CatalogMeta,
}

impl ExportDocument {
    /// Builds the document, deriving `meta` from `products`.
    pub fn new(products: Vec<ProductRecord>) -> Self {
        let meta = CatalogMeta::from_products(&products);
        ExportDocument { products, meta }
    }
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
