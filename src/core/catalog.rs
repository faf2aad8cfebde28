//! Catalog filtering and ordering for the shop listing pages.
//!
//! Query parameters arrive as free text. Filters are conjunctive and the sort
//! is stable, so with no sort key the upstream order (newest first) is kept.

use crate::domain::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Raw listing query parameters as they appear in the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub price: Option<String>,
    pub material: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    BestSellers,
}

impl SortOrder {
    /// Unknown keys fall back to `Newest`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price-asc") => Self::PriceAsc,
            Some("price-desc") => Self::PriceDesc,
            Some("best-sellers") => Self::BestSellers,
            _ => Self::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::BestSellers => "best-sellers",
        }
    }
}

/// Inclusive price bounds parsed from `"<min>-<max>"`.
///
/// Unparsable bounds are kept as NaN: every comparison against them is false,
/// so a malformed range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('-');
        let min = parts.next().map(parse_number).unwrap_or(f64::NAN);
        let max = parts.next().map(parse_number).unwrap_or(f64::NAN);
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_well_formed(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }
}

/// Numeric coercion of a URL fragment: surrounding whitespace ignored, empty
/// means zero, `Infinity` and `0x`/`0o`/`0b` literals accepted, anything else
/// that is not a plain decimal is NaN.
fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // `f64::from_str` also takes "inf" and "nan" spellings; those are not numbers here.
    let unsigned = s.trim_start_matches(['+', '-']);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parsed, normalized form of a [`CatalogQuery`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    search: Option<String>,
    price: Option<PriceRange>,
    material: Option<String>,
    sort: SortOrder,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl CatalogFilter {
    pub fn from_query(query: &CatalogQuery) -> Self {
        let price = non_empty(query.price.as_ref()).map(PriceRange::parse);
        if let Some(range) = &price {
            if !range.is_well_formed() {
                tracing::debug!("Price filter {:?} is not numeric; no product will match", query.price);
            }
        }

        Self {
            search: non_empty(query.search.as_ref()).map(str::to_lowercase),
            price,
            material: non_empty(query.material.as_ref()).map(str::to_lowercase),
            sort: SortOrder::parse(query.sort.as_deref()),
        }
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn price(&self) -> Option<PriceRange> {
        self.price
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// True when at least one narrowing filter (not the sort) is set.
    pub fn has_active_filters(&self) -> bool {
        self.price.is_some() || self.material.is_some() || self.search.is_some()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            if !product.title.to_lowercase().contains(search) {
                return false;
            }
        }

        if let Some(range) = &self.price {
            if !range.contains(product.price) {
                return false;
            }
        }

        if let Some(material) = &self.material {
            let found = product
                .materials
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|m| m.to_lowercase().contains(material));
            if !found {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        sort_products(&mut filtered, self.sort);
        filtered
    }
}

/// Stable in-place sort.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Newest => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| compare_price(a.price, b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| compare_price(b.price, a.price)),
        SortOrder::BestSellers => products.sort_by_key(|p| !p.is_best_seller),
    }
}

fn compare_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Filters and orders a product list according to URL query parameters.
pub fn apply(products: Vec<Product>, query: &CatalogQuery) -> Vec<Product> {
    CatalogFilter::from_query(query).apply(products)
}
