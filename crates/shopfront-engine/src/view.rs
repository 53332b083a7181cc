//! Pure derivation of the visible product subset.
//!
//! The visible view is always a function of (fetched products, filter
//! state, visible count) — nothing here holds state or touches I/O. The
//! pipeline order is fixed: brand filter, then type filter, then a stable
//! price sort, then the visible-count window.

use shopfront_core::{FilterState, Product, SortOrder};

/// Derives the ordered visible subset of `products`.
///
/// Steps, in order:
/// 1. retain products whose vendor is in `filters.brands` (empty set keeps
///    all),
/// 2. retain products whose type is in `filters.product_types` (empty set
///    keeps all),
/// 3. stable-sort by price per `filters.sort_by`, so equal-priced products
///    keep their fetched relative order,
/// 4. truncate to the first `visible_count` items.
#[must_use]
pub fn derive_visible<'a>(
    products: &'a [Product],
    filters: &FilterState,
    visible_count: usize,
) -> Vec<&'a Product> {
    let mut retained = filtered(products, filters);

    match filters.sort_by {
        SortOrder::PriceAsc => retained.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOrder::PriceDesc => retained.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
    }

    retained.truncate(visible_count);
    retained
}

/// Number of products that survive the brand and type filters. The reveal
/// machine clamps against this length.
#[must_use]
pub fn filtered_len(products: &[Product], filters: &FilterState) -> usize {
    filtered(products, filters).len()
}

fn filtered<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| filters.brands.is_empty() || filters.brands.contains(&p.vendor))
        .filter(|p| {
            filters.product_types.is_empty() || filters.product_types.contains(&p.product_type)
        })
        .collect()
}

/// Distinct non-empty vendor names in first-seen order, for the filter
/// panel's brand checkboxes.
#[must_use]
pub fn available_brands(products: &[Product]) -> Vec<&str> {
    distinct_non_empty(products.iter().map(|p| p.vendor.as_str()))
}

/// Distinct non-empty product types in first-seen order, for the filter
/// panel's type checkboxes.
#[must_use]
pub fn available_product_types(products: &[Product]) -> Vec<&str> {
    distinct_non_empty(products.iter().map(|p| p.product_type.as_str()))
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
