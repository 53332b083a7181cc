//! Normalization from the raw GraphQL connection shapes to
//! [`shopfront_core::CollectionPage`].
//!
//! The all-products shape has no collection of its own, so it gets a
//! synthetic id/title, matching what the widget shows for an unscoped
//! listing.

use shopfront_core::{CollectionPage, Money, Product, ProductImage};

use crate::error::StorefrontError;
use crate::types::{RawCollection, RawPage, RawProduct, RawProductConnection};

/// Synthetic page id for the all-products listing.
pub const ALL_PRODUCTS_PAGE_ID: &str = "all-products";
/// Synthetic page title for the all-products listing.
pub const ALL_PRODUCTS_PAGE_TITLE: &str = "All Products";

/// Normalizes a [`RawPage`] into the single [`CollectionPage`] shape every
/// other component consumes.
///
/// # Errors
///
/// Returns [`StorefrontError::NotFound`] when a named-collection query
/// resolved to no collection. `handle` is only used for that error message.
pub fn normalize_page(raw: RawPage, handle: &str) -> Result<CollectionPage, StorefrontError> {
    match raw {
        RawPage::Collection(Some(collection)) => Ok(normalize_collection(collection)),
        RawPage::Collection(None) => Err(StorefrontError::NotFound {
            handle: handle.to_string(),
        }),
        RawPage::AllProducts(connection) => Ok(normalize_connection(
            ALL_PRODUCTS_PAGE_ID.to_string(),
            ALL_PRODUCTS_PAGE_TITLE.to_string(),
            connection,
        )),
    }
}

fn normalize_collection(collection: RawCollection) -> CollectionPage {
    normalize_connection(collection.id, collection.title, collection.products)
}

fn normalize_connection(
    id: String,
    title: String,
    connection: RawProductConnection,
) -> CollectionPage {
    let products = connection
        .edges
        .into_iter()
        .map(|edge| normalize_product(edge.node))
        .collect();

    CollectionPage {
        id,
        title,
        products,
        page_info: connection.page_info,
    }
}

fn normalize_product(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        title: raw.title,
        handle: raw.handle,
        product_type: raw.product_type.unwrap_or_default(),
        vendor: raw.vendor.unwrap_or_default(),
        price: Money {
            amount: raw.price_range.min_variant_price.amount,
            currency_code: raw.price_range.min_variant_price.currency_code,
        },
        images: raw
            .images
            .edges
            .into_iter()
            .map(|edge| ProductImage {
                url: edge.node.url,
                alt_text: edge.node.alt_text,
            })
            .collect(),
    }
}
