//! Wire types for the Storefront GraphQL API's connection shapes.
//!
//! The two query documents resolve to structurally different roots:
//!
//! - named collection: `{"data": {"collectionByHandle": {...} | null}}`
//! - all products:     `{"data": {"products": {...}}}`
//!
//! [`RawPage`] is the tagged union of the two; it exists only long enough
//! to be normalized into a `CollectionPage` in [`crate::normalize`].
//!
//! Price amounts deserialize straight into `Decimal` via
//! `rust_decimal::serde::str`, so a non-numeric `amount` fails the page
//! parse instead of corrupting sort order downstream.

use rust_decimal::Decimal;
use serde::Deserialize;
use shopfront_core::PageInfo;

/// One GraphQL error entry from the response envelope's `errors` list.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// The two upstream response shapes, tagged at the adapter boundary.
#[derive(Debug)]
pub enum RawPage {
    /// `collectionByHandle` result; `None` when the handle resolved to
    /// no collection.
    Collection(Option<RawCollection>),
    /// Root `products` connection from the all-products query.
    AllProducts(RawProductConnection),
}

/// `data` object for the named-collection query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionData {
    pub collection_by_handle: Option<RawCollection>,
}

/// `data` object for the all-products query.
#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: RawProductConnection,
}

#[derive(Debug, Deserialize)]
pub struct RawCollection {
    pub id: String,
    pub title: String,
    pub products: RawProductConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductConnection {
    pub edges: Vec<RawProductEdge>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub struct RawProductEdge {
    pub node: RawProduct,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub title: String,
    pub handle: String,
    /// May be `null` or `""` when the shop leaves it unset.
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    pub price_range: RawPriceRange,
    #[serde(default)]
    pub images: RawImageConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    pub min_variant_price: RawMoney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    /// Decimal-as-text amount, e.g. `"12.99"`.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency_code: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawImageConnection {
    #[serde(default)]
    pub edges: Vec<RawImageEdge>,
}

#[derive(Debug, Deserialize)]
pub struct RawImageEdge {
    pub node: RawImage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}
