use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as served to the presentation layer, already normalized from
/// the storefront API's connection shapes. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Storefront API global ID, e.g. `gid://shopify/Product/123`.
    pub id: String,
    pub title: String,
    /// URL slug for the product page, e.g. `"hi-boy-blood-orange-5mg"`.
    pub handle: String,
    /// Product category string; empty when the shop leaves it unset.
    pub product_type: String,
    /// Vendor / brand name as configured on the platform.
    pub vendor: String,
    /// Minimum variant price for the product.
    pub price: Money,
    /// Display images in storefront order. May be empty.
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Relative URL of the product page on the host shop, used for
    /// click-through navigation.
    #[must_use]
    pub fn page_path(&self) -> String {
        format!("/products/{}", self.handle)
    }

    /// First display image, if the product has any.
    #[must_use]
    pub fn featured_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// A price with its ISO 4217 currency code.
///
/// The amount is a decimal parsed from the API's decimal-as-text
/// representation at the adapter boundary; a non-numeric amount fails
/// deserialization there rather than silently coercing to zero, so sorting
/// on this field is total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt_text: Option<String>,
}

/// One fetched page of a collection: metadata, products, and the upstream
/// pagination cursor.
///
/// The cursor is carried so a host could drive real cursor pagination, but
/// the widget flow only ever fetches the first page and paginates
/// client-side over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub id: String,
    pub title: String,
    pub products: Vec<Product>,
    pub page_info: PageInfo,
}

/// Upstream cursor state for the fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}
