/// Everything a widget instance needs to talk to one storefront: the shop,
/// the credential, the collection scope, and HTTP tuning knobs.
#[derive(Clone)]
pub struct WidgetConfig {
    /// Shop domain, e.g. `my-shop.myshopify.com`. No scheme.
    pub shop_domain: String,
    /// Public Storefront API access token, passed through as a header.
    pub storefront_token: String,
    /// Collection handle to scope the listing, or [`ALL_PRODUCTS_HANDLE`]
    /// for the unscoped product listing.
    pub collection_handle: String,
    /// Storefront API version segment, e.g. `2024-01`.
    pub api_version: String,
    /// Products requested per page (`first` query variable).
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

/// Sentinel collection handle meaning "all products, no collection scope".
pub const ALL_PRODUCTS_HANDLE: &str = "all";

impl WidgetConfig {
    /// Returns `true` when the configured handle is the all-products
    /// sentinel rather than a named collection.
    #[must_use]
    pub fn is_all_products(&self) -> bool {
        self.collection_handle == ALL_PRODUCTS_HANDLE
    }
}

impl std::fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("shop_domain", &self.shop_domain)
            .field("storefront_token", &"[redacted]")
            .field("collection_handle", &self.collection_handle)
            .field("api_version", &self.api_version)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
