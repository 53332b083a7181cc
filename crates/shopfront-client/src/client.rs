use std::time::Duration;

use reqwest::{Client, Url};
use shopfront_core::{CollectionPage, WidgetConfig};

use crate::error::StorefrontError;
use crate::normalize::normalize_page;
use crate::queries;
use crate::types::{CollectionData, GraphQlError, ProductsData, RawPage};

/// Header carrying the public Storefront API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the Storefront GraphQL API of one configured shop.
///
/// Holds the HTTP client, the resolved `graphql.json` endpoint, and the
/// widget's collection scope. Use [`StorefrontClient::new`] for production
/// or [`StorefrontClient::with_base_url`] to point at a mock server in
/// tests.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    storefront_token: String,
    collection_handle: String,
    page_size: u32,
    is_all_products: bool,
}

impl StorefrontClient {
    /// Creates a client pointed at `https://{shop_domain}`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::Upstream`] if the
    /// configured domain does not form a valid endpoint URL.
    pub fn new(config: &WidgetConfig) -> Result<Self, StorefrontError> {
        let origin = format!("https://{}", config.shop_domain);
        Self::with_base_url(config, &origin)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// The endpoint path `/api/{api_version}/graphql.json` is appended to
    /// `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::Upstream`] if `base_url`
    /// is not a valid URL base.
    pub fn with_base_url(config: &WidgetConfig, base_url: &str) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = Self::endpoint_url(base_url, &config.api_version)?;

        Ok(Self {
            client,
            endpoint,
            storefront_token: config.storefront_token.clone(),
            collection_handle: config.collection_handle.clone(),
            page_size: config.page_size,
            is_all_products: config.is_all_products(),
        })
    }

    /// Fetches one page of products for the configured collection scope.
    ///
    /// Sends a single POST with the appropriate query document and unwraps
    /// the GraphQL envelope. `after` is the upstream cursor for the next
    /// page; the widget flow passes `None` and paginates client-side over
    /// the result.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Transport`] — non-success HTTP status.
    /// - [`StorefrontError::Upstream`] — the envelope carried an `errors`
    ///   list; holds the first message.
    /// - [`StorefrontError::NotFound`] — a named collection resolved to
    ///   nothing.
    /// - [`StorefrontError::Deserialize`] — the body did not match the
    ///   expected shape (including malformed price decimals).
    /// - [`StorefrontError::Http`] — network or TLS failure.
    pub async fn fetch_product_page(
        &self,
        after: Option<&str>,
    ) -> Result<CollectionPage, StorefrontError> {
        let handle = (!self.is_all_products).then_some(self.collection_handle.as_str());
        let body = queries::request_body(handle, self.page_size, after);

        tracing::debug!(
            endpoint = %self.endpoint,
            collection = %self.collection_handle,
            after = after.unwrap_or("<first page>"),
            "fetching product page"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.storefront_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::Transport {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let mut envelope: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| StorefrontError::Deserialize {
                context: format!("graphql envelope from {}", self.endpoint),
                source: e,
            })?;

        Self::check_upstream_errors(&envelope)?;

        let data = envelope
            .get_mut("data")
            .map(serde_json::Value::take)
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                StorefrontError::Upstream("response contained neither data nor errors".to_string())
            })?;

        let raw = if self.is_all_products {
            let parsed: ProductsData =
                serde_json::from_value(data).map_err(|e| StorefrontError::Deserialize {
                    context: format!("getAllProducts(first={})", self.page_size),
                    source: e,
                })?;
            RawPage::AllProducts(parsed.products)
        } else {
            let parsed: CollectionData =
                serde_json::from_value(data).map_err(|e| StorefrontError::Deserialize {
                    context: format!("getCollectionProducts(handle={})", self.collection_handle),
                    source: e,
                })?;
            RawPage::Collection(parsed.collection_by_handle)
        };

        normalize_page(raw, &self.collection_handle)
    }

    /// Surfaces the first message from the envelope's `errors` list, if any.
    /// An `errors` value that is not a list of error objects fails the
    /// envelope parse outright.
    fn check_upstream_errors(envelope: &serde_json::Value) -> Result<(), StorefrontError> {
        let Some(errors) = envelope.get("errors") else {
            return Ok(());
        };
        let parsed: Vec<GraphQlError> =
            serde_json::from_value(errors.clone()).map_err(|e| StorefrontError::Deserialize {
                context: "graphql errors list".to_string(),
                source: e,
            })?;
        match parsed.first() {
            Some(first) => Err(StorefrontError::Upstream(first.message.clone())),
            None => Ok(()),
        }
    }

    /// Builds the `graphql.json` endpoint URL from an origin and API version.
    fn endpoint_url(base_url: &str, api_version: &str) -> Result<Url, StorefrontError> {
        let raw = format!(
            "{}/api/{api_version}/graphql.json",
            base_url.trim_end_matches('/')
        );
        Url::parse(&raw).map_err(|e| {
            StorefrontError::Upstream(format!("invalid storefront endpoint \"{raw}\": {e}"))
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
