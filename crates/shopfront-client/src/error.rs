use thiserror::Error;

/// Errors returned by the Storefront API client.
///
/// None of these are retried: every variant is terminal for the current
/// fetch attempt and surfaces as a single user-visible message.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("storefront API returned HTTP status {status}")]
    Transport { status: u16 },

    /// The GraphQL envelope carried an `errors` list; holds the first
    /// reported message.
    #[error("storefront API error: {0}")]
    Upstream(String),

    /// A named-collection query resolved to no collection.
    #[error("collection not found: {handle}")]
    NotFound { handle: String },

    /// The response body did not match the expected shape. Malformed price
    /// decimals land here rather than being coerced to zero.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
