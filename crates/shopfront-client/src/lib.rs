//! HTTP client for the Shopify Storefront GraphQL API.
//!
//! Issues the widget's single product-page query, unwraps the GraphQL JSON
//! envelope, and normalizes the two upstream response shapes (named
//! collection vs. all products) into one [`shopfront_core::CollectionPage`]
//! before anything else sees the data.

pub mod client;
pub mod error;
pub mod normalize;
pub mod queries;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use types::RawPage;
