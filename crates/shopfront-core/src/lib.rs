use thiserror::Error;

pub mod config;
pub mod filter;
pub mod product;
pub mod widget_config;

pub use config::{build_widget_config, load_widget_config, load_widget_config_from_env};
pub use filter::{FilterState, SortOrder};
pub use product::{CollectionPage, Money, PageInfo, Product, ProductImage};
pub use widget_config::{WidgetConfig, ALL_PRODUCTS_HANDLE};

/// Errors raised while loading widget configuration, before any fetch is
/// attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
