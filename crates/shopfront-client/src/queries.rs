//! The widget's two fixed GraphQL query documents.
//!
//! Both select the same product fields; they differ only in whether the
//! product connection is scoped under `collectionByHandle` or sits at the
//! query root. Which one is sent depends on whether the configured handle
//! is the all-products sentinel.

use serde_json::{json, Value};

pub const GET_COLLECTION_PRODUCTS: &str = r"
query getCollectionProducts($handle: String!, $first: Int!, $after: String) {
  collectionByHandle(handle: $handle) {
    id
    title
    products(first: $first, after: $after) {
      edges {
        node {
          id
          title
          handle
          productType
          vendor
          priceRange {
            minVariantPrice {
              amount
              currencyCode
            }
          }
          images(first: 1) {
            edges {
              node {
                url
                altText
              }
            }
          }
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}
";

pub const GET_ALL_PRODUCTS: &str = r"
query getAllProducts($first: Int!, $after: String) {
  products(first: $first, after: $after) {
    edges {
      node {
        id
        title
        handle
        productType
        vendor
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
";

/// Builds the `{query, variables}` request body for one page fetch.
///
/// `handle` of `None` selects the all-products document; a named handle
/// selects the collection document and binds `$handle`.
#[must_use]
pub fn request_body(handle: Option<&str>, first: u32, after: Option<&str>) -> Value {
    match handle {
        Some(handle) => json!({
            "query": GET_COLLECTION_PRODUCTS,
            "variables": { "handle": handle, "first": first, "after": after },
        }),
        None => json!({
            "query": GET_ALL_PRODUCTS,
            "variables": { "first": first, "after": after },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_handle_selects_collection_document() {
        let body = request_body(Some("summer-drinks"), 12, None);
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("collectionByHandle"));
        assert_eq!(body["variables"]["handle"], "summer-drinks");
        assert_eq!(body["variables"]["first"], 12);
        assert_eq!(body["variables"]["after"], Value::Null);
    }

    #[test]
    fn no_handle_selects_all_products_document() {
        let body = request_body(None, 12, None);
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("query getAllProducts"));
        assert!(!query.contains("collectionByHandle"));
        assert!(body["variables"].get("handle").is_none());
    }

    #[test]
    fn after_cursor_is_bound_when_present() {
        let body = request_body(None, 12, Some("eyJsYXN0X2lkIjo2fQ"));
        assert_eq!(body["variables"]["after"], "eyJsYXN0X2lkIjo2fQ");
    }
}
