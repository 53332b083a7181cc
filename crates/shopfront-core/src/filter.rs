use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sort direction for the product view. Price is the only sort key the
/// widget offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    PriceAsc,
    PriceDesc,
}

/// The user's current filter selections.
///
/// Empty brand/type sets mean "no filter applied" (inclusive-all), never
/// "exclude everything". All mutators report whether the state actually
/// changed so the owner can reset the visible window only when the view
/// composition changed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub brands: BTreeSet<String>,
    pub product_types: BTreeSet<String>,
    pub sort_by: SortOrder,
}

impl FilterState {
    /// Adds the brand to the selection if absent, removes it if present.
    /// Always a change.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
        true
    }

    /// Adds the product type to the selection if absent, removes it if
    /// present. Always a change.
    pub fn toggle_product_type(&mut self, product_type: &str) -> bool {
        if !self.product_types.remove(product_type) {
            self.product_types.insert(product_type.to_string());
        }
        true
    }

    /// Sets the sort direction. Returns `false` when it was already set.
    pub fn set_sort(&mut self, sort_by: SortOrder) -> bool {
        if self.sort_by == sort_by {
            return false;
        }
        self.sort_by = sort_by;
        true
    }

    /// Clears all brand and type selections, keeping the sort direction.
    /// Returns `false` when nothing was selected.
    pub fn clear(&mut self) -> bool {
        if self.brands.is_empty() && self.product_types.is_empty() {
            return false;
        }
        self.brands.clear();
        self.product_types.clear();
        true
    }

    /// `true` when no brand or type filter is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.brands.is_empty() && self.product_types.is_empty()
    }
}
