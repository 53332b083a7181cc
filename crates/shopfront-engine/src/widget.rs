//! Owned state for one widget instance.
//!
//! Each widget instance owns its fetched page, filter state, and reveal
//! progress exclusively; there is no shared state between instances. A
//! generation counter makes fetch supersession explicit: a configuration
//! change bumps the generation, and a response carrying a stale generation
//! is discarded instead of clobbering the newer fetch.

use shopfront_core::{CollectionPage, FilterState, Product, SortOrder};

use crate::reveal::RevealState;
use crate::view;

#[derive(Debug, Default)]
pub struct WidgetState {
    page: Option<CollectionPage>,
    filters: FilterState,
    reveal: RevealState,
    generation: u64,
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new fetch and returns its generation token. Any
    /// previously returned token becomes stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a fetched page if `generation` is still current, resetting
    /// reveal progress for the new dataset. Returns `false` and leaves all
    /// state untouched when the result is stale.
    ///
    /// Filter selections survive a page swap; selections that no longer
    /// match anything in the new dataset are harmless.
    pub fn apply_page(&mut self, generation: u64, page: CollectionPage) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return false;
        }
        self.page = Some(page);
        self.reveal.reset();
        true
    }

    /// All products fetched for the current page; empty before the first
    /// successful fetch.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.page.as_ref().map_or(&[], |p| p.products.as_slice())
    }

    #[must_use]
    pub fn collection_title(&self) -> Option<&str> {
        self.page.as_ref().map(|p| p.title.as_str())
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        let changed = self.filters.toggle_brand(brand);
        self.reset_on_change(changed)
    }

    pub fn toggle_product_type(&mut self, product_type: &str) -> bool {
        let changed = self.filters.toggle_product_type(product_type);
        self.reset_on_change(changed)
    }

    pub fn set_sort(&mut self, sort_by: SortOrder) -> bool {
        let changed = self.filters.set_sort(sort_by);
        self.reset_on_change(changed)
    }

    pub fn clear_filters(&mut self) -> bool {
        let changed = self.filters.clear();
        self.reset_on_change(changed)
    }

    fn reset_on_change(&mut self, changed: bool) -> bool {
        if changed {
            self.reveal.reset();
        }
        changed
    }

    /// Forwards a sentinel-visibility event to the reveal machine. Returns
    /// `true` when the host should schedule a completion tick (after
    /// [`crate::REVEAL_DELAY_MS`]).
    pub fn sentinel_visible(&mut self) -> bool {
        self.reveal.sentinel_visible()
    }

    /// Completes a pending reveal against the current filtered length.
    pub fn complete_reveal(&mut self) {
        let len = view::filtered_len(self.products(), &self.filters);
        self.reveal.complete_reveal(len);
    }

    /// The filtered/sorted products currently exposed to the rendering
    /// layer — always a pure function of (products, filters, window).
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        view::derive_visible(self.products(), &self.filters, self.reveal.visible_count())
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        view::filtered_len(self.products(), &self.filters)
    }

    #[must_use]
    pub fn available_brands(&self) -> Vec<&str> {
        view::available_brands(self.products())
    }

    #[must_use]
    pub fn available_product_types(&self) -> Vec<&str> {
        view::available_product_types(self.products())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.reveal.visible_count()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.reveal.is_exhausted()
    }
}
