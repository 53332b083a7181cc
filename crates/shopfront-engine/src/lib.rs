//! Filter/sort/paginate engine for the collection widget.
//!
//! Everything here is pure and framework-free: [`view`] derives the visible
//! product subset from the fetched list and the filter state, [`reveal`] is
//! the incremental-reveal state machine behind the scroll sentinel, and
//! [`widget`] ties both to one widget instance's owned state.

pub mod reveal;
pub mod view;
pub mod widget;

pub use reveal::{RevealPhase, RevealState, INITIAL_VISIBLE, REVEAL_DELAY_MS, REVEAL_STEP};
pub use view::{available_brands, available_product_types, derive_visible, filtered_len};
pub use widget::WidgetState;
