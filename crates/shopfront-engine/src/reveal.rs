//! Incremental-reveal state machine ("infinite scroll").
//!
//! The machine paginates purely over already-fetched data: a sentinel
//! position becoming visible reveals [`REVEAL_STEP`] more of the
//! filtered/sorted sequence after an artificial delay, and the machine
//! exhausts once the window covers the whole sequence. It never drives a
//! network request; hosts that want real cursor pagination layer it on top
//! of the adapter's `after` parameter instead.
//!
//! ```text
//! Idle --sentinel_visible--> LoadingMore --complete_reveal--> Idle
//!                                              |  (window reaches end)
//!                                              v
//!                                          Exhausted
//! any --reset (filter change)--> Idle
//! ```

/// Window size shown before any reveal.
pub const INITIAL_VISIBLE: usize = 8;
/// How many more products each reveal exposes.
pub const REVEAL_STEP: usize = 8;
/// Artificial delay between `sentinel_visible` and `complete_reveal`,
/// for hosts that want the original loading-spinner pacing. The machine
/// itself is synchronous and never sleeps.
pub const REVEAL_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// More may be available and no reveal is in progress.
    Idle,
    /// A reveal was triggered and its completion tick is pending.
    LoadingMore,
    /// The window covers the full filtered/sorted length. Only a filter
    /// change leaves this phase.
    Exhausted,
}

/// Reveal progress for one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    phase: RevealPhase,
    visible_count: usize,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Idle,
            visible_count: INITIAL_VISIBLE,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == RevealPhase::Exhausted
    }

    /// The scroll sentinel became visible. Starts a reveal when `Idle` and
    /// returns `true`; a no-op returning `false` while `LoadingMore` or
    /// `Exhausted`.
    pub fn sentinel_visible(&mut self) -> bool {
        if self.phase != RevealPhase::Idle {
            return false;
        }
        self.phase = RevealPhase::LoadingMore;
        true
    }

    /// Completes a pending reveal against the current filtered/sorted
    /// length: advances the window by [`REVEAL_STEP`], clamping to
    /// `filtered_len` and exhausting when the end is reached. A no-op
    /// outside `LoadingMore`.
    pub fn complete_reveal(&mut self, filtered_len: usize) {
        if self.phase != RevealPhase::LoadingMore {
            return;
        }
        let advanced = self.visible_count.saturating_add(REVEAL_STEP);
        if advanced >= filtered_len {
            self.visible_count = filtered_len;
            self.phase = RevealPhase::Exhausted;
        } else {
            self.visible_count = advanced;
            self.phase = RevealPhase::Idle;
        }
    }

    /// Filter-change transition: back to `Idle` with the initial window,
    /// discarding any pending reveal. Old progress no longer corresponds
    /// to a meaningful scroll position once the view composition changed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
