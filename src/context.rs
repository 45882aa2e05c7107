//! Reveal-state context for the deck page.
//!
//! The Deck component owns the scheduler driver and provides two signals to
//! every section: the set of reveal groups that have fired, and the current
//! scroll progress percentage. Both live exactly as long as the page.

use std::collections::HashSet;

use dioxus::prelude::*;

/// Reveal groups that have fired this session.
pub type RevealedGroups = HashSet<&'static str>;

/// Hook to access the fired reveal groups from context.
pub fn use_revealed() -> Signal<RevealedGroups> {
    use_context::<Signal<RevealedGroups>>()
}

/// Hook to access the clamped scroll progress percentage from context.
pub fn use_scroll_progress() -> Signal<f64> {
    use_context::<Signal<f64>>()
}
