use dioxus::prelude::*;

use crate::pages::Deck;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// The deck is a single scrolling page, so there is no router: global styles
/// plus the one page.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Deck {}
    }
}
