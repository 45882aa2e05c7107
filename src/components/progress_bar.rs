//! Scroll progress bar pinned to the top of the window.

use dioxus::prelude::*;

use crate::context::use_scroll_progress;

/// Horizontal bar scaled to the clamped scroll percentage.
#[component]
pub fn ScrollProgressBar() -> Element {
    let progress = use_scroll_progress();
    let scale = progress() / 100.0;

    rsx! {
        div {
            class: "progress-bar",
            style: "transform: scaleX({scale});",
        }
    }
}
