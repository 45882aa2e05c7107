//! Labelled placeholder frames standing in for product screenshots.

use dioxus::prelude::*;

/// Bordered frame with a gradient mark and a label, sized like the
/// screenshot it replaces.
#[derive(Clone, PartialEq, Props)]
pub struct ScreenshotPlaceholderProps {
    /// Caption under the placeholder mark
    pub label: String,
    /// Center the frame with the standard max width
    #[props(default = false)]
    pub centered: bool,
}

#[component]
pub fn ScreenshotPlaceholder(props: ScreenshotPlaceholderProps) -> Element {
    let frame_class = if props.centered {
        "screenshot-frame centered"
    } else {
        "screenshot-frame"
    };

    rsx! {
        div { class: "{frame_class}",
            div { class: "screenshot-inner",
                div {
                    div { class: "screenshot-mark",
                        div { class: "screenshot-mark-fill" }
                    }
                    p { class: "screenshot-label", "{props.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn frame_class_toggles_on_centered() {
        let class = |centered: bool| {
            if centered {
                "screenshot-frame centered"
            } else {
                "screenshot-frame"
            }
        };
        assert_eq!(class(true), "screenshot-frame centered");
        assert_eq!(class(false), "screenshot-frame");
    }
}
