//! Project outcomes: the four count-up statistics.

use dioxus::prelude::*;

use crate::components::AnimatedCounter;

#[component]
pub fn OutcomesSection() -> Element {
    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Project Outcomes" }
                p { class: "section-subtitle",
                    "A production-ready platform delivering measurable results"
                }

                div { class: "outcome-grid",
                    AnimatedCounter { target: 50, label: "API Endpoints", suffix: "+" }
                    AnimatedCounter { target: 3, label: "User Roles" }
                    AnimatedCounter { target: 100, label: "Responsive Design", suffix: "%" }
                    AnimatedCounter { target: 1, label: "Production Ready" }
                }
            }
        }
    }
}
