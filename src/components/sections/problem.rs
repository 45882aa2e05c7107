//! Problem statement: three staggered glass cards plus the impact panel.

use dioxus::prelude::*;

use crate::components::GlassCard;
use crate::context::use_revealed;
use crate::motion_plan::{self, PROBLEM_CARDS, PROBLEM_SECTION};

const PROBLEMS: &[(&str, &str)] = &[
    (
        "\u{1F50D}",
        "Students struggle to find relevant internships and job opportunities",
    ),
    (
        "\u{1F465}",
        "Recruiters face difficulty in reaching qualified candidates",
    ),
    (
        "\u{23F1}",
        "Manual application processes are time-consuming and inefficient",
    ),
];

const IMPACTS: &[&str] = &["Missed Opportunities", "Delayed Placements", "Inefficient Hiring"];

#[component]
pub fn ProblemSection() -> Element {
    let revealed = use_revealed();
    let fired = revealed().contains(PROBLEM_CARDS);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{PROBLEM_SECTION}",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Problem Statement" }
                p { class: "section-subtitle", "Current Challenges in the Job Market" }

                div { class: "card-grid",
                    for (i, (glyph, description)) in PROBLEMS.iter().enumerate() {
                        div {
                            key: "{i}",
                            style: "{motion_plan::styled(fired, PROBLEM_CARDS, i)}",
                            GlassCard {
                                glyph: glyph.to_string(),
                                description: description.to_string(),
                            }
                        }
                    }
                }

                div { class: "impact-panel accent-red",
                    h3 { class: "impact-title", "Impact" }
                    div { class: "chip-row",
                        for impact in IMPACTS {
                            span { class: "chip accent-red", "{impact}" }
                        }
                    }
                }
            }
        }
    }
}
