//! Conclusion footer: project summary, repository link, thank-you.

use dioxus::prelude::*;

const SUMMARY: &[(&str, &str)] = &[
    (
        "Successfully Bridges the Gap",
        "Between students and recruiters with seamless workflow",
    ),
    (
        "Streamlined Hiring Process",
        "Improved efficiency with automated workflows",
    ),
    (
        "Modern Tech Stack",
        "Full-stack development with industry-standard frameworks",
    ),
    (
        "Real-world Application",
        "Production-ready development experience",
    ),
];

#[component]
pub fn ConclusionSection() -> Element {
    rsx! {
        section { class: "deck-section conclusion-section",
            div { class: "section-inner narrow",
                h2 { class: "section-title text-gradient-purple-cyan", "Conclusion & Q&A" }
                p { class: "section-subtitle", "Thank you for exploring ZidioConnect" }

                div { class: "summary-panel",
                    h3 { class: "summary-panel-title", "Project Summary" }
                    div { class: "summary-grid",
                        for (title, desc) in SUMMARY {
                            div { key: "{title}", class: "summary-item",
                                span { class: "summary-mark", "\u{2713}" }
                                div {
                                    h4 { "{title}" }
                                    p { class: "detail-item-desc", "{desc}" }
                                }
                            }
                        }
                    }
                }

                a {
                    class: "repo-link",
                    href: "https://github.com/infance-tony/zidio-connect",
                    target: "_blank",
                    span { "\u{1F517}" }
                    span { "GitHub Repository" }
                }

                div { class: "thanks text-gradient", "Thank You!" }
                p { class: "qa-line", "Questions & Answers" }

                p { class: "credit-line", "\u{00A9} Presented by Infance Tony" }
            }
        }
    }
}
