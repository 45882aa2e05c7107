//! Solution overview: scale-in content block with the feature grid and the
//! before/after comparison.

use dioxus::prelude::*;

use crate::components::{Accent, Feature, FeatureCard, ScreenshotPlaceholder};
use crate::context::use_revealed;
use crate::motion_plan::{self, SOLUTION_CONTENT, SOLUTION_SECTION};

const SOLUTION_FEATURES: &[Feature] = &[
    Feature {
        glyph: "\u{1F6E1}",
        title: "Role-based Access",
        desc: "Students, Recruiters, Admin",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4C8}",
        title: "Real-time Job Postings",
        desc: "Live applications & updates",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4C4}",
        title: "Resume Management",
        desc: "Upload & builder system",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4CA}",
        title: "Application Tracking",
        desc: "Complete workflow system",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4AC}",
        title: "Messaging System",
        desc: "In-app notifications",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{2705}",
        title: "User-Friendly",
        desc: "Intuitive interface design",
        accent: Accent::Purple,
    },
];

const BEFORE: &[&str] = &[
    "Manual job search across multiple platforms",
    "Time-consuming application processes",
    "No application tracking visibility",
    "Limited recruiter-candidate communication",
];

const AFTER: &[&str] = &[
    "Centralized job portal with advanced filters",
    "One-click apply with saved resume",
    "Real-time application status tracking",
    "Integrated messaging and notification system",
];

#[component]
pub fn SolutionSection() -> Element {
    let revealed = use_revealed();
    let fired = revealed().contains(SOLUTION_CONTENT);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{SOLUTION_SECTION}",
            div { class: "section-inner",
                div { style: "{motion_plan::styled(fired, SOLUTION_CONTENT, 0)}",
                    h2 { class: "section-title text-gradient-purple-cyan", "Solution Overview" }
                    p { class: "section-subtitle",
                        "ZidioConnect: a comprehensive web-based job portal platform. "
                        "Streamlined, efficient, and user-friendly hiring process."
                    }

                    ScreenshotPlaceholder {
                        label: "Platform Homepage / Dashboard",
                        centered: true,
                    }

                    div { class: "feature-grid",
                        for feature in SOLUTION_FEATURES {
                            FeatureCard { feature: *feature }
                        }
                    }

                    div { class: "compare-grid",
                        div { class: "compare-panel accent-red",
                            h3 { class: "compare-title", "Before" }
                            ul { class: "compare-list",
                                for item in BEFORE {
                                    li {
                                        span { class: "compare-mark", "\u{2717}" }
                                        span { "{item}" }
                                    }
                                }
                            }
                        }
                        div { class: "compare-panel accent-green",
                            h3 { class: "compare-title", "After" }
                            ul { class: "compare-list",
                                for item in AFTER {
                                    li {
                                        span { class: "compare-mark", "\u{2713}" }
                                        span { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
