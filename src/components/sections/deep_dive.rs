//! Feature deep dive: three alternating feature rows that rise in together
//! with a stagger when the section scrolls into view.

use dioxus::prelude::*;

use crate::components::{Accent, ScreenshotPlaceholder};
use crate::context::use_revealed;
use crate::motion_plan::{self, FEATURES_SECTION, FEATURE_ROWS};

struct DeepDive {
    glyph: &'static str,
    title: &'static str,
    desc: &'static str,
    accent: Accent,
    bullets: &'static [&'static str],
    screenshot: &'static str,
    reversed: bool,
}

const DEEP_DIVES: &[DeepDive] = &[
    DeepDive {
        glyph: "\u{1F50D}",
        title: "Job Discovery",
        desc: "Advanced search filters help students find opportunities that match \
               their skills, location preferences, and salary expectations.",
        accent: Accent::Purple,
        bullets: &[
            "Filter by location and remote options",
            "Salary range specification",
            "Job type categorization",
        ],
        screenshot: "Job Search Interface",
        reversed: false,
    },
    DeepDive {
        glyph: "\u{1F3AF}",
        title: "One-Click Apply",
        desc: "Students can apply to multiple positions quickly using their saved \
               resume and profile information.",
        accent: Accent::Cyan,
        bullets: &[
            "Save and reuse application data",
            "Track application status",
            "Get instant confirmation",
        ],
        screenshot: "Quick Apply Feature",
        reversed: true,
    },
    DeepDive {
        glyph: "\u{1F4CA}",
        title: "Recruiter Hub",
        desc: "Comprehensive tools for recruiters to manage job postings, review \
               applications, and track hiring metrics.",
        accent: Accent::Pink,
        bullets: &[
            "Accept or reject applications",
            "Real-time analytics dashboard",
            "Candidate communication tools",
        ],
        screenshot: "Recruiter Analytics",
        reversed: false,
    },
];

#[component]
pub fn FeatureDeepDiveSection() -> Element {
    let revealed = use_revealed();
    let fired = revealed().contains(FEATURE_ROWS);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{FEATURES_SECTION}",
            div { class: "section-inner",
                for (i, dive) in DEEP_DIVES.iter().enumerate() {
                    div {
                        key: "{dive.title}",
                        class: "deep-dive-row {dive.accent.class()}",
                        style: "{motion_plan::styled(fired, FEATURE_ROWS, i)}",
                        if dive.reversed {
                            ScreenshotPlaceholder { label: "{dive.screenshot}" }
                        }
                        div {
                            div { class: "deep-dive-head",
                                span { class: "deep-dive-glyph", "{dive.glyph}" }
                                h3 { class: "deep-dive-title text-gradient-purple-cyan", "{dive.title}" }
                            }
                            p { class: "deep-dive-desc", "{dive.desc}" }
                            ul { class: "bullet-list",
                                for bullet in dive.bullets {
                                    li {
                                        span { class: "bullet-dot" }
                                        "{bullet}"
                                    }
                                }
                            }
                        }
                        if !dive.reversed {
                            ScreenshotPlaceholder { label: "{dive.screenshot}" }
                        }
                    }
                }
            }
        }
    }
}
