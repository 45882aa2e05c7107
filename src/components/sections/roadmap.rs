//! Future roadmap: vertical timeline with items sliding in from alternating
//! sides.
//!
//! The two reveal groups (left/right) interleave their staggers so the four
//! items ramp at a uniform 150ms regardless of side.

use dioxus::prelude::*;

use crate::context::use_revealed;
use crate::motion_plan::{self, ROADMAP_LEFT, ROADMAP_RIGHT, ROADMAP_SECTION};

struct RoadmapItem {
    glyph: &'static str,
    title: &'static str,
    desc: &'static str,
}

const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        glyph: "\u{1F9E0}",
        title: "AI Job Recommendations",
        desc: "Machine learning algorithms to match candidates with ideal positions",
    },
    RoadmapItem {
        glyph: "\u{1F3A5}",
        title: "Video Interview Integration",
        desc: "Built-in video conferencing for remote interviews",
    },
    RoadmapItem {
        glyph: "\u{1F4F1}",
        title: "Mobile App",
        desc: "React Native applications for iOS and Android",
    },
    RoadmapItem {
        glyph: "\u{1F4AC}",
        title: "Enhanced Messaging",
        desc: "Real-time chat with file sharing and scheduling",
    },
];

#[component]
pub fn RoadmapSection() -> Element {
    let revealed = use_revealed();
    let groups = revealed();
    let left_fired = groups.contains(ROADMAP_LEFT);
    let right_fired = groups.contains(ROADMAP_RIGHT);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{ROADMAP_SECTION}",
            div { class: "section-inner narrow",
                h2 { class: "section-title text-gradient-purple-cyan", "Future Roadmap" }
                p { class: "section-subtitle", "Continuous innovation and feature expansion" }

                div { class: "timeline",
                    div { class: "timeline-line" }
                    div { class: "timeline-items",
                        for (i, item) in ROADMAP.iter().enumerate() {
                            {
                                // Even items enter from the left, odd from the right
                                let from_right = i % 2 == 1;
                                let (group, fired) = if from_right {
                                    (ROADMAP_RIGHT, right_fired)
                                } else {
                                    (ROADMAP_LEFT, left_fired)
                                };
                                let item_class = if from_right {
                                    "timeline-item reversed"
                                } else {
                                    "timeline-item"
                                };

                                rsx! {
                                    div {
                                        key: "{item.title}",
                                        class: "{item_class}",
                                        style: "{motion_plan::styled(fired, group, i / 2)}",
                                        div { class: "timeline-slot",
                                            div { class: "timeline-card",
                                                h3 { class: "timeline-card-title", "{item.title}" }
                                                p { class: "timeline-card-desc", "{item.desc}" }
                                            }
                                        }
                                        div { class: "timeline-node", "{item.glyph}" }
                                        div { class: "timeline-spacer" }
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
