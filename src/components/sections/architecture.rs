//! System architecture: floating tech-stack logos around the central server
//! badge, with the stack detail rows sliding in on the right.
//!
//! Four reveal groups share this section's container, armed at successively
//! deeper thresholds so they cascade as the user scrolls in.

use dioxus::prelude::*;

use crate::components::Accent;
use crate::context::use_revealed;
use crate::motion_plan::{
    self, ARCHITECTURE_SECTION, ARCHITECTURE_TITLE, CENTER_LOGO, TECH_ITEMS, TECH_LOGOS,
};

struct TechLogo {
    glyph: &'static str,
    name: &'static str,
    accent: Accent,
    x_pct: f64,
    y_pct: f64,
    float_delay_s: f64,
    float_duration_s: f64,
}

const TECH_LOGO_TABLE: &[TechLogo] = &[
    TechLogo { glyph: "\u{269B}", name: "React", accent: Accent::Cyan, x_pct: 15.0, y_pct: 20.0, float_delay_s: 0.0, float_duration_s: 4.0 },
    TechLogo { glyph: "\u{2615}", name: "Java", accent: Accent::Orange, x_pct: 75.0, y_pct: 15.0, float_delay_s: 0.5, float_duration_s: 5.0 },
    TechLogo { glyph: "\u{1F5C4}", name: "MySQL", accent: Accent::Blue, x_pct: 80.0, y_pct: 60.0, float_delay_s: 1.0, float_duration_s: 4.5 },
    TechLogo { glyph: "\u{1F4E6}", name: "Docker", accent: Accent::Cyan, x_pct: 60.0, y_pct: 80.0, float_delay_s: 1.5, float_duration_s: 4.0 },
    TechLogo { glyph: "\u{1F3A8}", name: "CSS3", accent: Accent::Blue, x_pct: 20.0, y_pct: 70.0, float_delay_s: 2.0, float_duration_s: 5.0 },
    TechLogo { glyph: "{ }", name: "JS", accent: Accent::Yellow, x_pct: 45.0, y_pct: 35.0, float_delay_s: 2.5, float_duration_s: 4.5 },
];

const STACK_DETAILS: &[(&str, &str, Accent, &[&str])] = &[
    (
        "\u{1F4BB}",
        "Frontend",
        Accent::Purple,
        &[
            "React 18 with TypeScript",
            "Tailwind CSS for styling",
            "Vite for build tooling",
            "TanStack Query for state management",
        ],
    ),
    (
        "\u{1F5A5}",
        "Backend",
        Accent::Cyan,
        &[
            "Spring Boot 3.3",
            "Java 17",
            "Spring Security with JWT",
            "RESTful API Architecture",
        ],
    ),
    (
        "\u{1F5C4}",
        "Database & Deployment",
        Accent::Pink,
        &[
            "MySQL 8.0",
            "JPA/Hibernate ORM",
            "Docker Containerization",
            "Cloud-ready deployment",
        ],
    ),
];

#[component]
pub fn ArchitectureSection() -> Element {
    let revealed = use_revealed();
    let groups = revealed();
    let title_fired = groups.contains(ARCHITECTURE_TITLE);
    let logos_fired = groups.contains(TECH_LOGOS);
    let center_fired = groups.contains(CENTER_LOGO);
    let items_fired = groups.contains(TECH_ITEMS);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{ARCHITECTURE_SECTION}",
            div { class: "section-inner",
                h2 {
                    class: "section-title text-gradient-purple-cyan",
                    style: "{motion_plan::styled(title_fired, ARCHITECTURE_TITLE, 0)}",
                    "System Architecture"
                }

                div { class: "arch-layout",
                    div { class: "arch-canvas",
                        for (i, logo) in TECH_LOGO_TABLE.iter().enumerate() {
                            div {
                                key: "{logo.name}",
                                class: "arch-logo",
                                style: "left: {logo.x_pct}%; top: {logo.y_pct}%;",
                                div { style: "{motion_plan::styled(logos_fired, TECH_LOGOS, i)}",
                                    div {
                                        class: "arch-logo-float",
                                        style: "--float-duration: {logo.float_duration_s}s; --float-delay: {logo.float_delay_s}s;",
                                        div { class: "arch-logo-box {logo.accent.class()}",
                                            span { class: "arch-logo-glyph", "{logo.glyph}" }
                                            span { class: "arch-logo-name", "{logo.name}" }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "arch-center",
                            div { style: "{motion_plan::styled(center_fired, CENTER_LOGO, 0)}",
                                div { class: "arch-center-box",
                                    span { class: "arch-center-glyph", "\u{1F5A5}" }
                                    span { class: "arch-center-name", "Spring" }
                                }
                            }
                        }
                    }

                    div { class: "tech-stack",
                        for (i, (glyph, title, accent, items)) in STACK_DETAILS.iter().enumerate() {
                            div {
                                key: "{title}",
                                class: "{accent.class()}",
                                style: "{motion_plan::styled(items_fired, TECH_ITEMS, i)}",
                                h3 { class: "tech-item-head",
                                    span { class: "tech-item-glyph", "{glyph}" }
                                    "{title}"
                                }
                                div { class: "tech-item-list",
                                    for item in items.iter() {
                                        p { "\u{2022} {item}" }
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
