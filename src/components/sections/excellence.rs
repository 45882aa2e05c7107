//! Technical excellence: highlight cards, architecture detail panels, code
//! quality cards, and the API standards panel.

use dioxus::prelude::*;

use crate::components::{Accent, Feature, FeatureCard};
use crate::context::use_revealed;
use crate::motion_plan::{self, HIGHLIGHTS_SECTION, HIGHLIGHT_CARDS};

const HIGHLIGHTS: &[Feature] = &[
    Feature {
        glyph: "\u{1F512}",
        title: "Security",
        desc: "JWT Authentication, BCrypt encryption, and CORS configuration",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{26A1}",
        title: "Performance",
        desc: "React Query caching, lazy loading, and optimized API calls",
        accent: Accent::Cyan,
    },
    Feature {
        glyph: "\u{1F5C4}",
        title: "Database",
        desc: "Relational schema with One-to-Many and Many-to-One relationships",
        accent: Accent::Pink,
    },
    Feature {
        glyph: "\u{1F5A5}",
        title: "Deployment",
        desc: "Dockerized containers for scalable, portable deployment",
        accent: Accent::Green,
    },
];

const FRONTEND_DETAILS: &[(&str, &str)] = &[
    (
        "Component-Based Design",
        "Reusable React components with TypeScript for type safety",
    ),
    (
        "State Management",
        "TanStack Query for server state and React hooks for local state",
    ),
    (
        "Responsive Design",
        "Mobile-first approach with Tailwind CSS utility classes",
    ),
    (
        "Form Handling",
        "React Hook Form with Zod validation for robust form management",
    ),
];

const BACKEND_DETAILS: &[(&str, &str)] = &[
    (
        "Layered Architecture",
        "Controller, Service, Repository pattern for clean separation",
    ),
    (
        "RESTful API Design",
        "Standard HTTP methods with proper status codes and endpoints",
    ),
    (
        "Exception Handling",
        "Global exception handler with custom error responses",
    ),
    (
        "Data Persistence",
        "JPA/Hibernate with entity relationships and cascading operations",
    ),
];

const QUALITY_CARDS: &[Feature] = &[
    Feature {
        glyph: "{ }",
        title: "Clean Code",
        desc: "Meaningful naming conventions, DRY principles, and SOLID design patterns",
        accent: Accent::Pink,
    },
    Feature {
        glyph: "\u{1F3AF}",
        title: "Error Handling",
        desc: "Comprehensive try-catch blocks, custom exceptions, and user-friendly error messages",
        accent: Accent::Green,
    },
    Feature {
        glyph: "\u{1F6E1}",
        title: "Input Validation",
        desc: "Server-side validation, SQL injection prevention, and XSS protection",
        accent: Accent::Yellow,
    },
];

const API_CHIPS: &[&str] = &[
    "Swagger/OpenAPI Documentation",
    "Postman Collection Available",
    "CORS Configured",
];

#[component]
fn DetailPanel(title: String, glyph: String, accent: Accent, items: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        div { class: "detail-panel {accent.class()}",
            h3 { class: "detail-panel-title",
                span { "{glyph}" }
                "{title}"
            }
            ul { class: "detail-list",
                for (item_title, desc) in items {
                    li { key: "{item_title}",
                        span { class: "detail-mark", "\u{2713}" }
                        div {
                            div { class: "detail-item-title", "{item_title}" }
                            p { class: "detail-item-desc", "{desc}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TechnicalExcellenceSection() -> Element {
    let revealed = use_revealed();
    let fired = revealed().contains(HIGHLIGHT_CARDS);

    rsx! {
        section {
            class: "deck-section",
            "data-reveal-container": "{HIGHLIGHTS_SECTION}",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Technical Excellence" }
                p { class: "section-subtitle",
                    "Built with industry best practices and cutting-edge technologies"
                }

                div { class: "highlight-grid",
                    for (i, feature) in HIGHLIGHTS.iter().enumerate() {
                        div {
                            key: "{feature.title}",
                            style: "{motion_plan::styled(fired, HIGHLIGHT_CARDS, i)}",
                            FeatureCard { feature: *feature }
                        }
                    }
                }

                div { class: "panel-grid",
                    DetailPanel {
                        title: "Frontend Architecture",
                        glyph: "\u{269B}",
                        accent: Accent::Purple,
                        items: FRONTEND_DETAILS.to_vec(),
                    }
                    DetailPanel {
                        title: "Backend Architecture",
                        glyph: "\u{1F5A5}",
                        accent: Accent::Cyan,
                        items: BACKEND_DETAILS.to_vec(),
                    }
                }

                h3 { class: "subsection-title text-gradient-purple-cyan",
                    "Code Quality & Best Practices"
                }
                div { class: "quality-grid",
                    for feature in QUALITY_CARDS {
                        div { class: "quality-card {feature.accent.class()}",
                            div { class: "quality-card-glyph", "{feature.glyph}" }
                            h4 { class: "quality-card-title", "{feature.title}" }
                            p { class: "quality-card-desc", "{feature.desc}" }
                        }
                    }
                }

                div { class: "api-panel",
                    h3 { class: "api-panel-title", "API Standards & Documentation" }
                    div { class: "api-sample-grid",
                        div {
                            h4 { class: "api-sample-title", "Request/Response Format" }
                            div { class: "code-sample accent-green",
                                div { class: "code-comment", "// Success Response" }
                                div { class: "code-line", "{{" }
                                div { class: "code-line indent", "\"status\": \"success\"," }
                                div { class: "code-line indent", "\"data\": {{ ... }}" }
                                div { class: "code-line", "}}" }
                            }
                        }
                        div {
                            h4 { class: "api-sample-title", "Error Response Format" }
                            div { class: "code-sample accent-red",
                                div { class: "code-comment", "// Error Response" }
                                div { class: "code-line", "{{" }
                                div { class: "code-line indent", "\"status\": \"error\"," }
                                div { class: "code-line indent", "\"message\": \"Error details\"" }
                                div { class: "code-line", "}}" }
                            }
                        }
                    }
                    div { class: "chip-row", style: "margin-top: 1.5rem;",
                        for chip in API_CHIPS {
                            span { class: "chip accent-blue", "{chip}" }
                        }
                    }
                }
            }
        }
    }
}
