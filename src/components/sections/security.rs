//! Security and performance: two columns of itemized capabilities.

use dioxus::prelude::*;

use crate::components::Accent;

const SECURITY_FEATURES: &[(&str, &str, &str)] = &[
    (
        "\u{1F512}",
        "JWT Authentication",
        "Token-based stateless authentication for secure API access",
    ),
    (
        "\u{1F6E1}",
        "Password Encryption",
        "BCrypt hashing for secure password storage",
    ),
    (
        "\u{2705}",
        "CORS Protection",
        "Cross-Origin Resource Sharing configuration",
    ),
    (
        "\u{1F512}",
        "Input Validation",
        "Server-side validation and sanitization",
    ),
    (
        "\u{1F6E1}",
        "Role-Based Access",
        "RBAC with Spring Security for authorization",
    ),
];

const PERFORMANCE_FEATURES: &[(&str, &str, &str)] = &[
    (
        "\u{26A1}",
        "React Query Caching",
        "Client-side data caching for faster load times",
    ),
    (
        "\u{1F3AF}",
        "Lazy Loading",
        "Code splitting for optimized bundle sizes",
    ),
    (
        "\u{1F5C4}",
        "Database Indexing",
        "Optimized queries with proper indexing",
    ),
    (
        "\u{1F5A5}",
        "Docker Containers",
        "Containerization for scalability and portability",
    ),
    (
        "\u{26A1}",
        "API Optimization",
        "RESTful best practices with pagination",
    ),
];

#[component]
fn SecurityColumn(title: String, accent: Accent, items: Vec<(&'static str, &'static str, &'static str)>) -> Element {
    rsx! {
        div { class: "{accent.class()}",
            h3 { class: "security-column-title", "{title}" }
            for (glyph, item_title, desc) in items {
                div { key: "{item_title}", class: "security-item",
                    span { class: "security-item-glyph", "{glyph}" }
                    div {
                        h4 { class: "security-item-title", "{item_title}" }
                        p { class: "security-item-desc", "{desc}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SecurityPerformanceSection() -> Element {
    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Security & Performance" }
                p { class: "section-subtitle",
                    "Enterprise-grade security and optimized performance"
                }

                div { class: "security-grid",
                    SecurityColumn {
                        title: "Security Features",
                        accent: Accent::Purple,
                        items: SECURITY_FEATURES.to_vec(),
                    }
                    SecurityColumn {
                        title: "Performance Optimizations",
                        accent: Accent::Cyan,
                        items: PERFORMANCE_FEATURES.to_vec(),
                    }
                }
            }
        }
    }
}
