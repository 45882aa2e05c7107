//! Database design: entity/relationship panels plus the four inert
//! request-flow diagrams.

use dioxus::prelude::*;

use crate::components::{
    AuthFlowDiagram, BackendFlowDiagram, DatabaseFlowDiagram, FrontendFlowDiagram,
};

const ENTITIES: &[&str] = &[
    "Users (Student, Recruiter, Admin roles)",
    "Jobs (postings with details and requirements)",
    "Applications (linking students and jobs)",
    "Resumes (file management and metadata)",
    "Messages (communication system)",
    "Notifications (alerts and updates)",
];

const RELATIONSHIPS: &[&str] = &[
    "One-to-Many: User \u{2192} Applications",
    "Many-to-One: Application \u{2192} Job",
    "One-to-One: User \u{2192} Resume",
    "One-to-Many: User \u{2192} Messages",
    "Many-to-One: Job \u{2192} Recruiter",
    "One-to-Many: User \u{2192} Notifications",
];

#[component]
fn DiagramBlock(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { style: "margin-top: 5rem;",
            h3 { class: "subsection-title text-gradient-purple-cyan", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }
            {children}
        }
    }
}

#[component]
pub fn DatabaseDesignSection() -> Element {
    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Database Design" }
                p { class: "section-subtitle",
                    "Robust relational database schema with JPA/Hibernate"
                }

                div { class: "panel-grid",
                    div { class: "detail-panel accent-purple",
                        h3 { class: "detail-panel-title", "Key Entities" }
                        ul { class: "detail-list",
                            for entity in ENTITIES {
                                li {
                                    span { class: "detail-mark", "\u{1F5C4}" }
                                    span { "{entity}" }
                                }
                            }
                        }
                    }
                    div { class: "detail-panel accent-cyan",
                        h3 { class: "detail-panel-title", "Relationships" }
                        ul { class: "detail-list",
                            for relationship in RELATIONSHIPS {
                                li {
                                    span { class: "detail-mark", "\u{1F4C8}" }
                                    span { "{relationship}" }
                                }
                            }
                        }
                    }
                }

                DiagramBlock {
                    title: "Frontend Flow Architecture",
                    subtitle: "Request flow from frontend to database with JWT token authentication",
                    FrontendFlowDiagram {}
                }

                DiagramBlock {
                    title: "Backend Flow Architecture",
                    subtitle: "Complete Spring Boot request lifecycle from HTTP request to MySQL database",
                    BackendFlowDiagram {}
                }

                DiagramBlock {
                    title: "API Flow Examples",
                    subtitle: "Authentication and data retrieval request flows",
                    AuthFlowDiagram {}
                }

                DiagramBlock {
                    title: "Database Flow Architecture",
                    subtitle: "Complete request lifecycle from frontend to database",
                    DatabaseFlowDiagram {}
                }
            }
        }
    }
}
