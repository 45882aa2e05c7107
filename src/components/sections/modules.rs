//! Student and recruiter module sections: feature grids, screenshot
//! placeholders, and the application submission flow strip.

use dioxus::prelude::*;

use crate::components::{Accent, Feature, FeatureCard, ScreenshotPlaceholder};

const STUDENT_FEATURES: &[Feature] = &[
    Feature {
        glyph: "\u{1F50D}",
        title: "Job Discovery",
        desc: "Advanced search with filters (location, type, salary range)",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F3AF}",
        title: "One-Click Apply",
        desc: "Quick application with saved resume and profile",
        accent: Accent::Cyan,
    },
    Feature {
        glyph: "\u{1F4C8}",
        title: "Application Tracking",
        desc: "Real-time status updates (Pending, Accepted, Rejected)",
        accent: Accent::Pink,
    },
    Feature {
        glyph: "\u{1F4C4}",
        title: "Profile Management",
        desc: "Resume builder and document upload system",
        accent: Accent::Green,
    },
    Feature {
        glyph: "\u{1F4BC}",
        title: "Job Bookmarks",
        desc: "Save interesting opportunities for later",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4AC}",
        title: "Notifications",
        desc: "Email and in-app alerts for application updates",
        accent: Accent::Cyan,
    },
];

const RECRUITER_FEATURES: &[Feature] = &[
    Feature {
        glyph: "\u{1F4BC}",
        title: "Job Posting",
        desc: "Easy-to-use job creation form with rich details",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F465}",
        title: "Applicant Management",
        desc: "View and filter applications by status and skills",
        accent: Accent::Cyan,
    },
    Feature {
        glyph: "\u{1F4C4}",
        title: "Resume Viewer",
        desc: "Integrated document viewing and download",
        accent: Accent::Pink,
    },
    Feature {
        glyph: "\u{2705}",
        title: "Status Updates",
        desc: "Accept/Reject/Shortlist workflow management",
        accent: Accent::Green,
    },
    Feature {
        glyph: "\u{1F4CA}",
        title: "Analytics",
        desc: "Application statistics and insights dashboard",
        accent: Accent::Purple,
    },
    Feature {
        glyph: "\u{1F4AC}",
        title: "Company Profile",
        desc: "Showcase organization and build employer brand",
        accent: Accent::Cyan,
    },
];

const APPLICATION_STEPS: &[&str] = &[
    "Browse Jobs",
    "Select Position",
    "Review Details",
    "Submit Application",
];

#[component]
pub fn StudentModuleSection() -> Element {
    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Student Module Features" }
                p { class: "section-subtitle",
                    "Comprehensive tools for students to discover and apply for jobs"
                }

                ScreenshotPlaceholder {
                    label: "Student Dashboard Interface",
                    centered: true,
                }

                div { class: "feature-grid",
                    for feature in STUDENT_FEATURES {
                        FeatureCard { feature: *feature }
                    }
                }

                div { style: "margin-top: 3rem;",
                    h3 { class: "subsection-title text-gradient-purple-cyan",
                        "Application Submission Flow"
                    }
                    div { class: "step-strip",
                        for (i, step) in APPLICATION_STEPS.iter().enumerate() {
                            div { key: "{step}", style: "position: relative;",
                                div { class: "step-card",
                                    div { class: "step-index", "{i + 1}" }
                                    p { class: "step-label", "{step}" }
                                }
                                if i < APPLICATION_STEPS.len() - 1 {
                                    div { class: "step-connector" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecruiterModuleSection() -> Element {
    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "Recruiter Module Features" }
                p { class: "section-subtitle",
                    "Powerful tools for recruiters to manage hiring processes"
                }

                div { class: "panel-grid",
                    ScreenshotPlaceholder { label: "Recruiter Dashboard" }
                    ScreenshotPlaceholder { label: "Application Review Interface" }
                }

                div { class: "feature-grid",
                    for feature in RECRUITER_FEATURES {
                        FeatureCard { feature: *feature }
                    }
                }
            }
        }
    }
}
