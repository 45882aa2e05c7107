//! User roles & dashboards: the interactive tab switcher.
//!
//! The only stateful interaction on the page besides scrolling. Switching
//! tabs swaps the screenshot placeholder and the feature chips; it does not
//! participate in the reveal system.

use dioxus::prelude::*;

use crate::components::ScreenshotPlaceholder;

/// Dashboard audience selected by the tab switcher.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum UserRole {
    #[default]
    Student,
    Recruiter,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Recruiter, UserRole::Admin];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Recruiter => "recruiter",
            UserRole::Admin => "admin",
        }
    }

    /// Caption for the role's dashboard placeholder.
    pub fn screenshot_label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student Dashboard",
            UserRole::Recruiter => "Recruiter Dashboard",
            UserRole::Admin => "Admin Dashboard",
        }
    }

    /// Headline features shown as chips under the dashboard.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            UserRole::Student => &[
                "Browse 1000+ Jobs",
                "One-Click Apply",
                "Resume Builder",
                "Application Tracking",
            ],
            UserRole::Recruiter => &[
                "Post Job Listings",
                "Shortlist Candidates",
                "Direct Messaging",
                "Analytics Dashboard",
            ],
            UserRole::Admin => &[
                "User Management",
                "Platform Analytics",
                "Content Moderation",
                "System Configuration",
            ],
        }
    }

    /// Tab CSS class, highlighting the active role.
    pub fn tab_class(&self, active: UserRole) -> &'static str {
        if *self == active {
            "role-tab active"
        } else {
            "role-tab"
        }
    }
}

#[component]
pub fn RolesSection() -> Element {
    let mut active_tab = use_signal(UserRole::default);

    rsx! {
        section { class: "deck-section",
            div { class: "section-inner",
                h2 { class: "section-title text-gradient-purple-cyan", "User Roles & Dashboards" }
                p { class: "section-subtitle", "Tailored experiences for every user role" }

                div { class: "role-tabs",
                    for role in UserRole::ALL {
                        button {
                            key: "{role.label()}",
                            class: "{role.tab_class(active_tab())}",
                            onclick: move |_| active_tab.set(role),
                            "{role.label()}"
                        }
                    }
                }

                ScreenshotPlaceholder {
                    label: "{active_tab().screenshot_label()}",
                    centered: true,
                }

                div { class: "role-chip-grid",
                    for feature in active_tab().features() {
                        div { key: "{feature}", class: "role-chip",
                            span { class: "role-chip-mark", "\u{2713}" }
                            span { "{feature}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels() {
        assert_eq!(UserRole::Student.label(), "student");
        assert_eq!(UserRole::Recruiter.label(), "recruiter");
        assert_eq!(UserRole::Admin.label(), "admin");
    }

    #[test]
    fn default_role_is_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn tab_class_highlights_active() {
        assert_eq!(UserRole::Student.tab_class(UserRole::Student), "role-tab active");
        assert_eq!(UserRole::Recruiter.tab_class(UserRole::Student), "role-tab");
    }

    #[test]
    fn every_role_lists_four_features() {
        for role in UserRole::ALL {
            assert_eq!(role.features().len(), 4);
        }
    }
}
