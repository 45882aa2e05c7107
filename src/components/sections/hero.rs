//! Hero banner: title, subtitle lines, stack badge, author credit.
//!
//! All hero groups fire on mount with ramped delays; no scroll trigger.

use dioxus::prelude::*;

use crate::context::use_revealed;
use crate::motion_plan::{self, HERO_BADGE, HERO_SUBTITLE, HERO_TITLE};

#[component]
pub fn HeroSection() -> Element {
    let revealed = use_revealed();
    let style_of =
        move |group: &'static str| motion_plan::styled(revealed().contains(group), group, 0);

    rsx! {
        section { class: "hero-section",
            div { class: "hero-content",
                h1 {
                    class: "hero-title text-gradient",
                    style: "{style_of(HERO_TITLE)}",
                    "ZidioConnect"
                }
                p {
                    class: "hero-subtitle",
                    style: "{style_of(HERO_SUBTITLE)}",
                    "Job Portal Platform"
                }
                p {
                    class: "hero-lede",
                    style: "{style_of(HERO_SUBTITLE)}",
                    "Connecting Students with Career Opportunities"
                }
                div {
                    class: "hero-badge",
                    style: "{style_of(HERO_BADGE)}",
                    span { class: "stack-front", "Spring Boot & React" }
                    span { class: "stack-divider", "|" }
                    span { class: "stack-back", "Full-Stack Platform" }
                }
                p { class: "hero-author",
                    "Created by "
                    span { class: "author-name", "Infance Tony" }
                }
            }
        }
    }
}
