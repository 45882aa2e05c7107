//! Glass-panel cards.
//!
//! Two flavors: [`GlassCard`] for the problem statement (big icon box, always
//! purple), and [`FeatureCard`] for the accent-tinted feature grids used
//! across the solution, module, and highlight sections.

use dioxus::prelude::*;

use super::accent::Accent;

/// A feature grid entry: glyph, title, description, accent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

/// Frosted panel with an icon box and description.
#[derive(Clone, PartialEq, Props)]
pub struct GlassCardProps {
    /// Icon glyph shown in the top box
    pub glyph: String,
    /// Optional card title
    #[props(default)]
    pub title: Option<String>,
    /// Body text
    pub description: String,
}

#[component]
pub fn GlassCard(props: GlassCardProps) -> Element {
    rsx! {
        div { class: "glass-card",
            div { class: "glass-card-icon", "{props.glyph}" }
            if let Some(title) = &props.title {
                h3 { class: "glass-card-title", "{title}" }
            }
            p { class: "glass-card-desc", "{props.description}" }
        }
    }
}

/// Accent-tinted card for feature grids.
#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "feature-card {feature.accent.class()}",
            div { class: "feature-card-glyph", "{feature.glyph}" }
            h3 { class: "feature-card-title", "{feature.title}" }
            p { class: "feature-card-desc", "{feature.desc}" }
        }
    }
}
