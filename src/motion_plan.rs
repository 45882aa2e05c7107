//! The deck's reveal table.
//!
//! One declarative row per animated group: hero elements fire on mount with
//! ramped delays, everything else is armed behind a scroll trigger on its
//! section container. The scheduler in the Deck page drives this table; the
//! sections render each group's style through [`styled`].

use std::sync::OnceLock;

use zidiodeck_motion::{Easing, MotionSpec, RevealEntry};

// === Reveal groups ===
pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_BADGE: &str = "hero-badge";
pub const PROBLEM_CARDS: &str = "problem-cards";
pub const SOLUTION_CONTENT: &str = "solution-content";
pub const ARCHITECTURE_TITLE: &str = "architecture-title";
pub const TECH_LOGOS: &str = "tech-logos";
pub const CENTER_LOGO: &str = "center-logo";
pub const TECH_ITEMS: &str = "tech-items";
pub const FEATURE_ROWS: &str = "feature-rows";
pub const HIGHLIGHT_CARDS: &str = "highlight-cards";
pub const ROADMAP_LEFT: &str = "roadmap-left";
pub const ROADMAP_RIGHT: &str = "roadmap-right";

// === Trigger containers (sections carrying data-reveal-container) ===
pub const PROBLEM_SECTION: &str = "problem";
pub const SOLUTION_SECTION: &str = "solution";
pub const ARCHITECTURE_SECTION: &str = "architecture";
pub const FEATURES_SECTION: &str = "features";
pub const HIGHLIGHTS_SECTION: &str = "highlights";
pub const ROADMAP_SECTION: &str = "roadmap";

static PLAN: OnceLock<Vec<RevealEntry>> = OnceLock::new();

/// The full reveal table, in firing registration order.
pub fn reveal_plan() -> &'static [RevealEntry] {
    PLAN.get_or_init(|| {
        vec![
            // Hero: immediate, ramped delays
            RevealEntry::immediate(
                HERO_TITLE,
                MotionSpec::rise(50.0).duration(600).ease(Easing::PowerOut3),
            ),
            RevealEntry::immediate(
                HERO_SUBTITLE,
                MotionSpec::rise(30.0)
                    .duration(500)
                    .delay(150)
                    .ease(Easing::PowerOut3),
            ),
            RevealEntry::immediate(
                HERO_BADGE,
                MotionSpec::rise(20.0)
                    .duration(500)
                    .delay(250)
                    .ease(Easing::PowerOut3),
            ),
            // Problem cards stagger in as the section approaches
            RevealEntry::on_scroll(
                PROBLEM_CARDS,
                MotionSpec::rise(30.0).duration(500).stagger(100),
                PROBLEM_SECTION,
                90.0,
            ),
            RevealEntry::on_scroll(
                SOLUTION_CONTENT,
                MotionSpec::scale_in(0.9).duration(600),
                SOLUTION_SECTION,
                80.0,
            ),
            // Architecture: title drops in, logos pop, detail rows slide in
            RevealEntry::on_scroll(
                ARCHITECTURE_TITLE,
                MotionSpec::drop(50.0).duration(800).ease(Easing::PowerOut3),
                ARCHITECTURE_SECTION,
                80.0,
            ),
            RevealEntry::on_scroll(
                TECH_LOGOS,
                MotionSpec::scale_in(0.0)
                    .duration(700)
                    .stagger(100)
                    .ease(Easing::BackOut),
                ARCHITECTURE_SECTION,
                70.0,
            ),
            RevealEntry::on_scroll(
                CENTER_LOGO,
                MotionSpec::scale_in(0.0)
                    .rotation(360.0)
                    .duration(1000)
                    .ease(Easing::BackOut),
                ARCHITECTURE_SECTION,
                60.0,
            ),
            RevealEntry::on_scroll(
                TECH_ITEMS,
                MotionSpec::slide_from_right(50.0).duration(600).stagger(150),
                ARCHITECTURE_SECTION,
                80.0,
            ),
            RevealEntry::on_scroll(
                FEATURE_ROWS,
                MotionSpec::rise(40.0).duration(500).stagger(100),
                FEATURES_SECTION,
                80.0,
            ),
            RevealEntry::on_scroll(
                HIGHLIGHT_CARDS,
                MotionSpec::scale_in(0.9).duration(400).stagger(80),
                HIGHLIGHTS_SECTION,
                80.0,
            ),
            // Roadmap items alternate sides; the split groups interleave to
            // reproduce a single 150ms ramp across all four items
            RevealEntry::on_scroll(
                ROADMAP_LEFT,
                MotionSpec::slide_from_left(50.0).duration(500).stagger(300),
                ROADMAP_SECTION,
                80.0,
            ),
            RevealEntry::on_scroll(
                ROADMAP_RIGHT,
                MotionSpec::slide_from_right(50.0)
                    .duration(500)
                    .delay(150)
                    .stagger(300),
                ROADMAP_SECTION,
                80.0,
            ),
        ]
    })
}

/// Motion parameters for a group; neutral spec if the group is unknown.
pub fn spec_for(group: &str) -> MotionSpec {
    reveal_plan()
        .iter()
        .find(|entry| entry.group == group)
        .map(|entry| entry.motion.clone())
        .unwrap_or_default()
}

/// Inline style for element `index` of `group`, before or after its reveal.
pub fn styled(fired: bool, group: &str, index: usize) -> String {
    let spec = spec_for(group);
    if fired {
        spec.reveal_style(index)
    } else {
        spec.initial_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_groups_are_immediate_and_first() {
        let plan = reveal_plan();
        assert_eq!(plan[0].group, HERO_TITLE);
        assert!(plan[0].trigger.is_none());
        assert!(plan[1].trigger.is_none());
        assert!(plan[2].trigger.is_none());
        assert!(plan[3..].iter().all(|entry| entry.trigger.is_some()));
    }

    #[test]
    fn group_names_are_unique() {
        let plan = reveal_plan();
        for (i, entry) in plan.iter().enumerate() {
            assert!(
                plan[i + 1..].iter().all(|other| other.group != entry.group),
                "duplicate group {}",
                entry.group
            );
        }
    }

    #[test]
    fn roadmap_sides_interleave() {
        // Items 0..3 alternate left/right with an effective 150ms ramp:
        // left elements land at 0ms/300ms, right elements at 150ms/450ms
        let left = spec_for(ROADMAP_LEFT);
        let right = spec_for(ROADMAP_RIGHT);
        assert_eq!(left.element_delay_ms(0), 0);
        assert_eq!(right.element_delay_ms(0), 150);
        assert_eq!(left.element_delay_ms(1), 300);
        assert_eq!(right.element_delay_ms(1), 450);
    }

    #[test]
    fn styled_switches_on_fire_state() {
        let before = styled(false, PROBLEM_CARDS, 0);
        assert!(before.contains("opacity: 0"));
        let after = styled(true, PROBLEM_CARDS, 2);
        assert!(after.contains("opacity: 1"));
        assert!(after.contains("transition-delay: 200ms"));
    }

    #[test]
    fn unknown_group_gets_neutral_spec() {
        assert_eq!(styled(false, "nonexistent", 0), "opacity: 0; transform: none;");
    }
}
