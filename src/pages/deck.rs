//! The deck page: fixed background layers plus the content sections, driven
//! by one scheduler task.
//!
//! The page owns the whole reveal lifecycle. On mount it registers the
//! reveal table, fires the immediate (hero) entries, then installs a scroll
//! probe in the webview that streams a [`ScrollFrame`] on every scroll and
//! resize. Each frame updates the progress bar signal and runs the armed
//! triggers; fired groups accumulate in the revealed-set signal the sections
//! render from. Unmounting drops the task, the scheduler, and both signals.

use dioxus::document;
use dioxus::prelude::*;
use zidiodeck_motion::{RevealScheduler, ScrollFrame};

use crate::components::sections::{
    ArchitectureSection, ConclusionSection, DatabaseDesignSection, FeatureDeepDiveSection,
    HeroSection, OutcomesSection, ProblemSection, RecruiterModuleSection, RoadmapSection,
    RolesSection, SecurityPerformanceSection, SolutionSection, StudentModuleSection,
    TechnicalExcellenceSection,
};
use crate::components::{ParticleField, ScrollProgressBar};
use crate::context::RevealedGroups;
use crate::motion_plan;

/// Streams one frame per scroll/resize event: scroll offset, viewport and
/// document heights, and the viewport-relative top of every section marked
/// with `data-reveal-container`. Sends an initial frame so entries already
/// in view fire without waiting for the first scroll.
const SCROLL_PROBE: &str = r#"
(function() {
    const sample = () => {
        const containers = {};
        document.querySelectorAll('[data-reveal-container]').forEach((el) => {
            containers[el.getAttribute('data-reveal-container')] =
                el.getBoundingClientRect().top;
        });
        dioxus.send({
            scrollY: window.scrollY,
            viewportHeight: window.innerHeight,
            documentHeight: document.documentElement.scrollHeight,
            containers,
        });
    };
    window.addEventListener('scroll', sample, { passive: true });
    window.addEventListener('resize', sample);
    sample();
})();
"#;

#[component]
pub fn Deck() -> Element {
    let mut revealed = use_context_provider(|| Signal::new(RevealedGroups::new()));
    let mut progress = use_context_provider(|| Signal::new(0.0f64));

    use_effect(move || {
        spawn(async move {
            let mut scheduler = RevealScheduler::new(motion_plan::reveal_plan().to_vec());

            for group in scheduler.take_immediate() {
                revealed.write().insert(group);
            }

            let mut probe = document::eval(SCROLL_PROBE);
            loop {
                match probe.recv::<ScrollFrame>().await {
                    Ok(frame) => {
                        progress.set(frame.progress());
                        for group in scheduler.on_frame(&frame) {
                            revealed.write().insert(group);
                        }
                    }
                    Err(err) => {
                        tracing::warn!("scroll probe closed: {err:?}");
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        div { class: "deck",
            // Fixed layers
            div { class: "aurora-bg",
                div { class: "aurora-gradient-1" }
                div { class: "aurora-gradient-2" }
                div { class: "aurora-gradient-3" }
            }
            ScrollProgressBar {}
            ParticleField {}

            // Content sections, in scroll order
            HeroSection {}
            ProblemSection {}
            SolutionSection {}
            ArchitectureSection {}
            RolesSection {}
            StudentModuleSection {}
            RecruiterModuleSection {}
            DatabaseDesignSection {}
            SecurityPerformanceSection {}
            FeatureDeepDiveSection {}
            TechnicalExcellenceSection {}
            OutcomesSection {}
            RoadmapSection {}
            ConclusionSection {}
        }
    }
}
