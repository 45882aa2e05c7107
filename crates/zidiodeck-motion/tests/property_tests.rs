//! Property-based tests for the motion engine
//!
//! Uses proptest to verify the invariants the deck relies on: count-up
//! convergence and monotonicity, one-shot reveal firing, and scroll-progress
//! bounds.

use proptest::prelude::*;
use zidiodeck_motion::reveal::ScrollFrame;
use zidiodeck_motion::{scroll_progress, CountUp, MotionSpec, RevealEntry, RevealScheduler};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Counter targets across the realistic range plus edge cases
fn target_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => 0u32..1000,
        1 => Just(0u32),
        1 => prop::num::u32::ANY.prop_map(|t| t % 1_000_000),
    ]
}

/// Viewport-relative container tops, including far off-screen values
fn container_top_strategy() -> impl Strategy<Value = f64> {
    -5000.0f64..10_000.0
}

fn frame(top: f64) -> ScrollFrame {
    serde_json::from_value(serde_json::json!({
        "scrollY": 0.0,
        "viewportHeight": 800.0,
        "documentHeight": 6000.0,
        "containers": { "section": top },
    }))
    .expect("valid frame")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The final displayed value equals the target exactly, for any target
    #[test]
    fn count_up_converges_exactly(target in target_strategy()) {
        let mut counter = CountUp::new(target);
        prop_assert!(counter.observe_visibility(1.0));

        let mut ticks = 0usize;
        while !counter.is_done() {
            counter.tick();
            ticks += 1;
            prop_assert!(ticks <= 200, "must settle within the 2s budget (125 ticks)");
        }
        prop_assert_eq!(counter.displayed(), target);
    }

    /// Displayed values never decrease and never exceed the target
    #[test]
    fn count_up_is_monotonic_and_bounded(target in target_strategy()) {
        let mut counter = CountUp::new(target);
        counter.observe_visibility(1.0);

        let mut previous = 0u32;
        while !counter.is_done() {
            let displayed = counter.tick();
            prop_assert!(displayed >= previous);
            prop_assert!(displayed <= target);
            previous = displayed;
        }
    }

    /// Once done, no sequence of visibility samples restarts the counter
    #[test]
    fn count_up_never_runs_twice(
        target in target_strategy(),
        ratios in prop::collection::vec(0.0f64..=1.0, 0..20),
    ) {
        let mut counter = CountUp::new(target);
        counter.observe_visibility(1.0);
        while !counter.is_done() {
            counter.tick();
        }

        for ratio in ratios {
            prop_assert!(!counter.observe_visibility(ratio));
            prop_assert_eq!(counter.tick(), target);
        }
    }

    /// A triggered entry fires at most once across any frame sequence
    #[test]
    fn reveal_fires_at_most_once(tops in prop::collection::vec(container_top_strategy(), 1..40)) {
        let mut scheduler = RevealScheduler::new(vec![RevealEntry::on_scroll(
            "group",
            MotionSpec::rise(30.0),
            "section",
            90.0,
        )]);

        let mut fires = 0usize;
        for top in tops {
            fires += scheduler.on_frame(&frame(top)).len();
        }
        prop_assert!(fires <= 1);
        prop_assert_eq!(fires == 1, scheduler.is_fired("group"));
    }

    /// Element stagger offsets are exactly index-proportional
    #[test]
    fn stagger_is_index_proportional(
        stagger in 0u64..1000,
        delay in 0u64..1000,
        index in 0usize..32,
    ) {
        let spec = MotionSpec::rise(30.0).delay(delay).stagger(stagger);
        prop_assert_eq!(spec.element_delay_ms(index), delay + index as u64 * stagger);
    }

    /// Scroll progress stays within [0, 100] and finite for any input
    #[test]
    fn progress_is_always_bounded(
        scroll_y in -10_000.0f64..100_000.0,
        document_height in 0.0f64..100_000.0,
        viewport_height in 0.0f64..10_000.0,
    ) {
        let progress = scroll_progress(scroll_y, document_height, viewport_height);
        prop_assert!(progress.is_finite());
        prop_assert!((0.0..=100.0).contains(&progress));
    }
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

/// The headline outcome widget: 50 endpoints with a "+" suffix
#[test]
fn fifty_plus_scenario() {
    let mut counter = CountUp::new(50);
    assert!(counter.observe_visibility(0.5));

    let mut ticks = 0;
    while !counter.is_done() {
        counter.tick();
        ticks += 1;
    }
    assert_eq!(ticks, 125);
    assert_eq!(format!("{}{}", counter.displayed(), "+"), "50+");
}

/// Three-element group, stagger 100ms, duration 500ms: element 2 spans
/// 200ms..700ms after the group fires
#[test]
fn staggered_group_scenario() {
    let spec = MotionSpec::rise(30.0).duration(500).stagger(100);
    let start = spec.element_delay_ms(2);
    assert_eq!(start, 200);
    assert_eq!(start + spec.duration_ms, 700);
}
