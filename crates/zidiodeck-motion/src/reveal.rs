//! Reveal scheduling for scroll-gated section animations.
//!
//! The deck declares a table of [`RevealEntry`] rows at mount: each names an
//! element group, the transient visual state it animates away from, and an
//! optional [`ViewportTrigger`]. Entries without a trigger fire immediately;
//! triggered entries are armed and fire exactly once, the first time their
//! container crosses the trigger threshold. The scheduler owns one fired flag
//! per row, so re-entering the viewport can never replay a reveal.
//!
//! The scheduler itself never touches the DOM. It decides *which* groups fire
//! on a given [`ScrollFrame`]; the widgets render the transition by swapping
//! the group's inline style from [`MotionSpec::initial_style`] to
//! [`MotionSpec::reveal_style`].

use std::collections::HashMap;

use serde::Deserialize;

use crate::easing::Easing;

/// Motion parameters for one reveal group.
///
/// Describes the transient starting state (the resting state is always the
/// authored layout) plus duration, delay, easing, and the per-element stagger
/// interval for multi-element groups. Immutable once registered.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSpec {
    /// Horizontal offset of the starting state, px (positive = from the right)
    pub offset_x: f64,
    /// Vertical offset of the starting state, px (positive = from below)
    pub offset_y: f64,
    /// Starting opacity
    pub from_opacity: f64,
    /// Starting scale factor
    pub from_scale: f64,
    /// Starting rotation, degrees
    pub from_rotation: f64,
    /// Animation duration, ms
    pub duration_ms: u64,
    /// Delay before the group starts, ms
    pub delay_ms: u64,
    /// Per-element start offset within the group, ms
    pub stagger_ms: u64,
    /// Timing curve
    pub easing: Easing,
}

impl Default for MotionSpec {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            from_opacity: 0.0,
            from_scale: 1.0,
            from_rotation: 0.0,
            duration_ms: 500,
            delay_ms: 0,
            stagger_ms: 0,
            easing: Easing::default(),
        }
    }
}

impl MotionSpec {
    /// Fade in while rising from `px` below the resting position.
    pub fn rise(px: f64) -> Self {
        Self {
            offset_y: px,
            ..Self::default()
        }
    }

    /// Fade in while dropping from `px` above the resting position.
    pub fn drop(px: f64) -> Self {
        Self {
            offset_y: -px,
            ..Self::default()
        }
    }

    /// Fade in while sliding from `px` right of the resting position.
    pub fn slide_from_right(px: f64) -> Self {
        Self {
            offset_x: px,
            ..Self::default()
        }
    }

    /// Fade in while sliding from `px` left of the resting position.
    pub fn slide_from_left(px: f64) -> Self {
        Self {
            offset_x: -px,
            ..Self::default()
        }
    }

    /// Fade in while scaling up from `scale`.
    pub fn scale_in(scale: f64) -> Self {
        Self {
            from_scale: scale,
            ..Self::default()
        }
    }

    /// Set the duration in milliseconds.
    pub fn duration(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Set the group delay in milliseconds.
    pub fn delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the per-element stagger interval in milliseconds.
    pub fn stagger(mut self, ms: u64) -> Self {
        self.stagger_ms = ms;
        self
    }

    /// Set the starting rotation in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.from_rotation = degrees;
        self
    }

    /// Set the timing curve.
    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start offset of element `index` relative to the group's fire time, ms.
    pub fn element_delay_ms(&self, index: usize) -> u64 {
        self.delay_ms + index as u64 * self.stagger_ms
    }

    fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.offset_x != 0.0 || self.offset_y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.offset_x, self.offset_y));
        }
        if self.from_scale != 1.0 {
            parts.push(format!("scale({})", self.from_scale));
        }
        if self.from_rotation != 0.0 {
            parts.push(format!("rotate({}deg)", self.from_rotation));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Inline style for an element that has not yet been revealed.
    pub fn initial_style(&self) -> String {
        format!(
            "opacity: {}; transform: {};",
            self.from_opacity,
            self.transform()
        )
    }

    /// Inline style for element `index` once its group has fired.
    ///
    /// The transition runs from the initial state to the authored layout;
    /// element `index` starts `delay + index * stagger` after the group.
    pub fn reveal_style(&self, index: usize) -> String {
        format!(
            "opacity: 1; transform: none; \
             transition: opacity {dur}ms {curve}, transform {dur}ms {curve}; \
             transition-delay: {delay}ms;",
            dur = self.duration_ms,
            curve = self.easing.css(),
            delay = self.element_delay_ms(index),
        )
    }
}

/// Scroll-position condition arming a one-shot reveal.
///
/// Met when the named container's top edge crosses `threshold_pct` percent of
/// the viewport height (measured from the viewport top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTrigger {
    /// Name of the container whose position gates the reveal
    pub container: &'static str,
    /// Activation threshold as a percentage of viewport height
    pub threshold_pct: f64,
}

impl ViewportTrigger {
    pub fn new(container: &'static str, threshold_pct: f64) -> Self {
        Self {
            container,
            threshold_pct,
        }
    }

    /// Whether the condition holds for the given frame.
    ///
    /// A container absent from the frame never satisfies the condition; a
    /// missing target group is skipped, not an error.
    pub fn is_met(&self, frame: &ScrollFrame) -> bool {
        match frame.container_top(self.container) {
            Some(top) => top <= frame.viewport_height * self.threshold_pct / 100.0,
            None => false,
        }
    }
}

/// One row of the reveal table.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEntry {
    /// Element group this row animates
    pub group: &'static str,
    /// Motion parameters
    pub motion: MotionSpec,
    /// Scroll gate; `None` fires immediately on mount
    pub trigger: Option<ViewportTrigger>,
}

impl RevealEntry {
    /// Entry that fires on mount, in registration order.
    pub fn immediate(group: &'static str, motion: MotionSpec) -> Self {
        Self {
            group,
            motion,
            trigger: None,
        }
    }

    /// Entry armed until `container`'s top crosses `threshold_pct`% of the
    /// viewport height.
    pub fn on_scroll(
        group: &'static str,
        motion: MotionSpec,
        container: &'static str,
        threshold_pct: f64,
    ) -> Self {
        Self {
            group,
            motion,
            trigger: Some(ViewportTrigger::new(container, threshold_pct)),
        }
    }
}

/// One scroll/resize sample from the host environment.
///
/// Deserialized from the webview probe payload. `containers` maps container
/// names to the viewport-relative position of their top edge, px.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollFrame {
    /// Scrolled distance from the top of the document, px
    pub scroll_y: f64,
    /// Viewport height, px
    pub viewport_height: f64,
    /// Full document height, px
    pub document_height: f64,
    /// Viewport-relative top edge of each named container, px
    #[serde(default)]
    pub containers: HashMap<String, f64>,
}

impl ScrollFrame {
    /// Viewport-relative top of the named container, if present in the frame.
    pub fn container_top(&self, name: &str) -> Option<f64> {
        self.containers.get(name).copied()
    }
}

/// Drives the reveal table against the scroll event stream.
///
/// Constructed on mount with the full table; rows are never added or mutated
/// afterwards. Fires each row at most once, in registration order, and is
/// dropped wholesale on unmount along with the task that polls it.
pub struct RevealScheduler {
    entries: Vec<RevealEntry>,
    fired: Vec<bool>,
}

impl RevealScheduler {
    pub fn new(entries: Vec<RevealEntry>) -> Self {
        let fired = vec![false; entries.len()];
        Self { entries, fired }
    }

    /// Fire every entry without a trigger, returning their groups in
    /// registration order. Called once on mount.
    pub fn take_immediate(&mut self) -> Vec<&'static str> {
        let mut groups = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.trigger.is_none() && !self.fired[i] {
                self.fired[i] = true;
                groups.push(entry.group);
            }
        }
        groups
    }

    /// Evaluate all armed triggers against one frame.
    ///
    /// Returns the groups that fire on this frame, in registration order.
    /// A row that has already fired is never returned again, no matter how
    /// many later frames satisfy its trigger.
    pub fn on_frame(&mut self, frame: &ScrollFrame) -> Vec<&'static str> {
        let mut groups = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if self.fired[i] {
                continue;
            }
            let Some(trigger) = &entry.trigger else {
                continue;
            };
            if trigger.is_met(frame) {
                self.fired[i] = true;
                tracing::debug!(group = entry.group, "reveal fired");
                groups.push(entry.group);
            }
        }
        groups
    }

    /// Look up the table row for a group.
    pub fn entry(&self, group: &str) -> Option<&RevealEntry> {
        self.entries.iter().find(|e| e.group == group)
    }

    /// Whether the named group has fired.
    pub fn is_fired(&self, group: &str) -> bool {
        self.entries
            .iter()
            .position(|e| e.group == group)
            .map(|i| self.fired[i])
            .unwrap_or(false)
    }

    /// Number of armed rows still waiting on their trigger.
    pub fn pending(&self) -> usize {
        self.fired.iter().filter(|f| !**f).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(container: &str, top: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y: 0.0,
            viewport_height: 800.0,
            document_height: 4000.0,
            containers: HashMap::from([(container.to_string(), top)]),
        }
    }

    #[test]
    fn immediate_entries_fire_once_in_order() {
        let mut scheduler = RevealScheduler::new(vec![
            RevealEntry::immediate("hero-title", MotionSpec::rise(50.0)),
            RevealEntry::immediate("hero-subtitle", MotionSpec::rise(30.0).delay(150)),
            RevealEntry::on_scroll("cards", MotionSpec::rise(30.0), "problem", 90.0),
        ]);

        assert_eq!(scheduler.take_immediate(), vec!["hero-title", "hero-subtitle"]);
        assert!(scheduler.take_immediate().is_empty());
        assert!(scheduler.is_fired("hero-title"));
        assert!(!scheduler.is_fired("cards"));
    }

    #[test]
    fn trigger_fires_when_threshold_crossed() {
        let mut scheduler = RevealScheduler::new(vec![RevealEntry::on_scroll(
            "cards",
            MotionSpec::rise(30.0),
            "problem",
            90.0,
        )]);

        // Container top at 90% of an 800px viewport is 720px
        assert!(scheduler.on_frame(&frame_with("problem", 750.0)).is_empty());
        assert_eq!(scheduler.on_frame(&frame_with("problem", 700.0)), vec!["cards"]);
    }

    #[test]
    fn trigger_never_refires() {
        let mut scheduler = RevealScheduler::new(vec![RevealEntry::on_scroll(
            "cards",
            MotionSpec::rise(30.0),
            "problem",
            90.0,
        )]);

        assert_eq!(scheduler.on_frame(&frame_with("problem", 100.0)), vec!["cards"]);
        // Scroll away and back: the condition re-evaluates true, the row stays fired
        assert!(scheduler.on_frame(&frame_with("problem", 900.0)).is_empty());
        assert!(scheduler.on_frame(&frame_with("problem", 100.0)).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn same_frame_firings_preserve_registration_order() {
        let mut scheduler = RevealScheduler::new(vec![
            RevealEntry::on_scroll("first", MotionSpec::rise(30.0), "a", 90.0),
            RevealEntry::on_scroll("second", MotionSpec::rise(30.0), "b", 90.0),
        ]);

        let frame = ScrollFrame {
            scroll_y: 0.0,
            viewport_height: 800.0,
            document_height: 4000.0,
            containers: HashMap::from([("a".to_string(), 0.0), ("b".to_string(), 0.0)]),
        };
        assert_eq!(scheduler.on_frame(&frame), vec!["first", "second"]);
    }

    #[test]
    fn missing_container_is_skipped() {
        let mut scheduler = RevealScheduler::new(vec![RevealEntry::on_scroll(
            "cards",
            MotionSpec::rise(30.0),
            "absent",
            90.0,
        )]);

        assert!(scheduler.on_frame(&frame_with("problem", 0.0)).is_empty());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn element_delays_are_index_ascending() {
        let spec = MotionSpec::rise(30.0).stagger(100);
        assert_eq!(spec.element_delay_ms(0), 0);
        assert_eq!(spec.element_delay_ms(1), 100);
        assert_eq!(spec.element_delay_ms(2), 200);

        let delayed = MotionSpec::rise(30.0).delay(250).stagger(150);
        assert_eq!(delayed.element_delay_ms(2), 550);
    }

    #[test]
    fn initial_style_encodes_starting_state() {
        let style = MotionSpec::rise(30.0).initial_style();
        assert_eq!(style, "opacity: 0; transform: translate(0px, 30px);");

        let spin = MotionSpec::scale_in(0.0).rotation(360.0).initial_style();
        assert!(spin.contains("scale(0)"));
        assert!(spin.contains("rotate(360deg)"));

        // Neutral transform collapses to none
        let fade = MotionSpec::default().initial_style();
        assert_eq!(fade, "opacity: 0; transform: none;");
    }

    #[test]
    fn reveal_style_carries_duration_and_stagger() {
        let spec = MotionSpec::rise(40.0).duration(500).stagger(100);
        let style = spec.reveal_style(2);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("transform: none"));
        assert!(style.contains("500ms"));
        assert!(style.contains("transition-delay: 200ms"));
    }

    #[test]
    fn scroll_frame_deserializes_probe_payload() {
        let frame: ScrollFrame = serde_json::from_str(
            r#"{"scrollY": 120.5, "viewportHeight": 800, "documentHeight": 5000,
                "containers": {"problem": 640.0}}"#,
        )
        .unwrap();
        assert_eq!(frame.scroll_y, 120.5);
        assert_eq!(frame.container_top("problem"), Some(640.0));
        assert_eq!(frame.container_top("absent"), None);
    }
}
