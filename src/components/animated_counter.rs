//! Count-up statistic widget.
//!
//! Renders an integer that counts from 0 to its target the first time at
//! least half the widget is visible, then holds. The counting logic is the
//! [`CountUp`] state machine; this component wires it to the webview's
//! IntersectionObserver and a 16ms tick loop.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document;
use dioxus::prelude::*;
use zidiodeck_motion::{CountUp, TICK_INTERVAL_MS, VISIBILITY_THRESHOLD};

static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(0);

/// Observer probe: reports the widget's intersection ratio, and disconnects
/// itself once the start threshold has been delivered.
fn visibility_probe(element_id: &str, threshold: f64) -> String {
    format!(
        r#"
        (function() {{
            let tries = 0;
            const attach = () => {{
                const el = document.getElementById('{element_id}');
                if (!el) {{
                    if (tries++ < 120) requestAnimationFrame(attach);
                    return;
                }}
                const observer = new IntersectionObserver((entries) => {{
                    for (const entry of entries) {{
                        dioxus.send(entry.intersectionRatio);
                        if (entry.intersectionRatio >= {threshold}) {{
                            observer.disconnect();
                        }}
                    }}
                }}, {{ threshold: [0, {threshold}] }});
                observer.observe(el);
            }};
            attach();
        }})();
        "#
    )
}

/// Animated integer statistic.
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedCounterProps {
    /// Value counted up to
    pub target: u32,
    /// Caption under the number
    pub label: String,
    /// Appended to the displayed number (e.g. "+", "%")
    #[props(default)]
    pub suffix: String,
}

#[component]
pub fn AnimatedCounter(props: AnimatedCounterProps) -> Element {
    let mut count = use_signal(|| 0u32);
    let widget_id = use_hook(|| {
        format!("count-up-{}", NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    });

    let target = props.target;
    let element_id = widget_id.clone();
    use_effect(move || {
        let element_id = element_id.clone();
        spawn(async move {
            let mut counter = CountUp::new(target);
            let mut probe = document::eval(&visibility_probe(&element_id, VISIBILITY_THRESHOLD));

            while let Ok(ratio) = probe.recv::<f64>().await {
                if counter.observe_visibility(ratio) {
                    loop {
                        tokio::time::sleep(std::time::Duration::from_millis(TICK_INTERVAL_MS))
                            .await;
                        count.set(counter.tick());
                        if counter.is_done() {
                            break;
                        }
                    }
                    break;
                }
            }
        });
    });

    rsx! {
        div { id: "{widget_id}", class: "count-up",
            div { class: "count-up-value", "{count}{props.suffix}" }
            p { class: "count-up-label", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_formats_with_suffix() {
        assert_eq!(format!("{}{}", 50, "+"), "50+");
        assert_eq!(format!("{}{}", 100, "%"), "100%");
        assert_eq!(format!("{}{}", 0, ""), "0");
    }

    #[test]
    fn widget_ids_are_unique() {
        let a = format!("count-up-{}", NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed));
        let b = format!("count-up-{}", NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed));
        assert_ne!(a, b);
    }

    #[test]
    fn probe_embeds_element_and_threshold() {
        let probe = visibility_probe("count-up-3", 0.5);
        assert!(probe.contains("getElementById('count-up-3')"));
        assert!(probe.contains("entry.intersectionRatio >= 0.5"));
    }
}
