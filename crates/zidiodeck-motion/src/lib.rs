//! ZidioDeck Motion Engine
//!
//! Scroll-synchronized reveal scheduling and count-up animation for the
//! ZidioDeck presentation. The deck page is static content; everything with
//! runtime behavior lives here, free of any UI dependency:
//!
//! - **Reveal scheduling**: a declarative table of one-shot element-group
//!   reveals, some fired on mount and some armed behind scroll-position
//!   triggers. See [`RevealScheduler`].
//! - **Count-up**: per-widget `Idle -> Counting -> Done` state machine that
//!   animates an integer from 0 to its target the first time the widget is
//!   sufficiently visible. See [`CountUp`].
//! - **Scroll progress**: the clamped percentage of the page scrolled,
//!   driving the indicator bar. See [`scroll_progress`].
//! - **Ambient particles**: random scatter parameters for the decorative
//!   hero particle field. See [`ambient::scatter`].
//!
//! The engine never touches the DOM. The host feeds it [`ScrollFrame`]
//! samples and visibility ratios; it answers with which groups fire and what
//! value to display, and produces the CSS fragments the widgets render with.

pub mod ambient;
pub mod counter;
pub mod easing;
pub mod progress;
pub mod reveal;

// Re-exports
pub use ambient::{scatter, Particle, PARTICLE_COUNT};
pub use counter::{CountUp, CountUpPhase, COUNT_DURATION_MS, TICK_INTERVAL_MS, VISIBILITY_THRESHOLD};
pub use easing::Easing;
pub use progress::scroll_progress;
pub use reveal::{MotionSpec, RevealEntry, RevealScheduler, ScrollFrame, ViewportTrigger};
