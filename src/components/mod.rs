//! UI components for the deck.
//!
//! Aurora/glass presentation components plus the two animated widgets
//! (count-up statistics and the scroll progress bar).

mod accent;
mod animated_counter;
mod diagrams;
mod glass_card;
mod particles;
mod progress_bar;
mod screenshot;
pub mod sections;

pub use accent::Accent;
pub use animated_counter::AnimatedCounter;
pub use diagrams::{AuthFlowDiagram, BackendFlowDiagram, DatabaseFlowDiagram, FrontendFlowDiagram};
pub use glass_card::{Feature, FeatureCard, GlassCard};
pub use particles::ParticleField;
pub use progress_bar::ScrollProgressBar;
pub use screenshot::ScreenshotPlaceholder;
