//! Ambient particle field.
//!
//! Scatters a fixed number of drifting particles at mount. The scatter
//! parameters are random per mount; the drift itself is a CSS animation
//! parameterized by the inline style of each particle, running until the
//! field unmounts.

use dioxus::prelude::*;
use zidiodeck_motion::{ambient, PARTICLE_COUNT};

#[component]
pub fn ParticleField() -> Element {
    let particles = use_hook(|| ambient::scatter(PARTICLE_COUNT, &mut rand::rng()));

    rsx! {
        for (i, particle) in particles.iter().enumerate() {
            div {
                key: "{i}",
                class: "particle",
                style: "{particle.style()}",
            }
        }
    }
}
