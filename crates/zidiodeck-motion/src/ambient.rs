//! Ambient particle field behind the hero section.
//!
//! Purely cosmetic: a fixed set of particles drifts continuously from mount
//! to unmount, outside the trigger system. Each particle gets a random
//! position, a random horizontal drift, and a random cycle duration within
//! fixed ranges; delays ramp by index so the field never pulses in unison.

use rand::Rng;

/// Number of particles in the hero field.
pub const PARTICLE_COUNT: usize = 20;

/// Upward drift of one cycle, px.
pub const RISE_PX: f64 = 30.0;

/// Horizontal drift bounds, px.
pub const DRIFT_X_MAX: f64 = 20.0;

/// Cycle duration bounds, seconds.
pub const DURATION_RANGE_S: (f64, f64) = (2.0, 4.0);

/// Per-index delay ramp, seconds.
pub const DELAY_STEP_S: f64 = 0.1;

/// One ambient particle's placement and drift parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of container width
    pub left_pct: f64,
    /// Vertical position, percent of container height
    pub top_pct: f64,
    /// Horizontal drift per cycle, px
    pub drift_x: f64,
    /// Cycle duration, seconds
    pub duration_s: f64,
    /// Start delay, seconds
    pub delay_s: f64,
}

impl Particle {
    /// Inline style placing the particle and parameterizing its drift
    /// animation (the keyframes live in the global stylesheet).
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.2}px; --rise: -{}px; \
             animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.drift_x, RISE_PX, self.duration_s, self.delay_s
        )
    }
}

/// Scatter `count` particles with the given randomness source.
pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            drift_x: rng.random_range(-DRIFT_X_MAX..=DRIFT_X_MAX),
            duration_s: rng.random_range(DURATION_RANGE_S.0..=DURATION_RANGE_S.1),
            delay_s: i as f64 * DELAY_STEP_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn scatter_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for particle in scatter(PARTICLE_COUNT, &mut rng) {
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!(particle.drift_x.abs() <= DRIFT_X_MAX);
            assert!(particle.duration_s >= DURATION_RANGE_S.0);
            assert!(particle.duration_s <= DURATION_RANGE_S.1);
        }
    }

    #[test]
    fn delays_ramp_by_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter(5, &mut rng);
        for (i, particle) in particles.iter().enumerate() {
            assert!((particle.delay_s - i as f64 * DELAY_STEP_S).abs() < 1e-12);
        }
    }

    #[test]
    fn style_carries_animation_parameters() {
        let particle = Particle {
            left_pct: 12.5,
            top_pct: 80.0,
            drift_x: -14.0,
            duration_s: 3.25,
            delay_s: 0.4,
        };
        let style = particle.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("--drift-x: -14.00px"));
        assert!(style.contains("animation-duration: 3.25s"));
        assert!(style.contains("animation-delay: 0.40s"));
    }
}
