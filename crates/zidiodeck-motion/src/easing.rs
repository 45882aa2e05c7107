//! Easing curves for reveal animations.
//!
//! Easing controls the rate of change over an animation's lifetime. The deck
//! uses a small fixed set of curves; each knows how to evaluate itself for
//! logic-side interpolation and how to render itself as a CSS timing function
//! for the webview, which performs the actual compositing.
//!
//! ## Curves
//!
//! - [`Easing::Linear`] - constant speed
//! - [`Easing::PowerOut2`] / [`Easing::PowerOut3`] - fast start, decelerating
//! - [`Easing::BackOut`] - decelerating with a slight overshoot past the end
//! - [`Easing::SineInOut`] - gentle start and end, used by the particle drift

/// Animation timing curve.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed (no easing)
    Linear,
    /// Quadratic deceleration
    #[default]
    PowerOut2,
    /// Cubic deceleration, snappier start
    PowerOut3,
    /// Deceleration overshooting the target before settling
    BackOut,
    /// Sinusoidal ease on both ends
    SineInOut,
}

/// Overshoot factor for [`Easing::BackOut`].
const BACK_OVERSHOOT: f64 = 1.7;

impl Easing {
    /// Evaluate the curve at time `t` in `[0, 1]`.
    ///
    /// The result may exceed `[0, 1]` for overshooting curves.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut2 => 1.0 - (1.0 - t).powi(2),
            Easing::PowerOut3 => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut => {
                let u = t - 1.0;
                1.0 + u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT)
            }
            Easing::SineInOut => 0.5 - 0.5 * (std::f64::consts::PI * t).cos(),
        }
    }

    /// CSS `transition-timing-function` value for this curve.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::PowerOut2 => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::PowerOut3 => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
            Easing::SineInOut => "cubic-bezier(0.445, 0.05, 0.55, 0.95)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_converge() {
        for easing in [
            Easing::Linear,
            Easing::PowerOut2,
            Easing::PowerOut3,
            Easing::BackOut,
            Easing::SineInOut,
        ] {
            assert!(easing.evaluate(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.evaluate(0.5), 0.5);
    }

    #[test]
    fn power_out_decelerates() {
        // Ease-out curves cover more than half the distance by the midpoint
        assert!(Easing::PowerOut2.evaluate(0.5) > 0.5);
        assert!(Easing::PowerOut3.evaluate(0.5) > Easing::PowerOut2.evaluate(0.5));
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut.evaluate(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::PowerOut2.evaluate(-1.0), 0.0);
        assert_eq!(Easing::PowerOut2.evaluate(2.0), 1.0);
    }
}
