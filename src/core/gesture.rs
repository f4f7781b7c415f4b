use crate::models::Decision;

/// Transient per-interaction drag state: displacement accumulated since the
/// gesture started. Reset to zero at gesture end regardless of outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    pub dx: f64,
    pub dy: f64,
}

/// Tunables for gesture interpretation and the derived card presentation.
#[derive(Debug, Clone, Copy)]
pub struct DeckTuning {
    /// Logical viewport width in points; thresholds scale with it.
    pub viewport_width: f64,
    /// Fraction of the viewport width a card must travel to register a
    /// decision on release.
    pub swipe_threshold_fraction: f64,
    /// Rotation at half the viewport width of displacement; clamp ceiling.
    pub max_rotation_deg: f64,
    /// How many cards the presentation layer stacks (top card included).
    pub stack_depth: usize,
}

impl DeckTuning {
    /// Decision threshold in points.
    pub fn threshold_px(&self) -> f64 {
        self.viewport_width * self.swipe_threshold_fraction
    }
}

impl Default for DeckTuning {
    fn default() -> Self {
        Self {
            viewport_width: 375.0,
            swipe_threshold_fraction: 0.3,
            max_rotation_deg: 15.0,
            stack_depth: 2,
        }
    }
}

/// Decision rule: past the threshold the sign of `dx` picks the decision;
/// within it there is none. Release velocity never participates.
#[inline]
pub fn decide(dx: f64, threshold_px: f64) -> Option<Decision> {
    if dx.abs() > threshold_px {
        if dx > 0.0 {
            Some(Decision::Accept)
        } else {
            Some(Decision::Reject)
        }
    } else {
        None
    }
}

/// Card rotation in degrees: linear in `dx` over half the viewport width,
/// clamped to `±max_rotation_deg`.
#[inline]
pub fn rotation_deg(dx: f64, tuning: &DeckTuning) -> f64 {
    let half_width = tuning.viewport_width / 2.0;
    let raw = dx / half_width * tuning.max_rotation_deg;
    raw.clamp(-tuning.max_rotation_deg, tuning.max_rotation_deg)
}

/// "Accept" overlay opacity: 0 at rest, 1 at the decision threshold.
#[inline]
pub fn accept_opacity(dx: f64, threshold_px: f64) -> f64 {
    (dx / threshold_px).clamp(0.0, 1.0)
}

/// "Reject" overlay opacity: the mirror of [`accept_opacity`] for
/// negative displacement.
#[inline]
pub fn reject_opacity(dx: f64, threshold_px: f64) -> f64 {
    (-dx / threshold_px).clamp(0.0, 1.0)
}

/// Derived presentation values for the top card, recomputed on every
/// gesture update. A pure function of displacement and tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub accept_opacity: f64,
    pub reject_opacity: f64,
}

impl CardTransform {
    pub fn for_gesture(gesture: &GestureState, tuning: &DeckTuning) -> Self {
        let threshold = tuning.threshold_px();
        Self {
            translate_x: gesture.dx,
            translate_y: gesture.dy,
            rotation_deg: rotation_deg(gesture.dx, tuning),
            accept_opacity: accept_opacity(gesture.dx, threshold),
            reject_opacity: reject_opacity(gesture.dx, threshold),
        }
    }

    /// The neutral resting transform a card springs back to.
    pub fn neutral() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_deg: 0.0,
            accept_opacity: 0.0,
            reject_opacity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> DeckTuning {
        DeckTuning {
            viewport_width: 400.0,
            swipe_threshold_fraction: 0.25,
            max_rotation_deg: 15.0,
            stack_depth: 2,
        }
    }

    #[test]
    fn test_threshold_scales_with_viewport() {
        assert_eq!(tuning().threshold_px(), 100.0);
    }

    #[test]
    fn test_decide_inside_threshold_is_none() {
        assert_eq!(decide(0.0, 100.0), None);
        assert_eq!(decide(99.9, 100.0), None);
        assert_eq!(decide(-100.0, 100.0), None); // boundary is not past it
    }

    #[test]
    fn test_decide_past_threshold() {
        assert_eq!(decide(100.1, 100.0), Some(Decision::Accept));
        assert_eq!(decide(-250.0, 100.0), Some(Decision::Reject));
    }

    #[test]
    fn test_rotation_is_monotonic_and_clamped() {
        let t = tuning();
        let mut previous = rotation_deg(-600.0, &t);
        for step in -599..=600 {
            let current = rotation_deg(f64::from(step), &t);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(rotation_deg(1000.0, &t), 15.0);
        assert_eq!(rotation_deg(-1000.0, &t), -15.0);
        assert_eq!(rotation_deg(0.0, &t), 0.0);
    }

    #[test]
    fn test_overlay_opacity_contract() {
        // Rises monotonically from 0 at rest to 1 at the threshold.
        assert_eq!(accept_opacity(0.0, 100.0), 0.0);
        assert_eq!(accept_opacity(50.0, 100.0), 0.5);
        assert_eq!(accept_opacity(100.0, 100.0), 1.0);
        assert_eq!(accept_opacity(400.0, 100.0), 1.0);
        // Reject mirrors for negative displacement.
        assert_eq!(reject_opacity(-50.0, 100.0), 0.5);
        assert_eq!(reject_opacity(-100.0, 100.0), 1.0);
        // Opposite side stays dark.
        assert_eq!(accept_opacity(-80.0, 100.0), 0.0);
        assert_eq!(reject_opacity(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_transform_derivation() {
        let t = tuning();
        let gesture = GestureState { dx: 50.0, dy: -10.0 };
        let transform = CardTransform::for_gesture(&gesture, &t);

        assert_eq!(transform.translate_x, 50.0);
        assert_eq!(transform.translate_y, -10.0);
        assert_eq!(transform.accept_opacity, 0.5);
        assert_eq!(transform.reject_opacity, 0.0);
        assert!(transform.rotation_deg > 0.0);
    }
}
