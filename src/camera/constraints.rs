use std::f32::consts::PI;

use crate::error::VitrineError;

/// Bounds and damping applied to user-driven orbit motion.
///
/// Construct through [`OrbitConstraints::new`], which rejects bounds that
/// violate `min_distance <= max_distance` or
/// `0 <= min_polar <= max_polar <= PI`. Immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConstraints {
    min_distance: f32,
    max_distance: f32,
    min_polar: f32,
    max_polar: f32,
    damping_factor: f32,
    damping_enabled: bool,
}

impl Default for OrbitConstraints {
    /// Unbounded distance, full polar range, damping off.
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar: 0.0,
            max_polar: PI,
            damping_factor: 0.05,
            damping_enabled: false,
        }
    }
}

impl OrbitConstraints {
    /// Validate and build a constraint set. Angles are in radians.
    pub fn new(
        min_distance: f32,
        max_distance: f32,
        min_polar: f32,
        max_polar: f32,
        damping_factor: f32,
        damping_enabled: bool,
    ) -> Result<Self, VitrineError> {
        if min_distance.is_nan() || max_distance.is_nan() {
            return Err(VitrineError::InvalidConstraints(
                "distance bounds must be numbers".into(),
            ));
        }
        if min_distance < 0.0 || min_distance > max_distance {
            return Err(VitrineError::InvalidConstraints(format!(
                "expected 0 <= min_distance ({min_distance}) <= max_distance \
                 ({max_distance})"
            )));
        }
        if !(0.0..=PI).contains(&min_polar)
            || !(0.0..=PI).contains(&max_polar)
            || min_polar > max_polar
        {
            return Err(VitrineError::InvalidConstraints(format!(
                "expected 0 <= min_polar ({min_polar}) <= max_polar \
                 ({max_polar}) <= pi"
            )));
        }
        if !(damping_factor > 0.0 && damping_factor <= 1.0) {
            return Err(VitrineError::InvalidConstraints(format!(
                "damping factor {damping_factor} outside (0, 1]"
            )));
        }
        Ok(Self {
            min_distance,
            max_distance,
            min_polar,
            max_polar,
            damping_factor,
            damping_enabled,
        })
    }

    /// Closest allowed camera-to-target distance.
    #[must_use]
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Farthest allowed camera-to-target distance.
    #[must_use]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Smallest polar angle from the up axis, in radians.
    #[must_use]
    pub fn min_polar(&self) -> f32 {
        self.min_polar
    }

    /// Largest polar angle from the up axis, in radians.
    #[must_use]
    pub fn max_polar(&self) -> f32 {
        self.max_polar
    }

    /// Fraction of pending motion applied per update when damping.
    #[must_use]
    pub fn damping_factor(&self) -> f32 {
        self.damping_factor
    }

    /// Whether orbit motion decays over several updates.
    #[must_use]
    pub fn damping_enabled(&self) -> bool {
        self.damping_enabled
    }

    /// Clamp a camera-to-target distance into bounds.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    /// Clamp a polar angle into bounds.
    #[must_use]
    pub fn clamp_polar(&self, polar: f32) -> f32 {
        polar.clamp(self.min_polar, self.max_polar)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

    use super::*;

    fn showcase() -> OrbitConstraints {
        OrbitConstraints::new(3.0, 10.0, FRAC_PI_6, FRAC_PI_2, 0.2, true)
            .unwrap()
    }

    #[test]
    fn distance_clamps_to_nearest_bound() {
        let c = showcase();
        assert_eq!(c.clamp_distance(15.0), 10.0);
        assert_eq!(c.clamp_distance(1.0), 3.0);
        assert_eq!(c.clamp_distance(5.0), 5.0);
    }

    #[test]
    fn polar_clamps_to_nearest_bound() {
        let c = showcase();
        assert_eq!(c.clamp_polar(0.0), FRAC_PI_6);
        assert_eq!(c.clamp_polar(PI), FRAC_PI_2);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(OrbitConstraints::new(10.0, 3.0, 0.0, PI, 0.1, true).is_err());
        assert!(OrbitConstraints::new(1.0, 3.0, 1.0, 0.5, 0.1, true).is_err());
        assert!(OrbitConstraints::new(1.0, 3.0, 0.0, 4.0, 0.1, true).is_err());
        assert!(OrbitConstraints::new(-1.0, 3.0, 0.0, PI, 0.1, true).is_err());
        assert!(OrbitConstraints::new(1.0, 3.0, 0.0, PI, 0.0, true).is_err());
        assert!(
            OrbitConstraints::new(f32::NAN, 3.0, 0.0, PI, 0.1, true).is_err()
        );
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let c = OrbitConstraints::new(4.0, 4.0, 1.0, 1.0, 1.0, false).unwrap();
        assert_eq!(c.clamp_distance(100.0), 4.0);
        assert_eq!(c.clamp_polar(0.0), 1.0);
    }

    #[test]
    fn default_is_unbounded() {
        let c = OrbitConstraints::default();
        assert_eq!(c.clamp_distance(1.0e6), 1.0e6);
        assert!(!c.damping_enabled());
    }
}
