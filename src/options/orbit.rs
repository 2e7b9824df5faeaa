use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::OrbitConstraints;
use crate::error::VitrineError;

/// Orbit bounds, damping, and input sensitivity.
///
/// Angles are stored in degrees for readable presets and converted to
/// radians by [`constraints`](Self::constraints).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
pub struct OrbitOptions {
    /// Closest zoom distance.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest zoom distance.
    #[schemars(title = "Max Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Smallest angle from straight overhead, in degrees.
    #[schemars(title = "Min Polar Angle", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub min_polar_deg: f32,
    /// Largest angle from straight overhead, in degrees.
    #[schemars(title = "Max Polar Angle", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub max_polar_deg: f32,
    /// Whether motion glides to a stop after input ends.
    #[schemars(title = "Damping")]
    pub damping_enabled: bool,
    /// Fraction of remaining motion applied per frame when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Radians of orbit per dragged pixel.
    #[schemars(skip)]
    pub rotate_speed: f32,
    /// Pan distance per pixel, relative to camera distance.
    #[schemars(skip)]
    pub pan_speed: f32,
    /// Exponential dolly rate per wheel unit.
    #[schemars(skip)]
    pub zoom_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 10.0,
            min_polar_deg: 30.0,
            max_polar_deg: 90.0,
            damping_enabled: true,
            damping_factor: 0.2,
            rotate_speed: 0.01,
            pan_speed: 0.002,
            zoom_speed: 0.1,
        }
    }
}

impl OrbitOptions {
    /// Validate into an [`OrbitConstraints`].
    pub fn constraints(&self) -> Result<OrbitConstraints, VitrineError> {
        OrbitConstraints::new(
            self.min_distance,
            self.max_distance,
            self.min_polar_deg.to_radians(),
            self.max_polar_deg.to_radians(),
            self.damping_factor,
            self.damping_enabled,
        )
    }
}
