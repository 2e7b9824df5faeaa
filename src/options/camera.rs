use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera projection parameters and orbit target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Point the camera orbits around.
    #[schemars(skip)]
    pub target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 0.1,
            zfar: 1000.0,
            target: [0.0; 3],
        }
    }
}

impl CameraOptions {
    /// Orbit target as a vector.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::from(self.target)
    }
}
