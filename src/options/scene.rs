use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::InteractiveAction;

/// What the scene contains: the model asset and the clickable cube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Path (or URL) of the glTF model asset.
    #[schemars(skip)]
    pub asset_path: String,
    /// Text shown on the cube.
    #[schemars(title = "Cube Label")]
    pub cube_label: String,
    /// Cube edge length.
    #[schemars(title = "Cube Size", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub cube_size: f32,
    /// Cube centre in world space.
    #[schemars(skip)]
    pub cube_position: [f32; 3],
    /// Link opened when the cube is clicked.
    #[schemars(title = "Link")]
    pub link_url: String,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            asset_path: "/assets/scene.gltf".into(),
            cube_label: "Visit".into(),
            cube_size: 1.0,
            cube_position: [1.5, 0.5, 0.0],
            link_url: "https://example.com/".into(),
        }
    }
}

impl SceneOptions {
    /// Cube centre as a vector.
    #[must_use]
    pub fn cube_position(&self) -> Vec3 {
        Vec3::from(self.cube_position)
    }

    /// Action bound to the cube.
    #[must_use]
    pub fn cube_action(&self) -> InteractiveAction {
        InteractiveAction::OpenUrl(self.link_url.clone())
    }
}
