//! Scene asset completion for [`SceneEngine`].

use std::path::Path;

use super::{LoadState, RenderSurface, SceneEngine};
use crate::error::VitrineError;
use crate::scene::SceneAsset;

impl<S: RenderSurface> SceneEngine<S> {
    /// Complete the one-shot asset load.
    ///
    /// On success the asset is instantiated into the scene and the render
    /// loop starts with the next tick. On failure the engine enters
    /// [`LoadState::Failed`] and the surface is asked once to show the
    /// error. Only the first completion counts; later ones are logged and
    /// ignored.
    pub fn on_asset_loaded(&mut self, result: Result<SceneAsset, VitrineError>) {
        if self.load_state != LoadState::Pending {
            log::warn!(
                "ignoring repeated asset completion (state {:?})",
                self.load_state
            );
            return;
        }
        if !self.alive {
            return;
        }

        match result.and_then(|asset| asset.instantiate(&mut self.scene)) {
            Ok(root) => {
                log::info!(
                    "scene asset loaded: {} nodes in scene",
                    self.scene.len()
                );
                self.model = Some(root);
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("scene asset failed to load: {message}");
                self.surface
                    .show_error(&format!("Could not load the scene: {message}"));
                self.load_state = LoadState::Failed(message);
            }
        }
    }

    /// Load the asset from a local file and complete with the result.
    pub fn load_asset_file(&mut self, path: &Path) {
        log::info!("loading scene asset from {}", path.display());
        self.on_asset_loaded(SceneAsset::load(path));
    }
}
