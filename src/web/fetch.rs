//! One-shot scene asset download.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, Response};

use crate::error::VitrineError;
use crate::scene::SceneAsset;

fn js_error(context: &str, err: &JsValue) -> VitrineError {
    VitrineError::AssetLoad(format!("{context}: {err:?}"))
}

/// GET `url` and decode the body as a glTF scene asset.
pub(crate) async fn fetch_asset(url: &str) -> Result<SceneAsset, VitrineError> {
    let window = web_sys::window()
        .ok_or_else(|| VitrineError::AssetLoad("no global window".into()))?;
    let init = RequestInit::new();
    init.set_method("GET");

    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| js_error("fetch failed", &e))?
        .dyn_into::<Response>()
        .map_err(|e| js_error("unexpected fetch result", &e))?;
    if !response.ok() {
        return Err(VitrineError::AssetLoad(format!(
            "HTTP {} fetching {url}",
            response.status()
        )));
    }

    let body = response
        .array_buffer()
        .map_err(|e| js_error("body unreadable", &e))?;
    let buffer = JsFuture::from(body)
        .await
        .map_err(|e| js_error("body unreadable", &e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("fetched {} bytes from {url}", bytes.len());
    SceneAsset::from_slice(&bytes)
}
