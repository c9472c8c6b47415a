//! Yew single-page application for the Pearl ITP research platform.

pub mod geometry;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod styles;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::app::{App, AppProps};
    use pearl_core::PearlConfig;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Window};

    /// Render the application into the element matched by `selector`.
    /// `config` is an optional partial `PearlConfig` object.
    #[wasm_bindgen]
    pub fn mount_app(selector: &str, config: JsValue) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Document is not available"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let config: PearlConfig = if config.is_undefined() || config.is_null() {
            PearlConfig::default()
        } else {
            from_value(config)?
        };

        yew::Renderer::<App>::with_root_and_props(target, AppProps { config }).render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_app;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_app(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "pearl-ui only supports the wasm32 target",
    ))
}
