#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use surface::RippleSurface;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod style;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");
    Ok(())
}

/// JS handle for a ripple attached to one element.
///
/// `config` is either a CSS color string or
/// `{ color, center, disabled, policy, edgePadding }`.
#[wasm_bindgen]
pub struct RippleHandle {
    surface: Option<Rc<RippleSurface>>,
}

#[wasm_bindgen]
impl RippleHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, config: JsValue) -> Result<RippleHandle, JsValue> {
        let config = config::from_js(&config);
        let surface = RippleSurface::attach(element, config)
            .map_err(|e| JsValue::from_str(&format!("ripple attach failed: {e:#}")))?;
        Ok(Self {
            surface: Some(surface),
        })
    }

    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&self, disabled: bool) {
        if let Some(s) = &self.surface {
            s.set_disabled(disabled);
        }
    }

    /// Replace the configuration; applies from the next press.
    pub fn configure(&self, config: JsValue) {
        if let Some(s) = &self.surface {
            s.reconfigure(config::from_js(&config));
        }
    }

    /// Lifecycle state name, or "detached".
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match &self.surface {
            Some(s) if s.is_attached() => s.state().as_str().to_string(),
            _ => "detached".to_string(),
        }
    }

    pub fn detach(&mut self) {
        if let Some(s) = self.surface.take() {
            s.detach();
        }
    }
}

impl Drop for RippleHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
