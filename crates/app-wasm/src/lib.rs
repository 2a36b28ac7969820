//! DrawWrite sketchpad WASM build
//!
//! This crate mounts the sketchpad into a host element on the drawing page.
//! Pointer input is handled in Rust; the page's palette, pen slider, tool
//! toggle and undo button call into [`DrawWriteApp`].

use std::fmt::Display;
use std::rc::Rc;

use drawwrite_config::SketchpadConfig;
use drawwrite_painting::{PaletteColor, Sketchpad, Tool};
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod bridge;

pub use bridge::{input_for, CANVAS_ID, DEFAULT_FIELD_ID, DEFAULT_FORM_ID};

fn to_js(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&to_js(e));
        }
    }
}

/// Mount the sketchpad in `host_id`
///
/// Returns `None` when the page has no such element, so the script can be
/// loaded on every page of the game. `config_json` overrides
/// [`SketchpadConfig`] fields; the width follows the host element.
#[wasm_bindgen]
pub fn init(host_id: &str, config_json: Option<String>) -> Result<Option<DrawWriteApp>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(host) = document.get_element_by_id(host_id) else {
        info!("No #{} element, sketchpad not mounted", host_id);
        return Ok(None);
    };
    let host: HtmlElement = host.dyn_into()?;

    let mut config = match config_json {
        Some(json) => SketchpadConfig::from_json(&json).map_err(to_js)?,
        None => SketchpadConfig::default(),
    };
    let host_width = host.client_width();
    if host_width > 0 {
        config = config.with_width(host_width as u32);
    }

    let pad = Sketchpad::new(&config).map_err(to_js)?;
    let view = bridge::CanvasView::create(&document, &host, pad)?;
    view.attach_listeners()?;
    view.attach_submit(&document, DEFAULT_FORM_ID, DEFAULT_FIELD_ID)?;

    info!(
        "Sketchpad mounted in #{} ({}x{})",
        host_id, config.width, config.height
    );
    Ok(Some(DrawWriteApp { view }))
}

/// Names of the palette colors in display order
#[wasm_bindgen]
pub fn palette_names() -> Vec<String> {
    PaletteColor::ALL
        .iter()
        .map(|color| color.name().to_string())
        .collect()
}

/// CSS hex for a palette color, used to paint the swatches
#[wasm_bindgen]
pub fn swatch_hex(name: &str) -> Option<String> {
    PaletteColor::from_name(name).ok().map(PaletteColor::hex)
}

/// Handle for the page's controls
#[wasm_bindgen]
pub struct DrawWriteApp {
    view: Rc<bridge::CanvasView>,
}

#[wasm_bindgen]
impl DrawWriteApp {
    /// Select a palette color by name
    pub fn set_color(&self, name: &str) -> Result<(), JsValue> {
        self.view
            .with_pad(|pad| pad.set_color_named(name))
            .ok_or_else(|| JsValue::from_str("sketchpad busy"))?
            .map_err(to_js)
    }

    /// Set the pen width and return the new label, e.g. `"3 px"`
    pub fn set_pen_width(&self, width: u32) -> Result<String, JsValue> {
        self.view
            .with_pad(|pad| pad.set_pen_width(width).map(|()| pad.pen_width_label()))
            .ok_or_else(|| JsValue::from_str("sketchpad busy"))?
            .map_err(to_js)
    }

    pub fn pen_width_label(&self) -> String {
        self.view
            .with_pad(|pad| pad.pen_width_label())
            .unwrap_or_default()
    }

    /// Switch between draw and hand; returns true when draw is active
    pub fn toggle_tool(&self) -> bool {
        self.view.with_pad(|pad| pad.toggle_tool()) == Some(Tool::Draw)
    }

    pub fn is_draw_tool(&self) -> bool {
        self.view.with_pad(|pad| pad.tool()) == Some(Tool::Draw)
    }

    /// Undo the last draw event; returns false if nothing changed
    pub fn undo(&self) -> bool {
        self.view.with_pad(|pad| pad.undo()).unwrap_or(false)
    }

    pub fn can_undo(&self) -> bool {
        self.view.with_pad(|pad| pad.can_undo()).unwrap_or(false)
    }

    /// Number of draw events in the log
    pub fn event_count(&self) -> usize {
        self.view
            .with_pad(|pad| pad.history().event_count())
            .unwrap_or(0)
    }

    /// PNG data URL of the current drawing
    pub fn to_data_url(&self) -> Result<String, JsValue> {
        self.view.data_url()
    }

    /// Write the drawing into `field_id` when `form_id` is submitted
    pub fn attach_submit(&self, form_id: &str, field_id: &str) -> Result<bool, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        self.view.attach_submit(&document, form_id, field_id)
    }
}
