//! DOM bridge for the sketchpad
//!
//! This module owns the canvas element, translates mouse and touch events
//! into surface-local [`InputEvent`]s, and copies changed pixels from the
//! sketchpad into the canvas after every input.

use std::cell::RefCell;
use std::rc::Rc;

use drawwrite_painting::{GestureAction, InputEvent, Point, Sketchpad, SurfaceOffset};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, ImageData, MouseEvent, TouchEvent,
};

/// Id given to the created canvas element
pub const CANVAS_ID: &str = "drawwriteCanvas";

/// Form whose submission carries the drawing
pub const DEFAULT_FORM_ID: &str = "postForm";

/// Hidden field receiving the PNG data URL
pub const DEFAULT_FIELD_ID: &str = "imgDataHolder";

/// Mouse event types the canvas listens to
const MOUSE_EVENTS: [&str; 5] = ["mousedown", "mousemove", "mouseup", "mouseleave", "click"];

/// Touch event types the canvas listens to; taps also fire `click`
const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

/// Map a DOM event type and surface-local position to a sketchpad input
pub fn input_for(event_type: &str, at: Point) -> Option<InputEvent> {
    match event_type {
        "mousedown" | "touchstart" => Some(InputEvent::Press(at)),
        "mousemove" | "touchmove" => Some(InputEvent::Move(at)),
        "mouseup" | "touchend" => Some(InputEvent::Release),
        "mouseleave" | "touchcancel" => Some(InputEvent::Leave),
        "click" => Some(InputEvent::Click(at)),
        _ => None,
    }
}

/// Sketchpad plus the canvas it is shown on
pub struct CanvasView {
    pub(crate) pad: RefCell<Sketchpad>,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasView {
    /// Create the canvas inside `host`, sized to the sketchpad
    pub fn create(
        document: &Document,
        host: &HtmlElement,
        pad: Sketchpad,
    ) -> Result<Rc<Self>, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(CANVAS_ID);
        canvas.set_width(pad.width());
        canvas.set_height(pad.height());
        canvas.class_list().add_1("boxed")?;
        host.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let view = Rc::new(Self {
            pad: RefCell::new(pad),
            canvas,
            ctx,
        });
        // Show the background fill
        view.flush();
        Ok(view)
    }

    /// Surface origin in client coordinates
    fn offset(&self) -> SurfaceOffset {
        let rect = self.canvas.get_bounding_client_rect();
        SurfaceOffset::new(rect.left() as f32, rect.top() as f32)
    }

    /// Feed one input through the sketchpad and show the result
    fn dispatch(&self, input: InputEvent) -> GestureAction {
        let action = match self.pad.try_borrow_mut() {
            Ok(mut pad) => pad.handle_input(input),
            Err(_) => {
                warn!("Input {:?} dropped: sketchpad busy", input);
                return GestureAction::Ignored;
            }
        };
        self.flush();
        action
    }

    /// Copy the dirty region of the surface into the canvas
    pub fn flush(&self) {
        let Ok(mut pad) = self.pad.try_borrow_mut() else {
            return;
        };
        let Some(region) = pad.take_dirty_region() else {
            return;
        };
        let bytes = pad.region_bytes(region);
        let result = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(bytes.as_slice()),
            region.width,
            region.height,
        )
        .and_then(|data| {
            self.ctx
                .put_image_data(&data, region.x as f64, region.y as f64)
        });
        if let Err(e) = result {
            warn!("Failed to blit {:?}: {:?}", region, e);
        }
    }

    /// Attach mouse and touch listeners to the canvas
    pub fn attach_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        for event_type in MOUSE_EVENTS {
            let view = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                // Only the primary button starts a gesture
                if event_type == "mousedown" && event.button() != 0 {
                    return;
                }
                let at = view
                    .offset()
                    .to_local(event.client_x() as f32, event.client_y() as f32);
                if let Some(input) = input_for(event_type, at) {
                    if view.dispatch(input).consumes_input() {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(_)>);

            self.canvas
                .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
            // Listeners live as long as the page
            closure.forget();
        }

        for event_type in TOUCH_EVENTS {
            let view = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let at = view
                    .offset()
                    .to_local(touch.client_x() as f32, touch.client_y() as f32);
                if let Some(input) = input_for(event_type, at) {
                    // Stops horizontal swipes from navigating away mid-stroke
                    if view.dispatch(input).consumes_input() {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(_)>);

            // preventDefault only works on non-passive touch listeners
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            self.canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event_type,
                    closure.as_ref().unchecked_ref(),
                    &options,
                )?;
            closure.forget();
        }

        debug!(
            "Attached {} canvas listeners",
            MOUSE_EVENTS.len() + TOUCH_EVENTS.len()
        );
        Ok(())
    }

    /// Write the drawing into `field_id` whenever `form_id` is submitted
    ///
    /// Returns false if the form is not on this page.
    pub fn attach_submit(
        self: &Rc<Self>,
        document: &Document,
        form_id: &str,
        field_id: &str,
    ) -> Result<bool, JsValue> {
        let Some(form) = document.get_element_by_id(form_id) else {
            debug!("No #{} form on this page", form_id);
            return Ok(false);
        };

        let view = Rc::clone(self);
        let document = document.clone();
        let field_id = field_id.to_string();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let Some(field) = document
                .get_element_by_id(&field_id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                warn!("Submit: #{} input not found", field_id);
                return;
            };
            match view.data_url() {
                Ok(url) => field.set_value(&url),
                Err(e) => warn!("Submit: export failed: {:?}", e),
            }
        }) as Box<dyn FnMut(_)>);

        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(true)
    }

    /// Export the current drawing as a PNG data URL
    pub fn data_url(&self) -> Result<String, JsValue> {
        let pad = self
            .pad
            .try_borrow()
            .map_err(|_| JsValue::from_str("sketchpad busy"))?;
        pad.export_data_url()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run a closure against the sketchpad, then show any changes
    pub fn with_pad<R>(&self, f: impl FnOnce(&mut Sketchpad) -> R) -> Option<R> {
        let result = {
            let mut pad = self.pad.try_borrow_mut().ok()?;
            f(&mut pad)
        };
        self.flush();
        Some(result)
    }
}
