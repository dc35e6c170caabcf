//! Browser bindings: canvas sizing, control lookup and state reflection

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use super::SurfaceSize;
use crate::controller::Controller;
use crate::settings::Settings;
use crate::sim::Field;

pub const CANVAS_ID: &str = "simulationCanvas";
pub const PRESET_SELECT_ID: &str = "presetSelect";
pub const GRAVITY_INPUT_ID: &str = "gravityInput";
pub const RESTITUTION_INPUT_ID: &str = "restitutionInput";
pub const VELOCITY_INPUT_ID: &str = "velocityInput";
pub const TEST_BUTTON_ID: &str = "testBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const LOOP_BUTTON_ID: &str = "loopBtn";
/// Optional `<script type="application/json">` holding settings overrides
pub const SETTINGS_ID: &str = "bounce-settings";

/// Look up an element by id and cast it, logging when absent or mistyped
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("Missing element #{id}");
        return None;
    };
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::warn!("Element #{id} has an unexpected type");
            None
        }
    }
}

/// Match the canvas backing store to its displayed size (high-DPI aware)
/// and return the resulting drawable size
pub fn resize_canvas_to_display_size(window: &Window, canvas: &HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    let size = SurfaceSize::for_display(rect.width(), rect.height(), window.device_pixel_ratio());
    let (width, height) = size.pixels();
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    SurfaceSize::new(width as f32, height as f32)
}

/// Settings from the page, or defaults when none are embedded
pub fn settings_from_page(document: &Document) -> Settings {
    match document
        .get_element_by_id(SETTINGS_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => Settings::from_json_or_default(&json),
        None => Settings::default(),
    }
}

/// The demo's UI controls. Any that are missing from the page are skipped.
#[derive(Clone)]
pub struct Controls {
    pub preset: Option<HtmlSelectElement>,
    pub gravity: Option<HtmlInputElement>,
    pub restitution: Option<HtmlInputElement>,
    pub velocity: Option<HtmlInputElement>,
    pub test_btn: Option<HtmlElement>,
    pub reset_btn: Option<HtmlElement>,
    pub loop_btn: Option<HtmlElement>,
}

impl Controls {
    pub fn find(document: &Document) -> Self {
        Self {
            preset: element_by_id(document, PRESET_SELECT_ID),
            gravity: element_by_id(document, GRAVITY_INPUT_ID),
            restitution: element_by_id(document, RESTITUTION_INPUT_ID),
            velocity: element_by_id(document, VELOCITY_INPUT_ID),
            test_btn: element_by_id(document, TEST_BUTTON_ID),
            reset_btn: element_by_id(document, RESET_BUTTON_ID),
            loop_btn: element_by_id(document, LOOP_BUTTON_ID),
        }
    }

    pub fn input(&self, field: Field) -> Option<&HtmlInputElement> {
        match field {
            Field::Gravity => self.gravity.as_ref(),
            Field::Restitution => self.restitution.as_ref(),
            Field::Velocity => self.velocity.as_ref(),
        }
    }

    /// Show the controller's selection, field texts and loop state
    pub fn sync(&self, controller: &Controller) {
        let store = controller.store();
        if let Some(select) = &self.preset {
            let label = store.selection().label();
            if select.value() != label {
                select.set_value(label);
            }
        }
        for field in Field::ALL {
            if let Some(input) = self.input(field) {
                let text = store.field_text(field);
                // Rewriting an unchanged value would move the caret while typing
                if input.value() != text {
                    input.set_value(text);
                }
            }
        }
        if let Some(btn) = &self.loop_btn {
            btn.set_text_content(Some(controller.loop_label()));
        }
    }
}
