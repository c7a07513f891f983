use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::DomError;
use crate::model::TouchId;
use crate::state::Renderer;

/// Handle to one token element. Empty when the element could not be created;
/// every operation on an empty token is a no-op.
#[derive(Debug, Clone)]
pub struct DomToken(Option<HtmlElement>);

/// Draws each touch as an absolutely positioned `div.touch-point` inside
/// the touch area. Looks are left to the stylesheet.
pub struct DomRenderer {
    document: Document,
    area: HtmlElement,
}

impl DomRenderer {
    pub fn new(area: HtmlElement) -> Result<Self, DomError> {
        let document = area.owner_document().ok_or(DomError::NoDocument)?;
        Ok(Self { document, area })
    }

    fn build(&self, id: TouchId, x: f64, y: f64) -> Result<HtmlElement, DomError> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| DomError::js("createElement", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::MissingElement("touch-point"))?;
        element.set_class_name("touch-point");
        element.set_id(&format!("touch-{id}"));
        position(&element, x, y);
        self.area
            .append_child(&element)
            .map_err(|e| DomError::js("appendChild", e))?;
        Ok(element)
    }
}

fn position(element: &HtmlElement, x: f64, y: f64) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
}

impl Renderer for DomRenderer {
    type Token = DomToken;

    fn create_token(&mut self, id: TouchId, x: f64, y: f64) -> DomToken {
        match self.build(id, x, y) {
            Ok(element) => DomToken(Some(element)),
            Err(err) => {
                warn!(id, %err, "could not create touch token");
                DomToken(None)
            }
        }
    }

    fn move_token(&mut self, token: &DomToken, x: f64, y: f64) {
        if let Some(element) = &token.0 {
            position(element, x, y);
        }
    }

    fn set_loading(&mut self, token: &DomToken, loading: bool) {
        if let Some(element) = &token.0 {
            let _ = element.class_list().toggle_with_force("loading", loading);
        }
    }

    fn restart_animation(&mut self, token: &DomToken) {
        if let Some(element) = &token.0 {
            let style = element.style();
            let _ = style.set_property("animation", "none");
            // force a reflow so clearing the override starts the animation over
            let _ = element.offset_width();
            let _ = style.remove_property("animation");
        }
    }

    fn mark_selected(&mut self, token: &DomToken) {
        if let Some(element) = &token.0 {
            let _ = element.class_list().add_1("selected");
        }
    }

    fn destroy_token(&mut self, token: DomToken) {
        let Some(element) = token.0 else {
            return;
        };
        if let Some(parent) = element.parent_node() {
            if let Err(e) = parent.remove_child(&element) {
                warn!(err = ?e, "token already detached");
            }
        }
    }
}
