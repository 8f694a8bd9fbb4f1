use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::NodeRef;

use crate::events::{EventSource, Subscription};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64, DomError> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}

/// Viewport-relative top edge of a mounted node.
pub fn element_top(node: &NodeRef) -> Option<f64> {
    node.cast::<Element>().map(|el| el.get_bounding_client_rect().top())
}

/// Natural content height of a mounted node, ignoring any max-height clamp.
pub fn scroll_height(node: &NodeRef) -> Option<u32> {
    node.cast::<Element>().map(|el| el.scroll_height().max(0) as u32)
}

pub fn query(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

pub fn offset_top(selector: &str) -> Result<f64, DomError> {
    let element = query(selector)?;
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::MissingElement(selector.to_string()))?;
    Ok(f64::from(element.offset_top()))
}

/// Text of the element matching `selector`, `None` when there is no such element.
pub fn element_text(selector: &str) -> Result<Option<String>, DomError> {
    Ok(document()?
        .query_selector(selector)?
        .and_then(|el| el.text_content()))
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Listeners on the browser window.
pub struct WindowEvents;

impl EventSource for WindowEvents {
    fn subscribe(&self, event: &'static str, handler: Box<dyn FnMut()>) -> Result<Subscription, DomError> {
        let target: EventTarget = window()?.into();
        let callback = Closure::wrap(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Subscription::new(event, move || {
            if let Err(e) = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                log::debug!("Failed to unsubscribe from {}: {:?}", event, e);
            }
        }))
    }
}
