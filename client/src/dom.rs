use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlCanvasElement, HtmlElement, Window};

use sketchboard_core::geometry::canvas_point;
use sketchboard_core::{BoardConfig, Download, Point};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Like `get_element`, for controls a page may leave out.
pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn set_status(status_el: &Element, state: &str, text: &str) {
    let _ = status_el.set_attribute("data-state", state);
    status_el.set_text_content(Some(text));
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn event_to_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Option<Point> {
    let rect = canvas.get_bounding_client_rect();
    canvas_point(client_x as f64, client_y as f64, rect.left(), rect.top())
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

/// Board configuration from the canvas' `data-config` attribute.
pub fn read_config(canvas: &HtmlCanvasElement) -> BoardConfig {
    let Some(text) = canvas.get_attribute("data-config") else {
        return BoardConfig::default();
    };
    BoardConfig::from_json(&text).unwrap_or_else(|error| {
        log::warn!("{error}, using defaults");
        BoardConfig::default()
    })
}

pub fn trigger_download(document: &Document, download: &Download) -> Result<(), JsValue> {
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("Invalid anchor element"))?;
    anchor.set_href(&download.href);
    anchor.set_download(download.filename);
    anchor.click();
    Ok(())
}
