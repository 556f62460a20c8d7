use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use sketchboard_core::FontStatus;

type Settle = Rc<RefCell<Option<Box<dyn FnOnce(FontStatus)>>>>;

fn settle(callback: &Settle, status: FontStatus) {
    let callback = callback.borrow_mut().take();
    if let Some(callback) = callback {
        callback(status);
    }
}

fn font_load_promise(document: &Document, family: &str) -> Option<Promise> {
    Some(document.fonts().load(&format!("16px {family}")))
}

/// Load `family` through `document.fonts` and call `on_settled` exactly once.
/// Anything short of a matched face settles as `Fallback`.
pub fn load_font(
    document: &Document,
    family: &str,
    on_settled: impl FnOnce(FontStatus) + 'static,
) {
    let callback: Settle = Rc::new(RefCell::new(Some(Box::new(on_settled))));
    let Some(promise) = font_load_promise(document, family) else {
        log::warn!("document.fonts is unavailable");
        settle(&callback, FontStatus::Fallback);
        return;
    };

    let ok_callback = callback.clone();
    let family_ok = family.to_string();
    let on_ok = Closure::<dyn FnMut(JsValue)>::new(move |faces: JsValue| {
        let count = faces
            .dyn_ref::<Array>()
            .map(|faces| faces.length())
            .unwrap_or(0);
        log::debug!("font {family_ok} matched {count} face(s)");
        let status = if count > 0 {
            FontStatus::Loaded
        } else {
            FontStatus::Fallback
        };
        settle(&ok_callback, status);
    });

    let err_callback = callback;
    let family_err = family.to_string();
    let on_err = Closure::<dyn FnMut(JsValue)>::new(move |error: JsValue| {
        log::warn!("font {family_err} failed to load: {error:?}");
        settle(&err_callback, FontStatus::Fallback);
    });

    let _ = promise.then2(&on_ok, &on_err);
    on_ok.forget();
    on_err.forget();
}
