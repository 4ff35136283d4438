use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "no document".to_string())
}

pub(super) fn by_id(id: &str) -> Option<web_sys::Element> {
    document().ok()?.get_element_by_id(id)
}

/// Matching elements in document order; an invalid selector yields none.
pub(super) fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Ok(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Binds `handler` for the lifetime of the page.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), String> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("{event}: add_event_listener failed"))?;
    cb.forget();
    Ok(())
}

pub(super) fn set_timeout(after: Duration, f: impl FnOnce() + 'static) -> Result<i32, String> {
    let cb = Closure::once_into_js(f);
    let ms = after.as_millis().min(i32::MAX as u128) as i32;
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .map_err(|_| "set_timeout failed".to_string())
}

pub(super) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    if el.class_list().toggle_with_force(class, on).is_err() {
        warn(&format!("class: toggling {class:?} failed"));
    }
}

/// Sets an inline style property; an empty value removes it.
pub(super) fn set_style(el: &web_sys::Element, property: &str, value: &str) {
    let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if result.is_err() {
        warn(&format!("style: setting {property} failed"));
    }
}

pub(super) fn set_body_overflow(value: &str) {
    if let Some(body) = document().ok().and_then(|d| d.body()) {
        set_style(&body, "overflow", value);
    }
}

pub(super) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(super) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
