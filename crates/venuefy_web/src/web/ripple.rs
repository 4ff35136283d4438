use std::time::Duration;

use wasm_bindgen::JsCast;

use venuefy::page::ripple::{Ripple, RIPPLE_KEYFRAMES, RIPPLE_SELECTOR};

use super::dom;

pub(super) fn init_ripple(lifetime_ms: u32) -> Result<(), String> {
    inject_keyframes()?;
    for button in dom::query_all(RIPPLE_SELECTOR) {
        let target = button.clone();
        dom::listen(&button, "click", move |ev| {
            let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            if let Err(e) = spawn_ripple(&target, ev, lifetime_ms) {
                dom::warn(&e);
            }
        })?;
    }
    Ok(())
}

fn inject_keyframes() -> Result<(), String> {
    let doc = dom::document()?;
    let style = doc
        .create_element("style")
        .map_err(|_| "ripple: create_element(style) failed".to_string())?;
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = doc.head().ok_or("ripple: no <head>")?;
    head.append_child(&style)
        .map_err(|_| "ripple: append keyframes failed".to_string())?;
    Ok(())
}

fn spawn_ripple(
    button: &web_sys::Element,
    ev: &web_sys::MouseEvent,
    lifetime_ms: u32,
) -> Result<(), String> {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        rect.left(),
        rect.top(),
    );

    let span = dom::document()?
        .create_element("span")
        .map_err(|_| "ripple: create_element(span) failed".to_string())?;
    span.set_attribute("style", &ripple.css_text(lifetime_ms))
        .map_err(|_| "ripple: set style failed".to_string())?;

    dom::set_style(button, "position", "relative");
    dom::set_style(button, "overflow", "hidden");
    button
        .append_child(&span)
        .map_err(|_| "ripple: append failed".to_string())?;

    dom::set_timeout(Duration::from_millis(u64::from(lifetime_ms)), move || {
        span.remove()
    })?;
    Ok(())
}
