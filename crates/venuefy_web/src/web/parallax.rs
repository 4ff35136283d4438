use wasm_bindgen::JsCast;

use venuefy::page::parallax::{normalized_pointer, orb_transform, ORB_SELECTOR};

use super::dom;

pub(super) fn init_parallax() -> Result<(), String> {
    let orbs = dom::query_all(ORB_SELECTOR);
    if orbs.is_empty() {
        return Ok(());
    }
    let window = dom::window()?;
    let viewport = window.clone();

    dom::listen(&window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
            return;
        };
        let width = viewport.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = viewport.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let pointer = normalized_pointer(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            width,
            height,
        );
        for (i, orb) in orbs.iter().enumerate() {
            dom::set_style(orb, "transform", &orb_transform(i, pointer));
        }
    })
}
