use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use venuefy::page::reveal::{stagger_delay, COUNTER_SELECTOR, FADE_UP_CLASS, REVEAL_SELECTOR};

use super::dom;

/// Cards start transparent and fade up, staggered, the first time they are
/// seen.
pub(super) fn init_scroll_reveal(threshold: f64, stagger_s: f64) -> Result<(), String> {
    let elements = dom::query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }

    let observer = observe_once(threshold, |el| {
        dom::set_class(&el, FADE_UP_CLASS, true);
        dom::set_style(&el, "opacity", "1");
    })?;

    for (i, el) in elements.iter().enumerate() {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "animation-delay", &stagger_delay(i, stagger_s));
        observer.observe(el);
    }
    Ok(())
}

pub(super) fn init_counters(threshold: f64) -> Result<(), String> {
    let stats = dom::query_all(COUNTER_SELECTOR);
    if stats.is_empty() {
        return Ok(());
    }

    // Stat values are gradient text; the class alone drives the animation.
    let observer = observe_once(threshold, |el| dom::set_class(&el, FADE_UP_CLASS, true))?;
    for el in &stats {
        observer.observe(el);
    }
    Ok(())
}

/// An observer that calls `on_visible` once per element, then stops watching it.
fn observe_once(
    threshold: f64,
    on_visible: impl Fn(web_sys::Element) + 'static,
) -> Result<web_sys::IntersectionObserver, String> {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let opts = web_sys::IntersectionObserverInit::new();
    opts.set_root_margin("0px");
    opts.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
            .map_err(|_| "IntersectionObserver unavailable".to_string())?;
    cb.forget();
    Ok(observer)
}
