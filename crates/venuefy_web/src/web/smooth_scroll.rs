use venuefy::page::scroll::{anchor_target, scroll_destination, ANCHOR_SELECTOR};

use super::dom;

pub(super) fn init_smooth_scroll(navbar_offset_px: f64) -> Result<(), String> {
    for link in dom::query_all(ANCHOR_SELECTOR) {
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            ev.prevent_default();
            if let Err(e) = scroll_to(selector, navbar_offset_px) {
                dom::warn(&e);
            }
        })?;
    }
    Ok(())
}

fn scroll_to(selector: &str, navbar_offset_px: f64) -> Result<(), String> {
    let window = dom::window()?;
    let target = dom::document()?
        .query_selector(selector)
        .map_err(|_| format!("scroll: invalid selector {selector:?}"))?;
    let Some(target) = target else {
        return Ok(());
    };

    let page_y = window
        .page_y_offset()
        .map_err(|_| "scroll: page_y_offset() threw".to_string())?;
    let top = scroll_destination(target.get_bounding_client_rect().top(), page_y, navbar_offset_px);

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}
