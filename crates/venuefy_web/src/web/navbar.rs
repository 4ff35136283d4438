use std::cell::Cell;

use venuefy::page::navbar::NavbarAppearance;

use super::dom;
use crate::ui_model::ids;

pub(super) fn init_navbar(solid_after_px: f64, solid_background: String) -> Result<(), String> {
    let Some(navbar) = dom::by_id(ids::NAVBAR) else {
        return Ok(());
    };
    let window = dom::window()?;

    let current: Cell<Option<NavbarAppearance>> = Cell::new(None);
    let apply = {
        let window = window.clone();
        move || {
            let y = window.page_y_offset().unwrap_or(0.0);
            let next = NavbarAppearance::for_scroll(y, solid_after_px);
            if current.get() == Some(next) {
                return;
            }
            current.set(Some(next));
            dom::set_style(&navbar, "background", next.background(&solid_background));
        }
    };

    // Pages restored mid-scroll get the right background before the first event.
    apply();
    dom::listen(&window, "scroll", move |_| apply())
}
