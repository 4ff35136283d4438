use std::cell::Cell;
use std::rc::Rc;

use venuefy::page::menu::MenuState;
use venuefy::page::HIDDEN_CLASS;

use super::dom;
use crate::ui_model::{classes, ids};

struct MobileMenu {
    state: Cell<MenuState>,
    button: web_sys::Element,
    menu: web_sys::Element,
    menu_icon: Option<web_sys::Element>,
    close_icon: Option<web_sys::Element>,
}

impl MobileMenu {
    fn set(&self, state: MenuState) {
        self.state.set(state);
        self.render();
    }

    fn render(&self) {
        let state = self.state.get();
        let p = state.projection();
        dom::set_class(&self.menu, HIDDEN_CLASS, p.menu_hidden);
        if let Some(icon) = &self.menu_icon {
            dom::set_class(icon, HIDDEN_CLASS, p.menu_icon_hidden);
        }
        if let Some(icon) = &self.close_icon {
            dom::set_class(icon, HIDDEN_CLASS, p.close_icon_hidden);
        }
        if self
            .button
            .set_attribute("aria-expanded", state.aria_expanded())
            .is_err()
        {
            dom::warn("menu: setting aria-expanded failed");
        }
    }
}

/// Hamburger toggle plus close-on-navigate for every mobile nav link.
pub(super) fn init_mobile_menu() -> Result<(), String> {
    let (Some(button), Some(menu)) = (dom::by_id(ids::MOBILE_MENU_BTN), dom::by_id(ids::MOBILE_MENU))
    else {
        return Ok(());
    };
    let menu_icon = button.query_selector(classes::MENU_ICON).ok().flatten();
    let close_icon = button.query_selector(classes::CLOSE_ICON).ok().flatten();

    let m = Rc::new(MobileMenu {
        state: Cell::new(MenuState::Closed),
        button: button.clone(),
        menu,
        menu_icon,
        close_icon,
    });
    m.render();

    {
        let m = Rc::clone(&m);
        dom::listen(&button, "click", move |_| m.set(m.state.get().toggled()))?;
    }

    for link in dom::query_all(classes::MOBILE_NAV_LINK) {
        let m = Rc::clone(&m);
        dom::listen(&link, "click", move |_| m.set(MenuState::Closed))?;
    }
    Ok(())
}
