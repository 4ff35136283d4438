/// Open/closed state of the mobile navigation menu. The DOM is a projection
/// of this value, never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Which of the three menu elements carry the hidden class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuProjection {
    pub menu_hidden: bool,
    pub menu_icon_hidden: bool,
    pub close_icon_hidden: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn projection(self) -> MenuProjection {
        let open = self.is_open();
        MenuProjection {
            menu_hidden: !open,
            menu_icon_hidden: open,
            close_icon_hidden: !open,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let s = MenuState::default();
        assert!(!s.is_open());
        assert!(s.toggled().is_open());
        assert_eq!(s.toggled().toggled(), s);
    }

    #[test]
    fn icons_swap_with_menu() {
        let closed = MenuState::Closed.projection();
        assert!(closed.menu_hidden);
        assert!(!closed.menu_icon_hidden);
        assert!(closed.close_icon_hidden);

        let open = MenuState::Open.projection();
        assert!(!open.menu_hidden);
        assert!(open.menu_icon_hidden);
        assert!(!open.close_icon_hidden);
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }
}
