#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarAppearance {
    /// Stylesheet background (inline style cleared).
    Transparent,
    /// Inline solid background.
    Solid,
}

impl NavbarAppearance {
    /// Solid once the page has scrolled strictly past `solid_after_px`.
    pub fn for_scroll(scroll_y: f64, solid_after_px: f64) -> Self {
        if scroll_y > solid_after_px {
            NavbarAppearance::Solid
        } else {
            NavbarAppearance::Transparent
        }
    }

    /// Inline `background` value; empty clears it.
    pub fn background<'a>(self, solid: &'a str) -> &'a str {
        match self {
            NavbarAppearance::Solid => solid,
            NavbarAppearance::Transparent => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(NavbarAppearance::for_scroll(0.0, 50.0), NavbarAppearance::Transparent);
        assert_eq!(NavbarAppearance::for_scroll(50.0, 50.0), NavbarAppearance::Transparent);
        assert_eq!(NavbarAppearance::for_scroll(50.5, 50.0), NavbarAppearance::Solid);
    }

    #[test]
    fn background_projection() {
        let bg = "hsla(222, 30%, 8%, 0.95)";
        assert_eq!(NavbarAppearance::Solid.background(bg), bg);
        assert_eq!(NavbarAppearance::Transparent.background(bg), "");
    }
}
