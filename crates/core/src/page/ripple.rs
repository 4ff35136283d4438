/// Buttons that get the ripple.
pub const RIPPLE_SELECTOR: &str = ".btn";

/// Injected once into `<head>`.
pub const RIPPLE_KEYFRAMES: &str = "
  @keyframes ripple {
    to {
      width: 300px;
      height: 300px;
      opacity: 0;
    }
  }
";

/// Click position relative to the button's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }

    /// Inline style for the ripple `<span>`.
    pub fn css_text(&self, lifetime_ms: u32) -> String {
        let secs = f64::from(lifetime_ms) / 1000.0;
        format!(
            "position: absolute; width: 0; height: 0; border-radius: 50%; \
             background: rgba(255, 255, 255, 0.3); transform: translate(-50%, -50%); \
             animation: ripple {secs}s ease-out; left: {}px; top: {}px; pointer-events: none;",
            self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_relative_to_button() {
        let r = Ripple::at(150.0, 90.0, 100.0, 60.0);
        assert_eq!(r, Ripple { x: 50.0, y: 30.0 });
    }

    #[test]
    fn css_places_and_times_the_span() {
        let css = Ripple { x: 12.5, y: 4.0 }.css_text(600);
        assert!(css.contains("left: 12.5px;"));
        assert!(css.contains("top: 4px;"));
        assert!(css.contains("animation: ripple 0.6s ease-out;"));
        assert!(css.contains("pointer-events: none;"));
    }
}
