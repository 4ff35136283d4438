/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".problem-card, .product-card, .benefit-item, .action-card, .fade-in-view";

/// Stat figures that animate once visible.
pub const COUNTER_SELECTOR: &str = ".stat-value";

pub const FADE_UP_CLASS: &str = "animate-fade-up";

/// `animation-delay` for the `index`-th revealed element.
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    let secs = index as f64 * step_s;
    // Round away float noise (3 * 0.1 = 0.30000000000000004).
    let secs = (secs * 1000.0).round() / 1000.0;
    format!("{secs}s")
}
