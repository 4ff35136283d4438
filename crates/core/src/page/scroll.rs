/// Selector for in-page anchors.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The selector an anchor should scroll to, or `None` for a bare `#` (and for
/// anything that is not a fragment link).
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Document-space `top` that puts the target just below the fixed navbar.
pub fn scroll_destination(rect_top: f64, page_y_offset: f64, navbar_offset_px: f64) -> f64 {
    rect_top + page_y_offset - navbar_offset_px
}
