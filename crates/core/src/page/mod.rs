//! Pure state and geometry behind the page behaviours. The browser crate binds
//! these to DOM events; nothing here depends on a browser.

pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod scroll;

/// Class the host stylesheet uses to hide an element.
pub const HIDDEN_CLASS: &str = "hidden";
