//! Browser-hosted WASM runtime for the VenueFY site.
//!
//! This crate is a stub by default so the workspace builds and tests on native
//! targets without a wasm toolchain.
//!
//! Enable the real runtime with: `--features web` (and a wasm32 target).
//!
//! The host page provides the navbar, menu, opener and modal-root elements
//! named in [`ui_model::ids`]. The donation modal
//! is rendered into an empty `#coffee-modal-root`; it carries the
//! `#coffee-modal`, `#close-modal` and `#stk-status` ids and
//! `.preset-btn[data-amount]` buttons the site stylesheet targets.
//!
//! No `tracing` subscriber is installed in the browser, so events from the
//! `venuefy` core are dropped. Failures the page cares about are written to the
//! console with `web_sys::console` instead.

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
