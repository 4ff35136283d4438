//! Browser runtime: binds the page behaviours to the host markup and mounts
//! the donation modal.

use venuefy::config::SiteConfig;

use crate::ui_model::ids;

mod dom;
mod donation;
mod icons;
mod menu;
mod navbar;
mod parallax;
mod reveal;
mod ripple;
mod smooth_scroll;
mod stk_fetch;

const STARTUP_NOTICE: &str = "VenueFY Ecosystem - Website Loaded Successfully! 🎓";

pub fn start() {
    match dom::document() {
        Ok(doc) if doc.ready_state() == "loading" => {
            let bound = dom::listen(&doc, "DOMContentLoaded", |_| bootstrap());
            report("bootstrap", bound);
        }
        _ => bootstrap(),
    }
}

fn bootstrap() {
    let config = load_config();

    // Mounted first so its buttons pick up icons and ripples too.
    report("donation modal", donation::mount_donation_modal(&config));
    icons::init_icons();
    report("mobile menu", menu::init_mobile_menu());
    report(
        "smooth scroll",
        smooth_scroll::init_smooth_scroll(config.navbar_offset_px),
    );
    report(
        "scroll reveal",
        reveal::init_scroll_reveal(config.reveal_threshold, config.reveal_stagger_s),
    );
    report("counters", reveal::init_counters(config.counter_threshold));
    report(
        "navbar",
        navbar::init_navbar(
            config.navbar_solid_after_px,
            config.navbar_solid_background.clone(),
        ),
    );
    report("ripple", ripple::init_ripple(config.ripple_ms));
    if config.parallax_enabled {
        report("parallax", parallax::init_parallax());
    }

    dom::log(STARTUP_NOTICE);
}

/// A behaviour that fails to bind is skipped; the rest of the page still works.
fn report(behaviour: &str, result: Result<(), String>) {
    if let Err(e) = result {
        dom::warn(&format!("{behaviour}: {e}"));
    }
}

fn load_config() -> SiteConfig {
    let Some(el) = dom::by_id(ids::CONFIG_SCRIPT) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            dom::warn(&format!("config: {e}; using defaults"));
            SiteConfig::default()
        }
    }
}
