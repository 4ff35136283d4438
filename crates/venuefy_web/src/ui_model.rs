//! Element inventory and view projections that should be available on both
//! wasm and native.
//!
//! Keeping these out of the wasm-only `web` module lets us unit-test what the
//! DOM will show for a given flow state on the host.

use venuefy::donation::{DonationFlow, StatusTone};
use venuefy::page::HIDDEN_CLASS;

/// Element ids the host page provides.
pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const MOBILE_MENU_BTN: &str = "mobile-menu-btn";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const BUY_COFFEE_BTN: &str = "buy-coffee-btn";
    pub const COFFEE_MODAL_ROOT: &str = "coffee-modal-root";
    pub const CONFIG_SCRIPT: &str = "venuefy-config";

    // Rendered by the donation modal, matching the site's stylesheet.
    pub const COFFEE_MODAL: &str = "coffee-modal";
    pub const CLOSE_MODAL: &str = "close-modal";
    pub const PHONE_INPUT: &str = "phone-number";
    pub const CUSTOM_AMOUNT: &str = "custom-amount";
    pub const SEND_STK_BTN: &str = "send-stk-btn";
    pub const STK_STATUS: &str = "stk-status";

    pub fn all() -> &'static [&'static str] {
        &[
            NAVBAR,
            MOBILE_MENU_BTN,
            MOBILE_MENU,
            BUY_COFFEE_BTN,
            COFFEE_MODAL_ROOT,
            CONFIG_SCRIPT,
            COFFEE_MODAL,
            CLOSE_MODAL,
            PHONE_INPUT,
            CUSTOM_AMOUNT,
            SEND_STK_BTN,
            STK_STATUS,
        ]
    }
}

/// Class selectors used inside named elements.
pub mod classes {
    pub const MENU_ICON: &str = ".menu-icon";
    pub const CLOSE_ICON: &str = ".close-icon";
    pub const MOBILE_NAV_LINK: &str = ".mobile-nav-link";
    pub const PRESET_ACTIVE: &str = "active";
    pub const STATUS_SUCCESS: &str = "status-success";
    pub const STATUS_ERROR: &str = "status-error";
}

/// `class` attribute with `hidden` appended when `hide` is set.
pub fn with_hidden(base: &str, hide: bool) -> String {
    if hide {
        format!("{base} {HIDDEN_CLASS}")
    } else {
        base.to_string()
    }
}

/// Everything the donation modal renders, derived from the flow alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub modal_class: String,
    pub status_class: String,
    pub spinner_class: String,
    pub text_class: String,
    pub text: String,
    pub submit_disabled: bool,
    pub status_attr: &'static str,
}

impl ModalView {
    pub fn project(flow: &DonationFlow) -> Self {
        let message = flow.message();
        let tone = message.map(|m| m.tone);
        let text_class = match tone {
            Some(StatusTone::Success) => format!("status-text {}", classes::STATUS_SUCCESS),
            Some(StatusTone::Error) => format!("status-text {}", classes::STATUS_ERROR),
            _ => "status-text".to_string(),
        };

        Self {
            modal_class: with_hidden("modal", !flow.is_open()),
            status_class: with_hidden("stk-status", message.is_none()),
            spinner_class: with_hidden("status-spinner", tone != Some(StatusTone::Loading)),
            text_class,
            text: message.map(|m| m.text.clone()).unwrap_or_default(),
            submit_disabled: !flow.submit_enabled(),
            status_attr: flow.status().label(),
        }
    }
}

/// `class` of the `index`-th preset button.
pub fn preset_class(flow: &DonationFlow, index: usize) -> String {
    if flow.amount().is_active(index) {
        format!("preset-btn {}", classes::PRESET_ACTIVE)
    } else {
        "preset-btn".to_string()
    }
}

/// Label shown on a preset button.
pub fn preset_label(amount: u64) -> String {
    format!("KES {amount}")
}

/// `data-amount` of a preset button, as the site's markup carries it.
pub fn preset_data_amount(amount: u64) -> String {
    amount.to_string()
}
