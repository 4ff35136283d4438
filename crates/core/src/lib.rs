//! # venuefy
//!
//! Host-independent logic behind the VenueFY marketing site: the donation
//! ("buy me a coffee") STK-push flow and the small state machines and
//! geometry helpers used by the page behaviours.
//!
//! The browser runtime (`venuefy_web`) binds these to the DOM; everything in
//! this crate runs and is tested natively.
//!
//! ## Quick Start
//!
//! ```
//! use venuefy::prelude::*;
//!
//! let cfg = SiteConfig::default();
//! let mut flow = cfg.donation_flow();
//! flow.open();
//! flow.set_phone("0712345678");
//! flow.select_preset(0);
//!
//! let submission = flow.submit().unwrap();
//! assert_eq!(submission.request.phone_number.as_str(), "254712345678");
//! assert_eq!(flow.status(), DonationStatus::Loading);
//!
//! let auto_close = flow.resolve(submission.session, StkOutcome::Accepted);
//! assert!(auto_close.is_some());
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: build the `venuefy-cli` operator binary
//!
//! ## Modules
//!
//! - [`phone`]: Safaricom number validation/normalization
//! - [`amount`]: preset/custom amount selection
//! - [`donation`]: the donation request state machine
//! - [`stk`]: STK-push wire contract and gateway trait
//! - [`config`]: site configuration
//! - [`page`]: menu, navbar, scroll, reveal, ripple and parallax helpers

#[path = "core/amount.rs"]
pub mod amount;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/donation.rs"]
pub mod donation;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/phone.rs"]
pub mod phone;

#[path = "core/stk.rs"]
pub mod stk;

pub mod page;

/// Prelude module for convenient imports.
///
/// ```
/// use venuefy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::amount::AmountSelection;
    pub use crate::config::SiteConfig;
    pub use crate::donation::{
        drive_submission, AutoClose, DonationFlow, DonationStatus, SessionId, StatusMessage,
        StatusTone, Submission,
    };
    pub use crate::error::{ConfigError, FlowError};
    pub use crate::phone::{normalize_phone, validate_phone, SafaricomNumber};
    pub use crate::stk::{StkGateway, StkOutcome, StkPushRequest, StkPushResponse};
}
