//! Site configuration. Every field has a default, so an empty object (or no
//! config at all) yields the production settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::amount::AmountSelection;
use crate::donation::DonationFlow;
use crate::error::ConfigError;

pub const DEFAULT_STK_ENDPOINT: &str = "https://coffee.venuefy.top/initiate-stk";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_stk_endpoint")]
    pub stk_endpoint: String,
    #[serde(default = "default_preset_amounts")]
    pub preset_amounts: Vec<u64>,
    #[serde(default = "default_amount")]
    pub default_amount: u64,
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u32,

    /// Height of the fixed navbar, subtracted from anchor scroll targets.
    #[serde(default = "default_navbar_offset_px")]
    pub navbar_offset_px: f64,
    #[serde(default = "default_navbar_solid_after_px")]
    pub navbar_solid_after_px: f64,
    #[serde(default = "default_navbar_solid_background")]
    pub navbar_solid_background: String,

    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_reveal_stagger_s")]
    pub reveal_stagger_s: f64,
    #[serde(default = "default_counter_threshold")]
    pub counter_threshold: f64,

    #[serde(default = "default_ripple_ms")]
    pub ripple_ms: u32,
    #[serde(default)]
    pub parallax_enabled: bool,
}

fn default_stk_endpoint() -> String {
    DEFAULT_STK_ENDPOINT.to_string()
}

fn default_preset_amounts() -> Vec<u64> {
    vec![200, 600, 1000]
}

fn default_amount() -> u64 {
    600
}

fn default_auto_close_ms() -> u32 {
    5000
}

fn default_navbar_offset_px() -> f64 {
    64.0
}

fn default_navbar_solid_after_px() -> f64 {
    50.0
}

fn default_navbar_solid_background() -> String {
    "hsla(222, 30%, 8%, 0.95)".to_string()
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_stagger_s() -> f64 {
    0.1
}

fn default_counter_threshold() -> f64 {
    0.5
}

fn default_ripple_ms() -> u32 {
    600
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stk_endpoint: default_stk_endpoint(),
            preset_amounts: default_preset_amounts(),
            default_amount: default_amount(),
            auto_close_ms: default_auto_close_ms(),
            navbar_offset_px: default_navbar_offset_px(),
            navbar_solid_after_px: default_navbar_solid_after_px(),
            navbar_solid_background: default_navbar_solid_background(),
            reveal_threshold: default_reveal_threshold(),
            reveal_stagger_s: default_reveal_stagger_s(),
            counter_threshold: default_counter_threshold(),
            ripple_ms: default_ripple_ms(),
            parallax_enabled: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.stk_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::BadEndpoint(self.stk_endpoint.clone()));
        }
        if self.preset_amounts.is_empty() {
            return Err(ConfigError::NoPresets);
        }
        if let Some(&p) = self.preset_amounts.iter().find(|p| **p == 0) {
            return Err(ConfigError::NonPositivePreset(p));
        }
        if !self.preset_amounts.contains(&self.default_amount) {
            return Err(ConfigError::DefaultNotPreset(self.default_amount));
        }
        check_range("reveal_threshold", self.reveal_threshold, 0.0, 1.0)?;
        check_range("counter_threshold", self.counter_threshold, 0.0, 1.0)?;
        check_range("reveal_stagger_s", self.reveal_stagger_s, 0.0, 10.0)?;
        check_range("navbar_offset_px", self.navbar_offset_px, 0.0, 1000.0)?;
        check_range("navbar_solid_after_px", self.navbar_solid_after_px, 0.0, 10_000.0)?;
        Ok(())
    }

    pub fn auto_close_after(&self) -> Duration {
        Duration::from_millis(u64::from(self.auto_close_ms))
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.ripple_ms))
    }

    /// A closed donation flow seeded with this config's amounts and timer.
    pub fn donation_flow(&self) -> DonationFlow {
        DonationFlow::new(
            AmountSelection::new(self.preset_amounts.clone(), self.default_amount),
            self.auto_close_after(),
        )
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.stk_endpoint, DEFAULT_STK_ENDPOINT);
        assert_eq!(cfg.auto_close_after(), Duration::from_millis(5000));
        assert_eq!(cfg.ripple_lifetime(), Duration::from_millis(600));
    }

    #[test]
    fn defaults_validate() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg =
            SiteConfig::from_json(r#"{"preset_amounts":[50,100],"default_amount":100}"#).unwrap();
        assert_eq!(cfg.preset_amounts, vec![50, 100]);
        assert_eq!(cfg.navbar_offset_px, 64.0);
        let flow = cfg.donation_flow();
        assert_eq!(flow.amount().active_preset(), Some(1));
        assert!(!flow.is_open());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"preset_amounts":[]}"#),
            Err(ConfigError::NoPresets)
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"preset_amounts":[0,600]}"#),
            Err(ConfigError::NonPositivePreset(0))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"default_amount":7}"#),
            Err(ConfigError::DefaultNotPreset(7))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"stk_endpoint":"ftp://x"}"#),
            Err(ConfigError::BadEndpoint(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"reveal_threshold":1.5}"#),
            Err(ConfigError::OutOfRange { field: "reveal_threshold", .. })
        ));
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
