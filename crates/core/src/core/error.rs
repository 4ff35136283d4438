use thiserror::Error;

/// Why a donation submission did not start. The first two variants display as
/// the message shown to the donor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Please enter a valid Safaricom number")]
    InvalidPhone,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("a payment request is already in flight")]
    SubmissionInFlight,
    #[error("a payment request was already accepted in this session")]
    AlreadySent,
    #[error("donation modal is closed")]
    ModalClosed,
}

impl FlowError {
    /// Input errors are shown to the donor; the rest are guards the UI should
    /// never let through.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FlowError::InvalidPhone | FlowError::InvalidAmount)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("preset_amounts must not be empty")]
    NoPresets,
    #[error("preset amount must be positive (got {0})")]
    NonPositivePreset(u64),
    #[error("default_amount {0} is not one of preset_amounts")]
    DefaultNotPreset(u64),
    #[error("stk_endpoint must be an http(s) URL (got {0:?})")]
    BadEndpoint(String),
    #[error("{field} must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}
