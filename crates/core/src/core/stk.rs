//! Wire contract with the STK-push initiation endpoint and the gateway seam
//! the browser (or a test double) implements.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::phone::SafaricomNumber;

pub const MSG_SENDING: &str = "Initiating STK Push...";
pub const MSG_SENT: &str = "STK Push sent! Check your phone.";
pub const MSG_FAILED: &str = "STK Push failed.";
pub const MSG_NETWORK: &str = "Network error.";

/// POST body. Keys are fixed by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StkPushRequest {
    pub phone_number: SafaricomNumber,
    pub amount: u64,
}

impl StkPushRequest {
    pub fn to_json(&self) -> String {
        // Two plain fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StkPushResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StkOutcome {
    /// The service reported `success: true`.
    Accepted,
    /// The service answered but reported failure.
    Rejected { message: Option<String> },
    /// No usable answer: the request failed or the body was not the expected JSON.
    Transport { detail: String },
}

impl StkOutcome {
    pub fn from_response(resp: StkPushResponse) -> Self {
        if resp.success {
            StkOutcome::Accepted
        } else {
            StkOutcome::Rejected {
                message: resp.error.filter(|m| !m.is_empty()),
            }
        }
    }

    /// Classifies a raw response body. HTTP status is not consulted: any body
    /// that parses is judged by its `success` field.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<StkPushResponse>(body) {
            Ok(resp) => Self::from_response(resp),
            Err(e) => StkOutcome::Transport {
                detail: format!("response: {e}"),
            },
        }
    }

    /// What the donor sees for this outcome.
    pub fn user_message(&self) -> &str {
        match self {
            StkOutcome::Accepted => MSG_SENT,
            StkOutcome::Rejected { message } => message.as_deref().unwrap_or(MSG_FAILED),
            StkOutcome::Transport { .. } => MSG_NETWORK,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, StkOutcome::Accepted)
    }
}

/// Sends one STK-push request. Implementations never retry.
pub trait StkGateway {
    fn initiate(&self, request: StkPushRequest) -> impl Future<Output = StkOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StkPushRequest {
        StkPushRequest {
            phone_number: SafaricomNumber::parse("0712345678").unwrap(),
            amount: 600,
        }
    }

    #[test]
    fn request_body_uses_endpoint_keys() {
        let v: serde_json::Value = serde_json::from_str(&request().to_json()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "phoneNumber": "254712345678", "amount": 600 })
        );
    }

    #[test]
    fn success_body_is_accepted() {
        let o = StkOutcome::from_body(r#"{"success":true}"#);
        assert_eq!(o, StkOutcome::Accepted);
        assert_eq!(o.user_message(), MSG_SENT);
    }

    #[test]
    fn failure_body_carries_server_message() {
        let o = StkOutcome::from_body(r#"{"success":false,"error":"Insufficient balance"}"#);
        assert_eq!(o.user_message(), "Insufficient balance");
        assert!(!o.is_accepted());
    }

    #[test]
    fn failure_without_message_falls_back() {
        assert_eq!(
            StkOutcome::from_body(r#"{"success":false}"#).user_message(),
            MSG_FAILED
        );
        assert_eq!(
            StkOutcome::from_body(r#"{"success":false,"error":""}"#).user_message(),
            MSG_FAILED
        );
        assert_eq!(
            StkOutcome::from_body(r#"{"success":false,"error":null}"#).user_message(),
            MSG_FAILED
        );
    }

    #[test]
    fn unparsable_body_is_transport_failure() {
        for body in ["", "<html>502</html>", r#"{"ok":true}"#] {
            let o = StkOutcome::from_body(body);
            assert!(matches!(o, StkOutcome::Transport { .. }), "{body:?}");
            assert_eq!(o.user_message(), MSG_NETWORK);
        }
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let o = StkOutcome::from_body(r#"{"success":true,"checkoutRequestId":"ws_CO_1"}"#);
        assert_eq!(o, StkOutcome::Accepted);
    }
}
