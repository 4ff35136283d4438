//! The donation ("buy me a coffee") request flow.
//!
//! One `DonationFlow` lives for the lifetime of the page; every open/close of
//! the modal is a fresh session. The flow owns all transient state and the UI
//! renders a projection of it, so nothing here touches the DOM.
//!
//! ```text
//! idle --submit(valid)--> loading --accepted--> success --close / auto-close--> idle
//!                            |
//!                            +--rejected / transport--> error --submit(valid)--> loading
//!                                                          +--close--> idle
//! ```

use std::cell::RefCell;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::amount::{positive_amount, AmountSelection};
use crate::error::FlowError;
use crate::phone::SafaricomNumber;
use crate::stk::{StkGateway, StkOutcome, StkPushRequest, MSG_SENDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DonationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl DonationStatus {
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Idle => "idle",
            DonationStatus::Loading => "loading",
            DonationStatus::Success => "success",
            DonationStatus::Error => "error",
        }
    }
}

/// Styling of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub text: String,
}

impl StatusMessage {
    fn new(tone: StatusTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Identifies one open/close cycle of the modal. Outcomes and timers carry
/// the session they were started in and are dropped if it has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Returned by [`DonationFlow::submit`]: the request to send and the session
/// its outcome belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub session: SessionId,
    pub request: StkPushRequest,
}

/// Returned by [`DonationFlow::resolve`] after an accepted request: call
/// [`DonationFlow::auto_close`] with `session` once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoClose {
    pub session: SessionId,
    pub after: Duration,
}

#[derive(Debug, Clone)]
pub struct DonationFlow {
    open: bool,
    session: u64,
    phone: String,
    amount: AmountSelection,
    status: DonationStatus,
    message: Option<StatusMessage>,
    auto_close_after: Duration,
}

impl DonationFlow {
    pub fn new(amount: AmountSelection, auto_close_after: Duration) -> Self {
        Self {
            open: false,
            session: 0,
            phone: String::new(),
            amount,
            status: DonationStatus::Idle,
            message: None,
            auto_close_after,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is suspended while the modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn status(&self) -> DonationStatus {
        self.status
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn amount(&self) -> &AmountSelection {
        &self.amount
    }

    pub fn session(&self) -> SessionId {
        SessionId(self.session)
    }

    /// The submit control is enabled before the first request and after a
    /// failed one. Once a request is accepted the session can only close.
    pub fn submit_enabled(&self) -> bool {
        matches!(self.status, DonationStatus::Idle | DonationStatus::Error)
    }

    /// Starts a new session. Opening an already open modal is a no-op.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.reset_fields();
        self.session += 1;
        self.open = true;
        debug!(session = self.session, "donation modal opened");
    }

    /// Hides the modal and clears every transient field.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        if self.status == DonationStatus::Loading {
            warn!(
                session = self.session,
                "donation modal closed with a request in flight; its outcome will be dropped"
            );
        }
        self.open = false;
        self.session += 1;
        self.reset_fields();
        debug!("donation modal closed");
    }

    pub fn set_phone(&mut self, text: impl Into<String>) {
        self.phone = text.into();
    }

    pub fn select_preset(&mut self, index: usize) {
        self.amount.select_preset(index);
    }

    pub fn enter_custom_amount(&mut self, text: &str) {
        self.amount.enter_custom(text);
    }

    /// Validates the current inputs and, when they pass, moves to `Loading`
    /// and hands back the request to send.
    ///
    /// Input errors are also written to the status line; the status itself is
    /// left alone so a failed validation never counts as a transition.
    pub fn submit(&mut self) -> Result<Submission, FlowError> {
        if !self.open {
            return Err(FlowError::ModalClosed);
        }
        match self.status {
            DonationStatus::Loading => return Err(FlowError::SubmissionInFlight),
            DonationStatus::Success => return Err(FlowError::AlreadySent),
            DonationStatus::Idle | DonationStatus::Error => {}
        }

        let checked = SafaricomNumber::parse(&self.phone).and_then(|phone| {
            positive_amount(self.amount.effective())
                .map(|amount| (phone, amount))
                .ok_or(FlowError::InvalidAmount)
        });
        let (phone_number, amount) = match checked {
            Ok(v) => v,
            Err(e) => {
                self.message = Some(StatusMessage::new(StatusTone::Error, e.to_string()));
                return Err(e);
            }
        };

        self.status = DonationStatus::Loading;
        self.message = Some(StatusMessage::new(StatusTone::Loading, MSG_SENDING));
        info!(session = self.session, amount, "sending STK push");

        Ok(Submission {
            session: self.session(),
            request: StkPushRequest {
                phone_number,
                amount,
            },
        })
    }

    /// Applies the outcome of the request started by `submit`. Outcomes for a
    /// session that has since been closed are ignored.
    pub fn resolve(&mut self, session: SessionId, outcome: StkOutcome) -> Option<AutoClose> {
        if session != self.session() || self.status != DonationStatus::Loading {
            debug!(?outcome, "dropping outcome for an ended session");
            return None;
        }

        let text = outcome.user_message().to_string();
        match outcome {
            StkOutcome::Accepted => {
                self.status = DonationStatus::Success;
                self.message = Some(StatusMessage::new(StatusTone::Success, text));
                info!(session = self.session, "STK push accepted");
                Some(AutoClose {
                    session,
                    after: self.auto_close_after,
                })
            }
            StkOutcome::Rejected { .. } => {
                self.status = DonationStatus::Error;
                warn!(session = self.session, message = %text, "STK push rejected");
                self.message = Some(StatusMessage::new(StatusTone::Error, text));
                None
            }
            StkOutcome::Transport { detail } => {
                self.status = DonationStatus::Error;
                warn!(session = self.session, %detail, "STK push transport failure");
                self.message = Some(StatusMessage::new(StatusTone::Error, text));
                None
            }
        }
    }

    /// Timer callback scheduled from an [`AutoClose`]. Only closes the session
    /// that scheduled it.
    pub fn auto_close(&mut self, session: SessionId) -> bool {
        if !self.open || session != self.session() || self.status != DonationStatus::Success {
            debug!("auto-close skipped");
            return false;
        }
        self.close();
        true
    }

    fn reset_fields(&mut self) {
        self.phone.clear();
        self.amount.reset();
        self.status = DonationStatus::Idle;
        self.message = None;
    }
}

/// Runs one full submission against `gateway` for callers that keep the flow
/// behind a `RefCell`. The borrow is released while the request is in flight.
pub async fn drive_submission<G: StkGateway>(
    flow: &RefCell<DonationFlow>,
    gateway: &G,
) -> Result<Option<AutoClose>, FlowError> {
    let Submission { session, request } = flow.borrow_mut().submit()?;
    let outcome = gateway.initiate(request).await;
    Ok(flow.borrow_mut().resolve(session, outcome))
}
