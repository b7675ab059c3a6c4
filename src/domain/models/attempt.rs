use std::fmt;

use crate::domain::models::payment::{OrderId, PaymentResult};
use crate::domain::models::registration::RegistrationId;

/// Where one registration-payment attempt currently stands. Exactly one
/// instance exists per flow; every transition is the attempt's only
/// observable side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptState {
    /// No attempt running; the form is still editable.
    Idle,
    /// Registration and order creation are in flight.
    Submitting,
    /// The checkout widget is open; only its completion message (or a fresh
    /// submission after dismissal) moves the attempt forward.
    AwaitingCheckout {
        registration_id: Option<RegistrationId>,
        order_id: OrderId,
    },
    /// The widget reported completion; server-side confirmation is in flight.
    Verifying {
        registration_id: Option<RegistrationId>,
        payment: PaymentResult,
    },
    Succeeded,
    Failed {
        stage: FailureStage,
        message: String,
    },
}

impl AttemptState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }
}

/// The stage an attempt failed in. Distinct per stage so callers can give
/// stage-appropriate guidance (a verification failure must never read as
/// "just retry").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Registration,
    Order,
    Checkout,
    Verification,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Registration => "registration",
            Self::Order => "order",
            Self::Checkout => "checkout",
            Self::Verification => "verification",
        };
        write!(f, "{label}")
    }
}
