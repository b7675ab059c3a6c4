use thiserror::Error;

use crate::domain::models::attempt::FailureStage;

/// Terminal failure of one registration-payment attempt, tagged with the
/// stage it happened in so the presentation layer can give stage-appropriate
/// guidance.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("registration failed: {0}")]
    Registration(String),

    #[error("order creation failed: {0}")]
    OrderCreation(String),

    #[error("checkout failed: {0}")]
    CheckoutUnavailable(String),

    #[error("payment verification failed: {0}")]
    Verification(String),
}

impl OrchestrationError {
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::Registration(_) => FailureStage::Registration,
            Self::OrderCreation(_) => FailureStage::Order,
            Self::CheckoutUnavailable(_) => FailureStage::Checkout,
            Self::Verification(_) => FailureStage::Verification,
        }
    }

    /// The human-readable message without the stage prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Registration(m)
            | Self::OrderCreation(m)
            | Self::CheckoutUnavailable(m)
            | Self::Verification(m) => m,
        }
    }
}

/// Failure reported by a backend gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The collaborator answered but flagged the request as unsuccessful.
    #[error("rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// The call never produced a usable response (network failure, non-2xx
    /// without a parseable envelope, malformed body).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Message to surface to the user: the collaborator's own wording when it
    /// gave one, otherwise the stage-specific fallback.
    pub fn into_message(self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(m) } => m,
            Self::Rejected { message: None } => fallback.to_string(),
            Self::Transport(m) => m,
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("widget not available")]
    WidgetUnavailable,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("date of birth is not a valid ISO date")]
    InvalidDateOfBirth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_message_wins_over_fallback() {
        let err = GatewayError::Rejected {
            message: Some("duplicate email".to_string()),
        };
        assert_eq!(err.into_message("Registration failed"), "duplicate email");
    }

    #[test]
    fn fallback_used_when_rejection_has_no_message() {
        let err = GatewayError::Rejected { message: None };
        assert_eq!(err.into_message("Order creation failed"), "Order creation failed");
    }

    #[test]
    fn transport_errors_keep_their_own_description() {
        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.into_message("Registration failed"), "connection refused");
    }

    #[test]
    fn stages_map_one_to_one() {
        assert_eq!(
            OrchestrationError::Verification("x".into()).stage(),
            FailureStage::Verification
        );
        assert_eq!(
            OrchestrationError::CheckoutUnavailable("x".into()).stage(),
            FailureStage::Checkout
        );
    }
}
