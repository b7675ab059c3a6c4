use async_trait::async_trait;

use crate::domain::{
    error::GatewayError,
    models::{
        payment::{PaymentOrder, PaymentResult},
        registration::RegistrationId,
    },
};

/// Backend collaborator that creates payment orders and confirms captured
/// payments against the gateway's records.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a single-use order for the given amount, tied to the
    /// registration when an id is available.
    async fn create_order(
        &self,
        amount: u64,
        registration_id: Option<&RegistrationId>,
    ) -> Result<PaymentOrder, GatewayError>;

    /// Confirms the checkout's proof of payment server-side. Ok means the
    /// backend accepted the payment as genuine and settled.
    async fn verify_payment(
        &self,
        payment: &PaymentResult,
        registration_id: Option<&RegistrationId>,
    ) -> Result<(), GatewayError>;
}
