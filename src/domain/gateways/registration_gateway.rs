use async_trait::async_trait;

use crate::domain::{
    error::GatewayError,
    models::registration::{RegistrationForm, RegistrationId},
};

/// Backend collaborator that stores attendee details.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Submits the form and returns the server-assigned registration id.
    /// A successful response may legitimately omit the id; the flow then
    /// proceeds without one.
    async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<Option<RegistrationId>, GatewayError>;
}
