use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    error::GatewayError,
    gateways::registration_gateway::RegistrationGateway,
    models::registration::{RegistrationForm, RegistrationId},
};

/// Speaks the register endpoint's JSON contract:
/// `POST {base_url}/api/register` -> `{success, message?, data: {id?}}`.
#[derive(Clone)]
pub struct HttpRegistrationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationGateway {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<RegisterData>,
}

#[derive(Debug, Deserialize)]
struct RegisterData {
    id: Option<RegistrationId>,
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<Option<RegistrationId>, GatewayError> {
        let url = format!("{}/api/register", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // Rejections come back as {success: false, message} even on non-2xx;
        // anything that fails to parse is a transport-level failure.
        let status = response.status();
        let body: RegisterResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("{status}: {e}")))?;

        if !body.success {
            return Err(GatewayError::Rejected {
                message: body.message,
            });
        }

        Ok(body.data.and_then(|data| data.id))
    }
}
