use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    error::GatewayError,
    gateways::payment_gateway::PaymentGateway,
    models::{
        payment::{DEFAULT_CURRENCY, OrderId, PaymentOrder, PaymentResult},
        registration::RegistrationId,
    },
};

/// Speaks the order and verification endpoints:
/// `POST {base_url}/api/create-order` and `POST {base_url}/api/verify-payment`.
#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPaymentGateway {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, GatewayError> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    amount: u64,
    #[serde(rename = "registrationId")]
    registration_id: Option<&'a RegistrationId>,
}

#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    id: Option<OrderId>,
    amount: Option<u64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_order(
        &self,
        amount: u64,
        registration_id: Option<&RegistrationId>,
    ) -> Result<PaymentOrder, GatewayError> {
        let request = CreateOrderRequest {
            amount,
            registration_id,
        };
        let response = self.post_json("/api/create-order", &request).await?;

        let status = response.status();
        let body: CreateOrderResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("{status}: {e}")))?;

        if !body.success {
            return Err(GatewayError::Rejected {
                message: body.message,
            });
        }
        // An order without an identifier cannot be checked out against.
        let order_id = body.id.ok_or(GatewayError::Rejected {
            message: body.message,
        })?;

        Ok(PaymentOrder::new(
            order_id,
            body.amount.unwrap_or(amount),
            body.currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        ))
    }

    async fn verify_payment(
        &self,
        payment: &PaymentResult,
        registration_id: Option<&RegistrationId>,
    ) -> Result<(), GatewayError> {
        // The proof payload goes through untouched, with the registration id
        // spliced in alongside the widget's own fields.
        let mut body = payment.fields().clone();
        if let Some(id) = registration_id {
            body.insert(
                "registrationId".to_string(),
                Value::String(id.as_str().to_string()),
            );
        }
        let response = self.post_json("/api/verify-payment", &body).await?;

        let status = response.status();
        let verdict: VerifyResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("{status}: {e}")))?;

        if !verdict.success {
            return Err(GatewayError::Rejected {
                message: verdict.message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_envelope_parses_all_fields() {
        let body: CreateOrderResponse =
            serde_json::from_str(r#"{"success":true,"id":"O1","amount":9900,"currency":"INR"}"#)
                .unwrap();
        assert!(body.success);
        assert_eq!(body.id, Some(OrderId::new("O1".to_string())));
        assert_eq!(body.amount, Some(9900));
        assert_eq!(body.currency.as_deref(), Some("INR"));
    }

    #[test]
    fn order_envelope_without_id_is_not_usable() {
        let body: CreateOrderResponse =
            serde_json::from_str(r#"{"success":true,"amount":9900}"#).unwrap();
        assert!(body.success);
        assert!(body.id.is_none());
    }

    #[test]
    fn order_request_serializes_registration_id_key() {
        let id = RegistrationId::new("R1".to_string());
        let request = CreateOrderRequest {
            amount: 9900,
            registration_id: Some(&id),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], 9900);
        assert_eq!(json["registrationId"], "R1");
    }

    #[test]
    fn absent_registration_id_serializes_as_null() {
        let request = CreateOrderRequest {
            amount: 9900,
            registration_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["registrationId"].is_null());
    }
}
