use serde_json::{Map, Value};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::domain::{
    error::CheckoutError,
    models::payment::PaymentResult,
    services::checkout_service::{CheckoutOptions, CheckoutService, CompletionReceiver},
};

/// Stand-in for the hosted checkout widget. The real widget runs in the
/// payer's browser; headless runs script its outcome instead.
pub struct SimulatedCheckout {
    outcome: SimulatedOutcome,
}

enum SimulatedOutcome {
    /// The payer pays: the session completes with a fabricated proof.
    Complete,
    /// The payer closes the widget without paying.
    Dismiss,
}

impl SimulatedCheckout {
    pub fn completing() -> Self {
        Self {
            outcome: SimulatedOutcome::Complete,
        }
    }

    pub fn dismissing() -> Self {
        Self {
            outcome: SimulatedOutcome::Dismiss,
        }
    }
}

impl CheckoutService for SimulatedCheckout {
    fn open(&self, options: CheckoutOptions) -> Result<CompletionReceiver, CheckoutError> {
        log::info!(
            "simulated checkout opened for order {} ({} {})",
            options.order_id.as_str(),
            options.amount,
            options.currency
        );
        let (tx, rx) = oneshot::channel();
        match self.outcome {
            SimulatedOutcome::Complete => {
                let mut fields = Map::new();
                fields.insert(
                    "paymentId".to_string(),
                    Value::String(format!("pay_{}", Uuid::new_v4().simple())),
                );
                fields.insert(
                    "orderId".to_string(),
                    Value::String(options.order_id.as_str().to_string()),
                );
                fields.insert(
                    "signature".to_string(),
                    Value::String("simulated".to_string()),
                );
                let _ = tx.send(PaymentResult::new(fields));
            }
            SimulatedOutcome::Dismiss => drop(tx),
        }
        Ok(rx)
    }
}
