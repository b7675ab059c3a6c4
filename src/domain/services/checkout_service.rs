use tokio::sync::oneshot;

use crate::domain::{
    error::CheckoutError,
    models::payment::{OrderId, PaymentResult},
};

/// Yields the payment result if the payer completes checkout. The sender
/// side is dropped without firing when the payer dismisses the widget, so a
/// receive error means "dismissed, nothing charged as far as we know".
pub type CompletionReceiver = oneshot::Receiver<PaymentResult>;

pub type CompletionSender = oneshot::Sender<PaymentResult>;

/// Contact fields shown pre-filled inside the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Everything the hosted widget needs to open a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub order_id: OrderId,
    pub prefill: CheckoutPrefill,
}

/// The hosted checkout widget as an injected capability. The widget itself
/// runs outside this process; implementations bridge to it and guarantee the
/// completion message fires at most once per opened session.
pub trait CheckoutService: Send + Sync {
    fn open(&self, options: CheckoutOptions) -> Result<CompletionReceiver, CheckoutError>;
}
