use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Seminar registration fee in minor currency units (9900 = a 99-unit charge).
pub const REGISTRATION_FEE_MINOR_UNITS: u64 = 9_900;

/// Currency assumed when the order envelope omits one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Gateway-assigned order identifier. Single-use: a new attempt always gets
/// a freshly created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A payment order created for exactly one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOrder {
    order_id: OrderId,
    amount: u64,
    currency: String,
}

impl PaymentOrder {
    pub fn new(order_id: OrderId, amount: u64, currency: String) -> Self {
        Self {
            order_id,
            amount,
            currency,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Proof-of-payment payload emitted by the checkout widget on completion
/// (payment id, order id, signature or equivalent). Opaque to the flow: it is
/// forwarded to verification without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult(Map<String, Value>);

impl PaymentResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
