use std::sync::RwLock;

use tokio::sync::Mutex;

use crate::domain::{
    error::OrchestrationError,
    gateways::{payment_gateway::PaymentGateway, registration_gateway::RegistrationGateway},
    models::{
        attempt::AttemptState,
        payment::{PaymentOrder, REGISTRATION_FEE_MINOR_UNITS},
        registration::RegistrationForm,
    },
    services::checkout_service::{CheckoutOptions, CheckoutPrefill, CheckoutService},
};

// Fallbacks shown when a collaborator fails without saying why.
const REGISTRATION_FALLBACK: &str = "Registration failed";
const ORDER_FALLBACK: &str = "Order creation failed";
const VERIFICATION_FALLBACK: &str = "Payment verification failed";

/// Drives one registration-payment attempt: store the registration, create a
/// single-use order, hand off to the hosted checkout, confirm the payment
/// server-side. State transitions are the only observable effect; every
/// failure is absorbed into `AttemptState::Failed` rather than returned.
pub struct RegistrationPaymentUsecase<R: RegistrationGateway, P: PaymentGateway, C: CheckoutService>
{
    registration_gateway: R,
    payment_gateway: P,
    checkout_service: C,
    checkout_key: String,
    state: RwLock<AttemptState>,
    attempt_guard: Mutex<()>,
}

impl<R: RegistrationGateway, P: PaymentGateway, C: CheckoutService>
    RegistrationPaymentUsecase<R, P, C>
{
    pub fn new(
        registration_gateway: R,
        payment_gateway: P,
        checkout_service: C,
        checkout_key: String,
    ) -> Self {
        Self {
            registration_gateway,
            payment_gateway,
            checkout_service,
            checkout_key,
            state: RwLock::new(AttemptState::Idle),
            attempt_guard: Mutex::new(()),
        }
    }

    /// Runs one attempt with a snapshot of the form. Infallible from the
    /// caller's perspective; read `state()` for the outcome. A no-op while a
    /// previous attempt is still in flight (including one parked on an open
    /// checkout widget), so two sequences can never overlap.
    pub async fn submit(&self, form: RegistrationForm) {
        let Ok(_attempt) = self.attempt_guard.try_lock() else {
            log::warn!("submission ignored: an attempt is already in flight");
            return;
        };

        self.set_state(AttemptState::Submitting);
        if let Err(err) = self.run_attempt(form).await {
            log::warn!("{} stage failed: {}", err.stage(), err.message());
            self.set_state(AttemptState::Failed {
                stage: err.stage(),
                message: err.message().to_string(),
            });
        }
    }

    /// Snapshot of where the current attempt stands.
    pub fn state(&self) -> AttemptState {
        self.state.read().expect("state lock").clone()
    }

    /// Acknowledges a terminal outcome and returns to `Idle`. No-op while an
    /// attempt is still running.
    pub fn dismiss(&self) {
        let mut state = self.state.write().expect("state lock");
        if state.is_terminal() {
            *state = AttemptState::Idle;
        }
    }

    async fn run_attempt(&self, form: RegistrationForm) -> Result<(), OrchestrationError> {
        form.validate()
            .map_err(|e| OrchestrationError::Registration(e.to_string()))?;

        let registration_id = self
            .registration_gateway
            .register(&form)
            .await
            .map_err(|e| OrchestrationError::Registration(e.into_message(REGISTRATION_FALLBACK)))?;
        match &registration_id {
            Some(id) => log::info!("registration stored as {}", id.as_str()),
            None => log::info!("registration stored without an id"),
        }

        // A registration without a settled payment can exist from here on;
        // reconciling that window is the backend's responsibility.
        let order = self
            .payment_gateway
            .create_order(REGISTRATION_FEE_MINOR_UNITS, registration_id.as_ref())
            .await
            .map_err(|e| OrchestrationError::OrderCreation(e.into_message(ORDER_FALLBACK)))?;
        log::info!(
            "order {} created for {} {}",
            order.order_id().as_str(),
            order.amount(),
            order.currency()
        );

        let completion = self
            .checkout_service
            .open(self.checkout_options(&form, &order))
            .map_err(|e| OrchestrationError::CheckoutUnavailable(e.to_string()))?;
        self.set_state(AttemptState::AwaitingCheckout {
            registration_id: registration_id.clone(),
            order_id: order.order_id().clone(),
        });

        let payment = match completion.await {
            Ok(payment) => payment,
            Err(_) => {
                // Dismissed without paying. Stay in AwaitingCheckout; the
                // order is spent and a fresh submission will mint a new one.
                log::info!("checkout dismissed without completing payment");
                return Ok(());
            }
        };

        self.set_state(AttemptState::Verifying {
            registration_id: registration_id.clone(),
            payment: payment.clone(),
        });
        self.payment_gateway
            .verify_payment(&payment, registration_id.as_ref())
            .await
            .map_err(|e| OrchestrationError::Verification(e.into_message(VERIFICATION_FALLBACK)))?;

        self.set_state(AttemptState::Succeeded);
        Ok(())
    }

    fn checkout_options(&self, form: &RegistrationForm, order: &PaymentOrder) -> CheckoutOptions {
        CheckoutOptions {
            key: self.checkout_key.clone(),
            amount: order.amount(),
            currency: order.currency().to_string(),
            order_id: order.order_id().clone(),
            prefill: CheckoutPrefill {
                name: form.name.clone(),
                email: form.email.clone(),
                contact: form.phone.clone(),
            },
        }
    }

    fn set_state(&self, next: AttemptState) {
        let mut state = self.state.write().expect("state lock");
        log::debug!("attempt state {:?} -> {:?}", *state, next);
        *state = next;
    }
}
