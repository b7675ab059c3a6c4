mod domain;
mod infrastructure;
mod usecase;

use std::time::Duration;

use crate::{
    domain::models::{
        attempt::{AttemptState, FailureStage},
        registration::RegistrationForm,
    },
    infrastructure::{
        http_payment_gateway::HttpPaymentGateway,
        http_registration_gateway::HttpRegistrationGateway, simulated_checkout::SimulatedCheckout,
    },
    usecase::registration_payment_usecase::RegistrationPaymentUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let api_base =
        dotenvy::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let checkout_key =
        dotenvy::var("CHECKOUT_KEY_ID").unwrap_or_else(|_| "rzp_test_your_key_here".to_string());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let registration_gateway = HttpRegistrationGateway::new(client.clone(), api_base.clone());
    let payment_gateway = HttpPaymentGateway::new(client, api_base);
    // The hosted widget lives in the payer's browser; headless runs simulate
    // a payer who completes the checkout.
    let checkout_service = SimulatedCheckout::completing();

    let flow = RegistrationPaymentUsecase::new(
        registration_gateway,
        payment_gateway,
        checkout_service,
        checkout_key,
    );

    // One scripted end-to-end attempt against the configured backend.
    let form = RegistrationForm {
        name: "Test Attendee".to_string(),
        phone: "9999999999".to_string(),
        email: "attendee@example.com".to_string(),
        address: "42 Demo Street".to_string(),
        occupation: "Engineer".to_string(),
        date_of_birth: "1990-01-01".to_string(),
    };
    flow.submit(form).await;

    match flow.state() {
        AttemptState::Succeeded => {
            println!("Registration confirmed. A confirmation email is on its way.");
        }
        AttemptState::Failed {
            stage: FailureStage::Verification,
            message,
        } => {
            println!("Payment verification failed: {message}");
            println!(
                "Do not retry: the charge may already have been captured. Please contact support."
            );
        }
        AttemptState::Failed { stage, message } => {
            println!("The {stage} step failed: {message}. Please try again.");
        }
        AttemptState::AwaitingCheckout { .. } => {
            println!("Checkout was closed without paying; submit again for a fresh order.");
        }
        state => {
            println!("Attempt ended in unexpected state: {state:?}");
        }
    }

    Ok(())
}
