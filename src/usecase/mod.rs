pub mod registration_payment_usecase;
