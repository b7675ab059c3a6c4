pub mod attempt;
pub mod payment;
pub mod registration;
