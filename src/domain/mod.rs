pub mod error;
pub mod gateways;
pub mod models;
pub mod services;
