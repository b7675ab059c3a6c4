use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// Server-assigned identifier of a stored registration. Opaque: the backend
/// owns its meaning, the flow only carries it along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationId(String);

impl RegistrationId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attendee details collected by the registration form. Captured by value
/// when an attempt starts; the wire shape matches the register endpoint
/// (the date travels under the `dob` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub occupation: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
}

impl RegistrationForm {
    /// Defensive re-validation. The form UI is the primary enforcement point;
    /// this only rejects what the backend would reject anyway.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("occupation", &self.occupation),
            ("dob", &self.date_of_birth),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDateOfBirth)?;

        Ok(())
    }
}
