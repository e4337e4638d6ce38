//! Patient models and identity lookup keys.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors from validating patient fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatientError {
    #[error("invalid NRIC: {0:?}")]
    InvalidNric(String),

    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("patient name cannot be empty")]
    EmptyName,
}

/// A national identity number, format `S1234567A`.
///
/// Validated at construction; a malformed value never enters the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nric(String);

impl Nric {
    pub fn new(value: &str) -> Result<Self, PatientError> {
        let canonical = value.trim().to_uppercase();
        let bytes = canonical.as_bytes();
        let well_formed = bytes.len() == 9
            && matches!(bytes[0], b'S' | b'T' | b'F' | b'G')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase();
        if well_formed {
            Ok(Self(canonical))
        } else {
            Err(PatientError::InvalidNric(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Nric {
    type Error = PatientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Nric> for String {
    fn from(nric: Nric) -> Self {
        nric.0
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, PatientError> {
        let digits = value.trim();
        let well_formed = digits.len() >= 3 && digits.bytes().all(|b| b.is_ascii_digit());
        if well_formed {
            Ok(Self(digits.to_string()))
        } else {
            Err(PatientError::InvalidPhone(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PatientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clinic patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Stable local id, generated at creation
    pub id: String,
    /// Patient name
    pub name: String,
    /// National identity number
    pub nric: Nric,
    /// Contact phone number
    pub phone: Phone,
    /// Postal address
    pub address: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(name: String, nric: Nric, phone: Phone) -> Result<Self, PatientError> {
        if name.trim().is_empty() {
            return Err(PatientError::EmptyName);
        }
        let now = Utc::now().to_rfc3339();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            nric,
            phone,
            address: None,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Touch the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }
}

/// A lookup key matching a patient by exactly one identity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientKey {
    ByNric(Nric),
    ByPhone(Phone),
}

impl PatientKey {
    /// True iff the keyed field matches the patient's.
    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            PatientKey::ByNric(nric) => patient.nric == *nric,
            PatientKey::ByPhone(phone) => patient.phone == *phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_patient() -> Patient {
        Patient::new(
            "Bernice Yu".into(),
            Nric::new("S0123456A").unwrap(),
            Phone::new("99272758").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_nric_validation() {
        assert!(Nric::new("S1234567A").is_ok());
        assert!(Nric::new("T0000000Z").is_ok());
        // Lowercase input is canonicalized.
        assert_eq!(Nric::new("s1234567a").unwrap().as_str(), "S1234567A");

        assert!(Nric::new("").is_err());
        assert!(Nric::new("A1234567B").is_err());
        assert!(Nric::new("S123456A").is_err());
        assert!(Nric::new("S12345678").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::new("999").is_ok());
        assert!(Phone::new("99272758").is_ok());

        assert!(Phone::new("12").is_err());
        assert!(Phone::new("9927 2758").is_err());
        assert!(Phone::new("phone").is_err());
    }

    #[test]
    fn test_new_patient() {
        let patient = make_patient();
        assert_eq!(patient.name, "Bernice Yu");
        assert_eq!(patient.id.len(), 36); // UUID format
        assert!(patient.address.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Patient::new(
            "   ".into(),
            Nric::new("S0123456A").unwrap(),
            Phone::new("99272758").unwrap(),
        );
        assert_eq!(result, Err(PatientError::EmptyName));
    }

    #[test]
    fn test_patient_key_matching() {
        let patient = make_patient();

        assert!(PatientKey::ByNric(Nric::new("S0123456A").unwrap()).matches(&patient));
        assert!(PatientKey::ByPhone(Phone::new("99272758").unwrap()).matches(&patient));

        assert!(!PatientKey::ByNric(Nric::new("S7654321B").unwrap()).matches(&patient));
        assert!(!PatientKey::ByPhone(Phone::new("88888888").unwrap()).matches(&patient));
    }
}
