//! Bulk load of persisted records with skip-and-count data repair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ClinicBook;
use crate::models::{Appointment, Nric, Patient, PatientError, Phone, TimeError, TimeValue};

/// Persisted patient form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub nric: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Persisted appointment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRecord {
    pub nric: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Why a persisted record was unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("malformed date: {0:?}")]
    BadDate(String),

    #[error(transparent)]
    BadTime(#[from] TimeError),

    #[error(transparent)]
    BadIdentity(#[from] PatientError),

    #[error("window ends before it starts")]
    InvalidWindow,
}

/// Counters from one bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Appointment records dropped: corrupt, unknown patient, or overlapping
    /// an already-loaded appointment.
    pub removed_appointments: usize,
    /// Patient records dropped: corrupt or identity-field duplicates.
    pub removed_patients: usize,
}

impl ClinicBook {
    /// Build a book from persisted records.
    ///
    /// Every record is decoded and inserted independently. A bad or
    /// conflicting record is dropped and counted, never aborting the rest of
    /// the load; this is deliberately the opposite of the interactive path,
    /// which fails fast on the first problem.
    pub fn from_records(
        patients: Vec<PatientRecord>,
        appointments: Vec<AppointmentRecord>,
    ) -> (Self, LoadReport) {
        let mut book = ClinicBook::new();
        let mut report = LoadReport::default();

        for record in patients {
            let kept = decode_patient(&record)
                .map(|patient| book.add_patient(patient).is_ok())
                .unwrap_or(false);
            if !kept {
                report.removed_patients += 1;
            }
        }

        for record in appointments {
            let kept = decode_appointment(&record)
                .map(|appointment| book.add_appointment(appointment).is_ok())
                .unwrap_or(false);
            if !kept {
                report.removed_appointments += 1;
            }
        }

        (book, report)
    }

    /// The persisted form of the current book contents.
    pub fn to_records(&self) -> (Vec<PatientRecord>, Vec<AppointmentRecord>) {
        let patients = self
            .patients()
            .iter()
            .map(|p| PatientRecord {
                name: p.name.clone(),
                nric: p.nric.as_str().to_string(),
                phone: p.phone.as_str().to_string(),
                address: p.address.clone(),
            })
            .collect();
        let appointments = self
            .appointments()
            .iter()
            .map(|a| AppointmentRecord {
                nric: a.patient_nric.as_str().to_string(),
                date: a.date.format("%Y-%m-%d").to_string(),
                start: a.start.to_string(),
                end: a.end.to_string(),
                is_done: a.is_done,
            })
            .collect();
        (patients, appointments)
    }
}

fn decode_patient(record: &PatientRecord) -> Result<Patient, PatientError> {
    let nric = Nric::new(&record.nric)?;
    let phone = Phone::new(&record.phone)?;
    let mut patient = Patient::new(record.name.clone(), nric, phone)?;
    patient.address = record.address.clone();
    Ok(patient)
}

fn decode_appointment(record: &AppointmentRecord) -> Result<Appointment, RecordError> {
    let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
        .map_err(|_| RecordError::BadDate(record.date.clone()))?;
    let start = TimeValue::parse(&record.start)?;
    let end = TimeValue::parse(&record.end)?;
    if end < start {
        return Err(RecordError::InvalidWindow);
    }
    let nric = Nric::new(&record.nric)?;
    let mut appointment = Appointment::new(date, start, end, nric);
    appointment.is_done = record.is_done;
    Ok(appointment)
}
