//! The clinic book: the owning aggregate for patients and appointments.

mod load;

pub use load::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::archive::{roll_over, ArchiveStats, ArchiveStore};
use crate::config::OperatingHours;
use crate::models::{Appointment, IntervalList, Patient, PatientKey};
use crate::schedule;

/// Errors surfaced by interactive book operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookError {
    #[error("a patient with the same NRIC or phone number already exists")]
    DuplicatePatient,

    #[error("no patient matches the given key")]
    PatientNotFound,

    #[error("no patient with NRIC {0} exists")]
    UnknownPatient(String),

    #[error("the appointment overlaps an existing appointment on {0}")]
    AppointmentConflict(NaiveDate),

    #[error("no such appointment")]
    AppointmentNotFound,
}

pub type BookResult<T> = Result<T, BookError>;

/// In-memory aggregate of the clinic's patients and appointments.
///
/// Every operation runs to completion before the next begins; nothing here
/// is safe to call concurrently without external mutual exclusion.
#[derive(Debug, Default)]
pub struct ClinicBook {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
}

impl ClinicBook {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Add a patient, rejecting identity-field duplicates.
    pub fn add_patient(&mut self, patient: Patient) -> BookResult<()> {
        let nric_key = PatientKey::ByNric(patient.nric.clone());
        let phone_key = PatientKey::ByPhone(patient.phone.clone());
        if self
            .patients
            .iter()
            .any(|p| nric_key.matches(p) || phone_key.matches(p))
        {
            return Err(BookError::DuplicatePatient);
        }
        self.patients.push(patient);
        Ok(())
    }

    pub fn find_patient(&self, key: &PatientKey) -> Option<&Patient> {
        self.patients.iter().find(|p| key.matches(p))
    }

    /// Remove the patient matching `key`, together with their appointments.
    pub fn remove_patient(&mut self, key: &PatientKey) -> BookResult<Patient> {
        let index = self
            .patients
            .iter()
            .position(|p| key.matches(p))
            .ok_or(BookError::PatientNotFound)?;
        let patient = self.patients.remove(index);
        self.appointments.retain(|a| a.patient_nric != patient.nric);
        Ok(patient)
    }

    /// Update the editable fields of the patient matching `key`.
    pub fn edit_patient(
        &mut self,
        key: &PatientKey,
        name: Option<String>,
        address: Option<String>,
    ) -> BookResult<()> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| key.matches(p))
            .ok_or(BookError::PatientNotFound)?;
        if let Some(name) = name {
            patient.name = name;
        }
        if let Some(address) = address {
            patient.address = Some(address);
        }
        patient.touch();
        Ok(())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// True iff `candidate` clashes with any booked appointment.
    pub fn has_overlaps_with(&self, candidate: &Appointment) -> bool {
        schedule::has_overlaps_with(candidate, &self.appointments)
    }

    /// Book an appointment. The interactive path fails fast: an unknown
    /// patient or a time conflict rejects the whole operation.
    pub fn add_appointment(&mut self, appointment: Appointment) -> BookResult<()> {
        let patient_key = PatientKey::ByNric(appointment.patient_nric.clone());
        if self.find_patient(&patient_key).is_none() {
            return Err(BookError::UnknownPatient(
                appointment.patient_nric.to_string(),
            ));
        }
        if self.has_overlaps_with(&appointment) {
            return Err(BookError::AppointmentConflict(appointment.date));
        }
        self.appointments.push(appointment);
        Ok(())
    }

    pub fn remove_appointment(&mut self, index: usize) -> BookResult<Appointment> {
        if index >= self.appointments.len() {
            return Err(BookError::AppointmentNotFound);
        }
        Ok(self.appointments.remove(index))
    }

    /// Mark the appointment at `index` as completed.
    pub fn mark_done(&mut self, index: usize) -> BookResult<()> {
        let appointment = self
            .appointments
            .get_mut(index)
            .ok_or(BookError::AppointmentNotFound)?;
        appointment.is_done = true;
        Ok(())
    }

    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.date == date).collect()
    }

    /// Free intervals on `date` inside the configured operating sessions.
    pub fn free_intervals_on(&self, date: NaiveDate, hours: &OperatingHours) -> IntervalList {
        schedule::free_intervals_for(date, hours.sessions(), &self.appointments)
    }

    // =========================================================================
    // Archive Rollover
    // =========================================================================

    /// Archive every appointment dated before `today` and keep the rest as
    /// the active collection.
    pub fn archive_past(&mut self, today: NaiveDate, store: &mut dyn ArchiveStore) -> ArchiveStats {
        let mut sorted = std::mem::take(&mut self.appointments);
        // Stable sort: intra-date insertion order survives.
        sorted.sort_by_key(|a| a.date);
        let outcome = roll_over(sorted, today, store);
        self.appointments = outcome.upcoming;
        outcome.stats
    }
}
