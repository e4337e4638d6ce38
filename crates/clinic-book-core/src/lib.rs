//! Clinic Book Core Library
//!
//! Patient and appointment management core for a clinic desktop app: the
//! sweep-line free-slot engine, time-overlap conflict detection, and the
//! monthly archive rollover for expired appointments.
//!
//! # Architecture
//!
//! ```text
//! OperatingHours ─────────────┐
//!                             ▼
//!                     ┌──────────────┐    free intervals
//!                     │ Sweep Engine │◄───────────────────┐
//!                     └──────────────┘                    │
//!                     ┌──────────────┐  insert / load  ┌──┴─────────┐
//!                     │   Overlap    │◄────────────────│ ClinicBook │
//!                     │   Detector   │                 │  patients  │
//!                     └──────────────┘                 │  appts     │
//!                                                      └──────┬─────┘
//!                                                             │ archive pass
//!                                                             ▼
//!                                                 ┌──────────────────┐
//!                                                 │ Archive Rollover │   partition
//!                                                 │  (year, month)   │──► files
//!                                                 └──────────────────┘
//! ```
//!
//! # Core Principle
//!
//! Interactive operations fail fast on the first problem; bulk loads and
//! archive passes drop or defer individual bad records and keep going,
//! reporting what they skipped through returned counters.
//!
//! # Modules
//!
//! - [`models`]: domain types (TimeValue, TimeInterval, Patient, Appointment)
//! - [`schedule`]: sweep-line free-slot engine and overlap detection
//! - [`archive`]: rollover engine and monthly partition storage
//! - [`book`]: the owning patient/appointment aggregate and bulk load
//! - [`config`]: validated operating-hours sessions

pub mod archive;
pub mod book;
pub mod config;
pub mod models;
pub mod schedule;

// Re-export commonly used types
pub use archive::{
    ArchiveError, ArchiveStats, ArchiveStore, FileArchiveStore, PartitionKey, RolloverOutcome,
};
pub use book::{AppointmentRecord, BookError, ClinicBook, LoadReport, PatientRecord};
pub use config::OperatingHours;
pub use models::{
    Appointment, ArchivedAppointment, IntervalList, Nric, Patient, PatientKey, Phone,
    TimeInterval, TimeValue,
};
pub use schedule::{free_intervals, free_intervals_for, has_overlaps_with};
