//! Operating-hours configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{TimeError, TimeInterval, TimeValue};

/// Errors from building or parsing operating hours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("session {0} ends before it starts")]
    InvalidSession(usize),

    #[error("sessions must be in chronological order")]
    UnorderedSessions,

    #[error("sessions {0} and {1} overlap")]
    OverlappingSessions(usize, usize),

    #[error(transparent)]
    BadTime(#[from] TimeError),

    #[error("malformed configuration: {0}")]
    Parse(String),
}

/// The clinic's operating sessions for one day: valid, chronologically
/// ordered, pairwise disjoint.
///
/// A day may have several sessions with breaks between them. An empty list
/// is a closed day, not an error. Where the sessions come from (a static
/// file, a per-day override) is the caller's business; this type only
/// guarantees the shape the sweep engine expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatingHours {
    sessions: Vec<TimeInterval>,
}

impl OperatingHours {
    pub fn new(sessions: Vec<TimeInterval>) -> Result<Self, ConfigError> {
        for (index, session) in sessions.iter().enumerate() {
            if !session.is_valid() {
                return Err(ConfigError::InvalidSession(index));
            }
        }
        for (index, pair) in sessions.windows(2).enumerate() {
            if pair[1].start < pair[0].start {
                return Err(ConfigError::UnorderedSessions);
            }
            if pair[1].start < pair[0].end {
                return Err(ConfigError::OverlappingSessions(index, index + 1));
            }
        }
        Ok(Self { sessions })
    }

    /// Parse from TOML of the form
    /// `sessions = [["08:00", "12:00"], ["13:00", "22:00"]]`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Raw {
            sessions: Vec<(String, String)>,
        }

        let raw: Raw = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut sessions = Vec::with_capacity(raw.sessions.len());
        for (start, end) in raw.sessions {
            sessions.push(TimeInterval::new(
                TimeValue::parse(&start)?,
                TimeValue::parse(&end)?,
            ));
        }
        Self::new(sessions)
    }

    pub fn sessions(&self) -> &[TimeInterval] {
        &self.sessions
    }
}
