// Birthday module
// A named target instant tracked by the birthday registry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for birthday entries. Monotonic within a registry and
/// never reused, so a stale id can only ever miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BirthdayId(pub u64);

impl std::fmt::Display for BirthdayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rejection reasons when a birthday is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("date is required")]
    MissingDate,
    #[error("unrecognised date '{0}'")]
    InvalidDate(String),
}

/// A birthday as shown in the list and counted down to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayEntry {
    pub id: BirthdayId,
    pub name: String,
    pub date: DateTime<Utc>,
}

impl BirthdayEntry {
    /// Create a new entry, validating the name.
    ///
    /// # Examples
    /// ```
    /// use birthday_clock::models::birthday::{BirthdayEntry, BirthdayId};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    /// let entry = BirthdayEntry::new(BirthdayId(1), "Ann", date).unwrap();
    /// assert_eq!(entry.name, "Ann");
    /// ```
    pub fn new(
        id: BirthdayId,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        Ok(Self { id, name, date })
    }
}
