//! Year-and-month partition keys for archived records.

use std::fmt;

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// The `(year, month)` bucket an archived appointment belongs to.
///
/// Keys compare equal exactly when year and month both match, so a day
/// change inside a month never moves records to a new partition, and the
/// same month always resolves to the same durable file across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    year: i32,
    /// 1-12
    month: u32,
}

impl PartitionKey {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Three-letter uppercase month abbreviation: `MAY`, `OCT`, ...
    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    /// Deterministic partition file name. Repeated archival passes for the
    /// same month target the same file and append to it.
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.year, self.month_abbreviation())
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month_abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_key_from_date() {
        let key = PartitionKey::for_date(date(2010, 5, 17));
        assert_eq!(key.year(), 2010);
        assert_eq!(key.month_abbreviation(), "MAY");
    }

    #[test]
    fn test_day_change_keeps_the_key() {
        assert_eq!(
            PartitionKey::for_date(date(2010, 5, 1)),
            PartitionKey::for_date(date(2010, 5, 31))
        );
    }

    #[test]
    fn test_month_and_year_changes_make_new_keys() {
        let may = PartitionKey::for_date(date(2010, 5, 1));
        assert_ne!(may, PartitionKey::for_date(date(2010, 10, 1)));
        assert_ne!(may, PartitionKey::for_date(date(2011, 5, 1)));
    }

    #[test]
    fn test_file_name_is_stable() {
        let key = PartitionKey::for_date(date(2010, 5, 17));
        assert_eq!(key.file_name(), "2010-MAY.json");
        assert_eq!(key.file_name(), PartitionKey::for_date(date(2010, 5, 3)).file_name());

        assert_eq!(
            PartitionKey::for_date(date(2010, 10, 2)).file_name(),
            "2010-OCT.json"
        );
    }
}
