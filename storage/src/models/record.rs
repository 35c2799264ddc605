//! Message log record model.
//!
//! Maps to the `message_log` table and is produced by the row accumulator.

use chrono::NaiveDateTime;
use serde::Serialize;

/// `strftime` format of `created_at`, as stored by SQLite.
pub const CREATED_AT_SQL_FORMAT: &str = "%Y-%m-%d %H-%M";

/// One persisted message. All fields are assigned or validated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub message: String,
    pub category: i64,
    /// Store clock (UTC) at insert time, `YYYY-MM-DD HH-MM`.
    pub created_at: String,
}

impl Record {
    /// Parses `created_at`; `None` if the stored text is not in the store's format.
    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_SQL_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn record(created_at: &str) -> Record {
        Record {
            id: 1,
            message: "Hello".to_string(),
            category: 1,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_created_at_time_parses_store_format() {
        let time = record("2024-03-09 17-05").created_at_time().unwrap();
        assert_eq!(time.year(), 2024);
        assert_eq!(time.day(), 9);
        assert_eq!(time.hour(), 17);
        assert_eq!(time.minute(), 5);
    }

    #[test]
    fn test_created_at_time_rejects_other_formats() {
        assert!(record("2024-03-09 17:05:00").created_at_time().is_none());
    }
}
