//! Text form of a guess as both storage backends persist it.
//!
//! Every column is stored as text so the CSV file and the SQLite table hold
//! exactly what the results page shows. Reading converts back and reports rows
//! that no longer parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::guess::{Gender, GuessRecord, DUE_DATE_FORMAT, DUE_TIME_FORMAT};

/// Timestamps written without an offset (older guess books) are read as UTC
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRow {
    pub timestamp: String,
    pub guest_name: String,
    #[serde(default)]
    pub baby_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub due_time: String,
    #[serde(default)]
    pub weight_kg: String,
}

impl GuessRow {
    /// Column values in storage order
    pub fn into_columns(self) -> [String; 7] {
        [
            self.timestamp,
            self.guest_name,
            self.baby_name,
            self.gender,
            self.due_date,
            self.due_time,
            self.weight_kg,
        ]
    }
}

impl From<&GuessRecord> for GuessRow {
    fn from(record: &GuessRecord) -> Self {
        Self {
            timestamp: record.timestamp_string(),
            guest_name: record.guest_name().to_string(),
            baby_name: record.baby_name().to_string(),
            gender: record.gender().as_str().to_string(),
            due_date: record.due_date_string(),
            due_time: record.due_time_string(),
            weight_kg: record.weight_kg_string(),
        }
    }
}

impl TryFrom<GuessRow> for GuessRecord {
    type Error = String;

    fn try_from(row: GuessRow) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&row.timestamp)?;

        if row.guest_name.trim().is_empty() {
            return Err("guest_name is empty".to_string());
        }

        let gender = row
            .gender
            .parse::<Gender>()
            .map_err(|e| e.to_string())?;

        let due_date = optional(&row.due_date, |s| {
            NaiveDate::parse_from_str(s, DUE_DATE_FORMAT)
                .map_err(|e| format!("invalid due_date {:?}: {}", s, e))
        })?;
        let due_time = optional(&row.due_time, |s| {
            NaiveTime::parse_from_str(s, DUE_TIME_FORMAT)
                .map_err(|e| format!("invalid due_time {:?}: {}", s, e))
        })?;
        let weight_kg = optional(&row.weight_kg, |s| {
            s.parse::<f64>()
                .map_err(|e| format!("invalid weight_kg {:?}: {}", s, e))
        })?;

        Ok(GuessRecord::from_parts(
            timestamp,
            row.guest_name,
            row.baby_name,
            gender,
            due_date,
            due_time,
            weight_kg,
        ))
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp {:?}: {}", value, e))
}

fn optional<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<Option<T>, String> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::guess::SubmitGuessCommand;
    use crate::domain::guess_validation::validate;

    fn row(timestamp: &str) -> GuessRow {
        GuessRow {
            timestamp: timestamp.to_string(),
            guest_name: "Aunt May".to_string(),
            baby_name: String::new(),
            gender: String::new(),
            due_date: String::new(),
            due_time: String::new(),
            weight_kg: String::new(),
        }
    }

    #[test]
    fn test_record_survives_text_form() {
        let command = SubmitGuessCommand {
            guest_name: "Aunt May".to_string(),
            baby_name: "Peter".to_string(),
            gender: "boy".to_string(),
            due_date: "2025-04-02".to_string(),
            due_time: "08:15".to_string(),
            weight: "3.50".to_string(),
        };
        let record = validate(&command).unwrap();

        let row = GuessRow::from(&record);
        assert_eq!(row.weight_kg, "3.5");
        assert_eq!(row.gender, "boy");

        let restored = GuessRecord::try_from(row).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_naive_timestamp_is_read_as_utc() {
        let record = GuessRecord::try_from(row("2025-03-01T10:00:00.123456")).unwrap();
        assert_eq!(record.timestamp_string(), "2025-03-01T10:00:00.123456Z");
    }

    #[test]
    fn test_offset_timestamp_is_converted_to_utc() {
        let record = GuessRecord::try_from(row("2025-03-01T12:00:00+02:00")).unwrap();
        assert_eq!(record.timestamp_string(), "2025-03-01T10:00:00Z");
    }

    #[test]
    fn test_corrupt_rows_are_rejected() {
        assert!(GuessRecord::try_from(row("yesterday")).is_err());

        let mut bad_weight = row("2025-03-01T10:00:00Z");
        bad_weight.weight_kg = "heavy".to_string();
        let reason = GuessRecord::try_from(bad_weight).unwrap_err();
        assert!(reason.contains("weight_kg"));

        let mut no_guest = row("2025-03-01T10:00:00Z");
        no_guest.guest_name = " ".to_string();
        assert!(GuessRecord::try_from(no_guest).is_err());
    }
}
