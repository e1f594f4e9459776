//! Domain model for a guess book entry.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;

pub const GUEST_NAME_MAX_CHARS: usize = 80;
pub const BABY_NAME_MAX_CHARS: usize = 120;
pub const MIN_WEIGHT_KG: f64 = 0.0;
pub const MAX_WEIGHT_KG: f64 = 10.0;
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DUE_TIME_FORMAT: &str = "%H:%M";
/// Time inputs with a sub-minute step post seconds too; they are dropped
pub const DUE_TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Gender guess. `Unspecified` is what the form posts for "not sure".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Unspecified,
    Boy,
    Girl,
}

impl Gender {
    /// Stored and displayed value; unspecified is the empty string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unspecified => "",
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unspecified" => Ok(Gender::Unspecified),
            "boy" => Ok(Gender::Boy),
            "girl" => Ok(Gender::Girl),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

/// Form fields a guess is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessField {
    GuestName,
    BabyName,
    Gender,
    DueDate,
    DueTime,
    Weight,
}

impl GuessField {
    pub const ALL: [GuessField; 6] = [
        GuessField::GuestName,
        GuessField::BabyName,
        GuessField::Gender,
        GuessField::DueDate,
        GuessField::DueTime,
        GuessField::Weight,
    ];

    /// Name of the field as posted by the form
    pub fn form_name(&self) -> &'static str {
        match self {
            GuessField::GuestName => "guest_name",
            GuessField::BabyName => "baby_name",
            GuessField::Gender => "gender",
            GuessField::DueDate => "due_date",
            GuessField::DueTime => "due_time",
            GuessField::Weight => "weight",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.form_name() == name)
    }
}

impl fmt::Display for GuessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// A single problem found while validating a guess
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingRequiredField { field: GuessField },
    #[error("{field} is too long ({actual} characters, maximum is {max})")]
    TooLong {
        field: GuessField,
        max: usize,
        actual: usize,
    },
    #[error("{field} has an invalid format: {value:?}")]
    InvalidFormat { field: GuessField, value: String },
    #[error("{field} must be one of boy, girl or empty: {value:?}")]
    InvalidEnumValue { field: GuessField, value: String },
    #[error("{field} must be between {min} and {max}: {value}")]
    OutOfRange {
        field: GuessField,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    pub fn field(&self) -> GuessField {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidEnumValue { field, .. }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }

    /// Stable error code for callers that branch on the kind of problem
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            ValidationError::TooLong { .. } => "TOO_LONG",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// One guest's guess. Immutable once built; the only ways to obtain one are
/// validating raw form input or reading it back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessRecord {
    timestamp: DateTime<Utc>,
    guest_name: String,
    baby_name: String,
    gender: Gender,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    weight_kg: Option<f64>,
}

impl GuessRecord {
    /// Rebuild a record from already validated parts (validation and storage only)
    pub(crate) fn from_parts(
        timestamp: DateTime<Utc>,
        guest_name: String,
        baby_name: String,
        gender: Gender,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
        weight_kg: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            guest_name,
            baby_name,
            gender,
            due_date,
            due_time,
            weight_kg,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn baby_name(&self) -> &str {
        &self.baby_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn due_time(&self) -> Option<NaiveTime> {
        self.due_time
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// RFC 3339 timestamp with full sub-second precision, always in UTC ("Z")
    pub fn timestamp_string(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }

    /// Due date as YYYY-MM-DD, empty when not guessed
    pub fn due_date_string(&self) -> String {
        self.due_date
            .map(|date| date.format(DUE_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Due time as HH:MM, empty when not guessed
    pub fn due_time_string(&self) -> String {
        self.due_time
            .map(|time| time.format(DUE_TIME_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Weight as its shortest decimal form ("3.50" is stored as "3.5"), empty when not guessed
    pub fn weight_kg_string(&self) -> String {
        self.weight_kg.map(|w| w.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("boy".parse::<Gender>().unwrap(), Gender::Boy);
        assert_eq!("Girl".parse::<Gender>().unwrap(), Gender::Girl);
        assert_eq!("".parse::<Gender>().unwrap(), Gender::Unspecified);
        assert_eq!("unspecified".parse::<Gender>().unwrap(), Gender::Unspecified);
        assert!("twins".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_unspecified_is_stored_empty() {
        assert_eq!(Gender::Unspecified.as_str(), "");
        assert_eq!(Gender::Boy.to_string(), "boy");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in GuessField::ALL {
            assert_eq!(GuessField::from_form_name(field.form_name()), Some(field));
        }
        assert_eq!(GuessField::from_form_name("password"), None);
    }

    #[test]
    fn test_error_codes() {
        let error = ValidationError::OutOfRange {
            field: GuessField::Weight,
            value: 15.5,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        };
        assert_eq!(error.code(), "OUT_OF_RANGE");
        assert_eq!(error.field(), GuessField::Weight);
        assert_eq!(error.to_string(), "weight must be between 0 and 10: 15.5");
    }

    #[test]
    fn test_display_strings() {
        let record = GuessRecord::from_parts(
            "2025-03-01T10:00:00.250Z".parse().unwrap(),
            "Aunt May".to_string(),
            String::new(),
            Gender::Unspecified,
            NaiveDate::from_ymd_opt(2025, 4, 2),
            NaiveTime::from_hms_opt(8, 5, 0),
            Some(3.5),
        );

        assert_eq!(record.timestamp_string(), "2025-03-01T10:00:00.250Z");
        assert_eq!(record.due_date_string(), "2025-04-02");
        assert_eq!(record.due_time_string(), "08:05");
        assert_eq!(record.weight_kg_string(), "3.5");
    }
}
