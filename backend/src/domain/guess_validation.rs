//! Guess validation for the baby shower guess book.
//!
//! Turns raw form input into a [`GuessRecord`]. Every field is trimmed before it
//! is checked, and all problems are collected so the form can show them in one
//! round trip instead of failing on the first bad field.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

use crate::domain::commands::guess::SubmitGuessCommand;
use crate::domain::models::guess::{
    Gender, GuessField, GuessRecord, ValidationError, BABY_NAME_MAX_CHARS, DUE_DATE_FORMAT,
    DUE_TIME_FORMAT, DUE_TIME_WITH_SECONDS_FORMAT, GUEST_NAME_MAX_CHARS, MAX_WEIGHT_KG, MIN_WEIGHT_KG,
};

/// Validate a raw guess and stamp it with the current UTC time
pub fn validate(command: &SubmitGuessCommand) -> Result<GuessRecord, Vec<ValidationError>> {
    validate_at(command, Utc::now())
}

/// Validate a raw guess and stamp it with `timestamp`
pub fn validate_at(
    command: &SubmitGuessCommand,
    timestamp: DateTime<Utc>,
) -> Result<GuessRecord, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let guest_name = command.guest_name.trim();
    if guest_name.is_empty() {
        errors.push(ValidationError::MissingRequiredField {
            field: GuessField::GuestName,
        });
    } else {
        check_length(GuessField::GuestName, guest_name, GUEST_NAME_MAX_CHARS, &mut errors);
    }

    let baby_name = command.baby_name.trim();
    check_length(GuessField::BabyName, baby_name, BABY_NAME_MAX_CHARS, &mut errors);

    let gender = command.gender.trim();
    let gender = match gender.parse::<Gender>() {
        Ok(gender) => gender,
        Err(_) => {
            errors.push(ValidationError::InvalidEnumValue {
                field: GuessField::Gender,
                value: gender.to_string(),
            });
            Gender::Unspecified
        }
    };

    let due_date = parse_optional(GuessField::DueDate, &command.due_date, &mut errors, |s| {
        NaiveDate::parse_from_str(s, DUE_DATE_FORMAT).ok()
    });
    let due_time = parse_optional(GuessField::DueTime, &command.due_time, &mut errors, |s| {
        NaiveTime::parse_from_str(s, DUE_TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, DUE_TIME_WITH_SECONDS_FORMAT))
            .ok()
            .and_then(|time| NaiveTime::from_hms_opt(time.hour(), time.minute(), 0))
    });
    let weight_kg = parse_optional(GuessField::Weight, &command.weight, &mut errors, |s| {
        s.parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            // "-0" would otherwise be stored as "-0"
            .map(|w| if w == 0.0 { 0.0 } else { w })
    });

    if let Some(weight) = weight_kg {
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight) {
            errors.push(ValidationError::OutOfRange {
                field: GuessField::Weight,
                value: weight,
                min: MIN_WEIGHT_KG,
                max: MAX_WEIGHT_KG,
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(GuessRecord::from_parts(
        timestamp,
        guest_name.to_string(),
        baby_name.to_string(),
        gender,
        due_date,
        due_time,
        weight_kg,
    ))
}

fn check_length(field: GuessField, value: &str, max: usize, errors: &mut Vec<ValidationError>) {
    let actual = value.chars().count();
    if actual > max {
        errors.push(ValidationError::TooLong { field, max, actual });
    }
}

/// Parse an optional field; blank input is `None`, unparseable input is an `InvalidFormat` error
fn parse_optional<T>(
    field: GuessField,
    raw: &str,
    errors: &mut Vec<ValidationError>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = parse(trimmed);
    if parsed.is_none() {
        errors.push(ValidationError::InvalidFormat {
            field,
            value: trimmed.to_string(),
        });
    }
    parsed
}
