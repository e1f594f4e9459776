use crate::domain::commands::guess::SubmitGuessCommand;
use crate::domain::models::guess::{GuessField, GuessRecord, ValidationError};
use shared::{FieldError, GuessEntry, GuessForm};

pub struct GuessMapper;

impl GuessMapper {
    /// Convert domain GuessRecord to shared GuessEntry (DTO)
    pub fn to_dto(record: &GuessRecord) -> GuessEntry {
        GuessEntry {
            timestamp: record.timestamp_string(),
            guest_name: record.guest_name().to_string(),
            baby_name: record.baby_name().to_string(),
            gender: record.gender().as_str().to_string(),
            due_date: record.due_date_string(),
            due_time: record.due_time_string(),
            weight_kg: record.weight_kg_string(),
        }
    }

    /// Convert the posted form into a domain command
    pub fn to_command(form: GuessForm) -> SubmitGuessCommand {
        SubmitGuessCommand {
            guest_name: form.guest_name,
            baby_name: form.baby_name,
            gender: form.gender,
            due_date: form.due_date,
            due_time: form.due_time,
            weight: form.weight,
        }
    }

    /// Convert a validation error into a field error for the form
    pub fn to_field_error(error: &ValidationError) -> FieldError {
        FieldError {
            field: error.field().form_name().to_string(),
            code: error.code().to_string(),
            message: Self::user_message(error),
        }
    }

    fn user_message(error: &ValidationError) -> String {
        match error {
            ValidationError::MissingRequiredField { .. } => "Please enter your name".to_string(),
            ValidationError::TooLong { max, .. } => {
                format!("Please use at most {} characters", max)
            }
            ValidationError::InvalidFormat { field, .. } => match field {
                GuessField::DueDate => "Please enter a date like 2025-04-02".to_string(),
                GuessField::DueTime => "Please enter a time like 08:15".to_string(),
                _ => "Please enter a number like 3.4".to_string(),
            },
            ValidationError::InvalidEnumValue { .. } => "Please choose boy, girl or not sure".to_string(),
            ValidationError::OutOfRange { min, max, .. } => {
                format!("Please enter a weight between {} and {} kg", min, max)
            }
        }
    }
}
