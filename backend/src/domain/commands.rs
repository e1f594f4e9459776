//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to callers directly. The IO layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod guess {
    use crate::domain::models::guess::GuessField;

    /// Raw, untrimmed form input for a new guess.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct SubmitGuessCommand {
        pub guest_name: String,
        pub baby_name: String,
        pub gender: String,
        pub due_date: String,
        pub due_time: String,
        pub weight: String,
    }

    impl SubmitGuessCommand {
        /// Build a command from form field name/value pairs.
        ///
        /// Unknown field names are ignored and missing ones stay empty; when a
        /// field appears more than once the last value wins.
        pub fn from_fields<I, K, V>(fields: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: AsRef<str>,
            V: Into<String>,
        {
            let mut command = Self::default();
            for (name, value) in fields {
                if let Some(field) = GuessField::from_form_name(name.as_ref()) {
                    *command.field_mut(field) = value.into();
                }
            }
            command
        }

        pub fn field(&self, field: GuessField) -> &str {
            match field {
                GuessField::GuestName => &self.guest_name,
                GuessField::BabyName => &self.baby_name,
                GuessField::Gender => &self.gender,
                GuessField::DueDate => &self.due_date,
                GuessField::DueTime => &self.due_time,
                GuessField::Weight => &self.weight,
            }
        }

        fn field_mut(&mut self, field: GuessField) -> &mut String {
            match field {
                GuessField::GuestName => &mut self.guest_name,
                GuessField::BabyName => &mut self.baby_name,
                GuessField::Gender => &mut self.gender,
                GuessField::DueDate => &mut self.due_date,
                GuessField::DueTime => &mut self.due_time,
                GuessField::Weight => &mut self.weight,
            }
        }
    }
}

pub mod results {
    use crate::domain::models::guess::GuessRecord;

    /// Request to open the guess book.
    #[derive(Debug, Clone, Default)]
    pub struct UnlockResultsCommand {
        /// Secret supplied by the visitor; None when no secret was submitted
        pub password: Option<String>,
    }

    /// Why the guess book stayed locked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LockedReason {
        /// Nothing was submitted yet (plain page view)
        NoSecretSupplied,
        /// A secret was submitted and did not match
        IncorrectSecret,
    }

    /// Outcome of an unlock attempt.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ResultsAccess {
        Unlocked(Vec<GuessRecord>),
        Locked { reason: LockedReason },
    }
}
