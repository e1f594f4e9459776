use serde::{Deserialize, Serialize};

/// Column names of the guess book, in the order they are stored and displayed
pub const GUESS_COLUMNS: [&str; 7] = [
    "timestamp",
    "guest_name",
    "baby_name",
    "gender",
    "due_date",
    "due_time",
    "weight_kg",
];

/// Raw form submission as posted by the guess form.
///
/// Every field is free text exactly as the browser sent it; missing fields
/// deserialize as empty strings. Validation happens in the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessForm {
    pub guest_name: String,
    pub baby_name: String,
    /// "boy", "girl" or empty for "not sure"
    pub gender: String,
    /// YYYY-MM-DD
    pub due_date: String,
    /// HH:MM (24 hour)
    pub due_time: String,
    /// Birth weight guess in kilograms
    pub weight: String,
}

/// A stored guess rendered as display strings, one per guess book column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessEntry {
    /// RFC 3339 timestamp (UTC) of when the guess was submitted
    pub timestamp: String,
    pub guest_name: String,
    pub baby_name: String,
    pub gender: String,
    pub due_date: String,
    pub due_time: String,
    pub weight_kg: String,
}

impl GuessEntry {
    /// Cell values in `GUESS_COLUMNS` order
    pub fn cells(&self) -> [&str; 7] {
        [
            self.timestamp.as_str(),
            self.guest_name.as_str(),
            self.baby_name.as_str(),
            self.gender.as_str(),
            self.due_date.as_str(),
            self.due_time.as_str(),
            self.weight_kg.as_str(),
        ]
    }
}

/// One problem with one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name, e.g. "guest_name" or "weight"
    pub field: String,
    /// Machine-readable error code, e.g. "MISSING_REQUIRED_FIELD"
    pub code: String,
    /// Human-readable message suitable for showing next to the field
    pub message: String,
}

/// Response to a guess submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitGuessResponse {
    pub success: bool,
    /// Validation problems, empty on success
    pub errors: Vec<FieldError>,
    /// The stored guess, present on success
    pub entry: Option<GuessEntry>,
    /// Set when the guess was valid but could not be saved
    pub storage_error: Option<String>,
}

/// Request to view the guess book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsRequest {
    /// Password typed into the results gate; None for a plain page view
    pub password: Option<String>,
}

/// Guess book listing, or the reason it stayed locked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub unlocked: bool,
    pub headers: Vec<String>,
    pub rows: Vec<GuessEntry>,
    /// Message for the locked page, e.g. after a wrong password
    pub error: Option<String>,
}

impl ResultsResponse {
    /// A locked response carrying no guess data
    pub fn locked(error: Option<String>) -> Self {
        Self {
            unlocked: false,
            headers: Vec::new(),
            rows: Vec::new(),
            error,
        }
    }
}
