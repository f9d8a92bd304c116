use std::fmt::{self, Display};

use crate::flight_field::FlightField;

/// Errors returned by the roster, the squawk allocator and the paste parser.
///
/// Every operation that fails leaves the roster exactly as it was, so these
/// are meant to be shown to the operator and then dropped.
#[derive(Debug, PartialEq, Clone)]
pub enum RosterError {
    /// A required field is not present in the submitted field set.
    MissingField(FlightField),
    /// A required field is present but blank after trimming.
    EmptyField(FlightField),
    /// Pasted text has a line without a colon or with an unknown key.
    InvalidFormat,
    /// Pasted text parsed line by line but lacks a required field.
    MissingRequiredField(FlightField),
    /// No discrete squawk code is left to hand out.
    AllocationExhausted,
    /// The selected position does not exist in the roster.
    IndexOutOfRange { index: usize, len: usize },
    /// Writing an export failed.
    ExportError(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::MissingField(field) => write!(f, "Missing field: {}", field),
            RosterError::EmptyField(field) => {
                write!(f, "All fields must be filled! '{}' is empty", field)
            }
            RosterError::InvalidFormat => write!(
                f,
                "Invalid format. Please ensure the input matches the required format."
            ),
            RosterError::MissingRequiredField(field) => {
                write!(f, "Missing required field: {}", field)
            }
            RosterError::AllocationExhausted => {
                write!(f, "No squawk codes left to assign")
            }
            RosterError::IndexOutOfRange { index, len } => write!(
                f,
                "Flight {} does not exist (roster holds {} flights)",
                index, len
            ),
            RosterError::ExportError(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::ExportError(err.to_string())
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        RosterError::ExportError(err.to_string())
    }
}
