//! Input validation errors for catalog drafts and patches.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised before any input reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent from the input.
    MissingField(&'static str),
    /// A required text field was present but empty or whitespace.
    BlankField(&'static str),
    /// A field that must hold a record id holds a non-positive value.
    InvalidReference { field: &'static str, value: i64 },
    /// An id received as text is not a positive integer.
    MalformedId(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "`{field}` is required"),
            Self::BlankField(field) => write!(f, "`{field}` must not be blank"),
            Self::InvalidReference { field, value } => {
                write!(f, "`{field}` must be a positive id, got {value}")
            }
            Self::MalformedId(raw) => write!(f, "invalid id `{raw}`: expected a positive integer"),
        }
    }
}

impl Error for ValidationError {}

/// Returns the trimmed value of a required text field.
pub(crate) fn required_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    non_blank(field, value)
}

/// Returns the trimmed value of a text field that must not be blank.
pub(crate) fn non_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed)
}

/// Checks that a reference field holds a usable record id.
pub(crate) fn reference_id(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::InvalidReference { field, value });
    }
    Ok(value)
}
