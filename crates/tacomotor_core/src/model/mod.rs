//! Catalog domain model: brands and the parts that reference them.
//!
//! # Responsibility
//! - Define the persisted record shapes and their JSON representation.
//! - Define the typed request inputs (drafts and patches) and their checks.
//!
//! # Invariants
//! - Record ids are positive integers assigned by storage, never by callers.
//! - Required text fields are never blank once validated.

pub mod brand;
pub mod part;
pub mod validation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub use validation::ValidationError;

/// Storage-assigned primary key shared by every catalog resource.
pub type RecordId = i64;

/// Timestamp type exposed on every record as `createdAt` / `updatedAt`.
pub type Timestamp = DateTime<Utc>;

/// Records that carry a storage-assigned id.
pub trait Identified {
    fn id(&self) -> RecordId;
}

/// Parses a record id received as text (for example a URL path segment).
///
/// # Errors
/// - `ValidationError::MalformedId` when `raw` is not a positive integer
///   written with ASCII digits only (no sign, no surrounding whitespace).
pub fn parse_record_id(raw: &str) -> Result<RecordId, ValidationError> {
    let malformed = || ValidationError::MalformedId(raw.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match raw.parse::<RecordId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(malformed()),
    }
}

/// Converts stored epoch milliseconds into a record timestamp.
pub fn timestamp_from_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

/// Current wall clock in epoch milliseconds, as written to storage.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Distinguishes an absent JSON field (`None`) from an explicit `null`
/// (`Some(None)`). Pair with `#[serde(default)]`.
pub(crate) fn explicit_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_record_id, timestamp_from_millis, ValidationError};

    #[test]
    fn parse_record_id_accepts_positive_integers() {
        assert_eq!(parse_record_id("42"), Ok(42));
        assert_eq!(parse_record_id("007"), Ok(7));
    }

    #[test]
    fn parse_record_id_rejects_non_numeric_and_non_positive_values() {
        for raw in [
            "abc",
            "",
            "0",
            "-3",
            "+7",
            " 7 ",
            "7\n",
            "1.5",
            "99999999999999999999",
        ] {
            assert_eq!(
                parse_record_id(raw),
                Err(ValidationError::MalformedId(raw.to_string())),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn timestamp_from_millis_keeps_millisecond_precision() {
        let ts = timestamp_from_millis(1_700_000_000_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
    }
}
