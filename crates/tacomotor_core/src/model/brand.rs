//! Brand record and its inputs.

use super::validation::{non_blank, required_text};
use super::{Identified, RecordId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted car brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: RecordId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Identified for Brand {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Full brand field set, used by create and replace.
///
/// Unknown keys in the request body (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: Option<String>,
}

/// Validated view of a [`NewBrand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandFields<'a> {
    pub name: &'a str,
}

impl NewBrand {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// # Errors
    /// - `MissingField("name")` / `BlankField("name")`.
    pub fn validate(&self) -> Result<BrandFields<'_>, ValidationError> {
        Ok(BrandFields {
            name: required_text("name", self.name.as_deref())?,
        })
    }
}

/// Partial brand update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPatch {
    pub name: Option<String>,
}

impl BrandPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the validated patch view.
    ///
    /// # Errors
    /// - `BlankField("name")` when `name` is present but blank.
    pub fn validate(&self) -> Result<BrandPatchFields<'_>, ValidationError> {
        let name = match self.name.as_deref() {
            Some(name) => Some(non_blank("name", name)?),
            None => None,
        };
        Ok(BrandPatchFields { name })
    }
}

/// Validated view of a [`BrandPatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPatchFields<'a> {
    pub name: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::{BrandPatch, NewBrand};
    use crate::model::ValidationError;

    #[test]
    fn new_brand_requires_name() {
        assert_eq!(
            NewBrand::default().validate(),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            NewBrand::named("   ").validate(),
            Err(ValidationError::BlankField("name"))
        );
    }

    #[test]
    fn new_brand_trims_name() {
        let draft = NewBrand::named("  Volkswagen ");
        assert_eq!(draft.validate().unwrap().name, "Volkswagen");
    }

    #[test]
    fn new_brand_ignores_caller_supplied_id() {
        let draft: NewBrand =
            serde_json::from_str(r#"{"id": 99, "name": "Toyota", "createdAt": "x"}"#).unwrap();
        assert_eq!(draft, NewBrand::named("Toyota"));
    }

    #[test]
    fn empty_patch_is_valid_and_blank_name_is_not() {
        assert_eq!(BrandPatch::default().validate().unwrap().name, None);
        assert_eq!(
            BrandPatch::rename("").validate(),
            Err(ValidationError::BlankField("name"))
        );
    }
}
