//! Part record and its inputs.
//!
//! A part carries the id of one brand. The reference is not enforced by
//! storage: deleting a brand leaves its parts in place.

use super::validation::{non_blank, reference_id, required_text};
use super::{explicit_field, Identified, RecordId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted car part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: RecordId,
    pub brand_id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Identified for Part {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Full part field set, used by create and replace.
///
/// On replace an absent `description` clears the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPart {
    pub brand_id: Option<RecordId>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated view of a [`NewPart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartFields<'a> {
    pub brand_id: RecordId,
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl NewPart {
    pub fn new(brand_id: RecordId, name: impl Into<String>) -> Self {
        Self {
            brand_id: Some(brand_id),
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// # Errors
    /// - `MissingField` when `brandId` or `name` is absent.
    /// - `BlankField("name")`, or `InvalidReference` for a non-positive `brandId`.
    pub fn validate(&self) -> Result<PartFields<'_>, ValidationError> {
        let brand_id = self
            .brand_id
            .ok_or(ValidationError::MissingField("brandId"))?;
        Ok(PartFields {
            brand_id: reference_id("brandId", brand_id)?,
            name: required_text("name", self.name.as_deref())?,
            description: self.description.as_deref(),
        })
    }
}

/// Partial part update; absent fields keep their stored value.
///
/// `description: null` clears the description, an absent key keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPatch {
    pub brand_id: Option<RecordId>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "explicit_field")]
    pub description: Option<Option<String>>,
}

/// Validated view of a [`PartPatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartPatchFields<'a> {
    pub brand_id: Option<RecordId>,
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
}

impl PartPatch {
    /// # Errors
    /// - `BlankField("name")` when `name` is present but blank.
    /// - `InvalidReference` for a non-positive `brandId`.
    pub fn validate(&self) -> Result<PartPatchFields<'_>, ValidationError> {
        let brand_id = match self.brand_id {
            Some(value) => Some(reference_id("brandId", value)?),
            None => None,
        };
        let name = match self.name.as_deref() {
            Some(name) => Some(non_blank("name", name)?),
            None => None,
        };
        Ok(PartPatchFields {
            brand_id,
            name,
            description: self.description.as_ref().map(|value| value.as_deref()),
        })
    }
}
