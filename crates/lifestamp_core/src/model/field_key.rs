//! Semantic timestamp fields and their physical storage keys.
//!
//! # Responsibility
//! - Define the closed set of semantic timestamp fields.
//! - Resolve each semantic field to the physical key used by storage.
//!
//! # Invariants
//! - Resolution is total and fixed: `created_at`, `updated_at`, `deleted_at`.
//! - The three physical keys are pairwise distinct.
//! - Parsing untyped input is strict (exact physical key spelling only).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Physical key for `TimestampFieldKey::CreatedAt`.
pub const CREATED_AT_KEY: &str = "created_at";
/// Physical key for `TimestampFieldKey::UpdatedAt`.
pub const UPDATED_AT_KEY: &str = "updated_at";
/// Physical key for `TimestampFieldKey::DeletedAt`.
pub const DELETED_AT_KEY: &str = "deleted_at";

/// Physical field identifier understood by the persistence layer
/// (a column name for SQL storage).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey(Cow<'static, str>);

impl FieldKey {
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FieldKey {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for FieldKey {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic timestamp field, independent of storage naming.
///
/// Serialized with its physical key spelling (`created_at`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFieldKey {
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl TimestampFieldKey {
    /// Every semantic field, in declaration order.
    pub const ALL: [Self; 3] = [Self::CreatedAt, Self::UpdatedAt, Self::DeletedAt];

    /// Physical key string for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => CREATED_AT_KEY,
            Self::UpdatedAt => UPDATED_AT_KEY,
            Self::DeletedAt => DELETED_AT_KEY,
        }
    }

    /// Resolves this semantic field to its physical storage key.
    pub fn field_key(self) -> FieldKey {
        FieldKey::from_static(self.as_str())
    }
}

impl Display for TimestampFieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TimestampFieldKey> for FieldKey {
    fn from(value: TimestampFieldKey) -> Self {
        value.field_key()
    }
}

/// Parses a semantic field from its physical key spelling.
///
/// Used where keys arrive untyped (sort parameters, config, wire payloads).
pub fn parse_timestamp_field_key(value: &str) -> Result<TimestampFieldKey, TimestampFieldKeyError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(TimestampFieldKeyError::Empty);
    }

    match normalized {
        CREATED_AT_KEY => Ok(TimestampFieldKey::CreatedAt),
        UPDATED_AT_KEY => Ok(TimestampFieldKey::UpdatedAt),
        DELETED_AT_KEY => Ok(TimestampFieldKey::DeletedAt),
        other => Err(TimestampFieldKeyError::Unsupported(other.to_string())),
    }
}

/// Timestamp field key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampFieldKeyError {
    Empty,
    Unsupported(String),
}

impl Display for TimestampFieldKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "timestamp field key must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "timestamp field key is unsupported: {value}")
            }
        }
    }
}

impl Error for TimestampFieldKeyError {}

#[cfg(test)]
mod tests {
    use super::{parse_timestamp_field_key, FieldKey, TimestampFieldKey, TimestampFieldKeyError};

    #[test]
    fn parses_every_physical_key_back() {
        for key in TimestampFieldKey::ALL {
            assert_eq!(
                parse_timestamp_field_key(key.as_str()).expect("known key parse"),
                key
            );
        }
    }

    #[test]
    fn rejects_empty_key() {
        let err = parse_timestamp_field_key("  ").expect_err("empty key must fail");
        assert_eq!(err, TimestampFieldKeyError::Empty);
    }

    #[test]
    fn rejects_semantic_and_uppercase_spellings() {
        let err = parse_timestamp_field_key("createdAt").expect_err("camel case must fail");
        assert_eq!(
            err,
            TimestampFieldKeyError::Unsupported("createdAt".to_string())
        );

        let err = parse_timestamp_field_key("DELETED_AT").expect_err("uppercase must fail");
        assert_eq!(
            err,
            TimestampFieldKeyError::Unsupported("DELETED_AT".to_string())
        );
    }

    #[test]
    fn owned_and_static_keys_compare_by_content() {
        assert_eq!(
            FieldKey::from("updated_at".to_string()),
            TimestampFieldKey::UpdatedAt.field_key()
        );
    }
}
