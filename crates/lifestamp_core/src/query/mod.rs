//! Seams to the persistence layer's query and schema builders.
//!
//! # Responsibility
//! - Describe the minimal builder capabilities this crate relies on.
//! - Let callers sort and declare columns by semantic timestamp field.
//!
//! # Invariants
//! - Adapters hold no state and only translate semantic keys to physical keys.
//! - Direction is passed through to the builder unchanged.

use crate::model::field_key::{FieldKey, TimestampFieldKey};
use serde::{Deserialize, Serialize};

/// Sort direction understood by the persistence layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A query builder that can sort by a physical key.
pub trait SortableQuery: Sized {
    /// Appends a sort criterion and returns the builder for chaining.
    fn sort(self, key: FieldKey, direction: SortDirection) -> Self;
}

/// Sorting by semantic timestamp field for any [`SortableQuery`].
pub trait TimestampSort: SortableQuery {
    /// Sorts by `key`'s physical column; `None` direction means ascending.
    fn sort_timestamp(self, key: TimestampFieldKey, direction: Option<SortDirection>) -> Self {
        self.sort(key.field_key(), direction.unwrap_or_default())
    }
}

impl<Q: SortableQuery> TimestampSort for Q {}

/// A schema field/column definition constructible from a physical key.
pub trait FieldDefinition: Sized {
    fn from_key(key: FieldKey) -> Self;
}

/// Declaring timestamp fields by semantic key for any [`FieldDefinition`].
pub trait TimestampField: FieldDefinition {
    fn timestamp(key: TimestampFieldKey) -> Self {
        Self::from_key(key.field_key())
    }
}

impl<F: FieldDefinition> TimestampField for F {}
