//! Lifecycle timestamp and soft-delete capabilities for persisted entities.
//!
//! Entities opt into [`HasTimestamp`] and/or [`SoftDelete`]; query code sorts
//! and declares columns by [`TimestampFieldKey`] instead of raw column names.

pub mod logging;
pub mod model;
pub mod query;
pub mod sqlite;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clock::{epoch_ms_at, now_epoch_ms, EpochMillis};
pub use model::field_key::{
    parse_timestamp_field_key, FieldKey, TimestampFieldKey, TimestampFieldKeyError,
    CREATED_AT_KEY, DELETED_AT_KEY, UPDATED_AT_KEY,
};
pub use model::has_timestamp::HasTimestamp;
pub use model::soft_delete::SoftDelete;
pub use query::{FieldDefinition, SortDirection, SortableQuery, TimestampField, TimestampSort};
pub use sqlite::{timestamp_column_defs, ColumnDef, QueryError, QueryResult, SqliteSelect};

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
