use super::{quoted_identifier, QueryResult};
use crate::model::field_key::{FieldKey, TimestampFieldKey};
use crate::query::{FieldDefinition, TimestampField};

/// One column in a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    key: FieldKey,
    sql_type: &'static str,
    not_null: bool,
}

impl ColumnDef {
    pub fn new(key: impl Into<FieldKey>, sql_type: &'static str) -> Self {
        Self {
            key: key.into(),
            sql_type,
            not_null: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Renders the column as a DDL fragment, e.g. `"created_at" INTEGER`.
    pub fn to_sql(&self) -> QueryResult<String> {
        let name = quoted_identifier(self.key.as_str())?;
        let mut sql = format!("{name} {}", self.sql_type);
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        Ok(sql)
    }
}

/// Instants are stored as nullable epoch-millisecond integers.
impl FieldDefinition for ColumnDef {
    fn from_key(key: FieldKey) -> Self {
        Self::new(key, "INTEGER")
    }
}

/// Column definitions for the given timestamp fields, in the given order.
pub fn timestamp_column_defs(keys: &[TimestampFieldKey]) -> Vec<ColumnDef> {
    keys.iter().copied().map(ColumnDef::timestamp).collect()
}
