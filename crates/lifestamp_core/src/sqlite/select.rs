use super::{quoted_identifier, QueryResult};
use crate::model::field_key::{FieldKey, TimestampFieldKey};
use crate::query::{SortDirection, SortableQuery};
use log::{debug, error};
use rusqlite::{Connection, Row};
use std::time::Instant;

/// `SELECT` builder over a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteSelect {
    table: String,
    columns: Vec<FieldKey>,
    exclude_deleted: bool,
    sorts: Vec<(FieldKey, SortDirection)>,
    limit: Option<u32>,
}

impl SqliteSelect {
    /// Starts a `SELECT *` over `table`.
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            exclude_deleted: false,
            sorts: Vec::new(),
            limit: None,
        }
    }

    /// Restricts the projection. An empty list means `*`.
    pub fn columns<I, K>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<FieldKey>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Skips tombstoned rows (`deleted_at IS NULL`).
    pub fn exclude_deleted(mut self) -> Self {
        self.exclude_deleted = true;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort criteria in the order they were applied.
    pub fn sorts(&self) -> &[(FieldKey, SortDirection)] {
        &self.sorts
    }

    /// Renders the statement, validating every identifier.
    pub fn to_sql(&self) -> QueryResult<String> {
        let projection = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns
                .iter()
                .map(|column| quoted_identifier(column.as_str()))
                .collect::<QueryResult<Vec<_>>>()?
                .join(", ")
        };

        let mut sql = format!(
            "SELECT {projection} FROM {}",
            quoted_identifier(&self.table)?
        );

        if self.exclude_deleted {
            sql.push_str(&format!(
                " WHERE {} IS NULL",
                quoted_identifier(TimestampFieldKey::DeletedAt.as_str())?
            ));
        }

        if !self.sorts.is_empty() {
            let clauses = self
                .sorts
                .iter()
                .map(|(key, direction)| {
                    quoted_identifier(key.as_str())
                        .map(|name| format!("{name} {}", direction_to_sql(*direction)))
                })
                .collect::<QueryResult<Vec<_>>>()?;
            sql.push_str(" ORDER BY ");
            sql.push_str(&clauses.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        Ok(sql)
    }

    /// Runs the statement and maps every row with `map_row`.
    ///
    /// # Side effects
    /// - Emits `query_fetch` logging events with duration and status.
    pub fn fetch_all<T, F>(&self, conn: &Connection, map_row: F) -> QueryResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let started_at = Instant::now();
        let sql = self.to_sql()?;

        match run_query(conn, &sql, map_row) {
            Ok(rows) => {
                debug!(
                    "event=query_fetch module=sqlite status=ok table={} rows={} duration_ms={}",
                    self.table,
                    rows.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(rows)
            }
            Err(err) => {
                error!(
                    "event=query_fetch module=sqlite status=error table={} duration_ms={} error={}",
                    self.table,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl SortableQuery for SqliteSelect {
    fn sort(mut self, key: FieldKey, direction: SortDirection) -> Self {
        self.sorts.push((key, direction));
        self
    }
}

fn run_query<T, F>(conn: &Connection, sql: &str, map_row: F) -> rusqlite::Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], map_row)?
        .collect::<rusqlite::Result<Vec<T>>>()?;
    Ok(rows)
}

fn direction_to_sql(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    }
}
