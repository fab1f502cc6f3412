//! SQLite binding for the query and schema seams.
//!
//! # Responsibility
//! - Render timestamp column definitions and sorted selects as SQL.
//! - Execute selects through `rusqlite` and map rows via caller closures.
//!
//! # Invariants
//! - Every identifier is validated, then double-quoted, before it is spliced
//!   into SQL, so keyword column names like `order` stay usable.
//! - Deleted rows are only filtered when the caller opts in.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod column;
mod select;

pub use column::{timestamp_column_defs, ColumnDef};
pub use select::SqliteSelect;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while rendering or running SQL through the binding.
#[derive(Debug)]
pub enum QueryError {
    InvalidIdentifier(String),
    Sqlite(rusqlite::Error),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(value) => write!(f, "invalid sql identifier `{value}`"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIdentifier(_) => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for QueryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

fn quoted_identifier(value: &str) -> QueryResult<String> {
    if IDENTIFIER_RE.is_match(value) {
        Ok(format!("\"{value}\""))
    } else {
        Err(QueryError::InvalidIdentifier(value.to_string()))
    }
}
