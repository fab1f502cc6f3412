//! CLI smoke entry point.
//!
//! Prints the semantic-to-physical key table and runs a sorted select against
//! an in-memory database so core wiring can be checked without an embedding
//! application.
//!
//! Usage: `lifestamp_cli [ABSOLUTE_LOG_DIR]`. With a log directory, file
//! logging starts at the build's default level before the select runs.

use lifestamp_core::{
    default_log_level, init_logging, SortDirection, SqliteSelect, TimestampFieldKey,
    TimestampSort,
};
use rusqlite::Connection;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging error={err}");
            return ExitCode::FAILURE;
        }
        println!("logging level={} log_dir={log_dir}", default_log_level());
    }

    println!("lifestamp_core ping={}", lifestamp_core::ping());
    println!("lifestamp_core version={}", lifestamp_core::core_version());

    for key in TimestampFieldKey::ALL {
        println!("field {key:?} -> {}", key.field_key());
    }

    match run_sample_select() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sample_select error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run_sample_select() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(
        "CREATE TABLE notes (title TEXT, updated_at INTEGER, deleted_at INTEGER);
         INSERT INTO notes VALUES ('kept', 20, NULL), ('newer', 30, NULL), ('gone', 40, 41);",
    )?;

    let select = SqliteSelect::from_table("notes")
        .exclude_deleted()
        .sort_timestamp(TimestampFieldKey::UpdatedAt, Some(SortDirection::Descending));
    println!("sample_sql={}", select.to_sql()?);

    let titles = select.fetch_all(&conn, |row| row.get::<_, String>(0))?;
    println!("sample_rows={}", titles.join(","));
    Ok(())
}
