use lifestamp_core::{
    impl_has_timestamp, impl_soft_delete, init_logging, EpochMillis, HasTimestamp, SoftDelete,
    SqliteSelect, TimestampFieldKey, TimestampSort,
};
use log::Log;
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug, Default)]
struct Ticket {
    created_at: Option<EpochMillis>,
    updated_at: Option<EpochMillis>,
    deleted_at: Option<EpochMillis>,
}

impl_has_timestamp!(Ticket, created_at, updated_at);
impl_soft_delete!(Ticket, deleted_at);

fn flushed_log_lines(log_dir: &Path) -> Vec<String> {
    log::logger().flush();

    let mut lines = Vec::new();
    for entry in std::fs::read_dir(log_dir).expect("log dir should be readable") {
        let path = entry.expect("log dir entry").path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("log") {
            continue;
        }
        let content = std::fs::read_to_string(&path).expect("log file should be readable");
        lines.extend(content.lines().map(str::to_string));
    }
    lines
}

// Single test: the logger is process-global, so parallel tests would
// interleave lines.
#[test]
fn query_fetch_is_logged_and_pure_operations_are_not() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    init_logging("debug", log_dir.path().to_str().expect("utf-8 temp dir"))
        .expect("logging init should succeed");

    let baseline = flushed_log_lines(log_dir.path());
    assert!(
        baseline
            .iter()
            .any(|line| line.contains("event=logging_init module=logging status=ok")),
        "missing init event: {baseline:?}"
    );

    let mut ticket = Ticket::default();
    ticket.mark_created(None);
    ticket.mark_updated(Some(10));
    ticket.mark_deleted(None);
    ticket.restore();
    for key in TimestampFieldKey::ALL {
        let _ = key.field_key();
    }
    assert_eq!(flushed_log_lines(log_dir.path()).len(), baseline.len());

    let conn = Connection::open_in_memory().expect("in-memory db");
    conn.execute_batch("CREATE TABLE tickets (id INTEGER, updated_at INTEGER);")
        .expect("create table");

    let rows = SqliteSelect::from_table("tickets")
        .sort_timestamp(TimestampFieldKey::UpdatedAt, None)
        .fetch_all(&conn, |row| row.get::<_, i64>(0))
        .expect("select should succeed");
    assert!(rows.is_empty());

    SqliteSelect::from_table("missing_tickets")
        .fetch_all(&conn, |row| row.get::<_, i64>(0))
        .expect_err("missing table must fail");

    let lines = flushed_log_lines(log_dir.path());
    let fetch_lines: Vec<&String> = lines[baseline.len()..]
        .iter()
        .filter(|line| line.contains("event=query_fetch"))
        .collect();
    assert_eq!(fetch_lines.len(), 2, "unexpected fetch lines: {fetch_lines:?}");

    let ok_line = fetch_lines[0];
    assert!(ok_line.contains("module=sqlite status=ok table=tickets rows=0 duration_ms="));

    let error_line = fetch_lines[1];
    assert!(error_line.contains("module=sqlite status=error table=missing_tickets duration_ms="));
    assert!(error_line.contains("no such table"));
}
