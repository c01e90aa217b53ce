//! `notes` table definition.
//!
//! The table is created with `IF NOT EXISTS`, so databases written by older
//! builds (or created by hand with the same shape) are used as-is.

use super::DbResult;
use rusqlite::Connection;

/// Name of the only table owned by this crate.
pub const NOTES_TABLE: &str = "notes";

const CREATE_NOTES_SQL: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dir TEXT NOT NULL,
    note TEXT NOT NULL
);";

/// Creates the `notes` table when it does not exist yet.
///
/// Safe to call any number of times on the same connection.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_NOTES_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_schema;
    use rusqlite::Connection;

    fn notes_table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn ensure_schema_twice_keeps_single_table() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();
        assert_eq!(notes_table_count(&conn), 1);
    }

    #[test]
    fn ensure_schema_keeps_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO notes (dir, note) VALUES ('/tmp', 'kept');",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
