use dirnotes_core::db::{ensure_schema, open_db, open_db_in_memory, DbError};
use dirnotes_core::{NoteRepository, RepoError, SqliteNoteRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_notes_table() {
    let conn = open_db_in_memory().unwrap();
    assert_table_exists(&conn, "notes");
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dev").join("notes").join("test.db");

    let conn = open_db(&path).unwrap();

    assert!(path.exists());
    assert_table_exists(&conn, "notes");
}

#[test]
fn opening_same_database_twice_keeps_notes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");

    let conn_first = open_db(&path).unwrap();
    SqliteNoteRepository::try_new(&conn_first)
        .unwrap()
        .add_note("/work", "persisted")
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let notes = SqliteNoteRepository::try_new(&conn_second)
        .unwrap()
        .list_notes("/work")
        .unwrap();
    assert_eq!(notes.values().collect::<Vec<_>>(), vec!["persisted"]);
}

#[test]
fn ensure_schema_on_ready_connection_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn open_db_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = open_db(blocker.join("test.db")).unwrap_err();
    assert!(matches!(err, DbError::CreateDataDir { .. }));
}

#[test]
fn open_db_rejects_non_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    std::fs::write(&path, vec![b'x'; 4096]).unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn repository_requires_notes_table() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("notes")));
}

#[test]
fn repository_requires_dir_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, note TEXT NOT NULL);")
        .unwrap();

    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::MissingRequiredColumn {
            table: "notes",
            column: "dir"
        }
    ));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
