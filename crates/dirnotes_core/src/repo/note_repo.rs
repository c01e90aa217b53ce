//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the add/delete/list note APIs scoped by directory.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every query filters on the exact `dir` string it was given.
//! - `delete_note` only removes a row when both `id` and `dir` match.
//! - No caching: every call is a round-trip to SQLite.

use crate::db::{DbError, NOTES_TABLE};
use crate::model::note::NoteId;
use log::{debug, info};
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No note with this id exists in the requested directory.
    NotFound { id: NoteId },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { id } => write!(f, "note not found: {id}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for directory-scoped notes.
pub trait NoteRepository {
    /// Inserts one note under `dir` and returns its new id.
    fn add_note(&self, dir: &str, text: &str) -> RepoResult<NoteId>;
    /// Deletes the note matching both `id` and `dir`.
    ///
    /// Returns `RepoError::NotFound` when nothing matched.
    fn delete_note(&self, dir: &str, id: NoteId) -> RepoResult<()>;
    /// Returns every note stored under `dir`, keyed by id.
    fn list_notes(&self, dir: &str) -> RepoResult<BTreeMap<NoteId, String>>;
}

/// SQLite-backed note repository borrowing an open connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a connection whose schema was ensured.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn add_note(&self, dir: &str, text: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (dir, note) VALUES (?1, ?2);",
            params![dir, text],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=note_add module=repo status=ok note_id={id}");
        Ok(id)
    }

    fn delete_note(&self, dir: &str, id: NoteId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND dir = ?2;",
            params![id, dir],
        )?;

        if changed == 0 {
            info!("event=note_delete module=repo status=not_found note_id={id}");
            return Err(RepoError::NotFound { id });
        }

        info!("event=note_delete module=repo status=ok note_id={id}");
        Ok(())
    }

    fn list_notes(&self, dir: &str) -> RepoResult<BTreeMap<NoteId, String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, note FROM notes WHERE dir = ?1;")?;
        let mut rows = stmt.query([dir])?;
        let mut notes = BTreeMap::new();
        while let Some(row) = rows.next()? {
            notes.insert(row.get("id")?, row.get("note")?);
        }

        debug!(
            "event=note_list module=repo status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, NOTES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(NOTES_TABLE));
    }

    for column in ["id", "dir", "note"] {
        if !table_has_column(conn, NOTES_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: NOTES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
