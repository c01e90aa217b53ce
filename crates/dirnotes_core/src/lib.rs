//! Core logic for directory-scoped notes.
//!
//! Storage bootstrap, the note repository, process environment lookups and
//! logging live here; the `dirnotes` binary only parses arguments and
//! formats output.

pub mod config;
pub mod db;
pub mod env;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::NotesConfig;
pub use db::{ensure_schema, open_db, open_db_in_memory, DbError, DbResult};
pub use env::{current_dir_key, home_dir, EnvError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{parse_note_id, NoteId};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
