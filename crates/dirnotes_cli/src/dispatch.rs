//! Runs one resolved action against the note repository.
//!
//! # Invariants
//! - Exactly one repository operation per invocation.
//! - A delete that matches nothing is reported on `out` and is not an error.

use crate::args::Action;
use crate::error::CliError;
use dirnotes_core::{parse_note_id, NoteRepository, RepoError};
use log::info;
use std::io::Write;

pub const EMPTY_LIST_MESSAGE: &str = "No notes in this directory";
pub const NOTE_ADDED_MESSAGE: &str = "Note added";
pub const NOTE_DELETED_MESSAGE: &str = "Note deleted";

/// Executes `action` for the partition `dir`, writing human output to `out`.
pub fn execute<R: NoteRepository>(
    repo: &R,
    dir: &str,
    action: &Action,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match action {
        Action::List => list(repo, dir, out),
        Action::Add { text } => {
            repo.add_note(dir, text)
                .map_err(CliError::storage("failed to add note"))?;
            writeln!(out, "{NOTE_ADDED_MESSAGE}")?;
            Ok(())
        }
        Action::Delete { raw_id } => delete(repo, dir, raw_id, out),
    }
}

fn list<R: NoteRepository>(repo: &R, dir: &str, out: &mut impl Write) -> Result<(), CliError> {
    let notes = repo
        .list_notes(dir)
        .map_err(CliError::storage("failed to query notes"))?;
    if notes.is_empty() {
        writeln!(out, "{EMPTY_LIST_MESSAGE}")?;
        return Ok(());
    }

    for (id, text) in &notes {
        writeln!(out, "{id}: {text}")?;
    }
    Ok(())
}

fn delete<R: NoteRepository>(
    repo: &R,
    dir: &str,
    raw_id: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let Some(id) = parse_note_id(raw_id) else {
        info!("event=note_delete module=cli status=not_found reason=non_numeric_id");
        writeln!(out, "No note with id {raw_id}")?;
        return Ok(());
    };

    match repo.delete_note(dir, id) {
        Ok(()) => writeln!(out, "{NOTE_DELETED_MESSAGE}")?,
        Err(RepoError::NotFound { .. }) => writeln!(out, "No note with id {raw_id}")?,
        Err(err) => return Err(CliError::storage("failed to delete note")(err)),
    }
    Ok(())
}
