//! Note domain model.
//!
//! A note is the row `(id, dir, text)`; the repository hands out ids and
//! texts keyed by id, the directory being implied by the query.
//!
//! # Invariants
//! - Ids are assigned by storage and are unique across every directory.

/// Storage-assigned surrogate key of a note.
pub type NoteId = i64;

/// Parses a user-supplied id.
///
/// Returns `None` for text that cannot name any stored note.
pub fn parse_note_id(raw: &str) -> Option<NoteId> {
    raw.trim().parse::<NoteId>().ok()
}
