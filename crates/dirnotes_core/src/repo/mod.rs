//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note data access contract.
//! - Isolate SQLite query details from the command dispatcher.
//!
//! # Invariants
//! - Repository APIs return a semantic `NotFound` in addition to DB
//!   transport errors.

pub mod note_repo;
