//! Domain model for directory-scoped notes.

pub mod note;
