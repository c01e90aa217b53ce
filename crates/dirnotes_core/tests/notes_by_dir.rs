use dirnotes_core::db::open_db_in_memory;
use dirnotes_core::{NoteRepository, RepoError, SqliteNoteRepository};

#[test]
fn added_note_lists_under_its_directory() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo.add_note("/home/a/project", "buy milk").unwrap();

    let notes = repo.list_notes("/home/a/project").unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.get(&id).map(String::as_str), Some("buy milk"));
}

#[test]
fn notes_do_not_leak_across_directories() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    repo.add_note("/one", "only in one").unwrap();

    assert!(repo.list_notes("/two").unwrap().is_empty());
    assert_eq!(repo.list_notes("/one").unwrap().len(), 1);
}

#[test]
fn directory_keys_are_compared_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    repo.add_note("/a/b", "no slash").unwrap();
    repo.add_note("/a/b/", "slash").unwrap();

    let plain = repo.list_notes("/a/b").unwrap();
    let slashed = repo.list_notes("/a/b/").unwrap();
    assert_eq!(plain.values().collect::<Vec<_>>(), vec!["no slash"]);
    assert_eq!(slashed.values().collect::<Vec<_>>(), vec!["slash"]);
}

#[test]
fn empty_store_lists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    assert!(repo.list_notes("/anywhere").unwrap().is_empty());
}

#[test]
fn ids_are_unique_across_directories() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let first = repo.add_note("/one", "a").unwrap();
    let second = repo.add_note("/two", "b").unwrap();
    let third = repo.add_note("/one", "c").unwrap();

    assert!(first < second && second < third);
}

#[test]
fn delete_removes_matching_note() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let keep = repo.add_note("/work", "keep").unwrap();
    let drop_id = repo.add_note("/work", "drop").unwrap();

    repo.delete_note("/work", drop_id).unwrap();

    let notes = repo.list_notes("/work").unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes.contains_key(&keep));
}

#[test]
fn delete_missing_id_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let err = repo.delete_note("/work", 999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { id: 999 }));
}

#[test]
fn delete_from_other_directory_reports_not_found_and_keeps_note() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let id = repo.add_note("/owner", "private").unwrap();

    let err = repo.delete_note("/intruder", id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
    assert_eq!(repo.list_notes("/owner").unwrap().len(), 1);
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let first = repo.add_note("/work", "first").unwrap();
    repo.delete_note("/work", first).unwrap();

    let second = repo.add_note("/work", "second").unwrap();
    assert!(second > first);
}
