//! End-to-end tests against a real filesystem in a temp directory.
//!
//! Covers the full path: directory listing, session initialization, real
//! moves through [`OsFileMover`], and the invariant that assigned items live
//! in their category folder while pending items stay in the root.

use pictriage::infrastructure::{list_image_files, FileMover, OsFileMover};
use pictriage::{handle_event, initialize, Config, DisplayTarget, Event, TriageError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").expect("write test file");
}

fn image_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for name in names {
        touch(dir.path(), name);
    }
    dir
}

#[test]
fn listing_filters_extensions_and_sorts() {
    let dir = image_dir(&["b.png", "x.JPEG", "a.jpg", "notes.txt", "noext"]);
    fs::create_dir(dir.path().join("Family")).unwrap();
    touch(&dir.path().join("Family"), "nested.jpg");

    let names = list_image_files(dir.path()).unwrap();

    // Sorted, extension-filtered, and never descending into subdirectories.
    assert_eq!(names, vec!["a.jpg", "b.png", "x.JPEG"]);
}

#[test]
fn relocate_creates_the_destination_directory() {
    let dir = image_dir(&["a.jpg"]);
    let dest_dir = dir.path().join("Pets");

    let destination = OsFileMover
        .relocate(&dir.path().join("a.jpg"), &dest_dir)
        .unwrap();

    assert_eq!(destination, dest_dir.join("a.jpg"));
    assert!(destination.is_file());
    assert!(!dir.path().join("a.jpg").exists());
}

#[test]
fn relocate_missing_source_is_not_found() {
    let dir = image_dir(&[]);

    let err = OsFileMover
        .relocate(&dir.path().join("gone.jpg"), &dir.path().join("Family"))
        .unwrap_err();

    assert!(matches!(err, TriageError::NotFound(_)));
    // The failed call must not leave a half-made destination either way;
    // creating the directory before the existence check would.
    assert!(!dir.path().join("Family").exists());
}

#[test]
fn assign_and_undo_scenario() {
    // Root contains a.jpg and b.png; key '1' maps to Family.
    let dir = image_dir(&["a.jpg", "b.png"]);
    let mut session = initialize(dir.path(), &Config::default()).unwrap();

    assert_eq!(
        session.current_display_item(),
        DisplayTarget::Image(dir.path().join("a.jpg"))
    );

    // Assign '1': a.jpg moves to root/Family/a.jpg, cursor 1, history 1.
    let (needs_render, _) = handle_event(&mut session, &Event::Assign('1'));
    assert!(needs_render);
    assert!(dir.path().join("Family/a.jpg").is_file());
    assert!(!dir.path().join("a.jpg").exists());
    let view = session.compute_view();
    assert_eq!(view.reviewed, 1);
    assert_eq!(view.undoable, 1);
    assert_eq!(view.target, DisplayTarget::Image(dir.path().join("b.png")));

    // Undo: a.jpg back at the root, cursor 0, history empty, a.jpg current.
    let (needs_render, _) = handle_event(&mut session, &Event::Undo);
    assert!(needs_render);
    assert!(dir.path().join("a.jpg").is_file());
    assert!(!dir.path().join("Family/a.jpg").exists());
    let view = session.compute_view();
    assert_eq!(view.reviewed, 0);
    assert_eq!(view.undoable, 0);
    assert_eq!(view.target, DisplayTarget::Image(dir.path().join("a.jpg")));
}

#[test]
fn triage_to_exhaustion_partitions_the_directory() {
    let dir = image_dir(&["a.jpg", "b.png", "c.jpeg"]);
    let mut session = initialize(dir.path(), &Config::default()).unwrap();

    handle_event(&mut session, &Event::Assign('1'));
    handle_event(&mut session, &Event::Assign('5'));
    handle_event(&mut session, &Event::Assign('1'));

    assert_eq!(session.compute_view().target, DisplayTarget::Exhausted);
    assert!(dir.path().join("Family/a.jpg").is_file());
    assert!(dir.path().join("Pets/b.png").is_file());
    assert!(dir.path().join("Family/c.jpeg").is_file());
    assert!(list_image_files(dir.path()).unwrap().is_empty());

    // Exhausted queue: further assigns change nothing on disk.
    let (needs_render, actions) = handle_event(&mut session, &Event::Assign('1'));
    assert!(!needs_render);
    assert!(actions.is_empty());
}

#[test]
fn vanished_source_keeps_item_pending() {
    let dir = image_dir(&["a.jpg", "b.png"]);
    let mut session = initialize(dir.path(), &Config::default()).unwrap();

    // Something external deletes the current file before the keypress.
    fs::remove_file(dir.path().join("a.jpg")).unwrap();

    let (needs_render, actions) = handle_event(&mut session, &Event::Assign('1'));

    assert!(!needs_render);
    assert!(!actions.is_empty(), "failure must be surfaced");
    // Queue and history untouched: a.jpg is still the current item.
    let view = session.compute_view();
    assert_eq!(view.reviewed, 0);
    assert_eq!(view.undoable, 0);
    assert_eq!(view.target, DisplayTarget::Image(dir.path().join("a.jpg")));
}

#[test]
fn config_round_trip_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pictriage.toml");
    fs::write(
        &path,
        "history_limit = 3\n\n[categories]\n\"1\" = \"Keep\"\n\"2\" = \"Toss\"\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.history_limit, Some(3));
    let keymap = config.keymap().unwrap();
    assert_eq!(keymap.get(&'1').map(String::as_str), Some("Keep"));
    assert_eq!(keymap.get(&'2').map(String::as_str), Some("Toss"));
    assert_eq!(keymap.len(), 2);
}

#[test]
fn config_rejects_non_digit_keys() {
    let dir = TempDir::new().unwrap();

    for bad in ["[categories]\n\"x\" = \"Other\"\n", "[categories]\n\"12\" = \"Other\"\n"] {
        let path = dir.path().join("pictriage.toml");
        fs::write(&path, bad).unwrap();
        let config = Config::load(&path).unwrap();
        assert!(matches!(
            config.keymap().unwrap_err(),
            TriageError::Config(_)
        ));
    }
}
