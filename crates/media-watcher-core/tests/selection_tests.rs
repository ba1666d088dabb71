use media_watcher_core::selection::{Command, SelectionModel};
use std::time::{Duration, Instant};

fn model_with(files: &[&str]) -> SelectionModel {
    SelectionModel::new(files.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_count_tracks_set_cardinality() {
    let mut model = model_with(&["a", "b", "c"]);
    let now = Instant::now();

    assert!(model.apply(Command::Mark("a".into()), now));
    assert!(model.apply(Command::Mark("b".into()), now));
    assert_eq!(model.count(), 2);

    assert!(model.apply(Command::Unmark("a".into()), now));
    assert_eq!(model.count(), 1);

    assert!(model.apply(Command::Toggle("c".into(), true), now));
    assert_eq!(model.count(), 2);

    // Toggling an already-marked file on is not a change.
    assert!(!model.apply(Command::Toggle("c".into(), true), now));
    assert_eq!(model.count(), 2);

    assert!(model.apply(Command::Toggle("b".into(), false), now));
    assert!(model.apply(Command::Toggle("c".into(), false), now));
    assert_eq!(model.count(), 0);
}

#[test]
fn test_marking_unknown_path_is_a_noop() {
    let mut model = model_with(&["a"]);
    let now = Instant::now();

    assert!(!model.apply(Command::Mark("ghost".into()), now));
    assert!(!model.apply(Command::Toggle("ghost".into(), true), now));
    assert_eq!(model.count(), 0);
    assert!(model.undo_target(now).is_none());
}

#[test]
fn test_undo_removes_only_most_recent_mark() {
    let mut model = model_with(&["a", "b"]);
    let now = Instant::now();

    model.apply(Command::Mark("a".into()), now);
    model.apply(Command::Mark("b".into()), now);

    assert!(model.apply(Command::Undo, now));
    assert!(model.is_marked("a"));
    assert!(!model.is_marked("b"));
    assert_eq!(model.count(), 1);

    // Only one slot: a second undo has nothing left to revert.
    assert!(!model.apply(Command::Undo, now));
    assert!(model.is_marked("a"));
}

#[test]
fn test_undo_is_a_noop_after_window_elapses() {
    let mut model = model_with(&["a"]).with_undo_window(Duration::from_secs(5));
    let start = Instant::now();

    model.apply(Command::Mark("a".into()), start);

    let after_expiry = start + Duration::from_secs(6);
    assert!(!model.apply(Command::Undo, after_expiry));
    // Expiry forgets the undo option but keeps the mark.
    assert!(model.is_marked("a"));
    assert_eq!(model.count(), 1);
}

#[test]
fn test_remarking_restarts_the_window() {
    let mut model = model_with(&["a"]).with_undo_window(Duration::from_secs(5));
    let start = Instant::now();

    model.apply(Command::Mark("a".into()), start);
    model.apply(Command::Mark("a".into()), start + Duration::from_secs(4));

    // 7s after the first mark but only 3s after the second.
    assert!(model.apply(Command::Undo, start + Duration::from_secs(7)));
    assert!(!model.is_marked("a"));
}

#[test]
fn test_newer_mark_replaces_undo_target() {
    let mut model = model_with(&["a", "b"]).with_undo_window(Duration::from_secs(5));
    let start = Instant::now();

    model.apply(Command::Mark("a".into()), start);
    model.apply(Command::Mark("b".into()), start + Duration::from_secs(2));

    let (target, _remaining) = model
        .undo_target(start + Duration::from_secs(3))
        .expect("undo window still open");
    assert_eq!(target, "b");
}

#[test]
fn test_unmark_disarms_undo_slot() {
    let mut model = model_with(&["a", "b"]);
    let now = Instant::now();

    model.apply(Command::Mark("a".into()), now);
    model.apply(Command::Mark("b".into()), now);
    model.apply(Command::Unmark("b".into()), now);

    assert!(model.undo_target(now).is_none());
    assert!(!model.apply(Command::Undo, now));
    assert!(model.is_marked("a"));
}

#[test]
fn test_toggle_does_not_touch_undo_slot() {
    let mut model = model_with(&["a", "b"]);
    let now = Instant::now();

    model.apply(Command::Mark("a".into()), now);
    model.apply(Command::Toggle("b".into(), true), now);

    // The slot still points at "a", the auto-mark.
    assert!(model.apply(Command::Undo, now));
    assert!(!model.is_marked("a"));
    assert!(model.is_marked("b"));
}

#[test]
fn test_undo_noop_when_target_was_unmarked_by_toggle() {
    let mut model = model_with(&["a"]);
    let now = Instant::now();

    model.apply(Command::Mark("a".into()), now);
    model.apply(Command::Toggle("a".into(), false), now);

    assert!(!model.apply(Command::Undo, now));
    assert_eq!(model.count(), 0);
}

#[test]
fn test_mark_all_is_idempotent_and_ignores_prior_state() {
    let mut model = model_with(&["a", "b", "c"]);
    let now = Instant::now();

    model.apply(Command::Toggle("b".into(), true), now);
    assert!(model.apply(Command::MarkAll, now));
    assert_eq!(model.count(), 3);

    assert!(!model.apply(Command::MarkAll, now));
    assert_eq!(model.count(), 3);
}

#[test]
fn test_mark_all_does_not_arm_undo() {
    let mut model = model_with(&["a", "b"]);
    let now = Instant::now();

    model.apply(Command::MarkAll, now);
    assert!(model.undo_target(now).is_none());
    assert!(!model.apply(Command::Undo, now));
    assert_eq!(model.count(), 2);
}

#[test]
fn test_marked_in_order_follows_enumeration_order() {
    let mut model = model_with(&["z", "m", "a"]);
    let now = Instant::now();

    model.apply(Command::Mark("a".into()), now);
    model.apply(Command::Mark("z".into()), now);

    assert_eq!(model.marked_in_order(), vec!["z", "a"]);
}

#[test]
fn test_undo_target_expires_lazily() {
    let mut model = model_with(&["a"]).with_undo_window(Duration::from_secs(5));
    let start = Instant::now();

    model.apply(Command::Mark("a".into()), start);
    assert!(model.undo_target(start + Duration::from_secs(4)).is_some());
    assert!(model.undo_target(start + Duration::from_secs(5)).is_none());
    // Once expired the slot stays cleared, even if asked about an earlier time.
    assert!(model.undo_target(start).is_none());
    assert!(model.is_marked("a"));
}
