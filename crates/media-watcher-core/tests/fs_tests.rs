use media_watcher_core::delete::delete_files;
use media_watcher_core::gallery;
use media_watcher_core::scan::list_files;
use media_watcher_core::SilentReporter;
use std::fs;
use std::io::Write;
use std::path::Path;

fn touch(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::File::create(path).unwrap().write_all(contents).unwrap();
}

#[test]
fn test_scan_returns_sorted_relative_paths() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("sub/b.txt"), b"b");
    touch(&tmp.path().join("a.jpg"), b"a");
    touch(&tmp.path().join("sub/nested/c.png"), b"c");

    let files = list_files(tmp.path(), &[], &SilentReporter).unwrap();
    assert_eq!(files, vec!["a.jpg", "sub/b.txt", "sub/nested/c.png"]);
}

#[test]
fn test_scan_excludes_directories() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("empty/deeper")).unwrap();
    touch(&tmp.path().join("only.txt"), b"x");

    let files = list_files(tmp.path(), &[], &SilentReporter).unwrap();
    assert_eq!(files, vec!["only.txt"]);
}

#[test]
fn test_scan_honors_ignore_globs() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("keep.jpg"), b"k");
    touch(&tmp.path().join("skip.log"), b"s");
    touch(&tmp.path().join("sub/also.log"), b"s");

    let ignore = vec!["*.log".to_string()];
    let files = list_files(tmp.path(), &ignore, &SilentReporter).unwrap();
    assert_eq!(files, vec!["keep.jpg"]);
}

#[test]
fn test_scan_drops_invalid_glob_but_continues() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("a.jpg"), b"a");

    let ignore = vec!["[".to_string()];
    let files = list_files(tmp.path(), &ignore, &SilentReporter).unwrap();
    assert_eq!(files, vec!["a.jpg"]);
}

#[test]
fn test_scan_missing_root_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does-not-exist");
    assert!(list_files(&missing, &[], &SilentReporter).is_err());
}

#[test]
fn test_delete_removes_all_files() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    touch(&a, b"hello");
    touch(&b, b"world");

    let outcome = delete_files(&[a.clone(), b.clone()]);
    assert!(outcome.success);
    assert_eq!(outcome.deleted, 2);
    assert!(outcome.error.is_none());
    assert!(!a.exists());
    assert!(!b.exists());
}

#[test]
fn test_delete_stops_at_first_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("a.txt");
    let missing = tmp.path().join("missing.txt");
    let c = tmp.path().join("c.txt");
    touch(&a, b"a");
    touch(&c, b"c");

    let outcome = delete_files(&[a.clone(), missing, c.clone()]);
    assert!(!outcome.success);
    assert_eq!(outcome.deleted, 1);
    assert!(outcome.error.is_some());
    // The file before the failure is gone, the one after untouched.
    assert!(!a.exists());
    assert!(c.exists());
}

#[test]
fn test_write_gallery_skips_empty_folder() {
    let tmp = tempfile::tempdir().unwrap();
    let written = gallery::write_gallery(tmp.path(), &[], &SilentReporter).unwrap();
    assert!(written.is_none());
}

#[test]
fn test_write_gallery_embeds_file_list() {
    let tmp = tempfile::tempdir().unwrap();
    let folder = tmp.path().join("My Photos");
    touch(&folder.join("a.jpg"), b"a");
    touch(&folder.join("sub/b c.png"), b"b");

    let written = gallery::write_gallery(&folder, &[], &SilentReporter)
        .unwrap()
        .expect("folder has files");
    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        "gallery_My_Photos.html"
    );

    let html = fs::read_to_string(&written).unwrap();
    assert!(html.contains("\"a.jpg\""));
    assert!(html.contains("\"sub/b c.png\""));
    assert!(html.contains("Gallery - My Photos"));
    // All placeholders substituted.
    assert!(!html.contains("__FILE_LIST__"));
    assert!(!html.contains("__MEDIA_ROOT__"));
    assert!(!html.contains("__FOLDER_NAME__"));
}

#[test]
fn test_candidate_dirs_lists_root_then_children() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("b")).unwrap();
    fs::create_dir(tmp.path().join("a")).unwrap();
    touch(&tmp.path().join("not-a-dir.txt"), b"x");

    let dirs = gallery::candidate_dirs(tmp.path()).unwrap();
    assert_eq!(dirs.len(), 3);
    assert_eq!(dirs[0], tmp.path());
    assert_eq!(dirs[1], tmp.path().join("a"));
    assert_eq!(dirs[2], tmp.path().join("b"));
}
