//! Deletion-script rendering.
//!
//! Both builders are pure functions over the media root and an ordered
//! sequence of relative paths, so the same selection always produces
//! byte-identical output (the clipboard copy and the downloaded file must
//! not differ).

pub const POSIX_SCRIPT_NAME: &str = "delete_marked.sh";
pub const BATCH_SCRIPT_NAME: &str = "delete_marked.bat";

/// POSIX shell script: one `rm -v --` per file, `\n` line endings.
/// Paths are joined with `/`, repeated separators collapsed, and embedded
/// double quotes escaped as `\"`.
pub fn posix_script<S: AsRef<str>>(root: &str, rels: &[S]) -> String {
    let mut lines = vec![
        "#!/bin/sh".to_string(),
        "# Delete script generated by media_watcher".to_string(),
        String::new(),
    ];
    for rel in rels {
        let path = posix_path(root, rel.as_ref());
        lines.push(format!("rm -v -- \"{}\"", path.replace('"', "\\\"")));
    }
    lines.join("\n") + "\n"
}

/// Windows batch script: one `del /f /q` per file, `\r\n` line endings.
/// Paths are joined with `\` and any forward slashes normalized to `\`.
/// Embedded double quotes are NOT escaped; a path containing `"` produces
/// a broken line. Inherited behavior, kept as-is.
pub fn windows_script<S: AsRef<str>>(root: &str, rels: &[S]) -> String {
    let mut lines = vec![
        "@echo off".to_string(),
        "rem Delete script generated by media_watcher".to_string(),
        String::new(),
    ];
    for rel in rels {
        let path = windows_path(root, rel.as_ref());
        lines.push(format!("del /f /q \"{}\"", path));
    }
    lines.join("\r\n") + "\r\n"
}

fn posix_path(root: &str, rel: &str) -> String {
    let joined = format!("{}/{}", root.trim_end_matches('/'), rel);
    let mut path = String::with_capacity(joined.len());
    let mut previous_was_separator = false;
    for c in joined.chars() {
        if c == '/' {
            if !previous_was_separator {
                path.push(c);
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
            path.push(c);
        }
    }
    path
}

fn windows_path(root: &str, rel: &str) -> String {
    format!("{}\\{}", root.trim_end_matches('/'), rel).replace('/', "\\")
}
