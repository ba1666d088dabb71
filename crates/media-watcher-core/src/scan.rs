use crate::error::Error;
use crate::progress::ScanReporter;
use glob::Pattern;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error};
use walkdir::WalkDir;

/// Recursive listing of the media root. Returns relative paths with `/`
/// separators, sorted, directories excluded. Unreadable entries and
/// subtrees are logged and skipped - the walk never fails part-way, only a
/// missing or unreadable root is an error.
pub fn list_files(
    root: &Path,
    ignore_globs: &[String],
    reporter: &dyn ScanReporter,
) -> Result<Vec<String>, Error> {
    if !root.is_dir() {
        return Err(Error::Other(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let ignore_patterns = compile_patterns(ignore_globs);

    reporter.on_scan_start();
    let scan_start = Instant::now();

    let mut files: Vec<String> = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !ignore_patterns
                .iter()
                .any(|pattern| pattern.matches_path(entry.path()))
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                error!("Skipping unreadable entry: {}", err);
                reporter.on_walk_error(&err.to_string());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        reporter.on_file_found(files.len() + 1, &rel);
        files.push(rel);
    }

    files.sort();

    let duration = scan_start.elapsed();
    debug!(
        "Scan of {} completed in {:.2}s - {} files",
        root.display(),
        duration.as_secs_f64(),
        files.len(),
    );
    reporter.on_scan_complete(files.len(), duration.as_secs_f64());

    Ok(files)
}

fn compile_patterns(ignore_globs: &[String]) -> Vec<Pattern> {
    ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                error!("Invalid glob pattern '{}': {}", glob, err);
                None
            }
        })
        .collect()
}
