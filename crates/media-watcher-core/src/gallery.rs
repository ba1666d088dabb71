//! Standalone gallery generation.
//!
//! Writes one self-contained `gallery_<foldername>.html` into a folder,
//! embedding the folder's file list. The page carries the whole review
//! flow in the browser: previews, mark-for-deletion checkboxes, the 5 s
//! undo window, and downloadable deletion scripts referencing the files by
//! relative path.

use crate::error::Error;
use crate::progress::ScanReporter;
use crate::scan;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const GALLERY_TEMPLATE: &str = include_str!("gallery.html");

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

/// Extension check used for card previews, case-insensitive.
pub fn is_image(rel: &str) -> bool {
    Path::new(rel)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|i| ext.eq_ignore_ascii_case(i)))
        .unwrap_or(false)
}

/// The root itself plus its immediate subdirectories, sorted.
pub fn candidate_dirs(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut children = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            children.push(path);
        }
    }
    children.sort();

    let mut dirs = vec![root.to_path_buf()];
    dirs.extend(children);
    Ok(dirs)
}

/// Folder name reduced to alphanumerics and `-._` for use in the output
/// file name.
pub fn safe_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "gallery".to_string()
    } else {
        cleaned
    }
}

/// Instantiates the bundled template with the folder's file list.
pub fn render_gallery(
    folder_name: &str,
    media_root: &str,
    files: &[String],
) -> Result<String, Error> {
    let file_list_json = serde_json::to_string(files)?;
    Ok(GALLERY_TEMPLATE
        .replace("__FILE_LIST__", &file_list_json)
        .replace("__MEDIA_ROOT__", media_root)
        .replace("__FOLDER_NAME__", folder_name))
}

/// Scans `folder` and writes its gallery page inside it. Folders with no
/// files are skipped (`None`). The page references files relative to
/// itself, so the media root is `.`.
pub fn write_gallery(
    folder: &Path,
    ignore_globs: &[String],
    reporter: &dyn ScanReporter,
) -> Result<Option<PathBuf>, Error> {
    let files = scan::list_files(folder, ignore_globs, reporter)?;
    if files.is_empty() {
        info!("Skipping {} (no files found)", folder.display());
        return Ok(None);
    }

    let folder_name = folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gallery".to_string());

    let html = render_gallery(&folder_name, ".", &files)?;
    let output = folder.join(format!("gallery_{}.html", safe_filename(&folder_name)));
    fs::write(&output, html)?;
    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_known_extensions() {
        assert!(is_image("a/b.jpg"));
        assert!(is_image("shot.PNG"));
        assert!(is_image("anim.webp"));
        assert!(!is_image("notes.txt"));
        assert!(!is_image("no_extension"));
    }

    #[test]
    fn test_safe_filename_replaces_specials() {
        assert_eq!(safe_filename("My Folder!"), "My_Folder_");
        assert_eq!(safe_filename("photos-2024.bak"), "photos-2024.bak");
        assert_eq!(safe_filename(""), "gallery");
    }
}
