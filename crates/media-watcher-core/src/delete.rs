use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Result of a batch deletion. Deletion is not transactional: files removed
/// before a failure stay removed, and `deleted` reports how far the batch
/// got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub success: bool,
    pub deleted: usize,
    pub error: Option<String>,
}

impl DeleteOutcome {
    pub fn cancelled() -> Self {
        Self {
            success: false,
            deleted: 0,
            error: Some("Deletion cancelled by user.".to_string()),
        }
    }
}

/// Unlinks each path in order, stopping at the first failure.
pub fn delete_files(paths: &[PathBuf]) -> DeleteOutcome {
    let mut deleted = 0;

    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => {
                deleted += 1;
                debug!("removed {}", path.display());
            }
            Err(err) => {
                error!("Failed to remove '{}': {}", path.display(), err);
                return DeleteOutcome {
                    success: false,
                    deleted,
                    error: Some(format!("{}: {}", path.display(), err)),
                };
            }
        }
    }

    info!("Deleted {} file(s)", deleted);
    DeleteOutcome {
        success: true,
        deleted,
        error: None,
    }
}
