/// Trait for reporting scan progress.
///
/// The CLI implements this with an indicatif spinner. All methods have
/// default no-op implementations.
pub trait ScanReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_file_found(&self, _files_found: usize, _rel: &str) {}
    fn on_walk_error(&self, _detail: &str) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl ScanReporter for SilentReporter {}
