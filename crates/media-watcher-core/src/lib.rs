pub mod config;
pub mod delete;
pub mod error;
pub mod gallery;
pub mod progress;
pub mod scan;
pub mod script;
pub mod selection;

pub use config::AppConfig;
pub use delete::DeleteOutcome;
pub use error::Error;
pub use progress::{ScanReporter, SilentReporter};
pub use selection::{Command, SelectionModel};
