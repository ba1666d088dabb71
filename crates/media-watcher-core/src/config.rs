use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base directory all relative paths are resolved against.
    /// Falls back to the current directory when unset.
    #[serde(default)]
    pub media_root: Option<String>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// When true, the review session marks a file as soon as it is viewed.
    #[serde(default)]
    pub delete_on_view: bool,
    #[serde(default = "default_undo_window_secs")]
    pub undo_window_secs: u64,
}

fn default_undo_window_secs() -> u64 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            media_root: None,
            ignore_patterns: Vec::new(),
            delete_on_view: false,
            undo_window_secs: default_undo_window_secs(),
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
