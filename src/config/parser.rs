use crate::config::types::FileSettings;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a settings file from the given path
///
/// The file only supplies values; validation happens once the command-line
/// overrides have been applied on top (see [`crate::config::validate`]).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use page_gleaner::config::{load_settings, CrawlerSettings};
///
/// let file = load_settings(Path::new("gleaner.toml")).unwrap();
/// let settings = CrawlerSettings::default().with_file(&file);
/// println!("Max depth: {}", settings.max_depth);
/// ```
pub fn load_settings(path: &Path) -> Result<FileSettings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: FileSettings = toml::from_str(&content)?;
    Ok(settings)
}
