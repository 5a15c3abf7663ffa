use crate::config::types::CrawlerSettings;
use crate::output::encoding::lookup_encoding;
use crate::ConfigError;

/// Validates the effective crawl settings
pub fn validate(settings: &CrawlerSettings) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if settings.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout must be > 0 seconds".to_string(),
        ));
    }

    if settings.save_interval == 0 {
        return Err(ConfigError::Validation(
            "save_interval must be >= 1".to_string(),
        ));
    }

    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if settings.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    if lookup_encoding(&settings.encoding).is_err() {
        return Err(ConfigError::Validation(format!(
            "unknown encoding '{}'",
            settings.encoding
        )));
    }

    Ok(())
}

/// Validates a seed URL given on the command line
pub fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    if seed.trim().is_empty() {
        return Err(ConfigError::InvalidUrl("seed URL cannot be empty".to_string()));
    }

    crate::url::normalize_url(seed)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", seed, e)))
}
