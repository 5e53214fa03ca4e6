//! Configuration for the archive domain core.
//!
//! Hosting deployments ship an optional TOML file; a missing file yields
//! `ArchiveConfig::default()`. Unknown keys are accepted by serde but logged
//! as a warning to catch typos.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds the maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Archive-wide configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified; missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Selection cap for browse pages. 0 = unlimited.
    pub browse_max_selection: usize,

    /// Selection cap for assign (upload) pages. 0 = unlimited.
    pub assign_max_selection: usize,

    /// Lifetime of external share links, in hours.
    pub share_ttl_hours: u64,

    /// Number of activity entries retained in memory for the activity page.
    pub activity_log_capacity: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            browse_max_selection: 1,
            assign_max_selection: 3,
            share_ttl_hours: 72,
            activity_log_capacity: 500,
        }
    }
}

impl ArchiveConfig {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(ArchiveConfig::default())`
    /// - Empty file → `Ok(ArchiveConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading; a corrupted or runaway file must
        // not be slurped into memory.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {} // Size is within limits, proceed
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "browse_max_selection",
                "assign_max_selection",
                "share_ttl_hours",
                "activity_log_capacity",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: ArchiveConfig = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            assign_max = config.assign_max_selection,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Share-link lifetime as a chrono duration.
    pub fn share_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.share_ttl_hours as i64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArchiveConfig::default();
        assert_eq!(config.browse_max_selection, 1);
        assert_eq!(config.assign_max_selection, 3);
        assert_eq!(config.share_ttl_hours, 72);
        assert_eq!(config.activity_log_capacity, 500);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/adarc_test_nonexistent_config.toml");
        let config = ArchiveConfig::load(path).unwrap();
        assert_eq!(config.assign_max_selection, 3);
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("adarc_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = ArchiveConfig::load(&path).unwrap();
        assert_eq!(config.browse_max_selection, 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let dir = std::env::temp_dir().join("adarc_config_test_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "assign_max_selection = 5\n").unwrap();

        let config = ArchiveConfig::load(&path).unwrap();
        assert_eq!(config.assign_max_selection, 5);
        assert_eq!(config.browse_max_selection, 1); // default
        assert_eq!(config.share_ttl_hours, 72); // default

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("adarc_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = r#"
browse_max_selection = 1
assign_max_selection = 10
share_ttl_hours = 24
activity_log_capacity = 100
"#;
        std::fs::write(&path, content).unwrap();

        let config = ArchiveConfig::load(&path).unwrap();
        assert_eq!(config.assign_max_selection, 10);
        assert_eq!(config.share_ttl_hours, 24);
        assert_eq!(config.share_ttl(), chrono::Duration::hours(24));
        assert_eq!(config.activity_log_capacity, 100);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("adarc_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let result = ArchiveConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("adarc_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = "assign_max_selection = 3\ntotally_fake_key = 42\n";
        std::fs::write(&path, content).unwrap();

        // Should succeed (unknown keys ignored)
        let config = ArchiveConfig::load(&path).unwrap();
        assert_eq!(config.assign_max_selection, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let dir = std::env::temp_dir().join("adarc_config_test_wrongtype");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        // assign_max_selection should be an integer, not a string
        std::fs::write(&path, "assign_max_selection = \"three\"\n").unwrap();

        let result = ArchiveConfig::load(&path);
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("adarc_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        // Write a file just over 1MB
        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let result = ArchiveConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TooLarge(_))));

        std::fs::remove_dir_all(&dir).ok();
    }
}
