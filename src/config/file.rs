//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".text-tools.yaml",
    ".text-tools.yml",
    "text-tools.yaml",
    "text-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// An explicit path is used as-is and never falls through to discovery;
/// if it does not exist the result is [`ConfigFileError::NotFound`].
/// Otherwise the search order is:
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/text-tools/)
/// 4. Home directory
pub fn discover_config_file(
    explicit_path: Option<&Path>,
) -> Result<Option<PathBuf>, ConfigFileError> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Ok(Some(path));
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Ok(Some(path));
    }

    if let Some(config_dir) = user_config_dir()
        && let Some(path) = find_config_in_dir(&config_dir)
    {
        return Ok(Some(path));
    }

    Ok(dirs::home_dir().and_then(|home| find_config_in_dir(&home)))
}

/// `~/.config/text-tools` (or the platform equivalent).
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("text-tools"))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Walk up from the current directory to the first one holding `.git`.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A discovered file that fails to load is logged and replaced by the
/// defaults. A missing explicit path is an error.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    let Some(path) = discover_config_file(explicit_path)? else {
        return Ok((AppConfig::default(), None));
    };
    match load_config_file(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            Ok((AppConfig::default(), None))
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line values over this config. Every `Some` in
    /// `overrides` replaces the current value.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(preset) = &overrides.preset {
            self.matching.preset.clone_from(preset);
        }
        if overrides.threshold.is_some() {
            self.matching.threshold = overrides.threshold;
        }
        if overrides.fold_case.is_some() {
            self.matching.fold_case = overrides.fold_case;
        }
        if overrides.max_results.is_some() {
            self.matching.max_results = overrides.max_results;
        }

        if let Some(max) = overrides.max_decoded_len {
            self.codec.max_decoded_len = max;
        }

        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }

        if let Some(fail) = overrides.fail_on_change {
            self.behavior.fail_on_change = fail;
        }
        if let Some(quiet) = overrides.quiet {
            self.behavior.quiet = quiet;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &ConfigOverrides,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# text-tools configuration
# Place this file at .text-tools.yaml in your project root or
# ~/.config/text-tools/text-tools.yaml. CLI arguments override it.

# Similarity ranking (`rank`, `distance --ignore-case`)
matching:
  # Preset: strict, balanced, permissive
  preset: balanced
  # Custom threshold (0.0-1.0), overrides preset
  # threshold: 0.8
  # Lowercase both sides before comparing
  # fold_case: true
  # Maximum ranked results
  # max_results: 10

# Run-length codec
codec:
  # Largest decoded output accepted, in chars
  max_decoded_len: 16777216

# Output
output:
  # Format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: result.json

behavior:
  # Exit with code 1 when `diff` finds changes
  fail_on_change: false
  quiet: false
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".text-tools.yaml");
        std::fs::write(&config_path, "matching:\n  preset: strict\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
matching:
  preset: strict
  threshold: 0.9
codec:
  max_decoded_len: 64
output:
  format: json
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.matching.preset, "strict");
        assert_eq!(config.matching.threshold, Some(0.9));
        assert_eq!(config.codec.max_decoded_len, 64);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_bad_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "matching: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "codec: {max_decoded_len: lots}").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_load_or_default_explicit_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("typo.yaml");

        match load_or_default(Some(&missing)) {
            Err(ConfigFileError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().preset("strict").max_decoded_len(32).build();
        let overrides = ConfigOverrides {
            threshold: Some(0.75),
            output_format: Some(OutputFormat::Json),
            fail_on_change: Some(true),
            ..ConfigOverrides::default()
        };

        base.merge(&overrides);

        assert_eq!(base.matching.preset, "strict");
        assert_eq!(base.matching.threshold, Some(0.75));
        assert_eq!(base.codec.max_decoded_len, 32);
        assert_eq!(base.output.format, OutputFormat::Json);
        assert!(base.behavior.fail_on_change);
    }

    #[test]
    fn test_config_merge_default_valued_override_wins() {
        let mut base = AppConfig::builder()
            .preset("strict")
            .output_format(OutputFormat::Json)
            .quiet(true)
            .build();
        let overrides = ConfigOverrides {
            preset: Some("balanced".to_string()),
            output_format: Some(OutputFormat::Text),
            quiet: Some(false),
            ..ConfigOverrides::default()
        };

        base.merge(&overrides);

        assert_eq!(base.matching.preset, "balanced");
        assert_eq!(base.output.format, OutputFormat::Text);
        assert!(!base.behavior.quiet);
    }

    #[test]
    fn test_config_merge_empty_overrides_keep_file_values() {
        let file = AppConfig::builder()
            .preset("permissive")
            .output_format(OutputFormat::Json)
            .build();
        let mut merged = file.clone();
        merged.merge(&ConfigOverrides::default());
        assert_eq!(merged, file);
    }

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = serde_yaml_ng::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "behavior:\n  quiet: true\n").unwrap();

        assert_eq!(
            discover_config_file(Some(&config_path)).unwrap(),
            Some(config_path)
        );
    }

    #[test]
    fn test_discover_explicit_missing_does_not_fall_through() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".text-tools.yaml"),
            "behavior:\n  quiet: true\n",
        )
        .unwrap();
        let missing = tmp.path().join("nope.yaml");

        assert!(matches!(
            discover_config_file(Some(&missing)),
            Err(ConfigFileError::NotFound(_))
        ));
    }
}
