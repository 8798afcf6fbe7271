//! Configuration for text-tools.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation through the [`Validatable`] trait
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.text-tools.yaml` file in your project root or
//! `~/.config/text-tools/`:
//!
//! ```yaml
//! matching:
//!   preset: permissive
//!   threshold: 0.8
//! codec:
//!   max_decoded_len: 1048576
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_MATCHING_PRESET, DEFAULT_MAX_DECODED_LEN};
pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_full_example_config,
    load_config_file, load_or_default, user_config_dir,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CodecConfig, ConfigOverrides, MatchingConfig,
    OutputConfig,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
