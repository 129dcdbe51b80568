//! Configuration module for nac-tco.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nac_tco::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Conservative);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .support_rate(0.18)
//!     .fail_on_gaps(true)
//!     .build();
//!
//! // Load from file
//! use nac_tco::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.nac-tco.yaml` file in your project root or `~/.config/nac-tco/`:
//!
//! ```yaml
//! cost:
//!   support_rate: 0.18
//! behavior:
//!   fail_on_gaps: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_DEVICE_COUNT, DEFAULT_PROJECTION_YEARS};
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents all options that can be set in `.nac-tco.yaml`
/// config files. Editors can use it for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
