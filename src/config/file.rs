//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".nac-tco.yaml",
    ".nac-tco.yml",
    "nac-tco.yaml",
    "nac-tco.yml",
    ".nac-tcorc",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/nac-tco/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("nac-tco")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
    /// Values out of range
    Invalid(Vec<super::validation::ConfigError>),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
            Self::Invalid(errors) => {
                write!(f, "Invalid config values: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::Invalid(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load and validate a config file from an explicit path.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigFileError::Invalid(errors));
    }
    Ok(config)
}

/// Load config from a discovered file, or fall back to defaults.
///
/// Returns the config plus the path it was loaded from (None when defaults
/// were used). A discovered-but-broken file degrades to defaults with a
/// warning rather than aborting the run; an explicitly named file that
/// fails to load is still reported back through the path slot as `None`.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

/// Generate an example config file with common options and comments.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# nac-tco configuration file
# Place as .nac-tco.yaml in your project root or ~/.config/nac-tco/

cost:
  # Annual support as a fraction of perpetual license spend
  support_rate: 0.20
  # Fraction of audit work a NAC deployment automates
  compliance_automation: 0.20
  # Breach-reduction credit for vendors without a declared figure
  default_breach_reduction: 0.30

compliance:
  # Annual probability of a penalty-bearing regulatory incident
  incident_probability: 0.10
  # Fraction of audit effort removed per framework
  audit_simplification: 0.25

output:
  # summary, json, or csv
  format: summary
  no_color: false

behavior:
  # Exit non-zero when a compared vendor misses a critical control
  fail_on_gaps: false
  quiet: false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let result = load_config_file(Path::new("/nonexistent/.nac-tco.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".nac-tco.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "cost:\n  support_rate: 0.18").unwrap();
        let config = load_config_file(&path).unwrap();
        assert!((config.cost.support_rate - 0.18).abs() < 1e-9);
        // Unspecified sections keep defaults.
        assert!((config.compliance.audit_simplification - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".nac-tco.yaml");
        std::fs::write(&path, "cost:\n  support_rate: 2.0\n").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".nac-tco.yaml");
        std::fs::write(&path, ":{ not yaml").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_example_config_parses() {
        let example = generate_example_config();
        let config: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert!(config.is_valid());
    }

    #[test]
    fn test_discover_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(discover_config_file(Some(&path)), Some(path));
    }
}
