//! Configuration types for nac-tco runs.
//!
//! Provides the unified application configuration plus the output and
//! behavior sub-configurations merged from CLI arguments and config files.

use crate::engine::{ComplianceAssumptions, CostAssumptions};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all
/// configuration options. It can be constructed from CLI arguments, config
/// files, or both (with CLI overriding file settings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Cost-model assumptions (support rate, incident economics, ...)
    pub cost: CostAssumptions,
    /// Compliance-monetization assumptions
    pub compliance: ComplianceAssumptions,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the annual support rate applied to perpetual licenses.
    pub const fn support_rate(mut self, rate: f64) -> Self {
        self.config.cost.support_rate = rate;
        self
    }

    /// Set the default breach-reduction fraction for vendors without a
    /// declared figure.
    pub const fn default_breach_reduction(mut self, fraction: f64) -> Self {
        self.config.cost.default_breach_reduction = fraction;
        self
    }

    /// Set the compliance-automation fraction.
    pub const fn compliance_automation(mut self, fraction: f64) -> Self {
        self.config.cost.compliance_automation = fraction;
        self
    }

    /// Set the audit-simplification fraction.
    pub const fn audit_simplification(mut self, fraction: f64) -> Self {
        self.config.compliance.audit_simplification = fraction;
        self
    }

    /// Set the annual regulatory-incident probability.
    pub const fn incident_probability(mut self, probability: f64) -> Self {
        self.config.compliance.incident_probability = probability;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-gaps mode.
    pub const fn fail_on_gaps(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_gaps = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Decimal places when rendering currency amounts
    #[schemars(range(min = 0, max = 6))]
    pub currency_decimals: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
            currency_decimals: 2,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit non-zero when any compared vendor leaves a critical control
    /// uncovered
    pub fail_on_gaps: bool,
    /// Suppress informational output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert!(!config.behavior.fail_on_gaps);
        assert!((config.cost.support_rate - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .support_rate(0.25)
            .output_format(ReportFormat::Json)
            .fail_on_gaps(true)
            .quiet(true)
            .build();
        assert!((config.cost.support_rate - 0.25).abs() < 1e-9);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_on_gaps);
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_serde_round_trip_defaults_missing_fields() {
        let config: AppConfig = serde_yaml::from_str("output:\n  no_color: true\n").unwrap();
        assert!(config.output.no_color);
        assert_eq!(config.output.currency_decimals, 2);
    }
}
