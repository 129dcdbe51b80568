//! Configuration validation for nac-tco.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::engine::{ComplianceAssumptions, CostAssumptions};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.cost.validate());
        errors.extend(self.compliance.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

fn check_fraction(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ConfigError::new(
            field,
            format!("must be between 0.0 and 1.0, got {value}"),
        ));
    }
}

fn check_non_negative(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ConfigError::new(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
}

impl Validatable for CostAssumptions {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_fraction(&mut errors, "cost.support_rate", self.support_rate);
        check_fraction(
            &mut errors,
            "cost.compliance_automation",
            self.compliance_automation,
        );
        check_fraction(
            &mut errors,
            "cost.incident_probability",
            self.incident_probability,
        );
        check_fraction(
            &mut errors,
            "cost.default_breach_reduction",
            self.default_breach_reduction,
        );
        check_non_negative(
            &mut errors,
            "cost.legacy_integration_unit_cost",
            self.legacy_integration_unit_cost,
        );
        check_non_negative(
            &mut errors,
            "cost.legacy_integration_issue_count",
            self.legacy_integration_issue_count,
        );
        check_non_negative(&mut errors, "cost.incident_unit_cost", self.incident_unit_cost);
        check_non_negative(
            &mut errors,
            "cost.annual_incident_count",
            self.annual_incident_count,
        );
        if self.hours_per_year <= 0.0 || !self.hours_per_year.is_finite() {
            errors.push(ConfigError::new(
                "cost.hours_per_year",
                format!("must be positive, got {}", self.hours_per_year),
            ));
        }
        errors
    }
}

impl Validatable for ComplianceAssumptions {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_fraction(
            &mut errors,
            "compliance.incident_probability",
            self.incident_probability,
        );
        check_fraction(
            &mut errors,
            "compliance.audit_simplification",
            self.audit_simplification,
        );
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        if self.currency_decimals > 6 {
            errors.push(ConfigError::new(
                "output.currency_decimals",
                format!("must be at most 6, got {}", self.currency_decimals),
            ));
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        let mut config = AppConfig::default();
        config.cost.support_rate = 1.5;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cost.support_rate");
    }

    #[test]
    fn test_negative_unit_cost_rejected() {
        let mut config = AppConfig::default();
        config.cost.incident_unit_cost = -1.0;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut config = AppConfig::default();
        config.cost.legacy_integration_unit_cost = f64::NAN;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_missing_output_parent_rejected() {
        let mut config = AppConfig::default();
        config.output.file = Some("/definitely/not/a/real/dir/report.json".into());
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "output.file"));
    }
}
