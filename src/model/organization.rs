//! Organization profile: the fixed inputs of a calculation run.

use crate::error::{EngineErrorKind, NacTcoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum and maximum projection horizon in years.
pub const MIN_PROJECTION_YEARS: u32 = 1;
pub const MAX_PROJECTION_YEARS: u32 = 10;

/// Stable identifier for an industry vertical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndustryId(String);

impl IndustryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndustryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndustryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An organization's profile for a calculation run.
///
/// Constructed once from upstream input collection and treated as immutable
/// for the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// Managed device count; must be positive
    pub device_count: u32,
    /// User count
    pub user_count: u32,
    /// Physical location count
    pub location_count: u32,
    /// Projection horizon in years, 1-10
    pub projection_years: u32,
    /// Average fully-loaded IT salary
    pub avg_it_salary: f64,
    /// Cost of one hour of network downtime
    pub downtime_cost_per_hour: f64,
    /// Annual cyber-insurance premium
    pub annual_insurance_premium: f64,
    /// Annual compliance-audit budget
    pub annual_audit_budget: f64,
    /// Industry vertical
    pub industry: IndustryId,
}

impl OrganizationConfig {
    /// Validate the invariants the engine re-checks.
    ///
    /// Upstream input collection is assumed to have validated everything
    /// else; the engine only re-checks what its formulas divide by or loop
    /// over.
    pub fn validate(&self) -> Result<()> {
        if self.device_count == 0 {
            return Err(NacTcoError::engine(
                "organization config",
                EngineErrorKind::InvalidDeviceCount(self.device_count),
            ));
        }
        if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&self.projection_years) {
            return Err(NacTcoError::engine(
                "organization config",
                EngineErrorKind::InvalidHorizon(self.projection_years),
            ));
        }
        Ok(())
    }
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            device_count: 1000,
            user_count: 800,
            location_count: 3,
            projection_years: 3,
            avg_it_salary: 95_000.0,
            downtime_cost_per_hour: 5_000.0,
            annual_insurance_premium: 50_000.0,
            annual_audit_budget: 75_000.0,
            industry: IndustryId::new("technology"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NacTcoError;

    #[test]
    fn test_default_is_valid() {
        assert!(OrganizationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_devices_rejected() {
        let org = OrganizationConfig {
            device_count: 0,
            ..Default::default()
        };
        match org.validate() {
            Err(NacTcoError::Engine { source, .. }) => {
                assert!(matches!(source, EngineErrorKind::InvalidDeviceCount(0)));
            }
            other => panic!("expected engine error, got {other:?}"),
        }
    }

    #[test]
    fn test_horizon_bounds() {
        for years in [0, 11, 42] {
            let org = OrganizationConfig {
                projection_years: years,
                ..Default::default()
            };
            assert!(org.validate().is_err(), "years={years} should be invalid");
        }
        for years in [1, 5, 10] {
            let org = OrganizationConfig {
                projection_years: years,
                ..Default::default()
            };
            assert!(org.validate().is_ok(), "years={years} should be valid");
        }
    }
}
