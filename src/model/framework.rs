//! Regulatory framework definitions: controls, penalty models, audit cadence.

use crate::model::Capability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a regulatory framework.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameworkId(String);

impl FrameworkId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameworkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier for a single control within a framework.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Criticality tier of a control.
///
/// Scoring weights critical controls at 70% and important controls at 30%;
/// beneficial controls inform capability breadth but never gate the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    Important,
    Beneficial,
}

impl Criticality {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Beneficial => "beneficial",
        }
    }
}

/// A single control requirement within a framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Control identifier, unique within the framework
    pub id: ControlId,
    /// Human-readable name
    pub name: String,
    /// Capabilities that satisfy this control (any one suffices)
    pub required_capabilities: Vec<Capability>,
    /// Criticality tier
    pub criticality: Criticality,
}

/// Penalty exposure model for non-compliance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyModel {
    /// Statutory maximum fine per incident
    pub max_fine: f64,
    /// Optional revenue-percentage fine (e.g. GDPR's 4%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_fraction_fine: Option<f64>,
    /// Typical fine actually levied
    pub typical_fine: f64,
}

/// How often the framework expects audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditCadence {
    Annual,
    Biannual,
    Continuous,
}

impl AuditCadence {
    /// Audits per year implied by the cadence.
    #[must_use]
    pub const fn audits_per_year(&self) -> f64 {
        match self {
            Self::Annual => 1.0,
            Self::Biannual => 2.0,
            Self::Continuous => 4.0,
        }
    }
}

/// A regulatory framework: ordered controls plus penalty and audit models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFramework {
    /// Framework identifier
    pub id: FrameworkId,
    /// Display name
    pub name: String,
    /// Ordered control list
    pub controls: Vec<Control>,
    /// Penalty exposure
    pub penalty: PenaltyModel,
    /// Audit cadence
    pub audit_cadence: AuditCadence,
}

impl ComplianceFramework {
    /// Controls in a given criticality tier.
    pub fn controls_in_tier(&self, tier: Criticality) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |c| c.criticality == tier)
    }

    /// Count of controls in a given tier.
    #[must_use]
    pub fn tier_count(&self, tier: Criticality) -> usize {
        self.controls_in_tier(tier).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framework() -> ComplianceFramework {
        ComplianceFramework {
            id: FrameworkId::new("test-fw"),
            name: "Test Framework".to_string(),
            controls: vec![
                Control {
                    id: ControlId::new("T-1"),
                    name: "Access restricted".to_string(),
                    required_capabilities: vec![Capability::AccessControl],
                    criticality: Criticality::Critical,
                },
                Control {
                    id: ControlId::new("T-2"),
                    name: "Activity logged".to_string(),
                    required_capabilities: vec![Capability::AuditLogging],
                    criticality: Criticality::Important,
                },
            ],
            penalty: PenaltyModel {
                max_fine: 1_000_000.0,
                revenue_fraction_fine: None,
                typical_fine: 150_000.0,
            },
            audit_cadence: AuditCadence::Annual,
        }
    }

    #[test]
    fn test_tier_count() {
        let fw = framework();
        assert_eq!(fw.tier_count(Criticality::Critical), 1);
        assert_eq!(fw.tier_count(Criticality::Important), 1);
        assert_eq!(fw.tier_count(Criticality::Beneficial), 0);
    }

    #[test]
    fn test_audit_cadence_frequency() {
        assert_eq!(AuditCadence::Annual.audits_per_year(), 1.0);
        assert_eq!(AuditCadence::Continuous.audits_per_year(), 4.0);
    }

    #[test]
    fn test_criticality_serde() {
        let json = serde_json::to_string(&Criticality::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
