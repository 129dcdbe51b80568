//! Compliance scoring: control coverage, gaps, and monetized risk reduction.

use crate::model::{
    ComplianceFramework, Control, ControlId, Criticality, FrameworkId, IndustryRiskProfile,
    OrganizationConfig, VendorRecord,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named business assumptions behind compliance monetization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComplianceAssumptions {
    /// Assumed annual probability of a penalty-bearing incident
    pub incident_probability: f64,
    /// Fraction of audit effort removed per framework by NAC evidence
    pub audit_simplification: f64,
}

impl Default for ComplianceAssumptions {
    fn default() -> Self {
        Self {
            incident_probability: 0.10,
            audit_simplification: 0.25,
        }
    }
}

/// Compliance posture of one vendor against one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScoreResult {
    /// Framework scored against
    pub framework: FrameworkId,
    /// Coverage score, 0-100, weighted 70/30 critical/important
    pub score: u8,
    /// Fraction of critical controls covered (1.0 when the tier is empty)
    pub critical_coverage: f64,
    /// Fraction of important controls covered (1.0 when the tier is empty)
    pub important_coverage: f64,
    /// Critical controls the vendor does not cover.
    ///
    /// Important/beneficial misses are deliberately not surfaced; the gap
    /// list is a remediation worklist, and critical items are what gate an
    /// audit.
    pub gaps: Vec<ControlId>,
    /// Expected annual penalty exposure avoided
    pub penalty_reduction: f64,
    /// Expected annual audit-effort savings
    pub audit_savings: f64,
    /// Expected annual insurance-premium savings
    pub insurance_savings: f64,
    /// Sum of the three savings terms, each individually non-negative
    pub total_annual_savings: f64,
}

/// Scores vendor capability sets against framework control lists.
#[derive(Debug, Clone, Default)]
pub struct ComplianceScorer {
    assumptions: ComplianceAssumptions,
}

impl ComplianceScorer {
    #[must_use]
    pub fn new(assumptions: ComplianceAssumptions) -> Self {
        Self { assumptions }
    }

    /// Score one vendor against one framework.
    ///
    /// `framework_count` is how many frameworks the run is assessing (it
    /// scales the audit-savings term); `industry` supplies insurance
    /// parameters when a profile exists for the organization's vertical.
    #[must_use]
    pub fn score(
        &self,
        vendor: &VendorRecord,
        framework: &ComplianceFramework,
        org: &OrganizationConfig,
        industry: Option<&IndustryRiskProfile>,
        framework_count: usize,
    ) -> ComplianceScoreResult {
        let (critical_coverage, gaps) = tier_coverage(vendor, framework, Criticality::Critical);
        let (important_coverage, _) = tier_coverage(vendor, framework, Criticality::Important);

        let score = (critical_coverage * 70.0 + important_coverage * 30.0).round() as u8;
        let score_fraction = f64::from(score) / 100.0;

        let penalty_reduction =
            (framework.penalty.max_fine * score_fraction * self.assumptions.incident_probability)
                .max(0.0);
        let audit_savings = (org.annual_audit_budget
            * framework_count as f64
            * self.assumptions.audit_simplification)
            .max(0.0);
        let insurance_savings = industry
            .map(|profile| {
                profile.insurance.typical_premium
                    * profile.insurance.nac_discount_fraction
                    * score_fraction
            })
            .unwrap_or(0.0)
            .max(0.0);

        tracing::trace!(
            vendor = %vendor.id,
            framework = %framework.id,
            score,
            gap_count = gaps.len(),
            "compliance score computed"
        );

        ComplianceScoreResult {
            framework: framework.id.clone(),
            score,
            critical_coverage,
            important_coverage,
            gaps,
            penalty_reduction,
            audit_savings,
            insurance_savings,
            total_annual_savings: penalty_reduction + audit_savings + insurance_savings,
        }
    }
}

/// A vendor covers a control iff its capability set intersects the control's
/// required set. An empty requirement list is vacuously covered.
fn covers(vendor: &VendorRecord, control: &Control) -> bool {
    control.required_capabilities.is_empty()
        || control
            .required_capabilities
            .iter()
            .any(|cap| vendor.has_capability(*cap))
}

/// Coverage fraction for one tier plus the ids of uncovered controls.
///
/// A tier with zero controls scores 1.0; absence of requirements is not a
/// deficiency.
fn tier_coverage(
    vendor: &VendorRecord,
    framework: &ComplianceFramework,
    tier: Criticality,
) -> (f64, Vec<ControlId>) {
    let mut total = 0usize;
    let mut covered = 0usize;
    let mut gaps = Vec::new();
    for control in framework.controls_in_tier(tier) {
        total += 1;
        if covers(vendor, control) {
            covered += 1;
        } else {
            gaps.push(control.id.clone());
        }
    }
    if total == 0 {
        (1.0, gaps)
    } else {
        (covered as f64 / total as f64, gaps)
    }
}
