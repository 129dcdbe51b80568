//! Cost model: initial, recurring-annual, and hidden costs per vendor.

use crate::error::Result;
use crate::model::{OrganizationConfig, VendorCategory, VendorId, VendorRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named business assumptions behind the cost heuristics.
///
/// These multipliers mirror observed industry planning figures; none of them
/// is a verified financial truth, so every one is overridable via the config
/// file or builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CostAssumptions {
    /// Annual support as a fraction of perpetual license spend
    pub support_rate: f64,
    /// Fraction of audit work automated when a vendor declares no signal
    pub compliance_automation: f64,
    /// Cost per integration issue for legacy-enterprise deployments
    pub legacy_integration_unit_cost: f64,
    /// Expected integration issues for legacy-enterprise deployments
    pub legacy_integration_issue_count: f64,
    /// Cost of a single security incident
    pub incident_unit_cost: f64,
    /// Incidents per year before mitigation
    pub annual_incident_count: f64,
    /// Probability that an incident materializes into real cost
    pub incident_probability: f64,
    /// Breach-exposure reduction when a vendor declares no signal
    pub default_breach_reduction: f64,
    /// Hours in a year for downtime conversion
    pub hours_per_year: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            support_rate: 0.20,
            compliance_automation: 0.20,
            legacy_integration_unit_cost: 15_000.0,
            legacy_integration_issue_count: 3.0,
            incident_unit_cost: 50_000.0,
            annual_incident_count: 12.0,
            incident_probability: 0.10,
            default_breach_reduction: 0.30,
            hours_per_year: 8760.0,
        }
    }
}

/// Initial (one-time) cost group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialCosts {
    pub licenses: f64,
    pub hardware: f64,
    pub services: f64,
    pub training: f64,
    pub total: f64,
}

/// Recurring annual cost group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualCosts {
    pub subscription: f64,
    pub support: f64,
    pub infrastructure: f64,
    pub operations: f64,
    pub compliance: f64,
    pub total: f64,
}

/// Hidden/indirect annual cost group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HiddenCosts {
    pub downtime: f64,
    pub integration: f64,
    pub incidents: f64,
    pub total: f64,
}

/// Complete cost breakdown for one vendor under one organization config.
///
/// Invariant: every `total` equals the sum of its listed parts, and
/// `grand_total = initial.total + annual.total * years + hidden.total * years`.
/// Both hold by construction; totals are computed from the parts, never
/// stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Vendor this breakdown was computed for
    pub vendor: VendorId,
    /// Projection horizon the breakdown covers
    pub years: u32,
    pub initial: InitialCosts,
    pub annual: AnnualCosts,
    pub hidden: HiddenCosts,
    /// Total cost of ownership over the horizon
    pub grand_total: f64,
    /// Grand total amortized per device per month
    pub per_device_month_cost: f64,
}

/// Computes cost breakdowns for (vendor, organization) pairs.
///
/// Deterministic and side-effect-free; one instance may be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    assumptions: CostAssumptions,
}

impl CostModel {
    #[must_use]
    pub fn new(assumptions: CostAssumptions) -> Self {
        Self { assumptions }
    }

    #[must_use]
    pub const fn assumptions(&self) -> &CostAssumptions {
        &self.assumptions
    }

    /// Compute the full cost breakdown for a vendor under an organization
    /// config.
    ///
    /// Fails with an `InvalidConfig`-class error when the organization
    /// violates its invariants (non-positive device count, horizon outside
    /// 1-10 years).
    pub fn cost_breakdown(
        &self,
        vendor: &VendorRecord,
        org: &OrganizationConfig,
    ) -> Result<CostBreakdown> {
        org.validate()?;

        let a = &self.assumptions;
        let devices = f64::from(org.device_count);
        let years = f64::from(org.projection_years);

        // Licensing: subscription-like models bill monthly per device with
        // no upfront license; perpetual pays upfront; hybrid pays both.
        let mut licenses = 0.0;
        let mut subscription = vendor.recurring.subscription;
        if vendor.pricing.has_upfront_license() {
            licenses = match vendor.pricing {
                crate::model::PricingModel::Hybrid => vendor.flat_license_price.unwrap_or(0.0),
                _ => vendor
                    .flat_license_price
                    .unwrap_or(vendor.per_device_price * devices),
            };
        }
        if vendor.pricing.is_subscription_like() {
            subscription += vendor.per_device_price * devices * 12.0;
        }

        let initial = {
            let hardware = vendor.one_time.hardware;
            let services = vendor.one_time.implementation;
            let training = vendor.one_time.training;
            InitialCosts {
                licenses,
                hardware,
                services,
                training,
                total: licenses + hardware + services + training,
            }
        };

        // Support: declared maintenance+support wins; perpetual licenses
        // with nothing declared fall back to a fraction of license spend.
        let declared_support = vendor.recurring.declared_support();
        let support = if vendor.pricing.has_upfront_license() && declared_support == 0.0 {
            initial.licenses * vendor.support_rate.unwrap_or(a.support_rate)
        } else {
            declared_support
        };

        let operations = vendor.operations.required_fte * org.avg_it_salary;
        let automation = vendor
            .compliance_automation
            .unwrap_or(a.compliance_automation);
        let compliance = org.annual_audit_budget * (1.0 - automation);

        let annual = {
            let infrastructure = vendor.recurring.infrastructure;
            AnnualCosts {
                subscription,
                support,
                infrastructure,
                operations,
                compliance,
                total: subscription + support + infrastructure + operations + compliance,
            }
        };

        let downtime = (100.0 - vendor.operations.uptime_percent) / 100.0
            * a.hours_per_year
            * org.downtime_cost_per_hour;
        let integration = if vendor.category == VendorCategory::LegacyEnterprise {
            a.legacy_integration_unit_cost * a.legacy_integration_issue_count
        } else {
            0.0
        };
        let breach_reduction = vendor
            .breach_reduction
            .unwrap_or(a.default_breach_reduction);
        let incidents = a.incident_unit_cost
            * a.annual_incident_count
            * (1.0 - breach_reduction)
            * a.incident_probability;

        let hidden = HiddenCosts {
            downtime,
            integration,
            incidents,
            total: downtime + integration + incidents,
        };

        let grand_total = initial.total + annual.total * years + hidden.total * years;
        let per_device_month_cost = grand_total / (devices * years * 12.0);

        tracing::trace!(
            vendor = %vendor.id,
            grand_total,
            per_device_month_cost,
            "cost breakdown computed"
        );

        Ok(CostBreakdown {
            vendor: vendor.id.clone(),
            years: org.projection_years,
            initial,
            annual,
            hidden,
            grand_total,
            per_device_month_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VendorCatalog;
    use crate::model::VendorId;

    fn org() -> OrganizationConfig {
        OrganizationConfig {
            device_count: 1000,
            projection_years: 3,
            avg_it_salary: 100_000.0,
            downtime_cost_per_hour: 1_000.0,
            annual_audit_budget: 50_000.0,
            ..Default::default()
        }
    }

    fn vendor(id: &str) -> VendorRecord {
        VendorCatalog::builtin()
            .get(&VendorId::new(id))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_subscription_pricing_example() {
        // 4 $/device/month x 1000 devices x 12 months = 48,000/yr, no license
        let v = vendor("portnox");
        let breakdown = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        assert_eq!(breakdown.annual.subscription, 48_000.0);
        assert_eq!(breakdown.initial.licenses, 0.0);
    }

    #[test]
    fn test_perpetual_license_and_support_fallback() {
        let mut v = vendor("cisco-ise");
        v.recurring.maintenance = 0.0;
        v.recurring.support = 0.0;
        v.support_rate = None;
        let breakdown = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        assert_eq!(breakdown.initial.licenses, 42.0 * 1000.0);
        assert_eq!(breakdown.annual.support, 42_000.0 * 0.20);
    }

    #[test]
    fn test_declared_support_wins_over_fallback() {
        let mut v = vendor("cisco-ise");
        v.recurring.support = 9_000.0;
        v.recurring.maintenance = 1_000.0;
        let breakdown = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        assert_eq!(breakdown.annual.support, 10_000.0);
    }

    #[test]
    fn test_legacy_integration_penalty() {
        let legacy = vendor("cisco-ise");
        let cloud = vendor("portnox");
        let model = CostModel::default();
        let legacy_cost = model.cost_breakdown(&legacy, &org()).unwrap();
        let cloud_cost = model.cost_breakdown(&cloud, &org()).unwrap();
        assert_eq!(legacy_cost.hidden.integration, 45_000.0);
        assert_eq!(cloud_cost.hidden.integration, 0.0);
    }

    #[test]
    fn test_downtime_formula() {
        let mut v = vendor("portnox");
        v.operations.uptime_percent = 99.0;
        let breakdown = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        // 1% of 8760 hours at 1000/hr
        assert!((breakdown.hidden.downtime - 87_600.0).abs() < 1e-6);
    }

    #[test]
    fn test_incident_exposure_defaults() {
        let mut v = vendor("portnox");
        v.breach_reduction = None;
        let breakdown = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        // 50k x 12 x (1 - 0.3) x 0.1
        assert!((breakdown.hidden.incidents - 42_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_sum_invariant() {
        let model = CostModel::default();
        for v in VendorCatalog::builtin().records() {
            let b = model.cost_breakdown(v, &org()).unwrap();
            let years = f64::from(b.years);
            assert_eq!(
                b.grand_total,
                b.initial.total + b.annual.total * years + b.hidden.total * years,
                "grand total invariant for {}",
                v.id
            );
            assert_eq!(
                b.initial.total,
                b.initial.licenses + b.initial.hardware + b.initial.services + b.initial.training
            );
            assert_eq!(
                b.annual.total,
                b.annual.subscription
                    + b.annual.support
                    + b.annual.infrastructure
                    + b.annual.operations
                    + b.annual.compliance
            );
            assert_eq!(
                b.hidden.total,
                b.hidden.downtime + b.hidden.integration + b.hidden.incidents
            );
        }
    }

    #[test]
    fn test_per_device_month_cost() {
        let v = vendor("portnox");
        let b = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        let expected = b.grand_total / (1000.0 * 3.0 * 12.0);
        assert!((b.per_device_month_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_org_rejected() {
        let v = vendor("portnox");
        let bad = OrganizationConfig {
            device_count: 0,
            ..org()
        };
        assert!(CostModel::default().cost_breakdown(&v, &bad).is_err());
    }

    #[test]
    fn test_determinism() {
        let v = vendor("forescout");
        let model = CostModel::default();
        let a = model.cost_breakdown(&v, &org()).unwrap();
        let b = model.cost_breakdown(&v, &org()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hybrid_pays_both_components() {
        let v = vendor("forescout");
        let b = CostModel::default().cost_breakdown(&v, &org()).unwrap();
        assert_eq!(b.initial.licenses, 55_000.0);
        assert_eq!(b.annual.subscription, 3.2 * 1000.0 * 12.0);
    }
}
