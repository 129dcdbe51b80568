//! Sensitivity analysis: cost re-computation under perturbed assumptions.

use crate::engine::{CostBreakdown, CostModel};
use crate::error::{EngineErrorKind, NacTcoError, Result};
use crate::model::{OrganizationConfig, VendorRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Allowed perturbation range, signed percent.
///
/// The floor prevents nonsensical negative costs; the ceiling keeps the
/// scenario within the realm of planning rather than fantasy.
pub const MIN_DELTA_PCT: f64 = -90.0;
pub const MAX_DELTA_PCT: f64 = 500.0;

/// Signed-percentage deltas applied before re-running the cost model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perturbations {
    /// Delta applied to the organization's device count
    pub device_count_delta_pct: f64,
    /// Delta applied to the average IT salary
    pub staff_cost_delta_pct: f64,
    /// Delta applied to the vendor's implementation cost
    pub implementation_cost_delta_pct: f64,
}

impl Perturbations {
    /// Validate that every delta lies within the allowed range.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("device_count_delta_pct", self.device_count_delta_pct),
            ("staff_cost_delta_pct", self.staff_cost_delta_pct),
            (
                "implementation_cost_delta_pct",
                self.implementation_cost_delta_pct,
            ),
        ] {
            if !(MIN_DELTA_PCT..=MAX_DELTA_PCT).contains(&value) {
                return Err(NacTcoError::engine(
                    "sensitivity perturbation",
                    EngineErrorKind::PerturbationOutOfRange { field, value },
                ));
            }
        }
        Ok(())
    }
}

/// Which input a tornado scenario perturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensitivityParameter {
    DeviceCount,
    StaffCost,
    ImplementationCost,
}

impl SensitivityParameter {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DeviceCount => "device count",
            Self::StaffCost => "staff cost",
            Self::ImplementationCost => "implementation cost",
        }
    }
}

/// One point in a tornado/scenario sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityScenario {
    pub parameter: SensitivityParameter,
    pub delta_pct: f64,
    pub breakdown: CostBreakdown,
}

/// Re-runs the cost model under perturbed inputs.
///
/// Holds no state between calls; sweeping a grid means calling
/// [`SensitivityAnalyzer::run`] repeatedly, which is embarrassingly parallel.
#[derive(Debug, Clone, Default)]
pub struct SensitivityAnalyzer {
    cost_model: CostModel,
}

impl SensitivityAnalyzer {
    #[must_use]
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    /// Apply perturbations and recompute the cost breakdown.
    pub fn run(
        &self,
        vendor: &VendorRecord,
        org: &OrganizationConfig,
        perturbations: &Perturbations,
    ) -> Result<CostBreakdown> {
        perturbations.validate()?;

        let mut org = org.clone();
        let device_factor = 1.0 + perturbations.device_count_delta_pct / 100.0;
        // A -90% delta on a tiny fleet can round to zero devices; floor at one
        // so the breakdown stays well defined.
        org.device_count = ((f64::from(org.device_count) * device_factor).round() as u32).max(1);
        org.avg_it_salary *= 1.0 + perturbations.staff_cost_delta_pct / 100.0;

        let mut vendor = vendor.clone();
        vendor.one_time.implementation *=
            1.0 + perturbations.implementation_cost_delta_pct / 100.0;

        self.cost_model.cost_breakdown(&vendor, &org)
    }

    /// Sweep low/high scenarios for each parameter in parallel.
    ///
    /// Output order is deterministic (parameter, then delta) regardless of
    /// execution order.
    pub fn tornado(
        &self,
        vendor: &VendorRecord,
        org: &OrganizationConfig,
        low_pct: f64,
        high_pct: f64,
    ) -> Result<Vec<SensitivityScenario>> {
        let points: Vec<(SensitivityParameter, f64)> = [
            SensitivityParameter::DeviceCount,
            SensitivityParameter::StaffCost,
            SensitivityParameter::ImplementationCost,
        ]
        .into_iter()
        .flat_map(|p| [(p, low_pct), (p, high_pct)])
        .collect();

        let mut scenarios = points
            .into_par_iter()
            .map(|(parameter, delta_pct)| {
                let perturbations = match parameter {
                    SensitivityParameter::DeviceCount => Perturbations {
                        device_count_delta_pct: delta_pct,
                        ..Default::default()
                    },
                    SensitivityParameter::StaffCost => Perturbations {
                        staff_cost_delta_pct: delta_pct,
                        ..Default::default()
                    },
                    SensitivityParameter::ImplementationCost => Perturbations {
                        implementation_cost_delta_pct: delta_pct,
                        ..Default::default()
                    },
                };
                self.run(vendor, org, &perturbations)
                    .map(|breakdown| SensitivityScenario {
                        parameter,
                        delta_pct,
                        breakdown,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        scenarios.sort_by(|a, b| {
            a.parameter.cmp(&b.parameter).then(
                a.delta_pct
                    .partial_cmp(&b.delta_pct)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });
        Ok(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VendorCatalog;
    use crate::model::VendorId;

    fn vendor() -> VendorRecord {
        VendorCatalog::builtin()
            .get(&VendorId::new("portnox"))
            .unwrap()
            .clone()
    }

    fn org() -> OrganizationConfig {
        OrganizationConfig {
            device_count: 1000,
            projection_years: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_below_floor_rejected() {
        let perturbations = Perturbations {
            device_count_delta_pct: -150.0,
            ..Default::default()
        };
        let err = SensitivityAnalyzer::default()
            .run(&vendor(), &org(), &perturbations)
            .unwrap_err();
        assert!(err.to_string().contains("Calculation"));
    }

    #[test]
    fn test_above_ceiling_rejected() {
        let perturbations = Perturbations {
            staff_cost_delta_pct: 501.0,
            ..Default::default()
        };
        assert!(SensitivityAnalyzer::default()
            .run(&vendor(), &org(), &perturbations)
            .is_err());
    }

    #[test]
    fn test_zero_deltas_match_base_case() {
        let analyzer = SensitivityAnalyzer::default();
        let base = CostModel::default()
            .cost_breakdown(&vendor(), &org())
            .unwrap();
        let perturbed = analyzer
            .run(&vendor(), &org(), &Perturbations::default())
            .unwrap();
        assert_eq!(base, perturbed);
    }

    #[test]
    fn test_device_delta_scales_subscription() {
        let analyzer = SensitivityAnalyzer::default();
        let perturbations = Perturbations {
            device_count_delta_pct: 50.0,
            ..Default::default()
        };
        let perturbed = analyzer.run(&vendor(), &org(), &perturbations).unwrap();
        // 4 $/dev/mo x 1500 devices x 12
        assert_eq!(perturbed.annual.subscription, 72_000.0);
    }

    #[test]
    fn test_implementation_delta_only_touches_services() {
        let analyzer = SensitivityAnalyzer::default();
        let base = CostModel::default()
            .cost_breakdown(&vendor(), &org())
            .unwrap();
        let perturbations = Perturbations {
            implementation_cost_delta_pct: 100.0,
            ..Default::default()
        };
        let perturbed = analyzer.run(&vendor(), &org(), &perturbations).unwrap();
        assert_eq!(perturbed.initial.services, base.initial.services * 2.0);
        assert_eq!(perturbed.annual.total, base.annual.total);
    }

    #[test]
    fn test_device_floor_of_one() {
        let analyzer = SensitivityAnalyzer::default();
        let tiny = OrganizationConfig {
            device_count: 1,
            ..org()
        };
        let perturbations = Perturbations {
            device_count_delta_pct: -90.0,
            ..Default::default()
        };
        let result = analyzer.run(&vendor(), &tiny, &perturbations).unwrap();
        assert!(result.grand_total > 0.0);
    }

    #[test]
    fn test_tornado_is_sorted_and_complete() {
        let analyzer = SensitivityAnalyzer::default();
        let scenarios = analyzer.tornado(&vendor(), &org(), -20.0, 20.0).unwrap();
        assert_eq!(scenarios.len(), 6);
        let pairs: Vec<_> = scenarios
            .iter()
            .map(|s| (s.parameter, s.delta_pct))
            .collect();
        let mut sorted = pairs.clone();
        sorted.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        });
        assert_eq!(pairs, sorted);
    }

    #[test]
    fn test_tornado_deterministic() {
        let analyzer = SensitivityAnalyzer::default();
        let a = analyzer.tornado(&vendor(), &org(), -30.0, 30.0).unwrap();
        let b = analyzer.tornado(&vendor(), &org(), -30.0, 30.0).unwrap();
        assert_eq!(a, b);
    }
}
