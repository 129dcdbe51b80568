//! Sensitivity command handler.
//!
//! Implements the `sensitivity` subcommand: single-perturbation what-if runs
//! and low/high tornado sweeps over one vendor.

use super::{vendor_catalog, write_output};
use crate::config::AppConfig;
use crate::engine::{
    CostModel, Perturbations, SensitivityAnalyzer, SensitivityParameter, SensitivityScenario,
};
use crate::model::{OrganizationConfig, VendorId};
use crate::reports::reporter_for;
use anyhow::Result;
use std::path::PathBuf;

/// Inputs for one sensitivity run.
#[derive(Debug, Clone)]
pub struct SensitivityRun {
    /// Vendor under analysis
    pub vendor: VendorId,
    /// Organization profile
    pub org: OrganizationConfig,
    /// Explicit per-parameter deltas; used when `tornado` is None
    pub perturbations: Perturbations,
    /// Low/high sweep bounds in percent
    pub tornado: Option<(f64, f64)>,
    /// Merged application configuration
    pub app: AppConfig,
    /// Optional external catalog file
    pub catalog_path: Option<PathBuf>,
}

/// Run the sensitivity command. Returns the process exit code.
pub fn run_sensitivity(run: SensitivityRun) -> Result<i32> {
    let vendors = vendor_catalog(run.catalog_path.as_deref())?;
    let vendor = vendors.get(&run.vendor)?;
    let analyzer = SensitivityAnalyzer::new(CostModel::new(run.app.cost));

    let scenarios = match run.tornado {
        Some((low, high)) => analyzer.tornado(vendor, &run.org, low, high)?,
        None => {
            let breakdown = analyzer.run(vendor, &run.org, &run.perturbations)?;
            explicit_scenarios(&run.perturbations, breakdown)
        }
    };

    let reporter = reporter_for(run.app.output.format, run.app.output.no_color);
    let rendered = reporter.generate_sensitivity_report(&scenarios)?;
    write_output(&rendered, run.app.output.file.as_deref())?;
    Ok(0)
}

/// Express one combined perturbation run as scenario rows, one per
/// non-zero delta. A run with all deltas zero still yields one row so the
/// unperturbed breakdown is visible.
fn explicit_scenarios(
    perturbations: &Perturbations,
    breakdown: crate::engine::CostBreakdown,
) -> Vec<SensitivityScenario> {
    let deltas = [
        (
            SensitivityParameter::DeviceCount,
            perturbations.device_count_delta_pct,
        ),
        (
            SensitivityParameter::StaffCost,
            perturbations.staff_cost_delta_pct,
        ),
        (
            SensitivityParameter::ImplementationCost,
            perturbations.implementation_cost_delta_pct,
        ),
    ];
    let mut scenarios: Vec<SensitivityScenario> = deltas
        .into_iter()
        .filter(|(_, delta)| *delta != 0.0)
        .map(|(parameter, delta_pct)| SensitivityScenario {
            parameter,
            delta_pct,
            breakdown: breakdown.clone(),
        })
        .collect();
    if scenarios.is_empty() {
        scenarios.push(SensitivityScenario {
            parameter: SensitivityParameter::DeviceCount,
            delta_pct: 0.0,
            breakdown,
        });
    }
    scenarios
}
