//! CSV report generator.
//!
//! Generates comma-separated reports for comparison and sensitivity runs,
//! suitable for spreadsheet import and finance-team pipelines.

use super::{ReportError, ReportGenerator};
use crate::engine::{ComparisonResult, SensitivityScenario};
use crate::model::OrganizationConfig;
use crate::utils::round_currency;
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}

fn money(amount: f64) -> f64 {
    round_currency(amount, 2)
}

impl ReportGenerator for CsvReporter {
    fn generate_comparison_report(
        &self,
        results: &[ComparisonResult],
        _org: &OrganizationConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str(
            "Vendor,Name,Initial,Annual,Hidden,Grand Total,Per Device/Month,\
             ROI %,Payback Months,Compliance Score,Baseline,Cheapest,Highest ROI,Best Compliance\n",
        );
        for row in results {
            writeln!(
                content,
                "{},\"{}\",{},{},{},{},{},{},{},{:.1},{},{},{},{}",
                row.vendor,
                escape_csv(&row.vendor_name),
                money(row.cost.initial.total),
                money(row.cost.annual.total),
                money(row.cost.hidden.total),
                money(row.cost.grand_total),
                money(row.cost.per_device_month_cost),
                row.roi
                    .roi_percentage
                    .map_or_else(|| "-".to_string(), |pct| format!("{pct:.1}")),
                row.roi
                    .payback_months
                    .map_or_else(|| "-".to_string(), |m| m.to_string()),
                row.mean_compliance_score,
                row.is_baseline,
                row.cheapest,
                row.highest_roi,
                row.best_compliance,
            )?;
        }

        // Second section: per-framework compliance rows.
        if results.iter().any(|r| !r.compliance.is_empty()) {
            content.push_str("\n# Compliance\n");
            content.push_str(
                "Vendor,Framework,Score,Critical Coverage,Important Coverage,\
                 Gaps,Annual Savings\n",
            );
            for row in results {
                for compliance in &row.compliance {
                    writeln!(
                        content,
                        "{},{},{},{:.3},{:.3},{},{}",
                        row.vendor,
                        compliance.framework,
                        compliance.score,
                        compliance.critical_coverage,
                        compliance.important_coverage,
                        compliance.gaps.len(),
                        money(compliance.total_annual_savings),
                    )?;
                }
            }
        }
        Ok(content)
    }

    fn generate_sensitivity_report(
        &self,
        scenarios: &[SensitivityScenario],
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str("Parameter,Delta %,Initial,Annual,Hidden,Grand Total\n");
        for scenario in scenarios {
            writeln!(
                content,
                "\"{}\",{},{},{},{},{}",
                scenario.parameter.name(),
                scenario.delta_pct,
                money(scenario.breakdown.initial.total),
                money(scenario.breakdown.annual.total),
                money(scenario.breakdown.hidden.total),
                money(scenario.breakdown.grand_total),
            )?;
        }
        Ok(content)
    }
}
