//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportGenerator};
use crate::engine::{ComparisonResult, SensitivityScenario};
use crate::model::OrganizationConfig;
use crate::utils::format_currency;
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn badges(&self, row: &ComparisonResult) -> String {
        let mut badges = Vec::new();
        if row.is_baseline {
            badges.push(self.color("[baseline]", "dim"));
        }
        if row.cheapest {
            badges.push(self.color("[cheapest]", "green"));
        }
        if row.highest_roi {
            badges.push(self.color("[highest roi]", "green"));
        }
        if row.best_compliance {
            badges.push(self.color("[best compliance]", "cyan"));
        }
        badges.join(" ")
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_comparison_report(
        &self,
        results: &[ComparisonResult],
        org: &OrganizationConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("NAC Vendor Comparison", "bold"));
        lines.push(self.color("─".repeat(44).as_str(), "dim"));
        lines.push(format!(
            "{}  {} devices, {} users, {}-year horizon",
            self.color("Scope:", "cyan"),
            org.device_count,
            org.user_count,
            org.projection_years
        ));
        lines.push(String::new());

        for row in results {
            let mut line = format!(
                "{}  {} total",
                self.color(&row.vendor_name, "bold"),
                format_currency(row.cost.grand_total, 0)
            );
            let badges = self.badges(row);
            if !badges.is_empty() {
                write!(line, "  {badges}")?;
            }
            lines.push(line);
            lines.push(format!(
                "  initial {}  annual {}  hidden {}  per-device/mo {}",
                format_currency(row.cost.initial.total, 0),
                format_currency(row.cost.annual.total, 0),
                format_currency(row.cost.hidden.total, 0),
                format_currency(row.cost.per_device_month_cost, 2),
            ));
            let roi = row
                .roi
                .roi_percentage
                .map_or_else(|| "n/a".to_string(), |pct| format!("{pct:.1}%"));
            let payback = row.roi.payback_months.map_or_else(
                || "beyond horizon".to_string(),
                |months| format!("{months} mo"),
            );
            lines.push(format!(
                "  roi {}  payback {}  savings/yr {}",
                roi,
                payback,
                format_currency(row.roi.annual_savings, 0),
            ));
            if !row.compliance.is_empty() {
                let frameworks: Vec<String> = row
                    .compliance
                    .iter()
                    .map(|c| {
                        let rendered = format!("{} {}", c.framework, c.score);
                        if c.gaps.is_empty() {
                            self.color(&rendered, "green")
                        } else {
                            self.color(
                                &format!("{rendered} ({} gaps)", c.gaps.len()),
                                "yellow",
                            )
                        }
                    })
                    .collect();
                lines.push(format!("  compliance {}", frameworks.join("  ")));
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    fn generate_sensitivity_report(
        &self,
        scenarios: &[SensitivityScenario],
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color("Sensitivity Analysis", "bold"));
        lines.push(self.color("─".repeat(44).as_str(), "dim"));
        for scenario in scenarios {
            let delta = if scenario.delta_pct >= 0.0 {
                self.color(&format!("+{:.0}%", scenario.delta_pct), "yellow")
            } else {
                self.color(&format!("{:.0}%", scenario.delta_pct), "cyan")
            };
            lines.push(format!(
                "{:<22} {}  grand total {}",
                scenario.parameter.name(),
                delta,
                format_currency(scenario.breakdown.grand_total, 0),
            ));
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FrameworkCatalog, VendorCatalog};
    use crate::engine::ComparisonAggregator;
    use crate::model::{FrameworkId, VendorId};

    fn results() -> (Vec<ComparisonResult>, OrganizationConfig) {
        let vendors = VendorCatalog::builtin();
        let frameworks = FrameworkCatalog::builtin();
        let aggregator = ComparisonAggregator::new(&vendors, &frameworks);
        let org = OrganizationConfig::default();
        let results = aggregator
            .compare(
                &[VendorId::new("portnox"), VendorId::new("cisco-ise")],
                &org,
                &[FrameworkId::new("hipaa")],
            )
            .unwrap();
        (results, org)
    }

    #[test]
    fn test_summary_mentions_each_vendor() {
        let (results, org) = results();
        let rendered = SummaryReporter::new()
            .no_color()
            .generate_comparison_report(&results, &org)
            .unwrap();
        assert!(rendered.contains("Portnox Cloud"));
        assert!(rendered.contains("Cisco ISE"));
        assert!(rendered.contains("[cheapest]"));
    }

    #[test]
    fn test_no_color_strips_ansi() {
        let (results, org) = results();
        let rendered = SummaryReporter::new()
            .no_color()
            .generate_comparison_report(&results, &org)
            .unwrap();
        assert!(!rendered.contains("\x1b["));
    }
}
