//! Score command handler.
//!
//! Implements the `score` subcommand: compliance scoring of one vendor
//! against one framework, with the monetized savings terms.

use super::{framework_catalog, vendor_catalog, write_output};
use crate::config::AppConfig;
use crate::engine::ComplianceScorer;
use crate::model::{FrameworkId, OrganizationConfig, VendorId};
use crate::reports::ReportFormat;
use crate::utils::format_currency;
use anyhow::Result;
use std::path::PathBuf;

/// Inputs for one score run.
#[derive(Debug, Clone)]
pub struct ScoreRun {
    /// Vendor under assessment
    pub vendor: VendorId,
    /// Framework to score against
    pub framework: FrameworkId,
    /// Organization profile
    pub org: OrganizationConfig,
    /// Merged application configuration
    pub app: AppConfig,
    /// Optional external catalog file
    pub catalog_path: Option<PathBuf>,
}

/// Run the score command. Returns the process exit code.
pub fn run_score(run: ScoreRun) -> Result<i32> {
    let vendors = vendor_catalog(run.catalog_path.as_deref())?;
    let frameworks = framework_catalog(run.catalog_path.as_deref())?;
    let vendor = vendors.get(&run.vendor)?;
    let framework = frameworks.get(&run.framework)?;
    let industry = frameworks.industry(&run.org.industry).ok();

    let scorer = ComplianceScorer::new(run.app.compliance);
    let result = scorer.score(vendor, framework, &run.org, industry, 1);

    let rendered = match run.app.output.format {
        ReportFormat::Json => serde_json::to_string_pretty(&result)?,
        // CSV is not meaningful for a single score; fall back to text.
        ReportFormat::Summary | ReportFormat::Csv => {
            let mut lines = vec![
                format!("{} vs {}", vendor.name, framework.name),
                format!(
                    "score {}  critical {:.0}%  important {:.0}%",
                    result.score,
                    result.critical_coverage * 100.0,
                    result.important_coverage * 100.0
                ),
                format!(
                    "penalty reduction {}  audit savings {}  insurance savings {}",
                    format_currency(result.penalty_reduction, 0),
                    format_currency(result.audit_savings, 0),
                    format_currency(result.insurance_savings, 0)
                ),
            ];
            if result.gaps.is_empty() {
                lines.push("no critical gaps".to_string());
            } else {
                lines.push(format!(
                    "critical gaps: {}",
                    result
                        .gaps
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
            lines.join("\n")
        }
    };
    write_output(&rendered, run.app.output.file.as_deref())?;

    if run.app.behavior.fail_on_gaps && !result.gaps.is_empty() {
        return Ok(1);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn base_run() -> ScoreRun {
        ScoreRun {
            vendor: VendorId::new("cisco-ise"),
            framework: FrameworkId::new("hipaa"),
            org: OrganizationConfig::default(),
            app: AppConfig::default(),
            catalog_path: None,
        }
    }

    #[test]
    fn test_score_summary_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("score.txt");
        let mut run = base_run();
        run.app.output.file = Some(path.clone());
        assert_eq!(run_score(run).unwrap(), 0);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Cisco ISE"));
        assert!(content.contains("score"));
    }

    #[test]
    fn test_fail_on_gaps() {
        let dir = TempDir::new().unwrap();
        let mut run = base_run();
        run.vendor = VendorId::new("no-nac");
        run.app.output.file = Some(dir.path().join("score.txt"));
        run.app.behavior.fail_on_gaps = true;
        assert_eq!(run_score(run).unwrap(), 1);
    }
}
