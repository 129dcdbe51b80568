//! Compare command handler.
//!
//! Implements the `compare` subcommand: a full multi-vendor TCO, ROI, and
//! compliance comparison rendered through the configured reporter.

use super::{framework_catalog, vendor_catalog, write_output};
use crate::config::AppConfig;
use crate::engine::ComparisonAggregator;
use crate::model::{FrameworkId, OrganizationConfig, VendorId};
use crate::reports::reporter_for;
use anyhow::Result;
use std::path::PathBuf;

/// Inputs for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareRun {
    /// Vendors to compare; empty means the whole catalog
    pub vendors: Vec<VendorId>,
    /// Frameworks to score against
    pub frameworks: Vec<FrameworkId>,
    /// Organization profile
    pub org: OrganizationConfig,
    /// Merged application configuration
    pub app: AppConfig,
    /// Optional external catalog file
    pub catalog_path: Option<PathBuf>,
}

/// Run the compare command. Returns the process exit code.
pub fn run_compare(run: CompareRun) -> Result<i32> {
    let vendors = vendor_catalog(run.catalog_path.as_deref())?;
    let frameworks = framework_catalog(run.catalog_path.as_deref())?;

    let vendor_ids: Vec<VendorId> = if run.vendors.is_empty() {
        vendors.ids().cloned().collect()
    } else {
        run.vendors.clone()
    };

    let aggregator = ComparisonAggregator::new(&vendors, &frameworks)
        .with_assumptions(run.app.cost, run.app.compliance);
    let results = aggregator.compare(&vendor_ids, &run.org, &run.frameworks)?;

    let reporter = reporter_for(run.app.output.format, run.app.output.no_color);
    let rendered = reporter.generate_comparison_report(&results, &run.org)?;
    write_output(&rendered, run.app.output.file.as_deref())?;

    if run.app.behavior.fail_on_gaps {
        let mut any_gaps = false;
        for row in &results {
            if row.compliance.iter().any(|c| !c.gaps.is_empty()) {
                any_gaps = true;
                if !run.app.behavior.quiet {
                    tracing::warn!(vendor = %row.vendor, "critical controls uncovered");
                }
            }
        }
        if any_gaps {
            return Ok(1);
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn base_run() -> CompareRun {
        let mut app = AppConfig::default();
        app.output.format = ReportFormat::Json;
        CompareRun {
            vendors: vec![VendorId::new("portnox"), VendorId::new("cisco-ise")],
            frameworks: vec![FrameworkId::new("hipaa")],
            org: OrganizationConfig::default(),
            app,
            catalog_path: None,
        }
    }

    #[test]
    fn test_compare_writes_report_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let mut run = base_run();
        run.app.output.file = Some(path.clone());
        let code = run_compare(run).unwrap();
        assert_eq!(code, 0);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }

    #[test]
    fn test_fail_on_gaps_exit_code() {
        let dir = TempDir::new().unwrap();
        let mut run = base_run();
        run.app.output.file = Some(dir.path().join("report.json"));
        run.app.behavior.fail_on_gaps = true;
        // The do-nothing vendor cannot cover critical HIPAA controls.
        run.vendors = vec![VendorId::new("no-nac")];
        let code = run_compare(run).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_empty_selection_means_whole_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let mut run = base_run();
        run.vendors = Vec::new();
        run.app.output.file = Some(path.clone());
        run_compare(run).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let rows = value["results"].as_array().unwrap();
        assert_eq!(rows.len(), crate::catalog::VendorCatalog::builtin().len());
    }
}
