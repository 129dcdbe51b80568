//! Catalog listing handlers for the `vendors` and `frameworks` subcommands.

use super::{framework_catalog, vendor_catalog, write_output};
use crate::config::AppConfig;
use crate::reports::ReportFormat;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

/// List the vendor catalog. Returns the process exit code.
pub fn run_vendors(app: &AppConfig, catalog_path: Option<&Path>) -> Result<i32> {
    let vendors = vendor_catalog(catalog_path)?;
    let rendered = match app.output.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&vendors.records().collect::<Vec<_>>())?
        }
        ReportFormat::Summary | ReportFormat::Csv => {
            let mut out = String::new();
            for record in vendors.records() {
                writeln!(
                    out,
                    "{:<22} {:<28} {:?}{}",
                    record.id,
                    record.name,
                    record.category,
                    if record.baseline { "  (baseline)" } else { "" }
                )?;
            }
            out.trim_end().to_string()
        }
    };
    write_output(&rendered, app.output.file.as_deref())?;
    Ok(0)
}

/// List the framework catalog. Returns the process exit code.
pub fn run_frameworks(app: &AppConfig, catalog_path: Option<&Path>) -> Result<i32> {
    let frameworks = framework_catalog(catalog_path)?;
    let rendered = match app.output.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&frameworks.frameworks().collect::<Vec<_>>())?
        }
        ReportFormat::Summary | ReportFormat::Csv => {
            let mut out = String::new();
            for framework in frameworks.frameworks() {
                writeln!(
                    out,
                    "{:<12} {:<40} {} controls",
                    framework.id,
                    framework.name,
                    framework.controls.len()
                )?;
            }
            out.trim_end().to_string()
        }
    };
    write_output(&rendered, app.output.file.as_deref())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_vendor_listing_contains_all_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vendors.txt");
        let mut app = AppConfig::default();
        app.output.file = Some(path.clone());
        assert_eq!(run_vendors(&app, None).unwrap(), 0);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("portnox"));
        assert!(content.contains("(baseline)"));
    }

    #[test]
    fn test_framework_listing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frameworks.txt");
        let mut app = AppConfig::default();
        app.output.file = Some(path.clone());
        assert_eq!(run_frameworks(&app, None).unwrap(), 0);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("hipaa"));
        assert!(content.contains("controls"));
    }
}
