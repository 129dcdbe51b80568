//! Report generation for comparison and sensitivity results.
//!
//! This module provides the output formats for analysis results:
//! - JSON: Structured data for programmatic integration
//! - CSV: Spreadsheet import for finance teams
//! - Summary: Compact shell-friendly output
//!
//! All reporters render from the same in-memory result structures; no
//! recalculation happens at the report boundary.

mod csv;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::engine::{ComparisonResult, SensitivityScenario};
use crate::model::OrganizationConfig;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a vendor comparison run.
    fn generate_comparison_report(
        &self,
        results: &[ComparisonResult],
        org: &OrganizationConfig,
    ) -> Result<String, ReportError>;

    /// Render a sensitivity sweep.
    fn generate_sensitivity_report(
        &self,
        scenarios: &[SensitivityScenario],
    ) -> Result<String, ReportError>;
}

/// Construct the reporter for a format.
#[must_use]
pub fn reporter_for(format: ReportFormat, no_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if no_color { reporter.no_color() } else { reporter })
        }
    }
}
