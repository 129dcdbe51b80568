//! JSON report generator.

use super::{ReportError, ReportGenerator, ReportMetadata};
use crate::engine::{ComparisonResult, SensitivityScenario};
use crate::model::OrganizationConfig;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: ReportMetadata,
    organization: &'a OrganizationConfig,
    results: &'a [ComparisonResult],
}

#[derive(Serialize)]
struct JsonSensitivityReport<'a> {
    metadata: ReportMetadata,
    scenarios: &'a [SensitivityScenario],
}

impl ReportGenerator for JsonReporter {
    fn generate_comparison_report(
        &self,
        results: &[ComparisonResult],
        org: &OrganizationConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonComparisonReport {
            metadata: ReportMetadata::default(),
            organization: org,
            results,
        })
    }

    fn generate_sensitivity_report(
        &self,
        scenarios: &[SensitivityScenario],
    ) -> Result<String, ReportError> {
        self.render(&JsonSensitivityReport {
            metadata: ReportMetadata::default(),
            scenarios,
        })
    }
}
