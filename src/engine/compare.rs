//! Cross-vendor comparison: orchestrates cost, ROI, and compliance scoring.

use crate::catalog::{FrameworkCatalog, VendorCatalog};
use crate::engine::{
    ComplianceAssumptions, ComplianceScoreResult, ComplianceScorer, CostAssumptions,
    CostBreakdown, CostModel, RoiModel, RoiResult,
};
use crate::error::Result;
use crate::model::{ComplianceFramework, FrameworkId, OrganizationConfig, VendorId, VendorRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One vendor's row in a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub vendor: VendorId,
    pub vendor_name: String,
    pub cost: CostBreakdown,
    pub roi: RoiResult,
    /// Per-framework compliance results, in requested framework order
    pub compliance: Vec<ComplianceScoreResult>,
    /// Arithmetic mean of the per-framework scores (0 when none requested)
    pub mean_compliance_score: f64,
    /// Whether this vendor served as the ROI baseline
    pub is_baseline: bool,
    /// Lowest grand total in the run
    pub cheapest: bool,
    /// Highest ROI percentage in the run
    pub highest_roi: bool,
    /// Highest mean compliance score in the run
    pub best_compliance: bool,
}

/// Orchestrates the full comparison pipeline over catalog data.
///
/// Holds only shared references to the immutable catalogs plus the stateless
/// models, so one aggregator may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ComparisonAggregator<'a> {
    vendors: &'a VendorCatalog,
    frameworks: &'a FrameworkCatalog,
    cost_model: CostModel,
    roi_model: RoiModel,
    scorer: ComplianceScorer,
}

impl<'a> ComparisonAggregator<'a> {
    #[must_use]
    pub fn new(vendors: &'a VendorCatalog, frameworks: &'a FrameworkCatalog) -> Self {
        Self {
            vendors,
            frameworks,
            cost_model: CostModel::default(),
            roi_model: RoiModel,
            scorer: ComplianceScorer::default(),
        }
    }

    /// Override the default business assumptions.
    #[must_use]
    pub fn with_assumptions(
        mut self,
        cost: CostAssumptions,
        compliance: ComplianceAssumptions,
    ) -> Self {
        self.cost_model = CostModel::new(cost);
        self.scorer = ComplianceScorer::new(compliance);
        self
    }

    /// Compare a set of vendors under one organization config.
    ///
    /// The call is atomic: any unknown vendor or framework id fails the
    /// whole run rather than producing a partial result set. Output is
    /// sorted ascending by grand total, ties broken by descending compliance
    /// score then vendor id, so identical inputs always produce an
    /// identical list regardless of input order or execution order.
    pub fn compare(
        &self,
        vendor_ids: &[VendorId],
        org: &OrganizationConfig,
        framework_ids: &[FrameworkId],
    ) -> Result<Vec<ComparisonResult>> {
        org.validate()?;

        // Resolve everything up front; ids are treated as a set.
        let mut selected: Vec<&VendorRecord> = Vec::with_capacity(vendor_ids.len());
        for id in vendor_ids {
            let record = self.vendors.get(id)?;
            if !selected.iter().any(|v| v.id == record.id) {
                selected.push(record);
            }
        }
        let mut frameworks: Vec<&ComplianceFramework> = Vec::with_capacity(framework_ids.len());
        for id in framework_ids {
            let framework = self.frameworks.get(id)?;
            if !frameworks.iter().any(|f| std::ptr::eq(*f, framework)) {
                frameworks.push(framework);
            }
        }
        if selected.is_empty() {
            return Ok(Vec::new());
        }

        let industry = self.frameworks.industry(&org.industry).ok();
        if industry.is_none() {
            tracing::debug!(
                industry = %org.industry,
                "no risk profile for industry, insurance savings omitted"
            );
        }

        // Per-vendor computation is independent; fan out across cores.
        let breakdowns: Vec<CostBreakdown> = selected
            .par_iter()
            .map(|vendor| self.cost_model.cost_breakdown(vendor, org))
            .collect::<Result<Vec<_>>>()?;

        let baseline_index = baseline_index(&selected, &breakdowns);
        let baseline_breakdown = &breakdowns[baseline_index];
        tracing::debug!(
            baseline = %selected[baseline_index].id,
            vendor_count = selected.len(),
            framework_count = frameworks.len(),
            "comparison baseline selected"
        );

        let mut results: Vec<ComparisonResult> = selected
            .par_iter()
            .zip(breakdowns.par_iter())
            .enumerate()
            .map(|(index, (vendor, cost))| {
                let roi = self
                    .roi_model
                    .roi(baseline_breakdown, cost, org.projection_years);
                let compliance: Vec<ComplianceScoreResult> = frameworks
                    .iter()
                    .map(|framework| {
                        self.scorer
                            .score(vendor, framework, org, industry, frameworks.len())
                    })
                    .collect();
                let mean_compliance_score = if compliance.is_empty() {
                    0.0
                } else {
                    compliance.iter().map(|c| f64::from(c.score)).sum::<f64>()
                        / compliance.len() as f64
                };
                ComparisonResult {
                    vendor: vendor.id.clone(),
                    vendor_name: vendor.name.clone(),
                    cost: cost.clone(),
                    roi,
                    compliance,
                    mean_compliance_score,
                    is_baseline: index == baseline_index,
                    cheapest: false,
                    highest_roi: false,
                    best_compliance: false,
                }
            })
            .collect();

        results.sort_by(compare_results);
        annotate(&mut results);
        Ok(results)
    }
}

/// Index of the ROI baseline: the flagged vendor if one is selected,
/// otherwise the highest grand total (ties broken by vendor id so the
/// choice never depends on input order).
fn baseline_index(selected: &[&VendorRecord], breakdowns: &[CostBreakdown]) -> usize {
    if let Some(index) = selected.iter().position(|v| v.baseline) {
        return index;
    }
    let mut best = 0;
    for i in 1..breakdowns.len() {
        let ordering = breakdowns[i]
            .grand_total
            .partial_cmp(&breakdowns[best].grand_total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| selected[best].id.cmp(&selected[i].id));
        if ordering == Ordering::Greater {
            best = i;
        }
    }
    best
}

/// Sort ascending by grand total, descending compliance score, then id.
fn compare_results(a: &ComparisonResult, b: &ComparisonResult) -> Ordering {
    a.cost
        .grand_total
        .partial_cmp(&b.cost.grand_total)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.mean_compliance_score
                .partial_cmp(&a.mean_compliance_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.vendor.cmp(&b.vendor))
}

/// Flag the cheapest, highest-ROI, and best-compliance rows. The list is
/// already sorted, so the first row matching each superlative wins ties
/// deterministically.
fn annotate(results: &mut [ComparisonResult]) {
    if let Some(first) = results.first_mut() {
        first.cheapest = true;
    }
    let best_roi = results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.roi.roi_percentage.map(|pct| (i, pct)))
        .max_by(|(ia, a), (ib, b)| {
            a.partial_cmp(b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| ib.cmp(ia))
        })
        .map(|(i, _)| i);
    if let Some(i) = best_roi {
        results[i].highest_roi = true;
    }
    let best_compliance = results
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| {
            a.mean_compliance_score
                .partial_cmp(&b.mean_compliance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| ib.cmp(ia))
        })
        .map(|(i, _)| i);
    if let Some(i) = best_compliance {
        results[i].best_compliance = true;
    }
}
