//! The calculation engine: cost, ROI, compliance scoring, sensitivity, and
//! cross-vendor comparison.
//!
//! Every operation here is a pure, synchronous function of its inputs: no
//! I/O, no clock, no hidden state. Re-invocation with identical inputs is
//! byte-for-byte reproducible, which the comparison aggregator relies on for
//! its parallel fan-out.

mod compare;
mod compliance;
mod cost;
mod roi;
mod sensitivity;

pub use compare::{ComparisonAggregator, ComparisonResult};
pub use compliance::{ComplianceAssumptions, ComplianceScoreResult, ComplianceScorer};
pub use cost::{AnnualCosts, CostAssumptions, CostBreakdown, CostModel, HiddenCosts, InitialCosts};
pub use roi::{RoiModel, RoiResult};
pub use sensitivity::{
    Perturbations, SensitivityAnalyzer, SensitivityParameter, SensitivityScenario,
};
