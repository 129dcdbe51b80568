//! **A financial modeling library for Network Access Control (NAC) procurement.**
//!
//! `nac-tco` models the total cost of ownership, return on investment, and
//! regulatory-compliance posture of NAC vendor deployments, and compares
//! vendors side by side under one organization profile. It powers both a
//! command-line interface for procurement analysis and a Rust library for
//! programmatic integration into budgeting tools.
//!
//! ## Key Features
//!
//! - **Cost Modeling**: Projects initial, recurring, and hidden costs over a
//!   configurable multi-year horizon, across subscription, perpetual-license,
//!   hybrid, and bundled pricing models.
//! - **ROI & Payback**: Computes savings-based ROI against a baseline vendor
//!   plus a month-by-month cumulative cash-flow series and payback point.
//! - **Compliance Scoring**: Scores vendor capability sets against regulatory
//!   frameworks (HIPAA, PCI DSS, GDPR, and others) and monetizes the result
//!   into penalty, audit, and insurance savings.
//! - **Sensitivity Analysis**: Answers what-if questions by perturbing device
//!   count, staff cost, and implementation cost, including tornado sweeps.
//! - **Flexible Reporting**: Renders results as a terminal summary, JSON, or
//!   CSV.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The domain types: vendors, frameworks, industries, and
//!   the [`OrganizationConfig`] every calculation is parameterized by.
//! - **[`catalog`]**: Immutable, content-hashed catalogs of vendors and
//!   frameworks, with builtin data and YAML/JSON file loading.
//! - **[`engine`]**: The pure calculation core: [`CostModel`], [`RoiModel`],
//!   [`ComplianceScorer`], [`SensitivityAnalyzer`], and the
//!   [`ComparisonAggregator`] that orchestrates them.
//! - **[`reports`]**: Output generators for the supported formats.
//! - **[`config`]**: Config file loading, presets, and validation.
//!
//! ## Getting Started: Comparing Vendors
//!
//! ```no_run
//! use nac_tco::catalog::{FrameworkCatalog, VendorCatalog};
//! use nac_tco::engine::ComparisonAggregator;
//! use nac_tco::model::{FrameworkId, OrganizationConfig, VendorId};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vendors = VendorCatalog::builtin();
//!     let frameworks = FrameworkCatalog::builtin();
//!
//!     let aggregator = ComparisonAggregator::new(&vendors, &frameworks);
//!     let results = aggregator.compare(
//!         &[VendorId::new("portnox"), VendorId::new("cisco-ise")],
//!         &OrganizationConfig::default(),
//!         &[FrameworkId::new("hipaa")],
//!     )?;
//!
//!     for row in &results {
//!         println!("{}: ${:.0} over the horizon", row.vendor_name, row.cost.grand_total);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: u32/usize↔f64 casts are pervasive in the financial math;
    // device counts and month indices are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Catalog seed functions are inherently long tables
    clippy::too_many_lines,
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod reports;
pub mod utils;

// Re-export the primary API surface at the crate root.
pub use catalog::{FrameworkCatalog, VendorCatalog};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, Validatable};
pub use engine::{
    ComparisonAggregator, ComparisonResult, ComplianceScorer, CostBreakdown, CostModel, RoiModel,
    SensitivityAnalyzer,
};
pub use error::{ErrorContext, NacTcoError, OptionContext, Result};
pub use model::{FrameworkId, OrganizationConfig, VendorId, VendorRecord};
pub use reports::{ReportFormat, ReportGenerator};
