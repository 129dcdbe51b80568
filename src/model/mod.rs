//! Core data model for NAC vendor comparison.
//!
//! All inputs to the engine are plain, strongly-typed records: an
//! organization profile, vendor records, compliance frameworks, and
//! per-industry risk profiles. Derived results live in [`crate::engine`].

mod framework;
mod industry;
mod organization;
mod vendor;

pub use framework::{
    AuditCadence, ComplianceFramework, Control, ControlId, Criticality, FrameworkId, PenaltyModel,
};
pub use industry::{ExposureTier, IndustryRiskProfile, InsuranceProfile, ThreatLandscape};
pub use organization::{IndustryId, OrganizationConfig};
pub use vendor::{
    Capability, OneTimeCosts, OperationalProfile, PricingModel, RecurringCosts, SecurityScores,
    VendorCategory, VendorId, VendorRecord,
};
