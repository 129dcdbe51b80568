//! Vendor records: pricing, operational burden, security posture, capabilities.
//!
//! `VendorRecord` is the single, strongly-typed vendor schema. Defaulting
//! rules for optional business signals (support rate, compliance automation,
//! breach reduction) are stated once in the cost model, not scattered across
//! call sites.

use crate::model::FrameworkId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier for a vendor in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VendorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Pricing model for vendor licensing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PricingModel {
    /// Monthly per-device subscription, no upfront license
    PerDeviceSubscription,
    /// Upfront per-device (or flat) license plus annual support
    PerpetualLicense,
    /// Bundled with existing infrastructure or free/open source
    Included,
    /// Upfront flat license plus per-device subscription
    Hybrid,
}

impl PricingModel {
    /// Whether this model bills a recurring per-device subscription
    #[must_use]
    pub const fn is_subscription_like(&self) -> bool {
        matches!(self, Self::PerDeviceSubscription | Self::Hybrid)
    }

    /// Whether this model has an upfront license component
    #[must_use]
    pub const fn has_upfront_license(&self) -> bool {
        matches!(self, Self::PerpetualLicense | Self::Hybrid)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PerDeviceSubscription => "per-device subscription",
            Self::PerpetualLicense => "perpetual license",
            Self::Included => "included",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Deployment category of a vendor offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum VendorCategory {
    /// SaaS-delivered, no on-site appliances
    CloudNative,
    /// Customer-operated appliances or VMs
    OnPrem,
    /// Appliance-heavy incumbent platforms with long integration tails
    LegacyEnterprise,
    /// Community-supported open source
    OpenSource,
}

impl VendorCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CloudNative => "cloud-native",
            Self::OnPrem => "on-premises",
            Self::LegacyEnterprise => "legacy enterprise",
            Self::OpenSource => "open source",
        }
    }
}

/// Closed set of NAC capabilities.
///
/// Shared between vendor records and framework controls so that compliance
/// coverage is an exact set intersection rather than fuzzy string matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Capability {
    DeviceVisibility,
    DeviceProfiling,
    AccessControl,
    NetworkSegmentation,
    GuestManagement,
    ByodOnboarding,
    IotSecurity,
    ThreatResponse,
    PostureAssessment,
    MultiFactorAuth,
    CertificateAuth,
    Encryption,
    AuditLogging,
    Reporting,
    CloudIntegration,
    AgentlessOperation,
    VulnerabilityScanning,
    IncidentContainment,
}

impl Capability {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DeviceVisibility => "device visibility",
            Self::DeviceProfiling => "device profiling",
            Self::AccessControl => "access control",
            Self::NetworkSegmentation => "network segmentation",
            Self::GuestManagement => "guest management",
            Self::ByodOnboarding => "BYOD onboarding",
            Self::IotSecurity => "IoT security",
            Self::ThreatResponse => "threat response",
            Self::PostureAssessment => "posture assessment",
            Self::MultiFactorAuth => "multi-factor authentication",
            Self::CertificateAuth => "certificate-based authentication",
            Self::Encryption => "encryption",
            Self::AuditLogging => "audit logging",
            Self::Reporting => "reporting",
            Self::CloudIntegration => "cloud integration",
            Self::AgentlessOperation => "agentless operation",
            Self::VulnerabilityScanning => "vulnerability scanning",
            Self::IncidentContainment => "incident containment",
        }
    }
}

/// One-time costs incurred at deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneTimeCosts {
    /// Appliances, sensors, taps
    pub hardware: f64,
    /// Professional services / implementation
    pub implementation: f64,
    /// Administrator and helpdesk training
    pub training: f64,
}

/// Recurring annual costs declared by the vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringCosts {
    /// Flat annual subscription beyond per-device pricing
    pub subscription: f64,
    /// Annual maintenance contract
    pub maintenance: f64,
    /// Annual vendor support contract
    pub support: f64,
    /// Hosting/infrastructure to run the platform
    pub infrastructure: f64,
}

impl RecurringCosts {
    /// Combined declared maintenance + support.
    ///
    /// When zero on a perpetual-license vendor, the cost model falls back to
    /// the default support-rate fraction of the license spend.
    #[must_use]
    pub fn declared_support(&self) -> f64 {
        self.maintenance + self.support
    }
}

/// Operational burden of running the platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalProfile {
    /// Fraction of a full-time admin required (0.25 = quarter of an FTE)
    pub required_fte: f64,
    /// Promised/observed availability percentage
    pub uptime_percent: f64,
    /// Typical deployment time in days
    pub deployment_days: u32,
}

impl Default for OperationalProfile {
    fn default() -> Self {
        Self {
            required_fte: 0.5,
            uptime_percent: 99.0,
            deployment_days: 30,
        }
    }
}

/// Security posture scores (0-100 except remediation speed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityScores {
    /// Zero-trust alignment
    pub zero_trust: f64,
    /// Device authentication strength
    pub device_auth: f64,
    /// Mean time to remediate a flagged device, minutes
    pub remediation_minutes: f64,
}

/// A vendor's complete catalog entry.
///
/// Invariants: price fields are non-negative (enforced at catalog load, see
/// [`crate::catalog`]); percentage fields are clamped to [0, 100] by
/// [`VendorRecord::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Unique vendor key
    pub id: VendorId,
    /// Display name
    pub name: String,
    /// Licensing model
    pub pricing: PricingModel,
    /// Per-device price: monthly for subscription-like models, upfront for perpetual
    #[serde(default)]
    pub per_device_price: f64,
    /// Flat upfront license cost (perpetual/hybrid); overrides per-device when set
    #[serde(default)]
    pub flat_license_price: Option<f64>,
    /// Deployment category
    pub category: VendorCategory,
    /// One-time deployment costs
    #[serde(default)]
    pub one_time: OneTimeCosts,
    /// Declared recurring annual costs
    #[serde(default)]
    pub recurring: RecurringCosts,
    /// Operational burden
    #[serde(default)]
    pub operations: OperationalProfile,
    /// Security posture scores
    #[serde(default)]
    pub security: SecurityScores,
    /// Declared framework coverage, framework id -> 0-100
    #[serde(default)]
    pub compliance_coverage: IndexMap<FrameworkId, f64>,
    /// Capability set used for control matching
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    /// Annual support as a fraction of license spend (perpetual); default 0.20
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_rate: Option<f64>,
    /// Fraction of audit work the vendor automates; default 0.20
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_automation: Option<f64>,
    /// Fraction of breach exposure the vendor removes; default 0.30
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_reduction: Option<f64>,
    /// Designated baseline for ROI comparison
    #[serde(default)]
    pub baseline: bool,
}

impl VendorRecord {
    /// Check whether the vendor declares a given capability.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Clamp all percentage-valued fields to [0, 100] and fractions to [0, 1].
    ///
    /// Prices are deliberately *not* clamped here: a negative price is a data
    /// error and is rejected at catalog load instead.
    pub fn normalize(&mut self) {
        self.operations.uptime_percent = self.operations.uptime_percent.clamp(0.0, 100.0);
        self.security.zero_trust = self.security.zero_trust.clamp(0.0, 100.0);
        self.security.device_auth = self.security.device_auth.clamp(0.0, 100.0);
        for coverage in self.compliance_coverage.values_mut() {
            *coverage = coverage.clamp(0.0, 100.0);
        }
        if let Some(rate) = self.support_rate.as_mut() {
            *rate = rate.clamp(0.0, 1.0);
        }
        if let Some(auto) = self.compliance_automation.as_mut() {
            *auto = auto.clamp(0.0, 1.0);
        }
        if let Some(red) = self.breach_reduction.as_mut() {
            *red = red.clamp(0.0, 1.0);
        }
    }

    /// Price fields that must be non-negative, paired with a field label.
    pub(crate) fn price_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("per_device_price", self.per_device_price),
            ("flat_license_price", self.flat_license_price.unwrap_or(0.0)),
            ("one_time.hardware", self.one_time.hardware),
            ("one_time.implementation", self.one_time.implementation),
            ("one_time.training", self.one_time.training),
            ("recurring.subscription", self.recurring.subscription),
            (
                "recurring.maintenance_support",
                self.recurring.declared_support(),
            ),
            ("recurring.infrastructure", self.recurring.infrastructure),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VendorRecord {
        VendorRecord {
            id: VendorId::new("test-nac"),
            name: "Test NAC".to_string(),
            pricing: PricingModel::PerDeviceSubscription,
            per_device_price: 4.0,
            flat_license_price: None,
            category: VendorCategory::CloudNative,
            one_time: OneTimeCosts::default(),
            recurring: RecurringCosts::default(),
            operations: OperationalProfile::default(),
            security: SecurityScores::default(),
            compliance_coverage: IndexMap::new(),
            capabilities: BTreeSet::new(),
            support_rate: None,
            compliance_automation: None,
            breach_reduction: None,
            baseline: false,
        }
    }

    #[test]
    fn test_normalize_clamps_percentages() {
        let mut v = record();
        v.operations.uptime_percent = 120.0;
        v.security.zero_trust = -5.0;
        v.compliance_coverage
            .insert(FrameworkId::new("hipaa"), 140.0);
        v.support_rate = Some(1.5);
        v.normalize();

        assert_eq!(v.operations.uptime_percent, 100.0);
        assert_eq!(v.security.zero_trust, 0.0);
        assert_eq!(v.compliance_coverage[&FrameworkId::new("hipaa")], 100.0);
        assert_eq!(v.support_rate, Some(1.0));
    }

    #[test]
    fn test_pricing_model_classification() {
        assert!(PricingModel::PerDeviceSubscription.is_subscription_like());
        assert!(PricingModel::Hybrid.is_subscription_like());
        assert!(!PricingModel::PerpetualLicense.is_subscription_like());
        assert!(PricingModel::PerpetualLicense.has_upfront_license());
        assert!(PricingModel::Hybrid.has_upfront_license());
        assert!(!PricingModel::Included.has_upfront_license());
    }

    #[test]
    fn test_vendor_id_roundtrip() {
        let id = VendorId::new("cisco-ise");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cisco-ise\"");
        let back: VendorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_capability_serde_kebab_case() {
        let json = serde_json::to_string(&Capability::DeviceVisibility).unwrap();
        assert_eq!(json, "\"device-visibility\"");
    }
}
