//! Builtin vendor dataset.
//!
//! List prices and operational figures are representative planning numbers,
//! not quotes. Organizations with negotiated pricing should load their own
//! catalog file instead (see [`super::loader`]).

use crate::model::{
    Capability, OneTimeCosts, OperationalProfile, PricingModel, RecurringCosts, SecurityScores,
    VendorCategory, VendorId, VendorRecord,
};
use indexmap::IndexMap;
use std::collections::BTreeSet;

use Capability as Cap;

/// Skeleton record with neutral defaults; each entry below overrides what it
/// actually declares.
fn vendor(
    id: &str,
    name: &str,
    pricing: PricingModel,
    category: VendorCategory,
) -> VendorRecord {
    VendorRecord {
        id: VendorId::new(id),
        name: name.to_string(),
        pricing,
        per_device_price: 0.0,
        flat_license_price: None,
        category,
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

fn coverage(pairs: &[(&str, f64)]) -> IndexMap<crate::model::FrameworkId, f64> {
    pairs
        .iter()
        .map(|(id, pct)| (crate::model::FrameworkId::new(*id), *pct))
        .collect()
}

/// The builtin vendor records.
pub(super) fn builtin_vendors() -> Vec<VendorRecord> {
    let mut records = Vec::new();

    // Status quo: no NAC deployed. Zero cost, zero protection. Flagged as
    // the designated ROI baseline.
    let mut none = vendor(
        "no-nac",
        "No NAC (status quo)",
        PricingModel::Included,
        VendorCategory::OnPrem,
    );
    none.operations = OperationalProfile {
        required_fte: 0.0,
        uptime_percent: 95.0,
        deployment_days: 0,
    };
    none.breach_reduction = Some(0.0);
    none.compliance_automation = Some(0.0);
    none.baseline = true;
    records.push(none);

    let mut ise = vendor(
        "cisco-ise",
        "Cisco ISE",
        PricingModel::PerpetualLicense,
        VendorCategory::LegacyEnterprise,
    );
    ise.per_device_price = 42.0;
    ise.one_time = OneTimeCosts {
        hardware: 95_000.0,
        implementation: 120_000.0,
        training: 18_000.0,
    };
    ise.recurring.infrastructure = 12_000.0;
    ise.operations = OperationalProfile {
        required_fte: 1.5,
        uptime_percent: 99.5,
        deployment_days: 120,
    };
    ise.security = SecurityScores {
        zero_trust: 85.0,
        device_auth: 92.0,
        remediation_minutes: 45.0,
    };
    ise.compliance_coverage = coverage(&[
        ("hipaa", 90.0),
        ("pci-dss", 92.0),
        ("nist-csf", 88.0),
        ("iso-27001", 85.0),
    ]);
    ise.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::GuestManagement,
        Cap::ByodOnboarding,
        Cap::PostureAssessment,
        Cap::CertificateAuth,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    ise.breach_reduction = Some(0.45);
    ise.compliance_automation = Some(0.35);
    records.push(ise);

    let mut clearpass = vendor(
        "aruba-clearpass",
        "HPE Aruba ClearPass",
        PricingModel::PerpetualLicense,
        VendorCategory::OnPrem,
    );
    clearpass.per_device_price = 36.0;
    clearpass.one_time = OneTimeCosts {
        hardware: 60_000.0,
        implementation: 75_000.0,
        training: 12_000.0,
    };
    clearpass.recurring.infrastructure = 8_000.0;
    clearpass.operations = OperationalProfile {
        required_fte: 1.0,
        uptime_percent: 99.6,
        deployment_days: 90,
    };
    clearpass.security = SecurityScores {
        zero_trust: 82.0,
        device_auth: 90.0,
        remediation_minutes: 40.0,
    };
    clearpass.compliance_coverage = coverage(&[
        ("hipaa", 85.0),
        ("pci-dss", 90.0),
        ("nist-csf", 84.0),
        ("iso-27001", 82.0),
    ]);
    clearpass.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::GuestManagement,
        Cap::ByodOnboarding,
        Cap::CertificateAuth,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    clearpass.breach_reduction = Some(0.42);
    clearpass.compliance_automation = Some(0.30);
    records.push(clearpass);

    let mut forescout = vendor(
        "forescout",
        "Forescout eyeSight/eyeControl",
        PricingModel::Hybrid,
        VendorCategory::LegacyEnterprise,
    );
    forescout.per_device_price = 3.2;
    forescout.flat_license_price = Some(55_000.0);
    forescout.one_time = OneTimeCosts {
        hardware: 70_000.0,
        implementation: 90_000.0,
        training: 15_000.0,
    };
    forescout.recurring.infrastructure = 10_000.0;
    forescout.operations = OperationalProfile {
        required_fte: 1.25,
        uptime_percent: 99.4,
        deployment_days: 100,
    };
    forescout.security = SecurityScores {
        zero_trust: 80.0,
        device_auth: 84.0,
        remediation_minutes: 35.0,
    };
    forescout.compliance_coverage = coverage(&[
        ("hipaa", 88.0),
        ("pci-dss", 86.0),
        ("nist-csf", 90.0),
        ("cmmc", 85.0),
    ]);
    forescout.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::IotSecurity,
        Cap::ThreatResponse,
        Cap::AgentlessOperation,
        Cap::VulnerabilityScanning,
        Cap::IncidentContainment,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    forescout.breach_reduction = Some(0.48);
    forescout.compliance_automation = Some(0.32);
    records.push(forescout);

    let mut fortinac = vendor(
        "fortinet-fortinac",
        "Fortinet FortiNAC",
        PricingModel::PerpetualLicense,
        VendorCategory::OnPrem,
    );
    fortinac.per_device_price = 24.0;
    fortinac.one_time = OneTimeCosts {
        hardware: 45_000.0,
        implementation: 55_000.0,
        training: 10_000.0,
    };
    fortinac.recurring.infrastructure = 6_000.0;
    fortinac.operations = OperationalProfile {
        required_fte: 0.75,
        uptime_percent: 99.3,
        deployment_days: 75,
    };
    fortinac.security = SecurityScores {
        zero_trust: 75.0,
        device_auth: 82.0,
        remediation_minutes: 50.0,
    };
    fortinac.compliance_coverage = coverage(&[
        ("hipaa", 80.0),
        ("pci-dss", 84.0),
        ("nist-csf", 80.0),
    ]);
    fortinac.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::IotSecurity,
        Cap::ThreatResponse,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    fortinac.breach_reduction = Some(0.40);
    records.push(fortinac);

    let mut portnox = vendor(
        "portnox",
        "Portnox Cloud",
        PricingModel::PerDeviceSubscription,
        VendorCategory::CloudNative,
    );
    portnox.per_device_price = 4.0;
    portnox.one_time = OneTimeCosts {
        hardware: 0.0,
        implementation: 8_000.0,
        training: 3_000.0,
    };
    portnox.operations = OperationalProfile {
        required_fte: 0.25,
        uptime_percent: 99.9,
        deployment_days: 14,
    };
    portnox.security = SecurityScores {
        zero_trust: 88.0,
        device_auth: 90.0,
        remediation_minutes: 15.0,
    };
    portnox.compliance_coverage = coverage(&[
        ("hipaa", 86.0),
        ("pci-dss", 88.0),
        ("nist-csf", 85.0),
        ("gdpr", 84.0),
        ("iso-27001", 86.0),
    ]);
    portnox.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::ByodOnboarding,
        Cap::GuestManagement,
        Cap::PostureAssessment,
        Cap::MultiFactorAuth,
        Cap::CertificateAuth,
        Cap::CloudIntegration,
        Cap::AgentlessOperation,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    portnox.breach_reduction = Some(0.44);
    portnox.compliance_automation = Some(0.40);
    records.push(portnox);

    let mut securew2 = vendor(
        "securew2",
        "SecureW2 JoinNow",
        PricingModel::PerDeviceSubscription,
        VendorCategory::CloudNative,
    );
    securew2.per_device_price = 2.5;
    securew2.one_time = OneTimeCosts {
        hardware: 0.0,
        implementation: 6_000.0,
        training: 2_000.0,
    };
    securew2.operations = OperationalProfile {
        required_fte: 0.2,
        uptime_percent: 99.9,
        deployment_days: 10,
    };
    securew2.security = SecurityScores {
        zero_trust: 86.0,
        device_auth: 94.0,
        remediation_minutes: 20.0,
    };
    securew2.compliance_coverage = coverage(&[
        ("hipaa", 78.0),
        ("pci-dss", 80.0),
        ("ferpa", 88.0),
        ("iso-27001", 80.0),
    ]);
    securew2.capabilities = BTreeSet::from([
        Cap::AccessControl,
        Cap::ByodOnboarding,
        Cap::CertificateAuth,
        Cap::MultiFactorAuth,
        Cap::Encryption,
        Cap::CloudIntegration,
        Cap::Reporting,
    ]);
    securew2.breach_reduction = Some(0.35);
    securew2.compliance_automation = Some(0.30);
    records.push(securew2);

    let mut juniper = vendor(
        "juniper-mist-aa",
        "Juniper Mist Access Assurance",
        PricingModel::PerDeviceSubscription,
        VendorCategory::CloudNative,
    );
    juniper.per_device_price = 6.0;
    juniper.one_time = OneTimeCosts {
        hardware: 0.0,
        implementation: 15_000.0,
        training: 5_000.0,
    };
    juniper.operations = OperationalProfile {
        required_fte: 0.4,
        uptime_percent: 99.8,
        deployment_days: 21,
    };
    juniper.security = SecurityScores {
        zero_trust: 84.0,
        device_auth: 88.0,
        remediation_minutes: 25.0,
    };
    juniper.compliance_coverage = coverage(&[
        ("hipaa", 80.0),
        ("pci-dss", 82.0),
        ("nist-csf", 82.0),
    ]);
    juniper.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::GuestManagement,
        Cap::CertificateAuth,
        Cap::CloudIntegration,
        Cap::AuditLogging,
        Cap::Reporting,
    ]);
    juniper.breach_reduction = Some(0.38);
    records.push(juniper);

    let mut packetfence = vendor(
        "packetfence",
        "PacketFence",
        PricingModel::Included,
        VendorCategory::OpenSource,
    );
    packetfence.one_time = OneTimeCosts {
        hardware: 15_000.0,
        implementation: 40_000.0,
        training: 8_000.0,
    };
    packetfence.recurring.infrastructure = 5_000.0;
    packetfence.operations = OperationalProfile {
        required_fte: 1.5,
        uptime_percent: 98.5,
        deployment_days: 90,
    };
    packetfence.security = SecurityScores {
        zero_trust: 65.0,
        device_auth: 78.0,
        remediation_minutes: 90.0,
    };
    packetfence.compliance_coverage = coverage(&[
        ("hipaa", 65.0),
        ("pci-dss", 70.0),
        ("ferpa", 72.0),
    ]);
    packetfence.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::DeviceProfiling,
        Cap::AccessControl,
        Cap::GuestManagement,
        Cap::ByodOnboarding,
        Cap::Reporting,
    ]);
    packetfence.breach_reduction = Some(0.30);
    packetfence.compliance_automation = Some(0.10);
    records.push(packetfence);

    let mut ivanti = vendor(
        "ivanti-policy-secure",
        "Ivanti Policy Secure",
        PricingModel::PerpetualLicense,
        VendorCategory::LegacyEnterprise,
    );
    ivanti.per_device_price = 30.0;
    ivanti.one_time = OneTimeCosts {
        hardware: 50_000.0,
        implementation: 65_000.0,
        training: 10_000.0,
    };
    ivanti.recurring.infrastructure = 7_000.0;
    ivanti.operations = OperationalProfile {
        required_fte: 1.0,
        uptime_percent: 99.2,
        deployment_days: 85,
    };
    ivanti.security = SecurityScores {
        zero_trust: 72.0,
        device_auth: 80.0,
        remediation_minutes: 60.0,
    };
    ivanti.compliance_coverage = coverage(&[
        ("hipaa", 78.0),
        ("pci-dss", 80.0),
        ("nist-csf", 76.0),
    ]);
    ivanti.capabilities = BTreeSet::from([
        Cap::DeviceVisibility,
        Cap::AccessControl,
        Cap::NetworkSegmentation,
        Cap::PostureAssessment,
        Cap::MultiFactorAuth,
        Cap::AuditLogging,
    ]);
    ivanti.breach_reduction = Some(0.36);
    records.push(ivanti);

    records
}
