//! Builtin compliance frameworks and industry risk profiles.
//!
//! Control lists are condensed to the requirements a NAC platform can
//! plausibly satisfy; penalty figures follow published enforcement data.

use crate::model::{
    AuditCadence, Capability, ComplianceFramework, Control, ControlId, Criticality, ExposureTier,
    FrameworkId, IndustryId, IndustryRiskProfile, InsuranceProfile, PenaltyModel, ThreatLandscape,
};

use Capability as Cap;
use Criticality::{Beneficial, Critical, Important};

fn control(id: &str, name: &str, caps: &[Cap], criticality: Criticality) -> Control {
    Control {
        id: ControlId::new(id),
        name: name.to_string(),
        required_capabilities: caps.to_vec(),
        criticality,
    }
}

/// The builtin framework definitions.
pub(super) fn builtin_frameworks() -> Vec<ComplianceFramework> {
    vec![
        ComplianceFramework {
            id: FrameworkId::new("hipaa"),
            name: "HIPAA Security Rule".to_string(),
            controls: vec![
                control(
                    "164.312(a)",
                    "Access control for ePHI systems",
                    &[Cap::AccessControl],
                    Critical,
                ),
                control(
                    "164.312(b)",
                    "Audit controls recording ePHI activity",
                    &[Cap::AuditLogging],
                    Critical,
                ),
                control(
                    "164.312(d)",
                    "Person or entity authentication",
                    &[Cap::MultiFactorAuth, Cap::CertificateAuth],
                    Critical,
                ),
                control(
                    "164.312(e)",
                    "Transmission security",
                    &[Cap::Encryption],
                    Critical,
                ),
                control(
                    "164.308(a)(1)",
                    "Risk analysis and management",
                    &[Cap::VulnerabilityScanning, Cap::PostureAssessment],
                    Important,
                ),
                control(
                    "164.308(a)(6)",
                    "Security incident procedures",
                    &[Cap::ThreatResponse, Cap::IncidentContainment],
                    Important,
                ),
                control(
                    "164.310(c)",
                    "Workstation and device inventory",
                    &[Cap::DeviceVisibility, Cap::DeviceProfiling],
                    Important,
                ),
                control(
                    "164.308(a)(8)",
                    "Periodic technical evaluation",
                    &[Cap::Reporting],
                    Beneficial,
                ),
            ],
            penalty: PenaltyModel {
                max_fine: 2_134_831.0,
                revenue_fraction_fine: None,
                typical_fine: 450_000.0,
            },
            audit_cadence: AuditCadence::Annual,
        },
        ComplianceFramework {
            id: FrameworkId::new("pci-dss"),
            name: "PCI DSS 4.0".to_string(),
            controls: vec![
                control(
                    "1.2",
                    "Network security controls configured and maintained",
                    &[Cap::NetworkSegmentation],
                    Critical,
                ),
                control(
                    "7.2",
                    "Access to CHD appropriately defined and assigned",
                    &[Cap::AccessControl],
                    Critical,
                ),
                control(
                    "8.2",
                    "Multi-factor authentication implemented",
                    &[Cap::MultiFactorAuth],
                    Critical,
                ),
                control(
                    "10.2",
                    "Audit logs detect anomalies and suspicious activity",
                    &[Cap::AuditLogging],
                    Critical,
                ),
                control(
                    "11.3",
                    "External and internal vulnerabilities managed",
                    &[Cap::VulnerabilityScanning],
                    Important,
                ),
                control(
                    "12.10",
                    "Security incidents detected and responded to",
                    &[Cap::ThreatResponse, Cap::IncidentContainment],
                    Important,
                ),
                control(
                    "9.1",
                    "Rogue device detection on the CDE network",
                    &[Cap::DeviceVisibility],
                    Important,
                ),
                control(
                    "12.5",
                    "Scope documentation and reporting",
                    &[Cap::Reporting],
                    Beneficial,
                ),
            ],
            penalty: PenaltyModel {
                max_fine: 500_000.0,
                revenue_fraction_fine: None,
                typical_fine: 100_000.0,
            },
            audit_cadence: AuditCadence::Annual,
        },
        ComplianceFramework {
            id: FrameworkId::new("nist-csf"),
            name: "NIST Cybersecurity Framework 2.0".to_string(),
            controls: vec![
                control(
                    "ID.AM",
                    "Asset inventory and management",
                    &[Cap::DeviceVisibility, Cap::DeviceProfiling],
                    Critical,
                ),
                control(
                    "PR.AA",
                    "Identity management and access control",
                    &[Cap::AccessControl, Cap::MultiFactorAuth],
                    Critical,
                ),
                control(
                    "PR.IR",
                    "Network infrastructure resilience and segmentation",
                    &[Cap::NetworkSegmentation],
                    Important,
                ),
                control(
                    "DE.CM",
                    "Continuous monitoring of networks and devices",
                    &[Cap::DeviceVisibility, Cap::PostureAssessment],
                    Critical,
                ),
                control(
                    "RS.MI",
                    "Incident mitigation and containment",
                    &[Cap::IncidentContainment, Cap::ThreatResponse],
                    Important,
                ),
                control(
                    "GV.OV",
                    "Oversight via metrics and reporting",
                    &[Cap::Reporting],
                    Beneficial,
                ),
            ],
            penalty: PenaltyModel {
                // Voluntary framework; exposure comes from contractual flow-downs
                max_fine: 250_000.0,
                revenue_fraction_fine: None,
                typical_fine: 50_000.0,
            },
            audit_cadence: AuditCadence::Continuous,
        },
        ComplianceFramework {
            id: FrameworkId::new("gdpr"),
            name: "GDPR".to_string(),
            controls: vec![
                control(
                    "Art.32",
                    "Security of processing",
                    &[Cap::AccessControl, Cap::Encryption],
                    Critical,
                ),
                control(
                    "Art.25",
                    "Data protection by design and default",
                    &[Cap::NetworkSegmentation],
                    Critical,
                ),
                control(
                    "Art.33",
                    "Breach detection supporting 72h notification",
                    &[Cap::ThreatResponse, Cap::AuditLogging],
                    Critical,
                ),
                control(
                    "Art.30",
                    "Records of processing activities",
                    &[Cap::AuditLogging, Cap::Reporting],
                    Important,
                ),
                control(
                    "Art.35",
                    "Data protection impact assessment inputs",
                    &[Cap::DeviceVisibility],
                    Beneficial,
                ),
            ],
            penalty: PenaltyModel {
                max_fine: 20_000_000.0,
                revenue_fraction_fine: Some(0.04),
                typical_fine: 1_200_000.0,
            },
            audit_cadence: AuditCadence::Continuous,
        },
        ComplianceFramework {
            id: FrameworkId::new("iso-27001"),
            name: "ISO/IEC 27001:2022".to_string(),
            controls: vec![
                control(
                    "A.5.15",
                    "Access control policy and enforcement",
                    &[Cap::AccessControl],
                    Critical,
                ),
                control(
                    "A.8.1",
                    "User endpoint device inventory",
                    &[Cap::DeviceVisibility, Cap::DeviceProfiling],
                    Critical,
                ),
                control(
                    "A.8.22",
                    "Segregation of networks",
                    &[Cap::NetworkSegmentation],
                    Important,
                ),
                control(
                    "A.8.16",
                    "Monitoring activities",
                    &[Cap::AuditLogging, Cap::PostureAssessment],
                    Important,
                ),
                control(
                    "A.5.24",
                    "Incident management planning",
                    &[Cap::ThreatResponse],
                    Important,
                ),
                control(
                    "A.5.36",
                    "Compliance reporting to interested parties",
                    &[Cap::Reporting],
                    Beneficial,
                ),
            ],
            penalty: PenaltyModel {
                // Certification loss, not statutory fines
                max_fine: 150_000.0,
                revenue_fraction_fine: None,
                typical_fine: 40_000.0,
            },
            audit_cadence: AuditCadence::Annual,
        },
        ComplianceFramework {
            id: FrameworkId::new("cmmc"),
            name: "CMMC 2.0 Level 2".to_string(),
            controls: vec![
                control(
                    "AC.L2-3.1.1",
                    "Limit system access to authorized users and devices",
                    &[Cap::AccessControl, Cap::DeviceVisibility],
                    Critical,
                ),
                control(
                    "IA.L2-3.5.3",
                    "Multifactor authentication for network access",
                    &[Cap::MultiFactorAuth],
                    Critical,
                ),
                control(
                    "SC.L2-3.13.1",
                    "Boundary protection and segmentation",
                    &[Cap::NetworkSegmentation],
                    Critical,
                ),
                control(
                    "AU.L2-3.3.1",
                    "System audit logging",
                    &[Cap::AuditLogging],
                    Important,
                ),
                control(
                    "IR.L2-3.6.1",
                    "Incident handling capability",
                    &[Cap::IncidentContainment],
                    Important,
                ),
            ],
            penalty: PenaltyModel {
                // Contract loss exposure for defense suppliers
                max_fine: 1_000_000.0,
                revenue_fraction_fine: None,
                typical_fine: 250_000.0,
            },
            audit_cadence: AuditCadence::Biannual,
        },
        ComplianceFramework {
            id: FrameworkId::new("ferpa"),
            name: "FERPA".to_string(),
            controls: vec![
                control(
                    "99.31",
                    "Access restricted to school officials with legitimate interest",
                    &[Cap::AccessControl],
                    Critical,
                ),
                control(
                    "99.32",
                    "Record of access to education records",
                    &[Cap::AuditLogging],
                    Important,
                ),
                control(
                    "99.30",
                    "Student device onboarding with consent controls",
                    &[Cap::ByodOnboarding, Cap::GuestManagement],
                    Important,
                ),
            ],
            penalty: PenaltyModel {
                // Funding loss exposure, not fines
                max_fine: 300_000.0,
                revenue_fraction_fine: None,
                typical_fine: 60_000.0,
            },
            audit_cadence: AuditCadence::Annual,
        },
    ]
}

/// The builtin industry risk profiles.
pub(super) fn builtin_industries() -> Vec<IndustryRiskProfile> {
    vec![
        IndustryRiskProfile {
            industry: IndustryId::new("healthcare"),
            avg_breach_cost: 10_930_000.0,
            breach_probability: 0.28,
            regulatory_exposure: ExposureTier::Severe,
            insurance: InsuranceProfile {
                min_coverage: 5_000_000.0,
                typical_premium: 85_000.0,
                nac_discount_fraction: 0.15,
            },
            threat: ThreatLandscape {
                malware: 78.0,
                ransomware: 88.0,
                insider: 62.0,
                phishing: 80.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("finance"),
            avg_breach_cost: 5_900_000.0,
            breach_probability: 0.24,
            regulatory_exposure: ExposureTier::Severe,
            insurance: InsuranceProfile {
                min_coverage: 10_000_000.0,
                typical_premium: 120_000.0,
                nac_discount_fraction: 0.12,
            },
            threat: ThreatLandscape {
                malware: 75.0,
                ransomware: 72.0,
                insider: 70.0,
                phishing: 85.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("education"),
            avg_breach_cost: 3_650_000.0,
            breach_probability: 0.22,
            regulatory_exposure: ExposureTier::Moderate,
            insurance: InsuranceProfile {
                min_coverage: 2_000_000.0,
                typical_premium: 35_000.0,
                nac_discount_fraction: 0.18,
            },
            threat: ThreatLandscape {
                malware: 70.0,
                ransomware: 82.0,
                insider: 48.0,
                phishing: 76.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("manufacturing"),
            avg_breach_cost: 4_730_000.0,
            breach_probability: 0.20,
            regulatory_exposure: ExposureTier::Moderate,
            insurance: InsuranceProfile {
                min_coverage: 3_000_000.0,
                typical_premium: 45_000.0,
                nac_discount_fraction: 0.14,
            },
            threat: ThreatLandscape {
                malware: 72.0,
                ransomware: 80.0,
                insider: 50.0,
                phishing: 65.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("retail"),
            avg_breach_cost: 3_280_000.0,
            breach_probability: 0.18,
            regulatory_exposure: ExposureTier::High,
            insurance: InsuranceProfile {
                min_coverage: 2_000_000.0,
                typical_premium: 40_000.0,
                nac_discount_fraction: 0.12,
            },
            threat: ThreatLandscape {
                malware: 68.0,
                ransomware: 65.0,
                insider: 55.0,
                phishing: 70.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("government"),
            avg_breach_cost: 2_600_000.0,
            breach_probability: 0.25,
            regulatory_exposure: ExposureTier::High,
            insurance: InsuranceProfile {
                min_coverage: 5_000_000.0,
                typical_premium: 60_000.0,
                nac_discount_fraction: 0.16,
            },
            threat: ThreatLandscape {
                malware: 74.0,
                ransomware: 78.0,
                insider: 60.0,
                phishing: 82.0,
            },
        },
        IndustryRiskProfile {
            industry: IndustryId::new("technology"),
            avg_breach_cost: 4_880_000.0,
            breach_probability: 0.21,
            regulatory_exposure: ExposureTier::Moderate,
            insurance: InsuranceProfile {
                min_coverage: 3_000_000.0,
                typical_premium: 50_000.0,
                nac_discount_fraction: 0.13,
            },
            threat: ThreatLandscape {
                malware: 70.0,
                ransomware: 68.0,
                insider: 58.0,
                phishing: 74.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_framework_has_a_critical_control() {
        for fw in builtin_frameworks() {
            assert!(
                fw.tier_count(Criticality::Critical) > 0,
                "{} has critical controls",
                fw.id
            );
        }
    }

    #[test]
    fn test_framework_ids_unique() {
        let frameworks = builtin_frameworks();
        let mut ids: Vec<_> = frameworks.iter().map(|f| f.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), frameworks.len());
    }

    #[test]
    fn test_penalties_ordered_sanely() {
        for fw in builtin_frameworks() {
            assert!(
                fw.penalty.typical_fine <= fw.penalty.max_fine,
                "{}: typical fine exceeds max",
                fw.id
            );
        }
    }

    #[test]
    fn test_industry_probabilities_are_fractions() {
        for profile in builtin_industries() {
            assert!((0.0..=1.0).contains(&profile.breach_probability));
            assert!((0.0..=1.0).contains(&profile.insurance.nac_discount_fraction));
        }
    }
}
