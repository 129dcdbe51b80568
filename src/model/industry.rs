//! Per-industry risk profiles used to monetize compliance posture.

use crate::model::IndustryId;
use serde::{Deserialize, Serialize};

/// Regulatory exposure tier for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureTier {
    Low,
    Moderate,
    High,
    Severe,
}

impl ExposureTier {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

/// Cyber-insurance parameters for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProfile {
    /// Minimum coverage insurers expect
    pub min_coverage: f64,
    /// Typical annual premium
    pub typical_premium: f64,
    /// Premium discount fraction attributable to deployed NAC
    pub nac_discount_fraction: f64,
}

/// Threat-landscape sub-scores (0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatLandscape {
    pub malware: f64,
    pub ransomware: f64,
    pub insider: f64,
    pub phishing: f64,
}

/// Risk profile for one industry vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryRiskProfile {
    /// Industry identifier
    pub industry: IndustryId,
    /// Average cost of a breach in this industry
    pub avg_breach_cost: f64,
    /// Annual breach probability, 0-1
    pub breach_probability: f64,
    /// Regulatory exposure tier
    pub regulatory_exposure: ExposureTier,
    /// Insurance parameters
    pub insurance: InsuranceProfile,
    /// Threat sub-scores
    pub threat: ThreatLandscape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_tier_ordering() {
        assert!(ExposureTier::Low < ExposureTier::Severe);
        assert!(ExposureTier::Moderate < ExposureTier::High);
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = IndustryRiskProfile {
            industry: IndustryId::new("healthcare"),
            avg_breach_cost: 10_900_000.0,
            breach_probability: 0.28,
            regulatory_exposure: ExposureTier::Severe,
            insurance: InsuranceProfile {
                min_coverage: 5_000_000.0,
                typical_premium: 85_000.0,
                nac_discount_fraction: 0.15,
            },
            threat: ThreatLandscape::default(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: IndustryRiskProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
