//! Default configurations and presets for nac-tco.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::engine::{ComplianceAssumptions, CostAssumptions};
use crate::reports::ReportFormat;

/// Default projection horizon in years when none is given.
pub const DEFAULT_PROJECTION_YEARS: u32 = 3;

/// Default device count when none is given.
pub const DEFAULT_DEVICE_COUNT: u32 = 1000;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default balanced assumptions suitable for most analyses
    Default,
    /// Conservative: discount every soft-savings figure
    Conservative,
    /// Aggressive: full credit for vendor-claimed savings
    Aggressive,
    /// CI/CD: machine-readable output, fail on uncovered critical controls
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Conservative => "conservative",
            Self::Aggressive => "aggressive",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "conservative" | "pessimistic" => Some(Self::Conservative),
            "aggressive" | "optimistic" => Some(Self::Aggressive),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced planning assumptions for most comparisons",
            Self::Conservative => {
                "Discounted savings assumptions for skeptical budget reviews"
            }
            Self::Aggressive => "Vendor-favorable assumptions for best-case projections",
            Self::CiCd => "Machine-readable output for automated procurement gates",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Conservative,
            Self::Aggressive,
            Self::CiCd,
        ]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Conservative => Self::conservative_preset(),
            ConfigPreset::Aggressive => Self::aggressive_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Conservative preset.
    ///
    /// Halves the soft-savings fractions so projected ROI reflects only
    /// savings a CFO would accept without argument.
    #[must_use]
    pub fn conservative_preset() -> Self {
        Self {
            cost: CostAssumptions {
                compliance_automation: 0.10,
                default_breach_reduction: 0.15,
                ..CostAssumptions::default()
            },
            compliance: ComplianceAssumptions {
                incident_probability: 0.05,
                audit_simplification: 0.10,
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Aggressive preset.
    ///
    /// Takes vendor-claimed savings at face value.
    #[must_use]
    pub fn aggressive_preset() -> Self {
        Self {
            cost: CostAssumptions {
                compliance_automation: 0.35,
                default_breach_reduction: 0.45,
                ..CostAssumptions::default()
            },
            compliance: ComplianceAssumptions {
                incident_probability: 0.15,
                audit_simplification: 0.35,
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// CI/CD preset.
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            cost: CostAssumptions::default(),
            compliance: ComplianceAssumptions::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_gaps: true,
                quiet: true,
            },
        }
    }
}
