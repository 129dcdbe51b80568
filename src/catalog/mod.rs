//! Immutable vendor and framework catalogs.
//!
//! Catalogs are constructed once at startup, from the embedded builtin data
//! or from a YAML/JSON file, then passed by shared reference
//! into the engine. Nothing in the engine mutates them, so concurrent readers
//! need no locking.

mod frameworks;
mod loader;
mod vendors;

pub use loader::{load_framework_catalog, load_vendor_catalog, CatalogDocument};

use crate::error::{CatalogErrorKind, NacTcoError, Result};
use crate::model::{
    ComplianceFramework, FrameworkId, IndustryId, IndustryRiskProfile, VendorId, VendorRecord,
};
use indexmap::IndexMap;
use xxhash_rust::xxh3::xxh3_64;

/// Immutable table of vendor records keyed by vendor id.
#[derive(Debug, Clone)]
pub struct VendorCatalog {
    vendors: IndexMap<VendorId, VendorRecord>,
    content_hash: u64,
}

impl VendorCatalog {
    /// Build a catalog from records, validating and normalizing each one.
    ///
    /// Duplicate ids and negative price fields are rejected; percentage
    /// fields are clamped to their documented ranges.
    pub fn from_records(records: Vec<VendorRecord>) -> Result<Self> {
        let mut vendors = IndexMap::with_capacity(records.len());
        for mut record in records {
            for (field, value) in record.price_fields() {
                if value < 0.0 {
                    return Err(NacTcoError::catalog(
                        "vendor catalog construction",
                        CatalogErrorKind::NegativePrice {
                            vendor: record.id.value().to_string(),
                            field,
                        },
                    ));
                }
            }
            record.normalize();
            if vendors.contains_key(&record.id) {
                return Err(NacTcoError::catalog(
                    "vendor catalog construction",
                    CatalogErrorKind::DuplicateVendor(record.id.value().to_string()),
                ));
            }
            vendors.insert(record.id.clone(), record);
        }
        let content_hash = hash_entries(vendors.values());
        tracing::debug!(
            vendor_count = vendors.len(),
            content_hash,
            "vendor catalog constructed"
        );
        Ok(Self {
            vendors,
            content_hash,
        })
    }

    /// The embedded builtin vendor dataset.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(vendors::builtin_vendors())
            .unwrap_or_else(|e| unreachable!("builtin vendor data is valid: {e}"))
    }

    /// Look up a vendor by id.
    pub fn get(&self, id: &VendorId) -> Result<&VendorRecord> {
        self.vendors
            .get(id)
            .ok_or_else(|| NacTcoError::unknown_vendor(id.value()))
    }

    /// All vendor ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &VendorId> {
        self.vendors.keys()
    }

    /// All records in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &VendorRecord> {
        self.vendors.values()
    }

    /// The vendor flagged as the designated baseline, if any.
    #[must_use]
    pub fn baseline(&self) -> Option<&VendorRecord> {
        self.vendors.values().find(|v| v.baseline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Content hash for quick equality/determinism checks.
    #[must_use]
    pub const fn content_hash(&self) -> u64 {
        self.content_hash
    }
}

/// Immutable table of compliance frameworks and industry risk profiles.
#[derive(Debug, Clone)]
pub struct FrameworkCatalog {
    frameworks: IndexMap<FrameworkId, ComplianceFramework>,
    industries: IndexMap<IndustryId, IndustryRiskProfile>,
    content_hash: u64,
}

impl FrameworkCatalog {
    /// Build a catalog from frameworks and industry profiles.
    pub fn from_parts(
        frameworks: Vec<ComplianceFramework>,
        industries: Vec<IndustryRiskProfile>,
    ) -> Result<Self> {
        let mut framework_map = IndexMap::with_capacity(frameworks.len());
        for framework in frameworks {
            if framework.controls.is_empty() {
                return Err(NacTcoError::catalog(
                    "framework catalog construction",
                    CatalogErrorKind::InvalidDocument(format!(
                        "framework '{}' has no controls",
                        framework.id
                    )),
                ));
            }
            framework_map.insert(framework.id.clone(), framework);
        }
        let mut industry_map = IndexMap::with_capacity(industries.len());
        for profile in industries {
            industry_map.insert(profile.industry.clone(), profile);
        }
        let content_hash = hash_entries(framework_map.values());
        tracing::debug!(
            framework_count = framework_map.len(),
            industry_count = industry_map.len(),
            "framework catalog constructed"
        );
        Ok(Self {
            frameworks: framework_map,
            industries: industry_map,
            content_hash,
        })
    }

    /// The embedded builtin framework/industry dataset.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_parts(
            frameworks::builtin_frameworks(),
            frameworks::builtin_industries(),
        )
        .unwrap_or_else(|e| unreachable!("builtin framework data is valid: {e}"))
    }

    /// Look up a framework by id.
    pub fn get(&self, id: &FrameworkId) -> Result<&ComplianceFramework> {
        self.frameworks
            .get(id)
            .ok_or_else(|| NacTcoError::unknown_framework(id.value()))
    }

    /// Look up an industry risk profile by id.
    pub fn industry(&self, id: &IndustryId) -> Result<&IndustryRiskProfile> {
        self.industries.get(id).ok_or_else(|| {
            NacTcoError::catalog(
                "industry lookup",
                CatalogErrorKind::UnknownIndustry(id.value().to_string()),
            )
        })
    }

    /// All framework ids in catalog order.
    pub fn framework_ids(&self) -> impl Iterator<Item = &FrameworkId> {
        self.frameworks.keys()
    }

    /// All frameworks in catalog order.
    pub fn frameworks(&self) -> impl Iterator<Item = &ComplianceFramework> {
        self.frameworks.values()
    }

    /// All industry profiles in catalog order.
    pub fn industries(&self) -> impl Iterator<Item = &IndustryRiskProfile> {
        self.industries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    /// Content hash for quick equality/determinism checks.
    #[must_use]
    pub const fn content_hash(&self) -> u64 {
        self.content_hash
    }
}

/// Hash serializable entries in iteration order.
fn hash_entries<'a, T: serde::Serialize + 'a>(entries: impl Iterator<Item = &'a T>) -> u64 {
    let mut input = Vec::new();
    for entry in entries {
        if let Ok(bytes) = serde_json::to_vec(entry) {
            input.extend(bytes);
        }
    }
    xxh3_64(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PricingModel, VendorCategory};

    #[test]
    fn test_builtin_vendor_catalog_loads() {
        let catalog = VendorCatalog::builtin();
        assert!(catalog.len() >= 6, "expected a useful builtin vendor set");
        assert!(catalog.baseline().is_some(), "builtin set flags a baseline");
    }

    #[test]
    fn test_builtin_framework_catalog_loads() {
        let catalog = FrameworkCatalog::builtin();
        assert!(catalog.len() >= 5);
        assert!(catalog.industries().count() >= 5);
        for framework in catalog.frameworks() {
            assert!(
                !framework.controls.is_empty(),
                "framework {} has controls",
                framework.id
            );
        }
    }

    #[test]
    fn test_unknown_vendor_lookup_fails() {
        let catalog = VendorCatalog::builtin();
        let err = catalog.get(&VendorId::new("does-not-exist")).unwrap_err();
        assert!(err.to_string().contains("Catalog"));
    }

    #[test]
    fn test_duplicate_vendor_rejected() {
        let mut records: Vec<_> = VendorCatalog::builtin().records().cloned().collect();
        records.push(records[0].clone());
        assert!(VendorCatalog::from_records(records).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut records: Vec<_> = VendorCatalog::builtin().records().cloned().collect();
        records[0].per_device_price = -1.0;
        let err = VendorCatalog::from_records(records).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("catalog"));
    }

    #[test]
    fn test_content_hash_is_stable() {
        assert_eq!(
            VendorCatalog::builtin().content_hash(),
            VendorCatalog::builtin().content_hash()
        );
        assert_eq!(
            FrameworkCatalog::builtin().content_hash(),
            FrameworkCatalog::builtin().content_hash()
        );
    }

    #[test]
    fn test_content_hash_tracks_content() {
        let a = VendorCatalog::builtin();
        let mut records: Vec<_> = a.records().cloned().collect();
        records.push(VendorRecord {
            id: VendorId::new("extra"),
            name: "Extra".to_string(),
            pricing: PricingModel::Included,
            per_device_price: 0.0,
            flat_license_price: None,
            category: VendorCategory::OpenSource,
            one_time: Default::default(),
            recurring: Default::default(),
            operations: Default::default(),
            security: Default::default(),
            compliance_coverage: IndexMap::new(),
            capabilities: Default::default(),
            support_rate: None,
            compliance_automation: None,
            breach_reduction: None,
            baseline: false,
        });
        let b = VendorCatalog::from_records(records).unwrap();
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
