//! Catalog file loading.
//!
//! Catalogs can be supplied as YAML or JSON documents; format is chosen by
//! file extension, falling back to YAML (a superset of JSON for our
//! purposes). Loaded data goes through the same validation as the builtin
//! set.

use crate::catalog::{FrameworkCatalog, VendorCatalog};
use crate::error::{ErrorContext, NacTcoError, Result};
use crate::model::{ComplianceFramework, IndustryRiskProfile, VendorRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog document. All sections are optional so vendor and
/// framework data may live in one file or separate files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub vendors: Vec<VendorRecord>,
    pub frameworks: Vec<ComplianceFramework>,
    pub industries: Vec<IndustryRiskProfile>,
}

impl CatalogDocument {
    /// Parse a document from a string, preferring JSON for `.json` paths.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(content)
                .map_err(NacTcoError::from)
                .with_context(|| format!("parsing catalog {}", path.display()))
        } else {
            serde_yaml::from_str(content)
                .map_err(NacTcoError::from)
                .with_context(|| format!("parsing catalog {}", path.display()))
        }
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NacTcoError::io(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }
}

/// Load a vendor catalog from a document file.
///
/// The file's vendor section replaces the builtin set entirely; merging
/// would make results depend on tool version, which defeats reproducibility.
pub fn load_vendor_catalog(path: &Path) -> Result<VendorCatalog> {
    let doc = CatalogDocument::from_path(path)?;
    if doc.vendors.is_empty() {
        return Err(NacTcoError::validation(format!(
            "catalog file {} contains no vendors",
            path.display()
        )));
    }
    tracing::info!(
        path = %path.display(),
        vendor_count = doc.vendors.len(),
        "loaded vendor catalog from file"
    );
    VendorCatalog::from_records(doc.vendors)
}

/// Load a framework catalog from a document file.
///
/// Framework and industry sections missing from the file fall back to the
/// builtin data, since custom vendor pricing rarely comes with custom
/// regulatory definitions.
pub fn load_framework_catalog(path: &Path) -> Result<FrameworkCatalog> {
    let doc = CatalogDocument::from_path(path)?;
    let builtin = FrameworkCatalog::builtin();
    let frameworks = if doc.frameworks.is_empty() {
        builtin.frameworks().cloned().collect()
    } else {
        doc.frameworks
    };
    let industries = if doc.industries.is_empty() {
        builtin.industries().cloned().collect()
    } else {
        doc.industries
    };
    tracing::info!(path = %path.display(), "loaded framework catalog from file");
    FrameworkCatalog::from_parts(frameworks, industries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_yaml_vendor_document() {
        let yaml = r#"
vendors:
  - id: custom-nac
    name: Custom NAC
    pricing: per-device-subscription
    per_device_price: 3.5
    category: cloud-native
    capabilities: [access-control, audit-logging]
"#;
        let doc = CatalogDocument::parse(yaml, &PathBuf::from("catalog.yaml")).unwrap();
        assert_eq!(doc.vendors.len(), 1);
        assert_eq!(doc.vendors[0].id.value(), "custom-nac");
        assert_eq!(doc.vendors[0].per_device_price, 3.5);
    }

    #[test]
    fn test_parse_json_by_extension() {
        let json = r#"{"vendors": [], "frameworks": [], "industries": []}"#;
        let doc = CatalogDocument::parse(json, &PathBuf::from("catalog.json")).unwrap();
        assert!(doc.vendors.is_empty());
    }

    #[test]
    fn test_parse_garbage_fails_with_context() {
        let err = CatalogDocument::parse(":::", &PathBuf::from("bad.yaml")).unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }
}
