//! Integration tests for catalog loading and config discovery.

use nac_tco::catalog::{
    load_framework_catalog, load_vendor_catalog, FrameworkCatalog, VendorCatalog,
};
use nac_tco::model::{FrameworkId, IndustryId, VendorId};
use tempfile::TempDir;

// ============================================================================
// Builtin catalogs
// ============================================================================

#[test]
fn test_builtin_catalogs_are_consistent() {
    let vendors = VendorCatalog::builtin();
    let frameworks = FrameworkCatalog::builtin();

    assert!(!vendors.is_empty());
    assert_eq!(
        vendors.records().filter(|v| v.baseline).count(),
        1,
        "exactly one baseline vendor"
    );
    assert!(frameworks.get(&FrameworkId::new("hipaa")).is_ok());
    assert!(frameworks.industry(&IndustryId::new("healthcare")).is_ok());
}

#[test]
fn test_builtin_hash_is_stable() {
    let a = VendorCatalog::builtin();
    let b = VendorCatalog::builtin();
    assert_eq!(a.content_hash(), b.content_hash());
    assert_ne!(a.content_hash(), 0);
}

#[test]
fn test_unknown_lookups_fail() {
    let vendors = VendorCatalog::builtin();
    let frameworks = FrameworkCatalog::builtin();
    assert!(vendors.get(&VendorId::new("not-a-vendor")).is_err());
    assert!(frameworks.get(&FrameworkId::new("not-a-framework")).is_err());
    assert!(frameworks.industry(&IndustryId::new("not-an-industry")).is_err());
}

// ============================================================================
// File loading
// ============================================================================

const VENDOR_YAML: &str = r#"
vendors:
  - id: acme-nac
    name: Acme NAC
    pricing: per-device-subscription
    category: cloud-native
    per_device_price: 3.5
    capabilities: [device-visibility, access-control, cloud-integration]
    one_time:
      implementation: 12000
    operations:
      required_fte: 0.25
      uptime_percent: 99.9
      deployment_days: 14
"#;

#[test]
fn test_vendor_file_replaces_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, VENDOR_YAML).unwrap();

    let catalog = load_vendor_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(&VendorId::new("acme-nac")).is_ok());
    assert!(catalog.get(&VendorId::new("portnox")).is_err());
}

#[test]
fn test_framework_sections_fall_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    // No frameworks or industries in the file; builtins fill in.
    std::fs::write(&path, VENDOR_YAML).unwrap();

    let catalog = load_framework_catalog(&path).unwrap();
    assert!(catalog.get(&FrameworkId::new("hipaa")).is_ok());
}

#[test]
fn test_negative_price_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        VENDOR_YAML.replace("per_device_price: 3.5", "per_device_price: -3.5"),
    )
    .unwrap();
    assert!(load_vendor_catalog(&path).is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, "vendors: [").unwrap();
    assert!(load_vendor_catalog(&path).is_err());
}

#[test]
fn test_json_catalog_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let doc = serde_json::json!({
        "vendors": [{
            "id": "acme-nac",
            "name": "Acme NAC",
            "pricing": "per-device-subscription",
            "category": "cloud-native",
            "per_device_price": 2.0
        }]
    });
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    let catalog = load_vendor_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 1);
}
