//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod catalogs;
mod compare;
mod score;
mod sensitivity;

pub use catalogs::{run_frameworks, run_vendors};
pub use compare::{run_compare, CompareRun};
pub use score::{run_score, ScoreRun};
pub use sensitivity::{run_sensitivity, SensitivityRun};

use crate::catalog::{
    load_framework_catalog, load_vendor_catalog, FrameworkCatalog, VendorCatalog,
};
use crate::error::Result;
use std::io::Write as _;
use std::path::Path;

/// Resolve the vendor catalog: an explicit file replaces the builtin set.
pub(crate) fn vendor_catalog(path: Option<&Path>) -> Result<VendorCatalog> {
    match path {
        Some(path) => load_vendor_catalog(path),
        None => Ok(VendorCatalog::builtin()),
    }
}

/// Resolve the framework catalog: explicit file sections override builtins.
pub(crate) fn framework_catalog(path: Option<&Path>) -> Result<FrameworkCatalog> {
    match path {
        Some(path) => load_framework_catalog(path),
        None => Ok(FrameworkCatalog::builtin()),
    }
}

/// Write rendered report text to a file or stdout.
pub(crate) fn write_output(content: &str, file: Option<&Path>) -> anyhow::Result<()> {
    match file {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{content}")?;
        }
    }
    Ok(())
}
