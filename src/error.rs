//! Unified error types for nac-tco.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nac-tco operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NacTcoError {
    /// Errors raised by the calculation engine
    #[error("Calculation failed: {context}")]
    Engine {
        context: String,
        #[source]
        source: EngineErrorKind,
    },

    /// Errors during catalog lookup or loading
    #[error("Catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific engine error kinds.
///
/// Invalid inputs are surfaced, never silently clamped; clamping would
/// produce misleading financial figures.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineErrorKind {
    #[error("Device count must be positive (got {0})")]
    InvalidDeviceCount(u32),

    #[error("Projection horizon must be 1-10 years (got {0})")]
    InvalidHorizon(u32),

    #[error("Perturbation '{field}' of {value}% is outside [-90%, +500%]")]
    PerturbationOutOfRange { field: &'static str, value: f64 },

    #[error("Vendor record '{vendor}' is invalid: {reason}")]
    InvalidVendorRecord { vendor: String, reason: String },
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Unknown vendor id: {0}")]
    UnknownVendor(String),

    #[error("Unknown framework id: {0}")]
    UnknownFramework(String),

    #[error("Unknown industry id: {0}")]
    UnknownIndustry(String),

    #[error("Duplicate vendor id: {0}")]
    DuplicateVendor(String),

    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("Negative price field '{field}' on vendor '{vendor}'")]
    NegativePrice { vendor: String, field: &'static str },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("CSV generation failed: {0}")]
    CsvError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for nac-tco operations
pub type Result<T> = std::result::Result<T, NacTcoError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl NacTcoError {
    /// Create an engine error with context
    pub fn engine(context: impl Into<String>, source: EngineErrorKind) -> Self {
        Self::Engine {
            context: context.into(),
            source,
        }
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an unknown-vendor error
    pub fn unknown_vendor(id: impl Into<String>) -> Self {
        Self::catalog("vendor lookup", CatalogErrorKind::UnknownVendor(id.into()))
    }

    /// Create an unknown-framework error
    pub fn unknown_framework(id: impl Into<String>) -> Self {
        Self::catalog(
            "framework lookup",
            CatalogErrorKind::UnknownFramework(id.into()),
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for NacTcoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for NacTcoError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidDocument(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for NacTcoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidDocument(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error,
    /// which is more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<NacTcoError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: NacTcoError, new_ctx: &str) -> NacTcoError {
    match err {
        NacTcoError::Engine {
            context: existing,
            source,
        } => NacTcoError::Engine {
            context: chain_context(new_ctx, &existing),
            source,
        },
        NacTcoError::Catalog {
            context: existing,
            source,
        } => NacTcoError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        NacTcoError::Report {
            context: existing,
            source,
        } => NacTcoError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        NacTcoError::Io {
            path,
            message,
            source,
        } => NacTcoError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        NacTcoError::Config(msg) => NacTcoError::Config(chain_context(new_ctx, &msg)),
        NacTcoError::Validation(msg) => NacTcoError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| NacTcoError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| NacTcoError::Validation(f().into()))
    }
}
