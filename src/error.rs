//! Error types for `pageweave`
//!
//! This module provides the error hierarchy for component construction,
//! configuration loading, and CLI operations, with Unix exit code mapping.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `pageweave` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (missing options record, invalid YAML)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (unknown component, invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `pageweave` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum PageweaveError {
    /// Component construction error
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Usage error (invalid arguments, unknown names)
    #[error("{0}")]
    Usage(String),
}

impl PageweaveError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Component(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Component Errors
// ============================================================================

/// Component construction errors.
///
/// Construction is the only validation point a component has: a factory
/// either produces a fully configured instance or fails here, before any
/// renderable state exists.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Factory was invoked without its required options record
    #[error("{component} component requires an options object")]
    MissingOptions {
        /// Name of the component whose factory was invoked
        component: &'static str,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `pageweave` operations.
pub type Result<T> = std::result::Result<T, PageweaveError>;

// ============================================================================
// Tests
// ============================================================================
