//! Common types and utilities for cppdep commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for dependency reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, one dependency per line.
    Text,
    /// Structured JSON report.
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Sanitize a user-provided path to prevent path traversal attacks.
///
/// Ensures the resolved path is within the current working directory
/// or an allowed base directory.
#[allow(dead_code)]
pub fn sanitize_path(path: &Path, base_dir: Option<&Path>) -> Result<PathBuf> {
    let base = base_dir.unwrap_or_else(|| Path::new("."));
    let base_canonical = base
        .canonicalize()
        .map_err(|e| CliError::Validation(format!("invalid base directory: {}", e)))?;

    let path_canonical = path
        .canonicalize()
        .unwrap_or_else(|_| base.join(path).to_path_buf());

    if !path_canonical.starts_with(&base_canonical) {
        return Err(CliError::Validation(
            "path traversal detected: path must be within current directory".to_string(),
        ));
    }

    Ok(path_canonical)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input paths are specified.
    pub const NO_INPUT_FILES: &str = "no input files specified";

    /// Error when a `-D` flag has a malformed name.
    pub const INVALID_DEFINE: &str = "invalid -D flag: {}";

    /// Error when an unknown output format is requested.
    pub const UNKNOWN_FORMAT: &str = "unknown output format: {}";
}
