//! Error types for findprog operations.
//!
//! This module defines [`FindprogError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FindprogError` for resolution failures that need distinct handling
//! - Use `anyhow::Error` (via `FindprogError::Other`) for unexpected errors
//! - "No matching program" is `Ok(None)` from the resolvers, never an error

use std::path::PathBuf;
use thiserror::Error;

use crate::registry::{RegistryPath, Scope};

/// Core error type for findprog operations.
#[derive(Debug, Error)]
pub enum FindprogError {
    /// A mandatory registry scope root does not exist. Indicates a corrupted
    /// or non-Windows registry rather than an uninstalled program.
    #[error("Registry scope {scope} does not exist")]
    RegistryScopeMissing { scope: Scope },

    /// A matching program entry carries no recognizable install-location value.
    #[error("Registry entry {path} has no install-location value")]
    MissingInstallValue { path: RegistryPath },

    /// An install-location value exists but is not string-typed.
    #[error("Registry entry {path} has a non-string install-location value '{value_name}'")]
    InvalidInstallValue {
        path: RegistryPath,
        value_name: String,
    },

    /// An uninstall clue was constructed with neither field populated.
    #[error("Clue needs an uninstall key or a display name")]
    EmptyClue,

    /// A registry snapshot file could not be read or parsed.
    #[error("Failed to load registry snapshot {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// Registry access failure (permissions, I/O).
    #[error("Registry access error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for findprog operations.
pub type Result<T> = std::result::Result<T, FindprogError>;
