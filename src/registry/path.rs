//! Registry scopes and path construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A root partition of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The current user's settings (HKEY_CURRENT_USER).
    CurrentUser,
    /// Machine-wide settings (HKEY_LOCAL_MACHINE).
    LocalMachine,
}

impl Scope {
    /// Both scopes, in probe priority order: user scope before machine scope.
    pub const ALL: [Scope; 2] = [Scope::CurrentUser, Scope::LocalMachine];

    /// The abbreviated root prefix used in registry paths.
    pub fn root(&self) -> &'static str {
        match self {
            Scope::CurrentUser => "HKCU",
            Scope::LocalMachine => "HKLM",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root())
    }
}

/// An absolute registry path, e.g. `HKLM\SOFTWARE\Valve\Steam`.
///
/// Paths are built by joining segments and from then on treated as opaque
/// identifiers: hashed, compared, and displayed as a whole. The resolution
/// core never splits one back apart; only the live accessor peels off the
/// root prefix to select a hive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryPath(String);

impl RegistryPath {
    /// Join a scope root with a backslash-prefixed subtree suffix.
    pub fn new(scope: Scope, suffix: &str) -> Self {
        Self(format!("{}{}", scope.root(), suffix))
    }

    /// Append one subkey segment.
    pub fn child(&self, subkey: &str) -> Self {
        Self(format!("{}\\{}", self.0, subkey))
    }

    /// The full path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegistryPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for RegistryPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
