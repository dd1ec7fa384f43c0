//! Install-location value matching.
//!
//! Installers disagree on what the install directory value is called.
//! The matcher normalizes the conventions that show up in practice.

use crate::error::{FindprogError, Result};
use crate::registry::{RegistryNode, RegistryPath, RegistryValue};

/// Value names installers historically use for the install directory,
/// lowercased, in match priority order.
const INSTALL_VALUE_ALIASES: [&str; 3] = ["installlocation", "installdir", "installpath"];

/// Find the value describing the installation directory, if any.
///
/// Value names are compared case-insensitively against each alias in
/// priority order, so a node carrying several aliases at once still
/// resolves deterministically. Payload type is not checked here; callers
/// decide whether a non-string payload is an integrity failure.
pub fn find_install_value(node: &RegistryNode) -> Option<(&str, &RegistryValue)> {
    for alias in INSTALL_VALUE_ALIASES {
        for (name, value) in &node.values {
            if name.to_lowercase() == alias {
                return Some((name.as_str(), value));
            }
        }
    }
    None
}

/// Extract the install path from a node that is expected to carry one.
///
/// A node with no recognized value is a [`FindprogError::MissingInstallValue`]
/// and a non-string payload is a [`FindprogError::InvalidInstallValue`]; both
/// signal registry damage rather than an uninstalled program.
pub(crate) fn require_install_path(path: &RegistryPath, node: &RegistryNode) -> Result<String> {
    let (name, value) =
        find_install_value(node).ok_or_else(|| FindprogError::MissingInstallValue {
            path: path.clone(),
        })?;
    match value.as_str() {
        Some(location) => Ok(location.to_string()),
        None => Err(FindprogError::InvalidInstallValue {
            path: path.clone(),
            value_name: name.to_string(),
        }),
    }
}
