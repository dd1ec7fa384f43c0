//! Publisher-path resolution.
//!
//! Installers also record state under `SOFTWARE\<publisher>\<program>`.
//! Four deterministic candidates are probed: user scope before machine
//! scope, native path before the Wow6432Node redirect, matching how
//! installers typically register state. A missing publisher key is an
//! expected "not installed" outcome, unlike the uninstall subtree roots.

use tracing::{debug, warn};

use crate::clue::PublisherClue;
use crate::error::Result;
use crate::registry::{RegistryAccessor, RegistryPath, Scope};

use super::install_value::require_install_path;

/// Registry subtree where 32-bit software lands on 64-bit systems.
const WOW64_SUBTREE: &str = "Wow6432Node";

/// Resolve a publisher clue to an install directory.
///
/// Returns `Ok(None)` when none of the candidate paths exist.
pub fn resolve_by_publisher(
    registry: &dyn RegistryAccessor,
    clue: &PublisherClue,
) -> Result<Option<String>> {
    let native = format!("\\SOFTWARE\\{}\\{}", clue.publisher, clue.program);
    let redirected = format!(
        "\\SOFTWARE\\{WOW64_SUBTREE}\\{}\\{}",
        clue.publisher, clue.program
    );

    let mut candidates = Vec::with_capacity(4);
    for suffix in [&native, &redirected] {
        for scope in Scope::ALL {
            candidates.push(RegistryPath::new(scope, suffix));
        }
    }

    let mut nodes = registry.list(&candidates)?;

    for candidate in &candidates {
        let Some(node) = nodes.remove(candidate) else {
            continue;
        };
        if !node.exists {
            debug!("{candidate} does not exist");
            continue;
        }
        // First existing candidate is decisive, even if extraction fails.
        return require_install_path(candidate, &node).map(Some);
    }

    warn!(
        "No registry entry for publisher {} program {}",
        clue.publisher, clue.program
    );
    Ok(None)
}
