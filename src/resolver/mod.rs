//! The clue-to-path resolution core.
//!
//! [`find_program`] dispatches a [`Clue`] to one of two resolvers:
//!
//! - [`uninstall`] - scans the per-scope `Uninstall` subtrees in two tiers
//! - [`publisher`] - probes four deterministic `SOFTWARE` candidate paths
//!
//! Both funnel their answer through the [`install_value`] matcher, which
//! normalizes the value-name conventions installers use for the install
//! directory. Each resolution call is self-contained: probes are issued
//! fresh every time and nothing is cached across calls.

pub mod install_value;
pub mod publisher;
pub mod uninstall;

pub use install_value::find_install_value;
pub use publisher::resolve_by_publisher;
pub use uninstall::resolve_by_uninstall_key;

use crate::clue::Clue;
use crate::error::Result;
use crate::registry::RegistryAccessor;

/// Resolve a program's install directory from a clue.
///
/// Returns `Ok(None)` when no candidate matched. Errors are reserved for
/// registry-integrity problems; see [`crate::error::FindprogError`].
pub fn find_program(registry: &dyn RegistryAccessor, clue: &Clue) -> Result<Option<String>> {
    match clue {
        Clue::Uninstall(clue) => uninstall::resolve_by_uninstall_key(registry, clue),
        Clue::Publisher(clue) => publisher::resolve_by_publisher(registry, clue),
    }
}
