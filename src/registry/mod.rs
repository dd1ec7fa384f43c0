//! Registry access layer.
//!
//! The resolution core only ever talks to the [`RegistryAccessor`] trait.
//!
//! # Architecture
//!
//! - [`path`] - Scope roots and opaque path construction
//! - [`node`] - Probe results and typed values
//! - [`memory`] - In-memory accessor for tests and snapshot files
//! - `live` - `winreg`-backed accessor (Windows only)

#[cfg(windows)]
pub mod live;
pub mod memory;
pub mod node;
pub mod path;

#[cfg(windows)]
pub use live::LiveRegistry;
pub use memory::{MemoryRegistry, SnapshotNode};
pub use node::{RegistryNode, RegistryValue};
pub use path::{RegistryPath, Scope};

use std::collections::HashMap;

use crate::error::Result;

/// Batched read-only access to a hierarchical registry.
pub trait RegistryAccessor {
    /// Probe each path, reporting existence, subkeys, and values.
    ///
    /// A non-existent path is reported with `exists = false`, never as an
    /// error; errors are reserved for genuine access failures (permissions,
    /// I/O), and any error aborts the resolution call that issued the probe.
    fn list(&self, paths: &[RegistryPath]) -> Result<HashMap<RegistryPath, RegistryNode>>;
}
