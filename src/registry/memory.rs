//! In-memory registry accessor.
//!
//! Backs unit tests and the CLI's offline mode. Keys are registered under
//! their full path; listing an unregistered path reports `exists = false`.
//! Parent subkey listings are declared explicitly rather than derived from
//! registered children, so a fixture can list a subkey whose own path is
//! unregistered. The real registry produces such dangling entries while an
//! uninstaller is mid-flight.
//!
//! # Snapshot format
//!
//! A snapshot file is a JSON map from full registry path to a node:
//!
//! ```json
//! {
//!   "HKLM\\SOFTWARE\\Valve\\cs2": {
//!     "values": { "InstallDir": "C:\\Games\\CS2" }
//!   },
//!   "HKCU\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall": {
//!     "subkeys": ["Steam App 730"]
//!   }
//! }
//! ```
//!
//! Paths present in the map exist; paths absent do not. Values are encoded
//! untagged: a JSON string is a string value, a number a DWORD, an array of
//! bytes a binary payload.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FindprogError, Result};

use super::{RegistryAccessor, RegistryNode, RegistryPath, RegistryValue};

/// Registry accessor over a fixed set of in-memory keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    nodes: HashMap<RegistryPath, StoredNode>,
}

#[derive(Debug, Clone, Default)]
struct StoredNode {
    subkeys: Vec<String>,
    values: BTreeMap<String, RegistryValue>,
}

/// One key in a JSON snapshot file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// Immediate subkey names, in listing order.
    #[serde(default)]
    pub subkeys: Vec<String>,

    /// Value name → payload.
    #[serde(default)]
    pub values: BTreeMap<String, RegistryValue>,
}

impl MemoryRegistry {
    /// Create an empty registry (every probe reports non-existence).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key and its immediate subkey names.
    pub fn with_key(mut self, path: impl Into<RegistryPath>, subkeys: &[&str]) -> Self {
        let node = self.nodes.entry(path.into()).or_default();
        node.subkeys = subkeys.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set one value on a key, registering the key if it is new.
    pub fn with_value(
        mut self,
        path: impl Into<RegistryPath>,
        name: &str,
        value: RegistryValue,
    ) -> Self {
        self.nodes
            .entry(path.into())
            .or_default()
            .values
            .insert(name.to_string(), value);
        self
    }

    /// Parse a snapshot from its JSON text.
    pub fn from_snapshot_json(json: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, SnapshotNode> = serde_json::from_str(json)?;
        let nodes = raw
            .into_iter()
            .map(|(path, node)| {
                (
                    RegistryPath::from(path),
                    StoredNode {
                        subkeys: node.subkeys,
                        values: node.values,
                    },
                )
            })
            .collect();
        Ok(Self { nodes })
    }

    /// Load a snapshot file from disk.
    pub fn from_snapshot_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|err| FindprogError::Snapshot {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_snapshot_json(&json).map_err(|err| FindprogError::Snapshot {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

impl RegistryAccessor for MemoryRegistry {
    fn list(&self, paths: &[RegistryPath]) -> Result<HashMap<RegistryPath, RegistryNode>> {
        let mut out = HashMap::with_capacity(paths.len());
        for path in paths {
            let node = match self.nodes.get(path) {
                Some(stored) => RegistryNode {
                    exists: true,
                    subkeys: stored.subkeys.clone(),
                    values: stored.values.clone(),
                },
                None => RegistryNode::missing(),
            };
            out.insert(path.clone(), node);
        }
        Ok(out)
    }
}
