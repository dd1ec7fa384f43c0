//! Live registry accessor backed by `winreg`.
//!
//! Probes open each key read-only and enumerate its immediate subkeys and
//! values. A key that cannot be opened because it does not exist is reported
//! as `exists = false`; every other open failure (permissions, I/O) is a
//! genuine error and aborts the batch.

use std::collections::{BTreeMap, HashMap};
use std::io;

use tracing::debug;
use winreg::enums::*;
use winreg::types::FromRegValue;
use winreg::{RegKey, RegValue};

use crate::error::Result;

use super::{RegistryAccessor, RegistryNode, RegistryPath, RegistryValue};

/// Accessor over the machine's real registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveRegistry;

impl LiveRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryAccessor for LiveRegistry {
    fn list(&self, paths: &[RegistryPath]) -> Result<HashMap<RegistryPath, RegistryNode>> {
        let mut nodes = HashMap::with_capacity(paths.len());
        for path in paths {
            nodes.insert(path.clone(), probe(path)?);
        }
        Ok(nodes)
    }
}

fn probe(path: &RegistryPath) -> Result<RegistryNode> {
    let (hive, subpath) = split_root(path.as_str())?;

    let key = match hive.open_subkey(subpath) {
        Ok(key) => key,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{path} does not exist");
            return Ok(RegistryNode::missing());
        }
        Err(err) => return Err(err.into()),
    };

    let mut subkeys = Vec::new();
    for name in key.enum_keys() {
        subkeys.push(name?);
    }

    let mut values = BTreeMap::new();
    for entry in key.enum_values() {
        let (name, raw) = entry?;
        values.insert(name, convert(raw));
    }

    Ok(RegistryNode {
        exists: true,
        subkeys,
        values,
    })
}

/// Split the abbreviated root prefix off a path and select its hive.
fn split_root(path: &str) -> Result<(RegKey, &str)> {
    let (root, rest) = path.split_once('\\').unwrap_or((path, ""));
    let hive = match root {
        "HKCU" => HKEY_CURRENT_USER,
        "HKLM" => HKEY_LOCAL_MACHINE,
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported registry root '{other}'"),
            )
            .into())
        }
    };
    Ok((RegKey::predef(hive), rest))
}

fn convert(raw: RegValue) -> RegistryValue {
    match raw.vtype {
        REG_SZ | REG_EXPAND_SZ => match String::from_reg_value(&raw) {
            Ok(s) => RegistryValue::String(s),
            Err(_) => RegistryValue::Binary(raw.bytes),
        },
        REG_DWORD => match u32::from_reg_value(&raw) {
            Ok(d) => RegistryValue::Dword(d),
            Err(_) => RegistryValue::Binary(raw.bytes),
        },
        _ => RegistryValue::Binary(raw.bytes),
    }
}
