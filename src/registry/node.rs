//! Probe results and typed registry values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single registry value payload.
///
/// Only the distinction the resolvers care about is modeled precisely:
/// string payloads are install-path candidates, everything else is carried
/// along for diagnostics. The untagged serde encoding makes snapshot files
/// read naturally (JSON string, number, byte array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryValue {
    /// REG_SZ / REG_EXPAND_SZ.
    String(String),
    /// REG_DWORD.
    Dword(u32),
    /// Any other payload, as raw bytes.
    Binary(Vec<u8>),
}

impl RegistryValue {
    /// The string payload, if this value is string-typed.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RegistryValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// The result of probing one registry path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryNode {
    /// Whether the path exists at all.
    pub exists: bool,

    /// Immediate subkey names, in enumeration order.
    pub subkeys: Vec<String>,

    /// Value name → payload. Names keep their original case; consumers that
    /// need case-insensitivity compare lowercased.
    pub values: BTreeMap<String, RegistryValue>,
}

impl RegistryNode {
    /// A node for a path that does not exist.
    pub fn missing() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_exposes_payload() {
        let value = RegistryValue::String("C:\\Games\\CS2".into());
        assert_eq!(value.as_str(), Some("C:\\Games\\CS2"));
    }

    #[test]
    fn non_string_values_have_no_str_payload() {
        assert_eq!(RegistryValue::Dword(7).as_str(), None);
        assert_eq!(RegistryValue::Binary(vec![1, 2]).as_str(), None);
    }

    #[test]
    fn values_deserialize_untagged() {
        let value: RegistryValue = serde_json::from_str("\"C:\\\\Games\"").unwrap();
        assert_eq!(value, RegistryValue::String("C:\\Games".into()));

        let value: RegistryValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, RegistryValue::Dword(42));

        let value: RegistryValue = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(value, RegistryValue::Binary(vec![1, 2, 3]));
    }

    #[test]
    fn missing_node_does_not_exist() {
        let node = RegistryNode::missing();
        assert!(!node.exists);
        assert!(node.subkeys.is_empty());
        assert!(node.values.is_empty());
    }
}
