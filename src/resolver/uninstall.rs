//! Uninstall-subtree resolution.
//!
//! Programs register uninstall metadata under a per-scope `Uninstall`
//! subtree. Resolution runs in two tiers: an exact uninstall-key match is
//! authoritative and fast; a display-name sweep over every entry is the
//! fallback when key naming has drifted across program versions. Both
//! scopes must exist before either tier runs; a machine without them is
//! misconfigured, not merely missing the program.

use tracing::{debug, warn};

use crate::clue::UninstallClue;
use crate::error::{FindprogError, Result};
use crate::registry::{RegistryAccessor, RegistryNode, RegistryPath, Scope};

use super::install_value::require_install_path;

/// Subtree where installers register uninstall metadata, per scope.
const UNINSTALL_SUFFIX: &str = "\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall";

/// Resolve an uninstall clue to an install directory.
///
/// Returns `Ok(None)` when no entry matched in either tier.
pub fn resolve_by_uninstall_key(
    registry: &dyn RegistryAccessor,
    clue: &UninstallClue,
) -> Result<Option<String>> {
    let roots: Vec<RegistryPath> = Scope::ALL
        .iter()
        .map(|scope| RegistryPath::new(*scope, UNINSTALL_SUFFIX))
        .collect();

    let mut nodes = registry.list(&roots)?;

    let mut scopes = Vec::with_capacity(roots.len());
    for (scope, root) in Scope::ALL.into_iter().zip(roots) {
        let node = nodes.remove(&root).unwrap_or_else(RegistryNode::missing);
        if !node.exists {
            return Err(FindprogError::RegistryScopeMissing { scope });
        }
        scopes.push((root, node));
    }

    // Tier 1: exact subkey-name match.
    if let Some(wanted) = clue.uninstall_key() {
        for (root, node) in &scopes {
            for key in &node.subkeys {
                if key != wanted {
                    continue;
                }
                let child = root.child(key);
                let entry = probe_child(registry, &child)?;
                if !entry.exists {
                    debug!("{child} is listed but gone, continuing scan");
                    continue;
                }
                if let Some(expected) = clue.display_name() {
                    let found_display_name = display_name(&entry);
                    if found_display_name != Some(expected) {
                        warn!(
                            "{child} matches the uninstall key but its display name \
                             {found_display_name:?} is not {expected:?}"
                        );
                        continue;
                    }
                }
                return require_install_path(&child, &entry).map(Some);
            }
        }
    }

    // Tier 2: display-name sweep over every entry in both scopes.
    for (root, node) in &scopes {
        for key in &node.subkeys {
            let child = root.child(key);
            let entry = probe_child(registry, &child)?;
            if !entry.exists {
                continue;
            }
            let display = display_name(&entry);
            if display.is_none() && clue.display_name().is_some() {
                warn!("{child} has no display name");
                continue;
            }
            if display == clue.display_name() {
                return require_install_path(&child, &entry).map(Some);
            }
        }
    }

    Ok(None)
}

/// `DisplayName` as registered by the installer, when string-typed.
fn display_name(node: &RegistryNode) -> Option<&str> {
    node.values.get("DisplayName").and_then(|v| v.as_str())
}

fn probe_child(registry: &dyn RegistryAccessor, path: &RegistryPath) -> Result<RegistryNode> {
    let mut nodes = registry.list(std::slice::from_ref(path))?;
    Ok(nodes.remove(path).unwrap_or_else(RegistryNode::missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MemoryRegistry, RegistryValue};

    const HKCU_ROOT: &str = "HKCU\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall";
    const HKLM_ROOT: &str = "HKLM\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall";

    fn empty_roots() -> MemoryRegistry {
        MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &[])
    }

    fn key_clue(key: &str) -> UninstallClue {
        UninstallClue::new(Some(key.into()), None).unwrap()
    }

    fn name_clue(name: &str) -> UninstallClue {
        UninstallClue::new(None, Some(name.into())).unwrap()
    }

    #[test]
    fn missing_scope_is_a_hard_failure() {
        let registry = MemoryRegistry::new().with_key(HKCU_ROOT, &[]);
        let err = resolve_by_uninstall_key(&registry, &key_clue("App")).unwrap_err();
        assert!(matches!(
            err,
            FindprogError::RegistryScopeMissing {
                scope: Scope::LocalMachine
            }
        ));
    }

    #[test]
    fn exact_key_match_returns_install_location() {
        let child = format!("{HKLM_ROOT}\\Steam App 730");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &["Steam App 730"])
            .with_value(child.as_str(), "DisplayName", RegistryValue::String("Counter-Strike 2".into()))
            .with_value(child.as_str(), "InstallLocation", RegistryValue::String("C:\\Games\\CS2".into()));

        let found = resolve_by_uninstall_key(&registry, &key_clue("Steam App 730")).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\Games\\CS2"));
    }

    #[test]
    fn user_scope_wins_over_machine_scope() {
        let hkcu_child = format!("{HKCU_ROOT}\\App");
        let hklm_child = format!("{HKLM_ROOT}\\App");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &["App"])
            .with_key(HKLM_ROOT, &["App"])
            .with_value(hkcu_child.as_str(), "InstallDir", RegistryValue::String("C:\\user".into()))
            .with_value(hklm_child.as_str(), "InstallDir", RegistryValue::String("C:\\machine".into()));

        let found = resolve_by_uninstall_key(&registry, &key_clue("App")).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\user"));
    }

    #[test]
    fn listed_but_missing_child_is_skipped() {
        // HKCU lists the subkey but the child path itself is gone; the HKLM
        // entry should still be found.
        let hklm_child = format!("{HKLM_ROOT}\\App");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &["App"])
            .with_key(HKLM_ROOT, &["App"])
            .with_value(hklm_child.as_str(), "InstallDir", RegistryValue::String("C:\\App".into()));

        let found = resolve_by_uninstall_key(&registry, &key_clue("App")).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\App"));
    }

    #[test]
    fn display_name_mismatch_skips_the_key_match() {
        // The key matches but the display name differs; tier 1 must keep
        // scanning instead of failing, and tier 2 finds nothing.
        let child = format!("{HKLM_ROOT}\\App");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &["App"])
            .with_value(child.as_str(), "DisplayName", RegistryValue::String("Other Program".into()))
            .with_value(child.as_str(), "InstallLocation", RegistryValue::String("C:\\App".into()));

        let clue = UninstallClue::new(Some("App".into()), Some("Expected Program".into())).unwrap();
        let found = resolve_by_uninstall_key(&registry, &clue).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn display_name_fallback_finds_renamed_keys() {
        // The uninstall key drifted ("App_v2"), but the display name still
        // matches in the sweep.
        let child = format!("{HKLM_ROOT}\\App_v2");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &["App_v2"])
            .with_value(child.as_str(), "DisplayName", RegistryValue::String("My App".into()))
            .with_value(child.as_str(), "InstallLocation", RegistryValue::String("C:\\MyApp".into()));

        let clue = UninstallClue::new(Some("App".into()), Some("My App".into())).unwrap();
        let found = resolve_by_uninstall_key(&registry, &clue).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\MyApp"));
    }

    #[test]
    fn display_name_only_clue_uses_the_sweep() {
        let child = format!("{HKCU_ROOT}\\SomeKey");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &["SomeKey"])
            .with_key(HKLM_ROOT, &[])
            .with_value(child.as_str(), "DisplayName", RegistryValue::String("My App".into()))
            .with_value(child.as_str(), "InstallDir", RegistryValue::String("C:\\MyApp".into()));

        let found = resolve_by_uninstall_key(&registry, &name_clue("My App")).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\MyApp"));
    }

    #[test]
    fn sweep_skips_entries_without_display_names() {
        let anon = format!("{HKCU_ROOT}\\Anon");
        let named = format!("{HKLM_ROOT}\\Named");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &["Anon"])
            .with_key(HKLM_ROOT, &["Named"])
            .with_value(anon.as_str(), "InstallDir", RegistryValue::String("C:\\anon".into()))
            .with_value(named.as_str(), "DisplayName", RegistryValue::String("My App".into()))
            .with_value(named.as_str(), "InstallLocation", RegistryValue::String("C:\\MyApp".into()));

        let found = resolve_by_uninstall_key(&registry, &name_clue("My App")).unwrap();
        assert_eq!(found.as_deref(), Some("C:\\MyApp"));
    }

    #[test]
    fn matched_entry_without_install_value_is_an_error() {
        let child = format!("{HKLM_ROOT}\\App");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &["App"])
            .with_value(child.as_str(), "DisplayName", RegistryValue::String("App".into()));

        let err = resolve_by_uninstall_key(&registry, &key_clue("App")).unwrap_err();
        assert!(matches!(err, FindprogError::MissingInstallValue { .. }));
    }

    #[test]
    fn non_string_install_value_is_an_error() {
        let child = format!("{HKLM_ROOT}\\App");
        let registry = MemoryRegistry::new()
            .with_key(HKCU_ROOT, &[])
            .with_key(HKLM_ROOT, &["App"])
            .with_value(child.as_str(), "InstallLocation", RegistryValue::Dword(1));

        let err = resolve_by_uninstall_key(&registry, &key_clue("App")).unwrap_err();
        assert!(matches!(err, FindprogError::InvalidInstallValue { .. }));
    }

    #[test]
    fn no_match_in_either_tier_returns_none() {
        let found = resolve_by_uninstall_key(&empty_roots(), &key_clue("Ghost")).unwrap();
        assert_eq!(found, None);
    }
}
