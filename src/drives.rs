//! Logical drive enumeration.
//!
//! A companion to path resolution for diagnostic output: once a program's
//! install directory is known, the drive listing tells the operator which
//! volumes are even mounted. Probes each candidate letter root directly
//! instead of shelling out to `wmic`, which is deprecated on current
//! Windows builds.

use std::path::Path;

/// List the logical drive roots present on this machine ("C:", "D:", ...).
///
/// Non-Windows hosts have no drive letters, so the listing is empty there.
pub fn list_drives() -> Vec<String> {
    if !cfg!(windows) {
        return Vec::new();
    }

    ('A'..='Z')
        .filter(|letter| Path::new(&format!("{letter}:\\")).is_dir())
        .map(|letter| format!("{letter}:"))
        .collect()
}
