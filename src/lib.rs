//! Findprog - locate installed programs through the Windows registry.
//!
//! Installers rarely record where a program landed in any single canonical
//! place. Findprog resolves the install directory from partial clues: the
//! uninstall-registry subkey name, the display name shown in "Add or remove
//! programs", or the publisher/program pair under `SOFTWARE`. It probes
//! both privilege scopes, follows the WOW64 redirect for 32-bit software,
//! and normalizes the value-name conventions installers actually use.
//!
//! The registry itself sits behind the
//! [`RegistryAccessor`](registry::RegistryAccessor) trait, so the same
//! resolution core runs against the live Windows registry, an in-memory
//! fixture, or a JSON snapshot file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`clue`] - Clue types constructed at the caller boundary
//! - [`drives`] - Logical drive enumeration
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registry accessor trait and implementations
//! - [`resolver`] - The clue-to-path resolution core
//!
//! # Example
//!
//! ```
//! use findprog::clue::{Clue, UninstallClue};
//! use findprog::registry::{MemoryRegistry, RegistryValue};
//! use findprog::resolver::find_program;
//!
//! const UNINSTALL: &str = "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall";
//!
//! let registry = MemoryRegistry::new()
//!     .with_key(format!("HKCU\\{UNINSTALL}"), &[])
//!     .with_key(format!("HKLM\\{UNINSTALL}"), &["Steam App 730"])
//!     .with_value(
//!         format!("HKLM\\{UNINSTALL}\\Steam App 730"),
//!         "InstallLocation",
//!         RegistryValue::String("C:\\Games\\CS2".into()),
//!     );
//!
//! let clue = Clue::Uninstall(UninstallClue::new(Some("Steam App 730".into()), None)?);
//! let path = find_program(&registry, &clue)?;
//! assert_eq!(path.as_deref(), Some("C:\\Games\\CS2"));
//! # Ok::<(), findprog::FindprogError>(())
//! ```

pub mod cli;
pub mod clue;
pub mod drives;
pub mod error;
pub mod registry;
pub mod resolver;

pub use clue::{Clue, PublisherClue, UninstallClue};
pub use error::{FindprogError, Result};
pub use resolver::find_program;
