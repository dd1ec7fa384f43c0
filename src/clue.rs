//! Clue types constructed at the caller boundary.
//!
//! A clue is partial identifying information for a program: either fields
//! from its uninstall-registry entry, or the publisher/program pair it
//! registers under `SOFTWARE`. The two shapes are an explicit enum so the
//! facade dispatches with an exhaustive match instead of probing fields.

use crate::error::{FindprogError, Result};

/// Partial identifying information used to locate a program entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clue {
    /// Identified by uninstall-registry subkey name and/or display name.
    Uninstall(UninstallClue),
    /// Identified by the publisher and program keys under `SOFTWARE`.
    Publisher(PublisherClue),
}

/// Clue naming the uninstall-registry subkey and/or the display name the
/// installer registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallClue {
    uninstall_key: Option<String>,
    display_name: Option<String>,
}

impl UninstallClue {
    /// Build a clue from the fields the caller knows.
    ///
    /// At least one field must be populated; the empty combination is a
    /// caller error and is rejected here, before any registry traffic.
    pub fn new(uninstall_key: Option<String>, display_name: Option<String>) -> Result<Self> {
        if uninstall_key.is_none() && display_name.is_none() {
            return Err(FindprogError::EmptyClue);
        }
        Ok(Self {
            uninstall_key,
            display_name,
        })
    }

    /// The uninstall-registry subkey name, if known.
    pub fn uninstall_key(&self) -> Option<&str> {
        self.uninstall_key.as_deref()
    }

    /// The display name, if known.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Clue naming the publisher and program keys under `SOFTWARE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherClue {
    /// Publisher key, e.g. `Valve`.
    pub publisher: String,
    /// Program key under the publisher, e.g. `cs2`.
    pub program: String,
}

impl PublisherClue {
    pub fn new(publisher: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            publisher: publisher.into(),
            program: program.into(),
        }
    }
}

impl From<UninstallClue> for Clue {
    fn from(clue: UninstallClue) -> Self {
        Clue::Uninstall(clue)
    }
}

impl From<PublisherClue> for Clue {
    fn from(clue: PublisherClue) -> Self {
        Clue::Publisher(clue)
    }
}
