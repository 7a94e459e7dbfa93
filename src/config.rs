use serde::{Deserialize, Serialize};

/// What to do with an atom outside the supported notation subset
/// (`*`, an unknown bare letter, or a bracket element the engine has no
/// variant for, such as `[Na+]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtomPolicy {
    /// Keep the atom as [`Element::Other`](crate::Element::Other) and log a
    /// warning. Groups touching it are simply not counted.
    #[default]
    Lenient,
    /// Reject the molecule with
    /// [`SmilesError::UnrecognizedAtom`](crate::SmilesError::UnrecognizedAtom).
    Strict,
}

/// Engine-wide settings. Read-only once processing starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub atom_policy: AtomPolicy,
}

impl EngineConfig {
    pub fn strict() -> Self {
        Self {
            atom_policy: AtomPolicy::Strict,
        }
    }
}
