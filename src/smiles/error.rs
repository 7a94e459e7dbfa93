use std::fmt;

/// Errors produced while turning a SMILES string into a structural model.
///
/// All of these are fatal for the molecule: no count vector is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmilesError {
    /// The input string was empty or contained only whitespace.
    EmptyInput,
    /// A parenthesis at the given offset has no partner.
    UnbalancedBranch { pos: usize },
    /// A ring label was opened and never closed.
    UnresolvedRingClosure { label: u16 },
    /// The two occurrences of a ring label carry different bond symbols.
    RingBondConflict { label: u16 },
    /// An atom outside the supported notation subset (strict policy only).
    UnrecognizedAtom { pos: usize, text: String },
    /// A bracket atom `[` was opened but never closed with `]`.
    UnclosedBracketAtom { pos: usize },
    /// A character that cannot appear at this point.
    UnexpectedChar { pos: usize, ch: char },
}

impl fmt::Display for SmilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty SMILES string"),
            Self::UnbalancedBranch { pos } => {
                write!(f, "unbalanced branch parenthesis at position {}", pos)
            }
            Self::UnresolvedRingClosure { label } => {
                write!(f, "ring closure {} is never closed", label)
            }
            Self::RingBondConflict { label } => {
                write!(f, "conflicting bond types on ring closure {}", label)
            }
            Self::UnrecognizedAtom { pos, text } => {
                write!(f, "unrecognized atom '{}' at position {}", text, pos)
            }
            Self::UnclosedBracketAtom { pos } => {
                write!(f, "unclosed bracket atom starting at position {}", pos)
            }
            Self::UnexpectedChar { pos, ch } => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
        }
    }
}

impl std::error::Error for SmilesError {}

/// A [`SmilesError`] tagged with the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeError {
    /// 1-based line number in the batch input.
    pub line: usize,
    pub smiles: String,
    pub source: SmilesError,
}

impl fmt::Display for MoleculeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (`{}`): {}", self.line, self.smiles, self.source)
    }
}

impl std::error::Error for MoleculeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molecule_error_display() {
        let err = MoleculeError {
            line: 7,
            smiles: "CC(C".to_string(),
            source: SmilesError::UnbalancedBranch { pos: 2 },
        };
        assert_eq!(
            err.to_string(),
            "line 7 (`CC(C`): unbalanced branch parenthesis at position 2"
        );
    }

    #[test]
    fn molecule_error_source() {
        use std::error::Error;

        let err = MoleculeError {
            line: 1,
            smiles: "C1CC".to_string(),
            source: SmilesError::UnresolvedRingClosure { label: 1 },
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "ring closure 1 is never closed");
    }
}
