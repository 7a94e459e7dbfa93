pub mod brackets;
mod builder;
pub mod error;
mod normalize;
pub mod ring_closure;
pub mod tokenizer;

use tracing::trace;

use crate::config::EngineConfig;
use crate::mol::Mol;
pub use brackets::{matching_close, matching_open};
pub use error::{MoleculeError, SmilesError};
pub use normalize::normalize;
pub use ring_closure::{resolve_ring_closures, RingClosure, RingClosureTable};

/// Parses with the default [`EngineConfig`] (lenient atom policy).
pub fn parse_smiles(s: &str) -> Result<Mol, SmilesError> {
    parse_smiles_with(s, &EngineConfig::default())
}

pub fn parse_smiles_with(s: &str, config: &EngineConfig) -> Result<Mol, SmilesError> {
    let text = normalize(s);
    if text.is_empty() {
        return Err(SmilesError::EmptyInput);
    }
    if text != s.trim() {
        trace!(input = s, normalized = %text, "rewrote charge-separated nitro spelling");
    }
    let tokens = tokenizer::tokenize(&text, config.atom_policy)?;
    if !tokens.iter().any(|t| matches!(t, tokenizer::Token::Atom(_))) {
        return Err(SmilesError::EmptyInput);
    }
    builder::build_mol(&text, &tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder;
    use crate::element::Element;
    use petgraph::graph::NodeIndex;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_smiles("").unwrap_err(), SmilesError::EmptyInput);
        assert_eq!(parse_smiles("   \t").unwrap_err(), SmilesError::EmptyInput);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mol = parse_smiles("  CCO \n").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.text(), "CCO");
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        assert_eq!(
            parse_smiles(" CC O ").unwrap_err(),
            SmilesError::UnexpectedChar { pos: 2, ch: ' ' }
        );
    }

    #[test]
    fn charge_separated_nitro_is_normalized() {
        let mol = parse_smiles("C[N+](=O)[O-]").unwrap();
        assert_eq!(mol.text(), "CN(=O)=O");
        assert_eq!(mol.atom(n(1)).element, Element::N);
        assert_eq!(mol.atom(n(1)).formal_charge, 0);
        assert_eq!(mol.bond_between(n(1), n(3)).unwrap().order, BondOrder::Double);
    }

    #[test]
    fn oxide_first_nitrate_is_normalized() {
        let mol = parse_smiles("[O-][N+](=O)OCC").unwrap();
        assert_eq!(mol.text(), "O=N(=O)OCC");
        assert_eq!(mol.bond_between(n(0), n(1)).unwrap().order, BondOrder::Double);
    }

    #[test]
    fn strict_policy_rejects_wildcard() {
        let err = parse_smiles_with("C*C", &EngineConfig::strict()).unwrap_err();
        assert!(matches!(err, SmilesError::UnrecognizedAtom { pos: 1, .. }));
        assert!(parse_smiles("C*C").is_ok());
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert_eq!(parse_smiles("..").unwrap_err(), SmilesError::EmptyInput);
    }

    #[test]
    fn unbalanced_both_directions() {
        assert!(matches!(
            parse_smiles("CC(C(C)C"),
            Err(SmilesError::UnbalancedBranch { .. })
        ));
        assert!(matches!(
            parse_smiles("CC(C)C)C"),
            Err(SmilesError::UnbalancedBranch { .. })
        ));
    }

    #[test]
    fn reused_ring_label_builds_two_rings() {
        let mol = parse_smiles("C1CCC1C1CCCC1").unwrap();
        assert_eq!(mol.ring_closures().len(), 2);
        assert_eq!(mol.rings().len(), 2);
        assert_eq!(mol.ring_closures().reused().count(), 1);
    }
}
