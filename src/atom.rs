use serde::Serialize;

use crate::element::Element;

/// Coarse atom class the group detectors reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolClass {
    AliphaticCarbon,
    AromaticCarbon,
    Nitrogen,
    Oxygen,
    Other,
}

/// Character offsets of an atom's spelling in the normalised SMILES text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A heavy atom of the structural model.
///
/// Hydrogens are never graph nodes. For bare atoms `hydrogen_count` is
/// inferred from the default valence once all bonds are known; for bracket
/// atoms it is whatever the bracket states.
///
/// # Examples
///
/// ```
/// use simpol_groups::{Atom, Element, SymbolClass};
///
/// let carbon = Atom {
///     element: Element::C,
///     is_aromatic: true,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.symbol_class(), SymbolClass::AromaticCarbon);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    pub element: Element,
    /// Written in lowercase (`c`, `n`, `o`, ...).
    pub is_aromatic: bool,
    pub formal_charge: i8,
    pub hydrogen_count: u8,
    /// Bracket atom whose stated hydrogens and bonds leave its default
    /// valence unsatisfied, e.g. the alkoxy radical `[O]`.
    pub is_radical: bool,
    /// Written inside `[...]`.
    pub is_bracket: bool,
    pub span: Span,
}

impl Default for Atom {
    fn default() -> Self {
        Self {
            element: Element::Other,
            is_aromatic: false,
            formal_charge: 0,
            hydrogen_count: 0,
            is_radical: false,
            is_bracket: false,
            span: Span::default(),
        }
    }
}

impl Atom {
    pub fn symbol_class(&self) -> SymbolClass {
        match (self.element, self.is_aromatic) {
            (Element::C, false) => SymbolClass::AliphaticCarbon,
            (Element::C, true) => SymbolClass::AromaticCarbon,
            (Element::N, _) => SymbolClass::Nitrogen,
            (Element::O, _) => SymbolClass::Oxygen,
            _ => SymbolClass::Other,
        }
    }

    pub fn is_carbon(&self) -> bool {
        self.element == Element::C
    }

    pub fn is_aliphatic_carbon(&self) -> bool {
        self.element == Element::C && !self.is_aromatic
    }

    pub fn is_aromatic_carbon(&self) -> bool {
        self.element == Element::C && self.is_aromatic
    }

    pub fn is_oxygen(&self) -> bool {
        self.element == Element::O
    }

    pub fn is_nitrogen(&self) -> bool {
        self.element == Element::N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(element: Element, is_aromatic: bool) -> Atom {
        Atom {
            element,
            is_aromatic,
            ..Atom::default()
        }
    }

    #[test]
    fn symbol_classes() {
        assert_eq!(atom(Element::C, false).symbol_class(), SymbolClass::AliphaticCarbon);
        assert_eq!(atom(Element::C, true).symbol_class(), SymbolClass::AromaticCarbon);
        assert_eq!(atom(Element::N, true).symbol_class(), SymbolClass::Nitrogen);
        assert_eq!(atom(Element::O, false).symbol_class(), SymbolClass::Oxygen);
        assert_eq!(atom(Element::Cl, false).symbol_class(), SymbolClass::Other);
    }

    #[test]
    fn carbon_predicates() {
        let c = atom(Element::C, true);
        assert!(c.is_carbon());
        assert!(c.is_aromatic_carbon());
        assert!(!c.is_aliphatic_carbon());
    }
}
