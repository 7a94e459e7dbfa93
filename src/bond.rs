use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to an atom's valence when inferring implicit hydrogens.
    pub fn valence(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// How a bond was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BondKind {
    /// Between consecutive atoms of one chain segment.
    #[default]
    Chain,
    /// From a branch's first atom back to the atom before `(`.
    Branch,
    /// Joins the two atoms carrying the same ring label.
    RingClosure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Bond {
    pub order: BondOrder,
    pub kind: BondKind,
}

impl Bond {
    pub fn is_single(&self) -> bool {
        matches!(self.order, BondOrder::Single | BondOrder::Aromatic)
    }

    pub fn is_double(&self) -> bool {
        self.order == BondOrder::Double
    }
}
