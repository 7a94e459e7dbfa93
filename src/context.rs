//! Per-atom structural context.
//!
//! Every detector asks the same handful of questions about an atom: where it
//! sits in the written sequence, what it is bonded to and how, whether it
//! sits in a ring, and whether it carries a carbonyl oxygen. [`ContextClassifier`]
//! answers them from the finished [`Mol`] so no detector ever looks at the
//! SMILES text.

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::rings::Ring;

/// Where an atom sits in the written sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// First atom of a dot-separated component.
    Start,
    /// Last atom of a component's main chain.
    End,
    /// Followed by another atom on the same chain segment.
    Interior,
    /// Last atom written inside a branch.
    BranchTerminal,
}

/// A bonded neighbour and the order of the bond to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub atom: NodeIndex,
    pub order: BondOrder,
}

impl Link {
    pub fn is_single(&self) -> bool {
        matches!(self.order, BondOrder::Single | BondOrder::Aromatic)
    }

    pub fn is_double(&self) -> bool {
        self.order == BondOrder::Double
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AtomContext {
    position: Position,
    /// Every bonded neighbour, ordered by atom index.
    links: Vec<Link>,
    in_ring: bool,
}

pub struct ContextClassifier<'a> {
    mol: &'a Mol,
    contexts: Vec<AtomContext>,
}

impl<'a> ContextClassifier<'a> {
    pub fn new(mol: &'a Mol) -> Self {
        let contexts = mol.atoms().map(|idx| build_context(mol, idx)).collect();
        Self { mol, contexts }
    }

    pub fn mol(&self) -> &'a Mol {
        self.mol
    }

    pub fn position(&self, atom: NodeIndex) -> Position {
        self.contexts[atom.index()].position
    }

    pub fn links(&self, atom: NodeIndex) -> &[Link] {
        &self.contexts[atom.index()].links
    }

    pub fn single_links(&self, atom: NodeIndex) -> impl Iterator<Item = &Link> + '_ {
        self.links(atom).iter().filter(|l| l.is_single())
    }

    pub fn double_links(&self, atom: NodeIndex) -> impl Iterator<Item = &Link> + '_ {
        self.links(atom).iter().filter(|l| l.is_double())
    }

    /// Number of bonded heavy atoms.
    pub fn heavy_degree(&self, atom: NodeIndex) -> usize {
        self.links(atom).len()
    }

    /// Only single (or aromatic) bonds.
    pub fn is_saturated(&self, atom: NodeIndex) -> bool {
        self.links(atom).iter().all(|l| l.is_single())
    }

    pub fn carbon_neighbors(&self, atom: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.links(atom)
            .iter()
            .map(|l| l.atom)
            .filter(move |&n| self.mol.atom(n).is_carbon())
    }

    pub fn hetero_neighbors(&self, atom: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.links(atom)
            .iter()
            .map(|l| l.atom)
            .filter(move |&n| !self.mol.atom(n).is_carbon())
    }

    /// Oxygen bonded only to `atom`, through a double bond.
    pub fn carbonyl_oxygen(&self, atom: NodeIndex) -> Option<NodeIndex> {
        self.double_links(atom)
            .map(|l| l.atom)
            .find(|&o| self.mol.atom(o).is_oxygen() && self.heavy_degree(o) == 1)
    }

    /// Aliphatic carbon carrying a terminal `=O`.
    pub fn is_carbonyl_carbon(&self, atom: NodeIndex) -> bool {
        self.mol.atom(atom).is_aliphatic_carbon() && self.carbonyl_oxygen(atom).is_some()
    }

    pub fn is_in_ring(&self, atom: NodeIndex) -> bool {
        self.contexts[atom.index()].in_ring
    }

    /// Some single ring contains every atom of `atoms`.
    pub fn shares_ring(&self, atoms: &[NodeIndex]) -> bool {
        self.mol.share_ring(atoms)
    }

    pub fn rings_of(&self, atom: NodeIndex) -> impl Iterator<Item = &'a Ring> + 'a {
        self.mol.rings_containing(atom)
    }
}

fn build_context(mol: &Mol, idx: NodeIndex) -> AtomContext {
    let chain = mol.chain(idx);

    let mut links: Vec<Link> = mol
        .bonds_of(idx)
        .map(|(other, bond)| Link {
            atom: other,
            order: bond.order,
        })
        .collect();
    links.sort_by_key(|l| l.atom.index());

    let position = match (chain.previous, chain.next) {
        (None, _) => Position::Start,
        (Some(_), Some(_)) => Position::Interior,
        (Some(_), None) if chain.depth == 0 => Position::End,
        (Some(_), None) => Position::BranchTerminal,
    };

    AtomContext {
        position,
        links,
        in_ring: mol.is_ring_atom(idx),
    }
}
