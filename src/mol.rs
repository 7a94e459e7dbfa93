use std::ops::Range;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::rings::Ring;
use crate::smiles::RingClosureTable;

/// A parenthesised side chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Atom written immediately before `(`.
    pub parent: NodeIndex,
    /// Indices of every atom inside the parentheses, nested branches included.
    pub atoms: Range<usize>,
    /// Offset of `(`.
    pub open: usize,
    /// Offset of the matching `)`.
    pub close: usize,
}

/// Where an atom sits in the written chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainLinks {
    /// Chain predecessor, or the branch parent for the first atom of a branch.
    /// `None` for the first atom of each dot-separated component.
    pub previous: Option<NodeIndex>,
    /// Next atom on the same chain segment (never a branch child).
    pub next: Option<NodeIndex>,
    /// Branch nesting depth; 0 on the main chain.
    pub depth: usize,
}

/// Structural model of one SMILES string.
///
/// Built once per molecule by [`parse_smiles`](crate::smiles::parse_smiles)
/// and read-only afterwards. Atom indices follow the order atoms are written.
#[derive(Debug, Clone)]
pub struct Mol {
    graph: UnGraph<Atom, Bond>,
    text: String,
    chain: Vec<ChainLinks>,
    branches: Vec<Branch>,
    ring_closures: RingClosureTable,
    closure_edges: Vec<EdgeIndex>,
    rings: Vec<Ring>,
}

impl Mol {
    pub(crate) fn from_parts(
        graph: UnGraph<Atom, Bond>,
        text: String,
        chain: Vec<ChainLinks>,
        branches: Vec<Branch>,
        ring_closures: RingClosureTable,
        closure_edges: Vec<EdgeIndex>,
        rings: Vec<Ring>,
    ) -> Self {
        Self {
            graph,
            text,
            chain,
            branches,
            ring_closures,
            closure_edges,
            rings,
        }
    }

    pub fn graph(&self) -> &UnGraph<Atom, Bond> {
        &self.graph
    }

    /// The normalised text the model was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn atom(&self, idx: NodeIndex) -> &Atom {
        &self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &Bond {
        &self.graph[idx]
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Every bond of `idx` together with the atom on its other end.
    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Bond)> + '_ {
        self.graph.edges(idx).map(move |e| {
            let other = if e.source() == idx {
                e.target()
            } else {
                e.source()
            };
            (other, e.weight())
        })
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Bond> {
        self.graph.find_edge(a, b).map(|e| &self.graph[e])
    }

    pub fn chain(&self, idx: NodeIndex) -> &ChainLinks {
        &self.chain[idx.index()]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn ring_closures(&self) -> &RingClosureTable {
        &self.ring_closures
    }

    /// Graph edge created for each ring closure, in table order.
    pub fn closure_edges(&self) -> &[EdgeIndex] {
        &self.closure_edges
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn rings_containing(&self, atom: NodeIndex) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter().filter(move |r| r.contains(atom))
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|r| r.contains(atom))
    }

    pub fn is_ring_bond(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.rings.iter().any(|r| r.has_bond(a, b))
    }

    /// Whether some ring contains every atom in `atoms`.
    pub fn share_ring(&self, atoms: &[NodeIndex]) -> bool {
        self.rings
            .iter()
            .any(|r| atoms.iter().all(|&a| r.contains(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::{BondKind, BondOrder};
    use crate::smiles::parse_smiles;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn bonds_of_reports_partner() {
        let mol = parse_smiles("CC(=O)O").unwrap();
        let mut partners: Vec<(usize, BondOrder)> = mol
            .bonds_of(n(1))
            .map(|(other, bond)| (other.index(), bond.order))
            .collect();
        partners.sort_by_key(|&(i, _)| i);
        assert_eq!(
            partners,
            vec![
                (0, BondOrder::Single),
                (2, BondOrder::Double),
                (3, BondOrder::Single)
            ]
        );
    }

    #[test]
    fn bond_between() {
        let mol = parse_smiles("C1CC1").unwrap();
        let closure = mol.bond_between(n(0), n(2)).unwrap();
        assert_eq!(closure.kind, BondKind::RingClosure);
        assert!(mol.bond_between(n(0), n(1)).is_some());
        assert_eq!(mol.closure_edges().len(), 1);
    }

    #[test]
    fn share_ring() {
        let mol = parse_smiles("C1CCC2(CC1)CCC2").unwrap();
        assert!(mol.share_ring(&[n(0), n(4)]));
        assert!(mol.share_ring(&[n(3), n(7)]));
        assert!(!mol.share_ring(&[n(0), n(7)]));
        assert!(mol.is_ring_bond(n(3), n(4)));
        assert!(!mol.is_ring_bond(n(0), n(3)));
    }
}
