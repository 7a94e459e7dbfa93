use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::atom::Atom;
use crate::bond::Bond;

/// The ring closed by one ring-closure bond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    /// Index into the molecule's ring-closure table.
    pub closure: usize,
    /// Ring atoms in path order, starting at the closure's first atom.
    pub atoms: Vec<NodeIndex>,
    /// Both closure atoms are written in lowercase.
    pub aromatic: bool,
}

impl Ring {
    pub fn contains(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether `a`–`b` is one of the ring's bonds.
    pub fn has_bond(&self, a: NodeIndex, b: NodeIndex) -> bool {
        let len = self.atoms.len();
        (0..len).any(|i| {
            let j = (i + 1) % len;
            (self.atoms[i] == a && self.atoms[j] == b) || (self.atoms[i] == b && self.atoms[j] == a)
        })
    }
}

/// Perceives one ring per closure bond: the shortest path between the two
/// closure atoms that does not use the closure bond itself.
///
/// For fused and bridged systems this picks the small rings a chemist would
/// draw, one per closure. A closure joining two otherwise disconnected
/// fragments is a plain bond and closes no ring.
pub fn perceive_rings(graph: &UnGraph<Atom, Bond>, closure_edges: &[EdgeIndex]) -> Vec<Ring> {
    closure_edges
        .iter()
        .enumerate()
        .filter_map(|(closure, &edge)| {
            let (a, b) = graph.edge_endpoints(edge)?;
            let atoms = shortest_path_avoiding(graph, a, b, edge)?;
            let aromatic = graph[a].is_aromatic && graph[b].is_aromatic;
            Some(Ring {
                closure,
                atoms,
                aromatic,
            })
        })
        .collect()
}

fn shortest_path_avoiding(
    graph: &UnGraph<Atom, Bond>,
    from: NodeIndex,
    to: NodeIndex,
    skip: EdgeIndex,
) -> Option<Vec<NodeIndex>> {
    let n = graph.node_count();
    let mut pred: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[from.index()] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        if cur == to {
            return Some(reconstruct_path(&pred, from, to));
        }
        for edge in graph.edges(cur) {
            if edge.id() == skip {
                continue;
            }
            let nb = if edge.source() == cur {
                edge.target()
            } else {
                edge.source()
            };
            if !visited[nb.index()] {
                visited[nb.index()] = true;
                pred[nb.index()] = Some(cur);
                queue.push_back(nb);
            }
        }
    }
    None
}

fn reconstruct_path(pred: &[Option<NodeIndex>], src: NodeIndex, dst: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        match pred[cur.index()] {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
