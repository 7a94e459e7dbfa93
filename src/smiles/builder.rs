use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use tracing::debug;

use crate::atom::Atom;
use crate::bond::{Bond, BondKind, BondOrder};
use crate::element::Element;
use crate::mol::{Branch, ChainLinks, Mol};
use crate::rings::perceive_rings;
use crate::smiles::brackets::{matching_close, matching_open};
use crate::smiles::error::SmilesError;
use crate::smiles::ring_closure::resolve_ring_closures;
use crate::smiles::tokenizer::{AtomToken, Token};

/// Builds the structural model from the token stream of `text`.
pub fn build_mol(text: &str, tokens: &[Token]) -> Result<Mol, SmilesError> {
    let chars: Vec<char> = text.chars().collect();
    let table = resolve_ring_closures(tokens)?;

    let mut graph: UnGraph<Atom, Bond> = UnGraph::default();
    let mut chain: Vec<ChainLinks> = Vec::new();
    let mut branches: Vec<Branch> = Vec::new();
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new(); // (parent, branch index)
    let mut current: Option<NodeIndex> = None;
    let mut pending_bond: Option<(BondOrder, usize)> = None;
    let mut opens_branch = false;

    for token in tokens {
        match token {
            Token::Atom(atom_tok) => {
                let idx = graph.add_node(atom_from_token(atom_tok));
                chain.push(ChainLinks {
                    previous: current,
                    next: None,
                    depth: stack.len(),
                });

                match current {
                    Some(cur) => {
                        let order = match pending_bond.take() {
                            Some((order, _)) => order,
                            None => implicit_order(&graph[cur], &graph[idx]),
                        };
                        let kind = if opens_branch {
                            BondKind::Branch
                        } else {
                            chain[cur.index()].next = Some(idx);
                            BondKind::Chain
                        };
                        graph.add_edge(cur, idx, Bond { order, kind });
                    }
                    None => {
                        if let Some((_, pos)) = pending_bond.take() {
                            return Err(unexpected(&chars, pos));
                        }
                    }
                }

                opens_branch = false;
                current = Some(idx);
            }
            Token::Bond { order, pos } => {
                pending_bond = Some((*order, *pos));
            }
            Token::RingClosure { .. } => {
                // Ring bonds come from the resolved table below.
            }
            Token::OpenParen(pos) => {
                let parent = current.ok_or_else(|| unexpected(&chars, *pos))?;
                let close = matching_close(&chars, *pos)?;
                let start = graph.node_count();
                branches.push(Branch {
                    parent,
                    atoms: start..start,
                    open: *pos,
                    close,
                });
                stack.push((parent, branches.len() - 1));
                opens_branch = true;
            }
            Token::CloseParen(pos) => {
                if let Some((_, bond_pos)) = pending_bond {
                    return Err(unexpected(&chars, bond_pos));
                }
                let open = matching_open(&chars, *pos)?;
                let (parent, branch) = stack
                    .pop()
                    .ok_or(SmilesError::UnbalancedBranch { pos: *pos })?;
                if branches[branch].open != open {
                    return Err(SmilesError::UnbalancedBranch { pos: *pos });
                }
                branches[branch].atoms.end = graph.node_count();
                current = Some(parent);
                opens_branch = false;
            }
            Token::Dot(_) => {
                if let Some((_, bond_pos)) = pending_bond {
                    return Err(unexpected(&chars, bond_pos));
                }
                current = None;
            }
        }
    }

    // A bond symbol must be followed by the atom it leads to.
    if let Some((_, pos)) = pending_bond {
        return Err(unexpected(&chars, pos));
    }

    if let Some(&(_, branch)) = stack.last() {
        return Err(SmilesError::UnbalancedBranch {
            pos: branches[branch].open,
        });
    }

    let mut closure_edges: Vec<EdgeIndex> = Vec::with_capacity(table.len());
    for closure in table.iter() {
        if closure.first == closure.second {
            return Err(unexpected(&chars, closure.close_pos));
        }
        let order = closure
            .order
            .unwrap_or_else(|| implicit_order(&graph[closure.first], &graph[closure.second]));
        let edge = graph.add_edge(
            closure.first,
            closure.second,
            Bond {
                order,
                kind: BondKind::RingClosure,
            },
        );
        closure_edges.push(edge);
    }

    resolve_hydrogen_counts(&mut graph);
    let rings = perceive_rings(&graph, &closure_edges);

    debug!(
        atoms = graph.node_count(),
        bonds = graph.edge_count(),
        branches = branches.len(),
        rings = rings.len(),
        highest_label = ?table.highest_label(),
        dominant_label = ?table.dominant_label(),
        "built structural model"
    );

    Ok(Mol::from_parts(
        graph,
        text.to_string(),
        chain,
        branches,
        table,
        closure_edges,
        rings,
    ))
}

fn unexpected(chars: &[char], pos: usize) -> SmilesError {
    SmilesError::UnexpectedChar {
        pos,
        ch: chars.get(pos).copied().unwrap_or(' '),
    }
}

fn atom_from_token(tok: &AtomToken) -> Atom {
    Atom {
        element: tok.element,
        is_aromatic: tok.is_aromatic,
        formal_charge: tok.charge,
        hydrogen_count: tok.hcount.unwrap_or(0),
        is_radical: false,
        is_bracket: tok.is_bracket,
        span: tok.span,
    }
}

fn implicit_order(a: &Atom, b: &Atom) -> BondOrder {
    if a.is_aromatic && b.is_aromatic {
        BondOrder::Aromatic
    } else {
        BondOrder::Single
    }
}

fn resolve_hydrogen_counts(graph: &mut UnGraph<Atom, Bond>) {
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    for idx in nodes {
        let bond_sum = bond_order_sum(graph, idx);
        let atom = &mut graph[idx];
        if atom.is_bracket {
            atom.is_radical = is_radical(atom, bond_sum);
        } else {
            atom.hydrogen_count = implicit_hydrogens(atom, bond_sum);
        }
    }
}

fn bond_order_sum(graph: &UnGraph<Atom, Bond>, idx: NodeIndex) -> u8 {
    graph
        .edges(idx)
        .map(|e| e.weight().order.valence())
        .fold(0u8, |acc, v| acc.saturating_add(v))
}

fn implicit_hydrogens(atom: &Atom, bond_sum: u8) -> u8 {
    let target = atom
        .element
        .default_valences()
        .iter()
        .find(|&&v| v >= bond_sum)
        .copied()
        .unwrap_or(0);
    if target < bond_sum {
        return 0;
    }
    let mut h = target - bond_sum;
    if atom.is_aromatic && h > 0 {
        h -= 1;
    }
    h
}

fn is_radical(atom: &Atom, bond_sum: u8) -> bool {
    if atom.formal_charge != 0 || atom.is_aromatic {
        return false;
    }
    if !matches!(atom.element, Element::C | Element::N | Element::O) {
        return false;
    }
    let lowest = atom.element.default_valences()[0];
    bond_sum.saturating_add(atom.hydrogen_count) < lowest
}
