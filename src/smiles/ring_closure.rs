use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::bond::BondOrder;
use crate::smiles::error::SmilesError;
use crate::smiles::tokenizer::Token;

/// One resolved ring bond: the two atoms that carry the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingClosure {
    pub label: u16,
    /// Atom the opening occurrence follows.
    pub first: NodeIndex,
    /// Atom the closing occurrence follows.
    pub second: NodeIndex,
    pub open_pos: usize,
    pub close_pos: usize,
    /// Bond symbol written at either occurrence, if any.
    pub order: Option<BondOrder>,
    /// The label had already opened and closed an earlier ring.
    pub reused: bool,
}

/// All ring closures of a molecule, in the order they were closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingClosureTable {
    closures: Vec<RingClosure>,
    occurrences: BTreeMap<u16, usize>,
}

impl RingClosureTable {
    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RingClosure> + '_ {
        self.closures.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&RingClosure> {
        self.closures.get(idx)
    }

    /// How many times `label` was written.
    pub fn occurrences(&self, label: u16) -> usize {
        self.occurrences.get(&label).copied().unwrap_or(0)
    }

    /// Highest label value used anywhere in the molecule.
    pub fn highest_label(&self) -> Option<u16> {
        self.occurrences.keys().next_back().copied()
    }

    /// The label written most often. Ties prefer single-digit labels, then
    /// the larger value, so with no reuse this is the largest single digit.
    pub fn dominant_label(&self) -> Option<u16> {
        self.occurrences
            .iter()
            .max_by_key(|&(&label, &count)| (count, label <= 9, label))
            .map(|(&label, _)| label)
    }

    /// Closures whose label was recycled from an earlier ring.
    pub fn reused(&self) -> impl Iterator<Item = &RingClosure> + '_ {
        self.closures.iter().filter(|c| c.reused)
    }
}

/// Pairs up ring labels in one pass over the token stream.
///
/// Atom indices are assigned in order of appearance, matching the indices the
/// builder gives graph nodes.
pub fn resolve_ring_closures(tokens: &[Token]) -> Result<RingClosureTable, SmilesError> {
    let mut open: BTreeMap<u16, (NodeIndex, usize, Option<BondOrder>)> = BTreeMap::new();
    let mut occurrences: BTreeMap<u16, usize> = BTreeMap::new();
    let mut closures = Vec::new();
    let mut atom_count = 0usize;
    let mut current: Option<NodeIndex> = None;

    for token in tokens {
        match token {
            Token::Atom(_) => {
                current = Some(NodeIndex::new(atom_count));
                atom_count += 1;
            }
            Token::Bond { .. } => {}
            Token::RingClosure { bond, label, pos } => {
                let atom = current.ok_or(SmilesError::UnresolvedRingClosure { label: *label })?;
                let count = occurrences.entry(*label).or_insert(0);
                *count += 1;

                match open.remove(label) {
                    Some((first, open_pos, open_bond)) => {
                        let order = match (open_bond, *bond) {
                            (None, None) => None,
                            (Some(b), None) | (None, Some(b)) => Some(b),
                            (Some(b1), Some(b2)) if b1 == b2 => Some(b1),
                            _ => return Err(SmilesError::RingBondConflict { label: *label }),
                        };
                        let reused = *count > 2;
                        if reused {
                            debug!(label = *label, pos = *pos, "ring label reused for a new ring");
                        }
                        closures.push(RingClosure {
                            label: *label,
                            first,
                            second: atom,
                            open_pos,
                            close_pos: *pos,
                            order,
                            reused,
                        });
                    }
                    None => {
                        open.insert(*label, (atom, *pos, *bond));
                    }
                }
            }
            Token::OpenParen(_) | Token::CloseParen(_) | Token::Dot(_) => {
                current = None;
            }
        }
    }

    if let Some((&label, _)) = open.iter().next() {
        return Err(SmilesError::UnresolvedRingClosure { label });
    }

    Ok(RingClosureTable {
        closures,
        occurrences,
    })
}
