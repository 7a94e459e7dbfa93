//! Ring counts and carbon–carbon double bonds.

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::bond::BondOrder;
use crate::groups::{Analysis, GroupKind, GroupMatch};

/// One per ring closure whose two atoms are both aromatic.
pub fn aromatic_ring(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    ring_matches(analysis, GroupKind::AromaticRing, true)
}

/// One per ring closure with at least one aliphatic closure atom.
pub fn non_aromatic_ring(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    ring_matches(analysis, GroupKind::NonAromaticRing, false)
}

fn ring_matches(analysis: &Analysis<'_>, kind: GroupKind, aromatic: bool) -> Vec<GroupMatch> {
    analysis
        .mol()
        .rings()
        .iter()
        .filter(|ring| ring.aromatic == aromatic)
        .filter_map(|ring| {
            let anchor = *ring.atoms.first()?;
            Some(analysis.group_match(kind, anchor, ring.atoms.clone()))
        })
        .collect()
}

/// Double bonds between two aliphatic carbons, anchored at the
/// first-written carbon.
pub fn c_eq_c_non_aromatic(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let mol = analysis.mol();
    let mut matches: Vec<GroupMatch> = mol
        .graph()
        .edge_references()
        .filter(|e| e.weight().order == BondOrder::Double)
        .filter(|e| {
            mol.atom(e.source()).is_aliphatic_carbon() && mol.atom(e.target()).is_aliphatic_carbon()
        })
        .map(|e| {
            let (a, b) = ordered(e.source(), e.target());
            analysis.group_match(GroupKind::CEqCNonAromatic, a, vec![a, b])
        })
        .collect();
    matches.sort_by_key(|m| m.anchor);
    matches
}

/// A ring carbonyl carbon `k`, single-bonded to a ring carbon `a` that is
/// double-bonded to an aliphatic carbon `b`, with `k`, `a` and `b` all in
/// one non-aromatic ring. Anchored at `k`; each `(k, a=b)` counts once.
pub fn c_eq_c_c_eq_o_non_aromatic_ring(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    let mol = analysis.mol();
    let mut matches = Vec::new();

    for k in mol.atoms() {
        if !ctx.is_in_ring(k) {
            continue;
        }
        let Some(oxygen) = ctx.carbonyl_oxygen(k) else {
            continue;
        };
        if !ctx.is_carbonyl_carbon(k) {
            continue;
        }

        for a in ctx.single_links(k).map(|l| l.atom) {
            if !mol.atom(a).is_aliphatic_carbon() || !ctx.is_in_ring(a) {
                continue;
            }
            for b in ctx.double_links(a).map(|l| l.atom) {
                if b == k || !mol.atom(b).is_aliphatic_carbon() {
                    continue;
                }
                let conjugated_ring = mol
                    .rings()
                    .iter()
                    .any(|r| !r.aromatic && r.contains(k) && r.contains(a) && r.contains(b));
                if conjugated_ring {
                    matches.push(analysis.group_match(
                        GroupKind::CEqCCEqONonAromaticRing,
                        k,
                        vec![b, a, k, oxygen],
                    ));
                }
            }
        }
    }

    matches
}

fn ordered(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}
