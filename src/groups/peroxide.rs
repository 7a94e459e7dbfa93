//! `O–O` groups, anchored at the carbon-side oxygen.
//!
//! Peroxyesters and peroxy radicals are also `O–O` pairs but are counted
//! by the ester and ketone detectors.

use crate::groups::roles::PeroxyClass;
use crate::groups::{Analysis, GroupKind, GroupMatch};

/// `C–O–O–C`, neither carbon a carbonyl carbon.
pub fn peroxide(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    pairs(analysis, GroupKind::Peroxide, PeroxyClass::Peroxide)
}

/// `C–O–O–H` on a non-carbonyl carbon.
pub fn hydroperoxide(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    pairs(analysis, GroupKind::Hydroperoxide, PeroxyClass::Hydroperoxide)
}

/// `C(=O)–O–O–H`.
pub fn carbonylperoxyacid(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    pairs(analysis, GroupKind::CarbonylPeroxyAcid, PeroxyClass::CarbonylPeroxyAcid)
}

fn pairs(analysis: &Analysis<'_>, kind: GroupKind, class: PeroxyClass) -> Vec<GroupMatch> {
    let mut matches: Vec<GroupMatch> = analysis
        .roles()
        .peroxy_pairs()
        .iter()
        .filter(|p| p.class == class)
        .map(|p| {
            let mut atoms = vec![p.carbon, p.anchor, p.partner];
            atoms.extend(p.far_carbon);
            analysis.group_match(kind, p.anchor, atoms)
        })
        .collect();
    matches.sort_by_key(|m| m.anchor);
    matches
}

#[cfg(test)]
mod tests {
    use petgraph::graph::NodeIndex;

    use crate::context::Position;
    use crate::groups::test_support::*;
    use crate::groups::GroupKind;

    #[test]
    fn hydroperoxide_positions() {
        assert_eq!(positions("O(O)CC", GroupKind::Hydroperoxide), vec![Position::Start]);
        assert_eq!(positions("CCOO", GroupKind::Hydroperoxide), vec![Position::Interior]);
        assert_eq!(positions("CCO(O)", GroupKind::Hydroperoxide), vec![Position::End]);
        assert_eq!(
            positions("CC(O(O))C", GroupKind::Hydroperoxide),
            vec![Position::BranchTerminal]
        );
    }

    #[test]
    fn hydroperoxide_written_hydrogen_first() {
        let m = detect("OOCC", GroupKind::Hydroperoxide);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].anchor, NodeIndex::new(1));
        assert_eq!(m[0].position, Position::Interior);
    }

    #[test]
    fn hydroperoxide_exclusions() {
        assert_eq!(count("CC(=O)OO", GroupKind::Hydroperoxide), 0);
        assert_eq!(count("COOC", GroupKind::Hydroperoxide), 0);
        assert_eq!(count("OO", GroupKind::Hydroperoxide), 0);
        assert_eq!(count("CCO", GroupKind::Hydroperoxide), 0);
        assert_eq!(count("c1ccccc1OO", GroupKind::Hydroperoxide), 1);
    }

    #[test]
    fn peroxide() {
        let m = detect("COOC", GroupKind::Peroxide);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].position, Position::Interior);
        assert_eq!(m[0].atoms.len(), 4);
        assert_eq!(count("CC(C)(C)OOC(C)(C)C", GroupKind::Peroxide), 1);
        assert_eq!(count("CCOOCCOOC", GroupKind::Peroxide), 2);
    }

    #[test]
    fn cyclic_peroxide() {
        let m = detect("C1CCOOC1", GroupKind::Peroxide);
        assert_eq!(m.len(), 1);
        assert!(m[0].in_ring);
        assert_eq!(count("C1CCOOC1", GroupKind::EtherAlicyclic), 0);
    }

    #[test]
    fn peroxide_exclusions() {
        assert_eq!(count("CC(=O)OOC", GroupKind::Peroxide), 0);
        assert_eq!(count("CCO[O]", GroupKind::Peroxide), 0);
        assert_eq!(count("CC(=O)OON(=O)=O", GroupKind::Peroxide), 0);
        assert_eq!(count("CCOON(=O)=O", GroupKind::Peroxide), 0);
        assert_eq!(count("CCOCC", GroupKind::Peroxide), 0);
    }

    #[test]
    fn carbonylperoxyacid_positions() {
        assert_eq!(
            positions("CC(=O)OO", GroupKind::CarbonylPeroxyAcid),
            vec![Position::Interior]
        );
        assert_eq!(
            positions("O(O)C(=O)C", GroupKind::CarbonylPeroxyAcid),
            vec![Position::Start]
        );
        assert_eq!(
            positions("CC(=O)O(O)", GroupKind::CarbonylPeroxyAcid),
            vec![Position::End]
        );
        assert_eq!(count("OOC(=O)CCC(=O)OO", GroupKind::CarbonylPeroxyAcid), 2);
    }

    #[test]
    fn carbonylperoxyacid_exclusions() {
        assert_eq!(count("CCOO", GroupKind::CarbonylPeroxyAcid), 0);
        assert_eq!(count("CC(=O)O", GroupKind::CarbonylPeroxyAcid), 0);
        assert_eq!(count("CC(=O)OOC", GroupKind::CarbonylPeroxyAcid), 0);
        assert_eq!(count("CC(=O)OO", GroupKind::CarboxylicAcid), 0);
        assert_eq!(count("CC(=O)OO", GroupKind::Hydroxyl), 0);
    }
}
