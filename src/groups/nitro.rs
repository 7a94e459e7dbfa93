//! The `N(=O)=O` family and the nitro-substituted aromatic hydroxyls and
//! amines.
//!
//! Every nitro-family nitrogen lands in exactly one of nitro, nitrate,
//! nitroester or carbonylperoxynitrate, decided by what its third
//! substituent is bonded to.

use crate::groups::roles::{NitroClass, NitrogenRole, OxygenRole};
use crate::groups::{Analysis, GroupKind, GroupMatch};

/// `C–N(=O)=O`.
pub fn nitro(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    nitro_class(analysis, GroupKind::Nitro, NitroClass::Nitro)
}

/// `C–O–N(=O)=O` on a non-carbonyl carbon, and the alkyl peroxynitrate
/// `C–O–O–N(=O)=O`.
pub fn nitrate(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    nitro_class(analysis, GroupKind::Nitrate, NitroClass::Nitrate)
}

/// `C(=O)–O–N(=O)=O`.
pub fn nitroester(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    nitro_class(analysis, GroupKind::Nitroester, NitroClass::Nitroester)
}

/// `C(=O)–O–O–N(=O)=O` (PAN-type).
pub fn carbonylperoxynitrate(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    nitro_class(
        analysis,
        GroupKind::CarbonylPeroxyNitrate,
        NitroClass::CarbonylPeroxyNitrate,
    )
}

/// Aromatic hydroxyl or amine on a ring that also carries a nitro or
/// nitrate group. Anchored at the oxygen or nitrogen.
pub fn nitrophenol(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    let roles = analysis.roles();

    let hydroxyls = roles.oxygens_with(OxygenRole::Nitrophenol);
    let amines = roles.nitrogens_with(NitrogenRole::Nitrophenol);

    let mut matches: Vec<GroupMatch> = hydroxyls
        .chain(amines)
        .filter_map(|x| {
            let ring_carbon = ctx
                .carbon_neighbors(x)
                .find(|&c| analysis.mol().atom(c).is_aromatic_carbon())?;
            Some(analysis.group_match(GroupKind::Nitrophenol, x, vec![ring_carbon, x]))
        })
        .collect();
    matches.sort_by_key(|m| m.anchor);
    matches
}

fn nitro_class(analysis: &Analysis<'_>, kind: GroupKind, class: NitroClass) -> Vec<GroupMatch> {
    analysis
        .roles()
        .nitro_groups()
        .iter()
        .filter(|g| g.class == Some(class))
        .map(|g| {
            let mut atoms = vec![g.nitrogen, g.oxygens[0], g.oxygens[1]];
            atoms.extend(g.path.iter().copied());
            analysis.group_match(kind, g.nitrogen, atoms)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::context::Position;
    use crate::groups::test_support::*;
    use crate::groups::GroupKind;

    const FAMILY: [GroupKind; 4] = [
        GroupKind::Nitro,
        GroupKind::Nitrate,
        GroupKind::Nitroester,
        GroupKind::CarbonylPeroxyNitrate,
    ];

    fn family_counts(smiles: &str) -> [usize; 4] {
        FAMILY.map(|kind| count(smiles, kind))
    }

    #[test]
    fn nitro_positions() {
        assert_eq!(positions("N(=O)(=O)CC", GroupKind::Nitro), vec![Position::Start]);
        assert_eq!(positions("CCN(=O)=O", GroupKind::Nitro), vec![Position::Interior]);
        assert_eq!(positions("CCN(=O)(=O)", GroupKind::Nitro), vec![Position::End]);
        assert_eq!(
            positions("CC(N(=O)(=O))C", GroupKind::Nitro),
            vec![Position::BranchTerminal]
        );
    }

    #[test]
    fn nitro_spellings() {
        for smiles in [
            "CCN(=O)=O",
            "CC[N+](=O)[O-]",
            "CC[N+]([O-])=O",
            "[O-][N+](=O)CC",
            "O=[N+]([O-])CC",
            "O=N(=O)CC",
            "c1ccccc1[N+](=O)[O-]",
        ] {
            assert_eq!(family_counts(smiles), [1, 0, 0, 0], "{}", smiles);
        }
    }

    #[test]
    fn nitrate() {
        assert_eq!(family_counts("CON(=O)=O"), [0, 1, 0, 0]);
        assert_eq!(family_counts("CCO[N+](=O)[O-]"), [0, 1, 0, 0]);
        assert_eq!(family_counts("[O-][N+](=O)OCC"), [0, 1, 0, 0]);
        assert_eq!(family_counts("CCOON(=O)=O"), [0, 1, 0, 0]);
        assert_eq!(family_counts("O=N(=O)OCC(ON(=O)=O)C"), [0, 2, 0, 0]);
        assert_eq!(positions("N(=O)(=O)OC", GroupKind::Nitrate), vec![Position::Start]);
        assert_eq!(positions("CC(ON(=O)(=O))C", GroupKind::Nitrate), vec![Position::BranchTerminal]);
    }

    #[test]
    fn nitroester() {
        assert_eq!(family_counts("CC(=O)ON(=O)=O"), [0, 0, 1, 0]);
        assert_eq!(family_counts("O=N(=O)OC(=O)C"), [0, 0, 1, 0]);
        assert_eq!(positions("CC(=O)ON(=O)(=O)", GroupKind::Nitroester), vec![Position::End]);
    }

    #[test]
    fn carbonylperoxynitrate() {
        assert_eq!(family_counts("CC(=O)OON(=O)=O"), [0, 0, 0, 1]);
        assert_eq!(family_counts("CC(=O)OO[N+](=O)[O-]"), [0, 0, 0, 1]);
        assert_eq!(family_counts("[O-][N+](=O)OOC(=O)C"), [0, 0, 0, 1]);
        assert_eq!(count("CC(=O)OON(=O)=O", GroupKind::CarbonylPeroxyAcid), 0);
        assert_eq!(count("CC(=O)OON(=O)=O", GroupKind::Peroxide), 0);
        assert_eq!(count("CC(=O)OON(=O)=O", GroupKind::Ester), 0);
    }

    #[test]
    fn each_motif_counted_once() {
        for smiles in [
            "CCN(=O)=O",
            "CCON(=O)=O",
            "CC(=O)ON(=O)=O",
            "CC(=O)OON(=O)=O",
            "CCOON(=O)=O",
            "O=N(=O)c1ccc(cc1)ON(=O)=O",
            "CC(CON(=O)=O)C(=O)OON(=O)=O",
        ] {
            let motifs = smiles.matches("N(=O)").count();
            let total: usize = family_counts(smiles).iter().sum();
            assert_eq!(total, motifs, "{}", smiles);
        }
    }

    #[test]
    fn nitro_family_leaves_other_nitrogen_alone() {
        assert_eq!(family_counts("CN=O"), [0, 0, 0, 0]);
        assert_eq!(family_counts("CNC"), [0, 0, 0, 0]);
        assert_eq!(count("CCN(=O)=O", GroupKind::AminePrimary), 0);
    }

    #[test]
    fn nitrophenol_from_hydroxyl() {
        let m = detect("Oc1ccccc1[N+](=O)[O-]", GroupKind::Nitrophenol);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].position, Position::Start);
        assert_eq!(count("Oc1ccccc1[N+](=O)[O-]", GroupKind::Nitro), 1);
        assert_eq!(count("Oc1ccccc1[N+](=O)[O-]", GroupKind::AromaticHydroxyl), 0);
        assert_eq!(
            positions("c1cc(N(=O)=O)ccc1O", GroupKind::Nitrophenol),
            vec![Position::End]
        );
        assert_eq!(count("Oc1ccc(cc1)ON(=O)=O", GroupKind::Nitrophenol), 1);
    }

    #[test]
    fn nitrophenol_from_amine() {
        assert_eq!(count("Nc1ccc(cc1)N(=O)=O", GroupKind::Nitrophenol), 1);
        assert_eq!(count("Nc1ccc(cc1)N(=O)=O", GroupKind::AmineAromatic), 0);
    }

    #[test]
    fn nitrophenol_exclusions() {
        assert_eq!(count("Oc1ccccc1", GroupKind::Nitrophenol), 0);
        assert_eq!(count("OCc1ccccc1N(=O)=O", GroupKind::Nitrophenol), 0);
        assert_eq!(count("Oc1ccc(cc1)-c1ccc(cc1)N(=O)=O", GroupKind::Nitrophenol), 0);
        assert_eq!(count("COc1ccccc1N(=O)=O", GroupKind::Nitrophenol), 0);
    }
}
