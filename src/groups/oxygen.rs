//! Oxygen groups: hydroxyls, carbonyls, acids, esters and ethers.

use petgraph::graph::NodeIndex;

use crate::groups::roles::{CarbonylClass, OxygenRole, PeroxyClass};
use crate::groups::{Analysis, GroupKind, GroupMatch};

/// Alkyl hydroxyl `C–OH`.
pub fn hydroxyl(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    oxygen_on_carbon(analysis, GroupKind::Hydroxyl, OxygenRole::Hydroxyl)
}

/// Hydroxyl on an aromatic carbon whose ring carries no nitro or nitrate.
pub fn aromatic_hydroxyl(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    oxygen_on_carbon(analysis, GroupKind::AromaticHydroxyl, OxygenRole::AromaticHydroxyl)
}

/// `C(=O)–OH`, anchored at the hydroxyl oxygen.
pub fn carboxylic_acid(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .oxygens_with(OxygenRole::CarboxylicAcid)
        .filter_map(|o| {
            let c = ctx.carbon_neighbors(o).next()?;
            let carbonyl = ctx.carbonyl_oxygen(c)?;
            Some(analysis.group_match(GroupKind::CarboxylicAcid, o, vec![c, carbonyl, o]))
        })
        .collect()
}

/// `C(=O)–O–C`, one per single-bonded oxygen next to a carbonyl carbon.
/// Peroxyesters `C(=O)–O–O–C` count here too.
pub fn ester(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    let roles = analysis.roles();

    let mut matches: Vec<GroupMatch> = roles
        .oxygens_with(OxygenRole::Ester)
        .filter_map(|o| {
            let carbons: Vec<NodeIndex> = ctx.carbon_neighbors(o).collect();
            let acyl = carbons.iter().copied().find(|&c| ctx.is_carbonyl_carbon(c))?;
            let other = carbons.iter().copied().find(|&c| c != acyl)?;
            let carbonyl = ctx.carbonyl_oxygen(acyl)?;
            Some(analysis.group_match(GroupKind::Ester, o, vec![acyl, carbonyl, o, other]))
        })
        .collect();

    matches.extend(
        roles
            .peroxy_pairs()
            .iter()
            .filter(|p| p.class == PeroxyClass::PeroxyEster)
            .map(|p| {
                let mut atoms = vec![p.carbon, p.anchor, p.partner];
                atoms.extend(p.far_carbon);
                analysis.group_match(GroupKind::Ester, p.anchor, atoms)
            }),
    );

    matches.sort_by_key(|m| m.anchor);
    matches
}

/// Acyclic aliphatic ether.
pub fn ether(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    bridging_oxygen(analysis, GroupKind::Ether, OxygenRole::Ether)
}

/// Ether oxygen inside a ring together with both of its carbons.
pub fn ether_alicyclic(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    bridging_oxygen(analysis, GroupKind::EtherAlicyclic, OxygenRole::AlicyclicEther)
}

/// Ether oxygen on at least one aromatic carbon.
pub fn ether_aromatic(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    bridging_oxygen(analysis, GroupKind::EtherAromatic, OxygenRole::AromaticEther)
}

/// `R–CH=O`, anchored at the carbonyl carbon. Formaldehyde counts.
pub fn aldehyde(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    carbonyls(analysis, GroupKind::Aldehyde, CarbonylClass::Aldehyde)
}

/// `C–C(=O)–C`, plus the alkoxy `C–[O]` and peroxy `C–O–[O]` radicals on a
/// non-carbonyl carbon, which the regression folds into this column.
pub fn ketone(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    let roles = analysis.roles();

    let mut matches = carbonyls(analysis, GroupKind::Ketone, CarbonylClass::Ketone);

    matches.extend(roles.oxygens_with(OxygenRole::RadicalKetone).filter_map(|o| {
        let c = ctx.carbon_neighbors(o).next()?;
        Some(analysis.group_match(GroupKind::Ketone, o, vec![c, o]))
    }));

    matches.extend(
        roles
            .peroxy_pairs()
            .iter()
            .filter(|p| p.class == PeroxyClass::PeroxyRadical)
            .map(|p| {
                analysis.group_match(GroupKind::Ketone, p.anchor, vec![p.carbon, p.anchor, p.partner])
            }),
    );

    matches.sort_by_key(|m| m.anchor);
    matches
}

fn oxygen_on_carbon(analysis: &Analysis<'_>, kind: GroupKind, role: OxygenRole) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .oxygens_with(role)
        .filter_map(|o| {
            let c = ctx.carbon_neighbors(o).next()?;
            Some(analysis.group_match(kind, o, vec![c, o]))
        })
        .collect()
}

fn bridging_oxygen(analysis: &Analysis<'_>, kind: GroupKind, role: OxygenRole) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .oxygens_with(role)
        .filter_map(|o| {
            let carbons: Vec<NodeIndex> = ctx.carbon_neighbors(o).collect();
            match carbons.as_slice() {
                [c1, c2] => Some(analysis.group_match(kind, o, vec![*c1, o, *c2])),
                _ => None,
            }
        })
        .collect()
}

fn carbonyls(analysis: &Analysis<'_>, kind: GroupKind, class: CarbonylClass) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .carbonyls_with(class)
        .filter_map(|c| {
            let o = ctx.carbonyl_oxygen(c)?;
            Some(analysis.group_match(kind, c, vec![c, o]))
        })
        .collect()
}
