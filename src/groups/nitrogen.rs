//! Amines and amides, anchored at the nitrogen.

use petgraph::graph::NodeIndex;

use crate::groups::roles::{Degree, NitrogenRole};
use crate::groups::{Analysis, GroupKind, GroupMatch};

pub fn amine_primary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amines(analysis, GroupKind::AminePrimary, NitrogenRole::Amine(Degree::Primary))
}

pub fn amine_secondary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amines(analysis, GroupKind::AmineSecondary, NitrogenRole::Amine(Degree::Secondary))
}

pub fn amine_tertiary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amines(analysis, GroupKind::AmineTertiary, NitrogenRole::Amine(Degree::Tertiary))
}

/// Any amine nitrogen on an aromatic carbon, whatever its substitution.
pub fn amine_aromatic(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amines(analysis, GroupKind::AmineAromatic, NitrogenRole::AromaticAmine)
}

pub fn amide_primary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amides(analysis, GroupKind::AmidePrimary, Degree::Primary)
}

pub fn amide_secondary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amides(analysis, GroupKind::AmideSecondary, Degree::Secondary)
}

pub fn amide_tertiary(analysis: &Analysis<'_>) -> Vec<GroupMatch> {
    amides(analysis, GroupKind::AmideTertiary, Degree::Tertiary)
}

fn amines(analysis: &Analysis<'_>, kind: GroupKind, role: NitrogenRole) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .nitrogens_with(role)
        .map(|n| {
            let mut atoms = vec![n];
            atoms.extend(ctx.carbon_neighbors(n));
            analysis.group_match(kind, n, atoms)
        })
        .collect()
}

fn amides(analysis: &Analysis<'_>, kind: GroupKind, degree: Degree) -> Vec<GroupMatch> {
    let ctx = analysis.context();
    analysis
        .roles()
        .nitrogens_with(NitrogenRole::Amide(degree))
        .map(|n| {
            let mut atoms: Vec<NodeIndex> = Vec::new();
            for c in ctx.carbon_neighbors(n) {
                atoms.push(c);
                if let Some(o) = ctx.carbonyl_oxygen(c).filter(|_| ctx.is_carbonyl_carbon(c)) {
                    atoms.push(o);
                }
            }
            atoms.push(n);
            analysis.group_match(kind, n, atoms)
        })
        .collect()
}
