//! Functional-group detectors.
//!
//! Every detector reads one [`Analysis`] and reports one [`GroupMatch`] per
//! occurrence. Competing classes that share atoms (ester and ether on one
//! oxygen, amide and amine on one nitrogen, the nitro family on one
//! `N(=O)=O`) are settled beforehand in [`roles`], so detectors never need
//! to look at each other.

pub mod nitro;
pub mod nitrogen;
pub mod oxygen;
pub mod peroxide;
pub mod rings;
pub mod roles;

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::context::{ContextClassifier, Position};
use crate::mol::Mol;
use roles::Roles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    AromaticRing,
    NonAromaticRing,
    CEqCNonAromatic,
    CEqCCEqONonAromaticRing,
    Hydroxyl,
    Aldehyde,
    Ketone,
    CarboxylicAcid,
    Ester,
    Ether,
    EtherAlicyclic,
    EtherAromatic,
    Nitrate,
    Nitro,
    AromaticHydroxyl,
    AminePrimary,
    AmineSecondary,
    AmineTertiary,
    AmineAromatic,
    AmidePrimary,
    AmideSecondary,
    AmideTertiary,
    #[serde(rename = "carbonylperoxynitrate")]
    CarbonylPeroxyNitrate,
    Peroxide,
    Hydroperoxide,
    #[serde(rename = "carbonylperoxyacid")]
    CarbonylPeroxyAcid,
    Nitrophenol,
    Nitroester,
}

impl GroupKind {
    pub const ALL: [GroupKind; 28] = [
        GroupKind::AromaticRing,
        GroupKind::NonAromaticRing,
        GroupKind::CEqCNonAromatic,
        GroupKind::CEqCCEqONonAromaticRing,
        GroupKind::Hydroxyl,
        GroupKind::Aldehyde,
        GroupKind::Ketone,
        GroupKind::CarboxylicAcid,
        GroupKind::Ester,
        GroupKind::Ether,
        GroupKind::EtherAlicyclic,
        GroupKind::EtherAromatic,
        GroupKind::Nitrate,
        GroupKind::Nitro,
        GroupKind::AromaticHydroxyl,
        GroupKind::AminePrimary,
        GroupKind::AmineSecondary,
        GroupKind::AmineTertiary,
        GroupKind::AmineAromatic,
        GroupKind::AmidePrimary,
        GroupKind::AmideSecondary,
        GroupKind::AmideTertiary,
        GroupKind::CarbonylPeroxyNitrate,
        GroupKind::Peroxide,
        GroupKind::Hydroperoxide,
        GroupKind::CarbonylPeroxyAcid,
        GroupKind::Nitrophenol,
        GroupKind::Nitroester,
    ];

    /// Column name in the count vector.
    pub fn name(self) -> &'static str {
        match self {
            GroupKind::AromaticRing => "aromatic_ring",
            GroupKind::NonAromaticRing => "non_aromatic_ring",
            GroupKind::CEqCNonAromatic => "c_eq_c_non_aromatic",
            GroupKind::CEqCCEqONonAromaticRing => "c_eq_c_c_eq_o_non_aromatic_ring",
            GroupKind::Hydroxyl => "hydroxyl",
            GroupKind::Aldehyde => "aldehyde",
            GroupKind::Ketone => "ketone",
            GroupKind::CarboxylicAcid => "carboxylic_acid",
            GroupKind::Ester => "ester",
            GroupKind::Ether => "ether",
            GroupKind::EtherAlicyclic => "ether_alicyclic",
            GroupKind::EtherAromatic => "ether_aromatic",
            GroupKind::Nitrate => "nitrate",
            GroupKind::Nitro => "nitro",
            GroupKind::AromaticHydroxyl => "aromatic_hydroxyl",
            GroupKind::AminePrimary => "amine_primary",
            GroupKind::AmineSecondary => "amine_secondary",
            GroupKind::AmineTertiary => "amine_tertiary",
            GroupKind::AmineAromatic => "amine_aromatic",
            GroupKind::AmidePrimary => "amide_primary",
            GroupKind::AmideSecondary => "amide_secondary",
            GroupKind::AmideTertiary => "amide_tertiary",
            GroupKind::CarbonylPeroxyNitrate => "carbonylperoxynitrate",
            GroupKind::Peroxide => "peroxide",
            GroupKind::Hydroperoxide => "hydroperoxide",
            GroupKind::CarbonylPeroxyAcid => "carbonylperoxyacid",
            GroupKind::Nitrophenol => "nitrophenol",
            GroupKind::Nitroester => "nitroester",
        }
    }

    pub fn detect(self, analysis: &Analysis<'_>) -> Vec<GroupMatch> {
        match self {
            GroupKind::AromaticRing => rings::aromatic_ring(analysis),
            GroupKind::NonAromaticRing => rings::non_aromatic_ring(analysis),
            GroupKind::CEqCNonAromatic => rings::c_eq_c_non_aromatic(analysis),
            GroupKind::CEqCCEqONonAromaticRing => rings::c_eq_c_c_eq_o_non_aromatic_ring(analysis),
            GroupKind::Hydroxyl => oxygen::hydroxyl(analysis),
            GroupKind::Aldehyde => oxygen::aldehyde(analysis),
            GroupKind::Ketone => oxygen::ketone(analysis),
            GroupKind::CarboxylicAcid => oxygen::carboxylic_acid(analysis),
            GroupKind::Ester => oxygen::ester(analysis),
            GroupKind::Ether => oxygen::ether(analysis),
            GroupKind::EtherAlicyclic => oxygen::ether_alicyclic(analysis),
            GroupKind::EtherAromatic => oxygen::ether_aromatic(analysis),
            GroupKind::AromaticHydroxyl => oxygen::aromatic_hydroxyl(analysis),
            GroupKind::Nitrate => nitro::nitrate(analysis),
            GroupKind::Nitro => nitro::nitro(analysis),
            GroupKind::Nitroester => nitro::nitroester(analysis),
            GroupKind::CarbonylPeroxyNitrate => nitro::carbonylperoxynitrate(analysis),
            GroupKind::Nitrophenol => nitro::nitrophenol(analysis),
            GroupKind::AminePrimary => nitrogen::amine_primary(analysis),
            GroupKind::AmineSecondary => nitrogen::amine_secondary(analysis),
            GroupKind::AmineTertiary => nitrogen::amine_tertiary(analysis),
            GroupKind::AmineAromatic => nitrogen::amine_aromatic(analysis),
            GroupKind::AmidePrimary => nitrogen::amide_primary(analysis),
            GroupKind::AmideSecondary => nitrogen::amide_secondary(analysis),
            GroupKind::AmideTertiary => nitrogen::amide_tertiary(analysis),
            GroupKind::Peroxide => peroxide::peroxide(analysis),
            GroupKind::Hydroperoxide => peroxide::hydroperoxide(analysis),
            GroupKind::CarbonylPeroxyAcid => peroxide::carbonylperoxyacid(analysis),
        }
    }

    pub fn count(self, analysis: &Analysis<'_>) -> u32 {
        self.detect(analysis).len() as u32
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One occurrence of a functional group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    pub kind: GroupKind,
    /// Atom the match is reported at: the heteroatom for heteroatom-centred
    /// groups, the carbonyl carbon for aldehydes and ketones, the first
    /// closure atom for rings.
    pub anchor: NodeIndex,
    /// Every atom the motif covers, anchor included.
    pub atoms: Vec<NodeIndex>,
    /// Where the anchor sits in the written sequence.
    pub position: Position,
    /// The anchor is a ring member.
    pub in_ring: bool,
}

/// Everything the detectors read, computed once per molecule.
pub struct Analysis<'a> {
    ctx: ContextClassifier<'a>,
    roles: Roles,
}

impl<'a> Analysis<'a> {
    pub fn new(mol: &'a Mol) -> Self {
        let ctx = ContextClassifier::new(mol);
        let roles = Roles::new(&ctx);
        Self { ctx, roles }
    }

    pub fn mol(&self) -> &'a Mol {
        self.ctx.mol()
    }

    pub fn context(&self) -> &ContextClassifier<'a> {
        &self.ctx
    }

    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Runs every detector.
    pub fn detect_all(&self) -> Vec<GroupMatch> {
        GroupKind::ALL
            .iter()
            .flat_map(|kind| kind.detect(self))
            .collect()
    }

    pub(crate) fn group_match(
        &self,
        kind: GroupKind,
        anchor: NodeIndex,
        atoms: Vec<NodeIndex>,
    ) -> GroupMatch {
        GroupMatch {
            kind,
            anchor,
            atoms,
            position: self.ctx.position(anchor),
            in_ring: self.ctx.is_in_ring(anchor),
        }
    }
}
