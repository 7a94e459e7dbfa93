//! The 31-column group vector consumed by the SIMPOL.1 regression.

use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::config::EngineConfig;
use crate::groups::{Analysis, GroupKind};
use crate::mol::Mol;
use crate::smiles::{parse_smiles_with, SmilesError};

pub const COLUMN_COUNT: usize = 31;

/// One column of the count vector. The three leading columns are not
/// functional groups; the rest follow [`GroupKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Constant term, always 1.
    Zeroeth,
    CarbonNumber,
    CarbonNumberAcidSideAmide,
    Group(GroupKind),
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Zeroeth,
        Column::CarbonNumber,
        Column::CarbonNumberAcidSideAmide,
        Column::Group(GroupKind::AromaticRing),
        Column::Group(GroupKind::NonAromaticRing),
        Column::Group(GroupKind::CEqCNonAromatic),
        Column::Group(GroupKind::CEqCCEqONonAromaticRing),
        Column::Group(GroupKind::Hydroxyl),
        Column::Group(GroupKind::Aldehyde),
        Column::Group(GroupKind::Ketone),
        Column::Group(GroupKind::CarboxylicAcid),
        Column::Group(GroupKind::Ester),
        Column::Group(GroupKind::Ether),
        Column::Group(GroupKind::EtherAlicyclic),
        Column::Group(GroupKind::EtherAromatic),
        Column::Group(GroupKind::Nitrate),
        Column::Group(GroupKind::Nitro),
        Column::Group(GroupKind::AromaticHydroxyl),
        Column::Group(GroupKind::AminePrimary),
        Column::Group(GroupKind::AmineSecondary),
        Column::Group(GroupKind::AmineTertiary),
        Column::Group(GroupKind::AmineAromatic),
        Column::Group(GroupKind::AmidePrimary),
        Column::Group(GroupKind::AmideSecondary),
        Column::Group(GroupKind::AmideTertiary),
        Column::Group(GroupKind::CarbonylPeroxyNitrate),
        Column::Group(GroupKind::Peroxide),
        Column::Group(GroupKind::Hydroperoxide),
        Column::Group(GroupKind::CarbonylPeroxyAcid),
        Column::Group(GroupKind::Nitrophenol),
        Column::Group(GroupKind::Nitroester),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Zeroeth => "zeroeth",
            Column::CarbonNumber => "carbon_number",
            Column::CarbonNumberAcidSideAmide => "carbon_number_acid_side_amide",
            Column::Group(kind) => kind.name(),
        }
    }

    /// Position in [`Column::ALL`].
    pub fn index(self) -> usize {
        match self {
            Column::Zeroeth => 0,
            Column::CarbonNumber => 1,
            Column::CarbonNumberAcidSideAmide => 2,
            Column::Group(kind) => 3 + kind as usize,
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Group counts for one molecule, in [`Column::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountVector([u32; COLUMN_COUNT]);

impl CountVector {
    pub fn get(&self, column: Column) -> u32 {
        self.0[column.index()]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, u32)> + '_ {
        Column::ALL.iter().map(move |&c| (c, self.0[c.index()]))
    }

    /// Columns with a count above zero.
    pub fn non_zero(&self) -> impl Iterator<Item = (Column, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl Index<Column> for CountVector {
    type Output = u32;

    fn index(&self, column: Column) -> &u32 {
        &self.0[column.index()]
    }
}

impl Serialize for CountVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for (column, n) in self.iter() {
            map.serialize_entry(column.name(), &n)?;
        }
        map.end()
    }
}

/// Counts every column for an already-built molecule.
pub fn count_groups(mol: &Mol) -> CountVector {
    let analysis = Analysis::new(mol);
    let mut counts = [0u32; COLUMN_COUNT];

    counts[Column::Zeroeth.index()] = 1;
    counts[Column::CarbonNumber.index()] =
        mol.atoms().filter(|&a| mol.atom(a).is_carbon()).count() as u32;
    counts[Column::CarbonNumberAcidSideAmide.index()] =
        analysis.roles().acid_side_carbons().len() as u32;

    for kind in GroupKind::ALL {
        counts[Column::Group(kind).index()] = kind.count(&analysis);
    }

    let vector = CountVector(counts);
    debug!(
        smiles = mol.text(),
        non_zero = vector.non_zero().count(),
        "counted groups"
    );
    vector
}

/// Parses `text` and counts its groups.
pub fn count_smiles(text: &str, config: &EngineConfig) -> Result<CountVector, SmilesError> {
    let mol = parse_smiles_with(text, config)?;
    Ok(count_groups(&mol))
}
