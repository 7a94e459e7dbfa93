pub mod atom;
pub mod batch;
pub mod bond;
pub mod config;
pub mod context;
pub mod counts;
pub mod element;
pub mod groups;
pub mod mol;
pub mod rings;
pub mod smiles;

pub use atom::{Atom, Span, SymbolClass};
pub use batch::{count_batch, input_lines, Counted, InputLine};
pub use bond::{Bond, BondKind, BondOrder};
pub use config::{AtomPolicy, EngineConfig};
pub use context::{ContextClassifier, Position};
pub use counts::{count_groups, count_smiles, Column, CountVector, COLUMN_COUNT};
pub use element::Element;
pub use groups::{Analysis, GroupKind, GroupMatch};
pub use mol::{Branch, ChainLinks, Mol};
pub use rings::Ring;
pub use smiles::{parse_smiles, parse_smiles_with, MoleculeError, SmilesError};
