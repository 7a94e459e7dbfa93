use serde::Serialize;

/// Elements the group engine distinguishes.
///
/// Only the organic subset and a few elements that routinely appear in
/// bracket atoms of atmospheric-chemistry SMILES get their own variant.
/// Everything else collapses to [`Element::Other`], which detectors treat as
/// a generic heteroatom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    F,
    Si,
    P,
    S,
    Cl,
    Se,
    Br,
    I,
    Other,
}

impl Element {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let element = match symbol {
            "H" => Element::H,
            "B" => Element::B,
            "C" => Element::C,
            "N" => Element::N,
            "O" => Element::O,
            "F" => Element::F,
            "Si" => Element::Si,
            "P" => Element::P,
            "S" => Element::S,
            "Cl" => Element::Cl,
            "Se" => Element::Se,
            "Br" => Element::Br,
            "I" => Element::I,
            _ => return None,
        };
        Some(element)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::I => "I",
            Element::Other => "*",
        }
    }

    /// Valences used to infer implicit hydrogens on bare (non-bracket) atoms.
    pub fn default_valences(self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::F | Element::Cl | Element::Br => &[1],
            Element::Si => &[4],
            Element::P => &[3, 5],
            Element::S | Element::Se => &[2, 4, 6],
            Element::I => &[1, 3, 5, 7],
            Element::Other => &[],
        }
    }

    pub fn is_organic_subset(self) -> bool {
        matches!(
            self,
            Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::F
                | Element::Cl
                | Element::Br
                | Element::I
        )
    }
}
