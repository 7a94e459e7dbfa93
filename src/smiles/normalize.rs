//! Rewrites charge-separated nitro spellings to the neutral `N(=O)=O` form
//! the nitrogen classifier expects.

use std::borrow::Cow;

const REWRITES: &[(&str, &str)] = &[
    ("[N+](=O)[O-]", "N(=O)=O"),
    ("[N+]([O-])=O", "N(=O)=O"),
    ("[O-][N+](=O)", "O=N(=O)"),
    ("O=[N+]([O-])", "O=N(=O)"),
];

pub fn normalize(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim();
    if !REWRITES.iter().any(|(from, _)| trimmed.contains(from)) {
        return Cow::Borrowed(trimmed);
    }
    let mut out = trimmed.to_string();
    for (from, to) in REWRITES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched() {
        assert!(matches!(normalize("CCO"), Cow::Borrowed("CCO")));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize("  CCO \n"), "CCO");
    }

    #[test]
    fn charge_separated_nitro() {
        assert_eq!(normalize("C[N+](=O)[O-]"), "CN(=O)=O");
        assert_eq!(normalize("C[N+]([O-])=O"), "CN(=O)=O");
    }

    #[test]
    fn oxide_first_nitro() {
        assert_eq!(normalize("[O-][N+](=O)c1ccccc1"), "O=N(=O)c1ccccc1");
        assert_eq!(normalize("O=[N+]([O-])CC"), "O=N(=O)CC");
    }

    #[test]
    fn nitrate_and_dinitro() {
        assert_eq!(normalize("CO[N+](=O)[O-]"), "CON(=O)=O");
        assert_eq!(
            normalize("[O-][N+](=O)c1ccc(cc1)[N+](=O)[O-]"),
            "O=N(=O)c1ccc(cc1)N(=O)=O"
        );
    }
}
