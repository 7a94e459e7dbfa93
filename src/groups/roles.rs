//! Mutually exclusive roles for carbonyl carbons, oxygens and nitrogens.
//!
//! Each atom is classified exactly once, in a fixed order: nitro-family
//! nitrogens first (they claim their attachment oxygen), then `O–O` pairs,
//! then every remaining oxygen and nitrogen. Detectors only read these
//! tables, so two detectors can never claim the same atom.

use std::collections::{BTreeSet, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::trace;

use crate::context::ContextClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarbonylClass {
    /// At most one carbon neighbour, no heteroatom, at least one hydrogen.
    Aldehyde,
    /// Exactly two carbon neighbours and no heteroatom.
    Ketone,
    /// Bonded to a heteroatom (acid, ester, amide, ...).
    Substituted,
}

/// Number of carbons on a nitrogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Primary,
    Secondary,
    Tertiary,
}

impl Degree {
    fn from_carbons(count: usize) -> Option<Self> {
        match count {
            1 => Some(Degree::Primary),
            2 => Some(Degree::Secondary),
            3 => Some(Degree::Tertiary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeroxyClass {
    /// `C–O–O–C`, neither carbon a carbonyl.
    Peroxide,
    /// `C–O–O–H`, carbon not a carbonyl.
    Hydroperoxide,
    /// `C(=O)–O–O–H`.
    CarbonylPeroxyAcid,
    /// `C(=O)–O–O–C`; counted as an ester.
    PeroxyEster,
    /// `C–O–[O]` on a non-carbonyl carbon; counted as a ketone.
    PeroxyRadical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OxygenRole {
    /// Terminal `=O` of a carbonyl carbon.
    Carbonyl,
    Hydroxyl,
    AromaticHydroxyl,
    /// Aromatic hydroxyl on a ring that also carries a nitro or nitrate group.
    Nitrophenol,
    CarboxylicAcid,
    /// Single-bonded oxygen next to a carbonyl carbon (lactones, anhydrides
    /// and carbonates included).
    Ester,
    Ether,
    AlicyclicEther,
    AromaticEther,
    /// Alkoxy radical `[O]` on a non-carbonyl carbon; counted as a ketone.
    RadicalKetone,
    /// Carbon-side oxygen of an `O–O` pair.
    Peroxy(PeroxyClass),
    /// The other oxygen of an `O–O` pair.
    PeroxyPartner,
    /// Oxygen between a nitro-family nitrogen and the rest of the molecule.
    NitrateOxygen,
    /// Not part of any counted group.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NitroClass {
    /// Nitrogen bonded to carbon.
    Nitro,
    /// Nitrogen bonded to an oxygen on a plain carbon, directly or through
    /// an `O–O` spacer.
    Nitrate,
    /// Nitrogen bonded to an oxygen on a carbonyl carbon.
    Nitroester,
    /// Nitrogen bonded through an `O–O` spacer to a carbonyl carbon.
    CarbonylPeroxyNitrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NitrogenRole {
    Amine(Degree),
    /// Any amine nitrogen bonded to an aromatic carbon.
    AromaticAmine,
    /// Aromatic amine on a ring that also carries a nitro or nitrate group.
    Nitrophenol,
    Amide(Degree),
    Nitro(NitroClass),
    Other,
}

/// A nitrogen carrying two terminal `=O` and one further substituent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NitroGroup {
    pub nitrogen: NodeIndex,
    pub oxygens: [NodeIndex; 2],
    pub attachment: NodeIndex,
    /// Atoms between the nitrogen and the first carbon, in walk order,
    /// ending at that carbon.
    pub path: Vec<NodeIndex>,
    /// `None` when the attachment fits none of the classes.
    pub class: Option<NitroClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeroxyPair {
    pub anchor: NodeIndex,
    pub partner: NodeIndex,
    /// Carbon on the anchor oxygen.
    pub carbon: NodeIndex,
    /// Carbon on the partner oxygen, for peroxides and peroxyesters.
    pub far_carbon: Option<NodeIndex>,
    pub class: PeroxyClass,
}

#[derive(Debug, Clone)]
pub struct Roles {
    carbonyl: Vec<Option<CarbonylClass>>,
    oxygen: Vec<Option<OxygenRole>>,
    nitrogen: Vec<Option<NitrogenRole>>,
    nitro_groups: Vec<NitroGroup>,
    peroxy_pairs: Vec<PeroxyPair>,
    acid_side_carbons: Vec<NodeIndex>,
}

impl Roles {
    pub fn new(ctx: &ContextClassifier<'_>) -> Self {
        let mol = ctx.mol();
        let n = mol.atom_count();

        let carbonyl: Vec<Option<CarbonylClass>> =
            mol.atoms().map(|idx| classify_carbonyl(ctx, idx)).collect();

        let nitro_groups: Vec<NitroGroup> =
            mol.atoms().filter_map(|idx| nitro_group(ctx, idx)).collect();

        let mut nitro_bearing = vec![false; n];
        for group in &nitro_groups {
            match group.class {
                Some(NitroClass::Nitro) | Some(NitroClass::Nitrate) => {
                    if let Some(&carbon) = group.path.last() {
                        nitro_bearing[carbon.index()] = true;
                    }
                }
                _ => {}
            }
        }

        let mut oxygen: Vec<Option<OxygenRole>> = vec![None; n];
        for group in &nitro_groups {
            if mol.atom(group.attachment).is_oxygen() {
                oxygen[group.attachment.index()] = Some(OxygenRole::NitrateOxygen);
            }
        }

        let peroxy_pairs = classify_peroxy_pairs(ctx, &mut oxygen);

        for idx in mol.atoms() {
            if !mol.atom(idx).is_oxygen() || oxygen[idx.index()].is_some() {
                continue;
            }
            let role = classify_oxygen(ctx, idx, &nitro_bearing);
            trace!(atom = idx.index(), ?role, "oxygen role");
            oxygen[idx.index()] = Some(role);
        }

        let mut nitrogen: Vec<Option<NitrogenRole>> = vec![None; n];
        for idx in mol.atoms() {
            if !mol.atom(idx).is_nitrogen() || mol.atom(idx).is_aromatic {
                continue;
            }
            let role = match nitro_groups.iter().find(|g| g.nitrogen == idx) {
                Some(group) => group
                    .class
                    .map(NitrogenRole::Nitro)
                    .unwrap_or(NitrogenRole::Other),
                None => classify_nitrogen(ctx, idx, &nitro_bearing),
            };
            trace!(atom = idx.index(), ?role, "nitrogen role");
            nitrogen[idx.index()] = Some(role);
        }

        let acid_side_carbons = acid_side_carbons(ctx, &nitrogen);

        Self {
            carbonyl,
            oxygen,
            nitrogen,
            nitro_groups,
            peroxy_pairs,
            acid_side_carbons,
        }
    }

    pub fn carbonyl(&self, atom: NodeIndex) -> Option<CarbonylClass> {
        self.carbonyl[atom.index()]
    }

    pub fn oxygen(&self, atom: NodeIndex) -> Option<OxygenRole> {
        self.oxygen[atom.index()]
    }

    pub fn nitrogen(&self, atom: NodeIndex) -> Option<NitrogenRole> {
        self.nitrogen[atom.index()]
    }

    /// Oxygens holding `role`, in atom order.
    pub fn oxygens_with(&self, role: OxygenRole) -> impl Iterator<Item = NodeIndex> + '_ {
        self.oxygen
            .iter()
            .enumerate()
            .filter(move |(_, r)| **r == Some(role))
            .map(|(i, _)| NodeIndex::new(i))
    }

    /// Nitrogens holding `role`, in atom order.
    pub fn nitrogens_with(&self, role: NitrogenRole) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nitrogen
            .iter()
            .enumerate()
            .filter(move |(_, r)| **r == Some(role))
            .map(|(i, _)| NodeIndex::new(i))
    }

    pub fn carbonyls_with(&self, class: CarbonylClass) -> impl Iterator<Item = NodeIndex> + '_ {
        self.carbonyl
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(class))
            .map(|(i, _)| NodeIndex::new(i))
    }

    pub fn nitro_groups(&self) -> &[NitroGroup] {
        &self.nitro_groups
    }

    pub fn peroxy_pairs(&self) -> &[PeroxyPair] {
        &self.peroxy_pairs
    }

    /// Union, over all amides, of the carbons reachable from the amide
    /// carbonyl carbon without passing through the amide nitrogen or any
    /// other atom bonded to it.
    pub fn acid_side_carbons(&self) -> &[NodeIndex] {
        &self.acid_side_carbons
    }
}

fn classify_carbonyl(ctx: &ContextClassifier<'_>, idx: NodeIndex) -> Option<CarbonylClass> {
    let oxygen = ctx.carbonyl_oxygen(idx)?;
    if !ctx.is_carbonyl_carbon(idx) {
        return None;
    }
    let mol = ctx.mol();
    let mut carbons = 0;
    let mut hetero = false;
    for link in ctx.links(idx) {
        if link.atom == oxygen {
            continue;
        }
        if mol.atom(link.atom).is_carbon() {
            carbons += 1;
        } else {
            hetero = true;
        }
    }
    let class = if hetero {
        CarbonylClass::Substituted
    } else if carbons <= 1 && mol.atom(idx).hydrogen_count >= 1 {
        CarbonylClass::Aldehyde
    } else if carbons == 2 {
        CarbonylClass::Ketone
    } else {
        CarbonylClass::Substituted
    };
    Some(class)
}

/// Returns the other neighbour of a two-connected atom.
fn other_neighbor(ctx: &ContextClassifier<'_>, atom: NodeIndex, from: NodeIndex) -> Option<NodeIndex> {
    let links = ctx.links(atom);
    if links.len() != 2 || !links.iter().all(|l| l.is_single()) {
        return None;
    }
    links.iter().map(|l| l.atom).find(|&a| a != from)
}

fn nitro_group(ctx: &ContextClassifier<'_>, idx: NodeIndex) -> Option<NitroGroup> {
    let mol = ctx.mol();
    let atom = mol.atom(idx);
    if !atom.is_nitrogen() || atom.is_aromatic || ctx.heavy_degree(idx) != 3 {
        return None;
    }

    let terminal: Vec<NodeIndex> = ctx
        .double_links(idx)
        .map(|l| l.atom)
        .filter(|&o| mol.atom(o).is_oxygen() && ctx.heavy_degree(o) == 1)
        .collect();
    if terminal.len() != 2 {
        return None;
    }
    let attachment = ctx.single_links(idx).next()?.atom;

    let mut path = vec![attachment];
    let class = if mol.atom(attachment).is_carbon() {
        Some(NitroClass::Nitro)
    } else if mol.atom(attachment).is_oxygen() {
        match other_neighbor(ctx, attachment, idx) {
            Some(y) if mol.atom(y).is_carbon() => {
                path.push(y);
                if ctx.is_carbonyl_carbon(y) {
                    Some(NitroClass::Nitroester)
                } else {
                    Some(NitroClass::Nitrate)
                }
            }
            Some(y) if mol.atom(y).is_oxygen() => {
                path.push(y);
                match other_neighbor(ctx, y, attachment) {
                    Some(z) if mol.atom(z).is_carbon() => {
                        path.push(z);
                        if ctx.is_carbonyl_carbon(z) {
                            Some(NitroClass::CarbonylPeroxyNitrate)
                        } else {
                            Some(NitroClass::Nitrate)
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    } else {
        None
    };

    Some(NitroGroup {
        nitrogen: idx,
        oxygens: [terminal[0], terminal[1]],
        attachment,
        path,
        class,
    })
}

/// What hangs off one oxygen of an `O–O` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeroxySide {
    Carbon(NodeIndex),
    Hydrogen,
    Radical,
    Other,
}

fn peroxy_side(ctx: &ContextClassifier<'_>, o: NodeIndex, partner: NodeIndex) -> PeroxySide {
    let mol = ctx.mol();
    let atom = mol.atom(o);
    if atom.formal_charge != 0 || !ctx.is_saturated(o) {
        return PeroxySide::Other;
    }
    let others: Vec<NodeIndex> = ctx
        .links(o)
        .iter()
        .map(|l| l.atom)
        .filter(|&a| a != partner)
        .collect();
    match others.as_slice() {
        [] if atom.is_radical => PeroxySide::Radical,
        [] if atom.hydrogen_count >= 1 => PeroxySide::Hydrogen,
        [c] if mol.atom(*c).is_carbon() => PeroxySide::Carbon(*c),
        _ => PeroxySide::Other,
    }
}

fn classify_peroxy_pairs(
    ctx: &ContextClassifier<'_>,
    oxygen: &mut [Option<OxygenRole>],
) -> Vec<PeroxyPair> {
    let mol = ctx.mol();
    let mut pairs = Vec::new();

    for a in mol.atoms() {
        if !mol.atom(a).is_oxygen() {
            continue;
        }
        let partners: Vec<NodeIndex> = ctx
            .single_links(a)
            .map(|l| l.atom)
            .filter(|&b| b.index() > a.index() && mol.atom(b).is_oxygen())
            .collect();

        for b in partners {
            match (oxygen[a.index()], oxygen[b.index()]) {
                (Some(OxygenRole::NitrateOxygen), None) => {
                    oxygen[b.index()] = Some(OxygenRole::PeroxyPartner);
                    continue;
                }
                (None, Some(OxygenRole::NitrateOxygen)) => {
                    oxygen[a.index()] = Some(OxygenRole::PeroxyPartner);
                    continue;
                }
                (None, None) => {}
                _ => continue,
            }

            match peroxy_pair(ctx, a, b) {
                Some(pair) => {
                    trace!(anchor = pair.anchor.index(), class = ?pair.class, "peroxy pair");
                    oxygen[pair.anchor.index()] = Some(OxygenRole::Peroxy(pair.class));
                    oxygen[pair.partner.index()] = Some(OxygenRole::PeroxyPartner);
                    pairs.push(pair);
                }
                None => {
                    oxygen[a.index()] = Some(OxygenRole::Other);
                    oxygen[b.index()] = Some(OxygenRole::Other);
                }
            }
        }
    }

    pairs
}

fn peroxy_pair(ctx: &ContextClassifier<'_>, a: NodeIndex, b: NodeIndex) -> Option<PeroxyPair> {
    use PeroxySide::*;

    let side_a = peroxy_side(ctx, a, b);
    let side_b = peroxy_side(ctx, b, a);
    let carbonyl = |c: NodeIndex| ctx.is_carbonyl_carbon(c);

    let (anchor, partner, carbon, far) = match (side_a, side_b) {
        (Carbon(ca), Carbon(cb)) => (a, b, ca, Some(cb)),
        (Carbon(c), _) => (a, b, c, None),
        (_, Carbon(c)) => (b, a, c, None),
        _ => return None,
    };
    let far_side = if anchor == a { side_b } else { side_a };

    let class = match far_side {
        Carbon(cb) if carbonyl(carbon) || carbonyl(cb) => PeroxyClass::PeroxyEster,
        Carbon(_) => PeroxyClass::Peroxide,
        Hydrogen if carbonyl(carbon) => PeroxyClass::CarbonylPeroxyAcid,
        Hydrogen => PeroxyClass::Hydroperoxide,
        Radical if carbonyl(carbon) => return None,
        Radical => PeroxyClass::PeroxyRadical,
        Other => return None,
    };

    Some(PeroxyPair {
        anchor,
        partner,
        carbon,
        far_carbon: far,
        class,
    })
}

fn ring_carries_nitro(ctx: &ContextClassifier<'_>, carbon: NodeIndex, nitro_bearing: &[bool]) -> bool {
    ctx.rings_of(carbon).any(|ring| {
        ring.atoms
            .iter()
            .any(|&a| a != carbon && nitro_bearing[a.index()])
    })
}

fn classify_oxygen(ctx: &ContextClassifier<'_>, o: NodeIndex, nitro_bearing: &[bool]) -> OxygenRole {
    let mol = ctx.mol();
    let atom = mol.atom(o);

    // Ring oxygens of aromatic heterocycles (furan `o`) carry no ether column.
    if atom.formal_charge != 0 || atom.is_aromatic {
        return OxygenRole::Other;
    }

    if let Some(link) = ctx.double_links(o).next() {
        return if ctx.heavy_degree(o) == 1 && ctx.is_carbonyl_carbon(link.atom) {
            OxygenRole::Carbonyl
        } else {
            OxygenRole::Other
        };
    }

    if ctx.hetero_neighbors(o).next().is_some() {
        return OxygenRole::Other;
    }

    let carbons: Vec<NodeIndex> = ctx.carbon_neighbors(o).collect();

    if atom.is_radical {
        return match carbons.as_slice() {
            [c] if !ctx.is_carbonyl_carbon(*c) => OxygenRole::RadicalKetone,
            _ => OxygenRole::Other,
        };
    }

    match carbons.as_slice() {
        [c] if atom.hydrogen_count >= 1 => {
            if ctx.is_carbonyl_carbon(*c) {
                OxygenRole::CarboxylicAcid
            } else if mol.atom(*c).is_aromatic_carbon() {
                if ring_carries_nitro(ctx, *c, nitro_bearing) {
                    OxygenRole::Nitrophenol
                } else {
                    OxygenRole::AromaticHydroxyl
                }
            } else {
                OxygenRole::Hydroxyl
            }
        }
        [c1, c2] => {
            if ctx.is_carbonyl_carbon(*c1) || ctx.is_carbonyl_carbon(*c2) {
                OxygenRole::Ester
            } else if mol.atom(*c1).is_aromatic_carbon() || mol.atom(*c2).is_aromatic_carbon() {
                OxygenRole::AromaticEther
            } else if ctx.shares_ring(&[o, *c1, *c2]) {
                OxygenRole::AlicyclicEther
            } else {
                OxygenRole::Ether
            }
        }
        _ => OxygenRole::Other,
    }
}

fn classify_nitrogen(ctx: &ContextClassifier<'_>, idx: NodeIndex, nitro_bearing: &[bool]) -> NitrogenRole {
    let mol = ctx.mol();
    if mol.atom(idx).formal_charge != 0 || !ctx.is_saturated(idx) {
        return NitrogenRole::Other;
    }

    let carbons: Vec<NodeIndex> = ctx.carbon_neighbors(idx).collect();

    if carbons.iter().any(|&c| ctx.is_carbonyl_carbon(c)) {
        return Degree::from_carbons(carbons.len())
            .map(NitrogenRole::Amide)
            .unwrap_or(NitrogenRole::Other);
    }

    if ctx.hetero_neighbors(idx).next().is_some() {
        return NitrogenRole::Other;
    }

    let aromatic: Vec<NodeIndex> = carbons
        .iter()
        .copied()
        .filter(|&c| mol.atom(c).is_aromatic_carbon())
        .collect();
    if !aromatic.is_empty() {
        return if aromatic
            .iter()
            .any(|&c| ring_carries_nitro(ctx, c, nitro_bearing))
        {
            NitrogenRole::Nitrophenol
        } else {
            NitrogenRole::AromaticAmine
        };
    }

    Degree::from_carbons(carbons.len())
        .map(NitrogenRole::Amine)
        .unwrap_or(NitrogenRole::Other)
}

fn acid_side_carbons(ctx: &ContextClassifier<'_>, nitrogen: &[Option<NitrogenRole>]) -> Vec<NodeIndex> {
    let mol = ctx.mol();
    let mut carbons: BTreeSet<NodeIndex> = BTreeSet::new();

    for (i, role) in nitrogen.iter().enumerate() {
        if !matches!(role, Some(NitrogenRole::Amide(_))) {
            continue;
        }
        let amide_n = NodeIndex::new(i);
        for start in ctx.carbon_neighbors(amide_n).filter(|&c| ctx.is_carbonyl_carbon(c)) {
            // Atoms on the nitrogen are amine side, also when a lactam ring
            // leads back to them.
            let mut visited = vec![false; mol.atom_count()];
            visited[amide_n.index()] = true;
            for nb in mol.neighbors(amide_n) {
                visited[nb.index()] = true;
            }
            visited[start.index()] = true;
            let mut queue = VecDeque::from([start]);
            while let Some(cur) = queue.pop_front() {
                if mol.atom(cur).is_carbon() {
                    carbons.insert(cur);
                }
                for next in mol.neighbors(cur) {
                    if !visited[next.index()] {
                        visited[next.index()] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    carbons.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn roles(smiles: &str) -> Roles {
        let mol = parse_smiles(smiles).unwrap();
        let ctx = ContextClassifier::new(&mol);
        Roles::new(&ctx)
    }

    #[test]
    fn carbonyl_classes() {
        assert_eq!(roles("CC=O").carbonyl(n(1)), Some(CarbonylClass::Aldehyde));
        assert_eq!(roles("C=O").carbonyl(n(0)), Some(CarbonylClass::Aldehyde));
        assert_eq!(roles("CC(=O)C").carbonyl(n(1)), Some(CarbonylClass::Ketone));
        assert_eq!(roles("CC(=O)O").carbonyl(n(1)), Some(CarbonylClass::Substituted));
        assert_eq!(roles("CC(=O)N").carbonyl(n(1)), Some(CarbonylClass::Substituted));
        assert_eq!(roles("CCC").carbonyl(n(1)), None);
    }

    #[test]
    fn acid_oxygens() {
        let r = roles("CC(=O)O");
        assert_eq!(r.oxygen(n(2)), Some(OxygenRole::Carbonyl));
        assert_eq!(r.oxygen(n(3)), Some(OxygenRole::CarboxylicAcid));
    }

    #[test]
    fn ester_beats_ether() {
        let r = roles("CC(=O)OC");
        assert_eq!(r.oxygen(n(3)), Some(OxygenRole::Ester));
    }

    #[test]
    fn ether_kinds() {
        assert_eq!(roles("CCOCC").oxygen(n(2)), Some(OxygenRole::Ether));
        assert_eq!(roles("C1CCOC1").oxygen(n(3)), Some(OxygenRole::AlicyclicEther));
        assert_eq!(roles("COc1ccccc1").oxygen(n(1)), Some(OxygenRole::AromaticEther));
        assert_eq!(roles("o1cccc1").oxygen(n(0)), Some(OxygenRole::Other));
        assert_eq!(roles("Cc1ccco1").oxygen(n(5)), Some(OxygenRole::Other));
        // Ring atom bonded to an oxygen outside the ring.
        assert_eq!(roles("C1CCC(OC)CC1").oxygen(n(4)), Some(OxygenRole::Ether));
    }

    #[test]
    fn lactone_is_ester() {
        let r = roles("O=C1CCCO1");
        assert_eq!(r.oxygen(n(5)), Some(OxygenRole::Ester));
    }

    #[test]
    fn hydroxyl_kinds() {
        assert_eq!(roles("CCO").oxygen(n(2)), Some(OxygenRole::Hydroxyl));
        assert_eq!(roles("Oc1ccccc1").oxygen(n(0)), Some(OxygenRole::AromaticHydroxyl));
    }

    #[test]
    fn nitrophenol_demotion() {
        let r = roles("Oc1ccccc1[N+](=O)[O-]");
        assert_eq!(r.oxygen(n(0)), Some(OxygenRole::Nitrophenol));
        assert_eq!(r.nitrogen(n(7)), Some(NitrogenRole::Nitro(NitroClass::Nitro)));
    }

    #[test]
    fn nitro_on_another_ring_does_not_demote() {
        let r = roles("Oc1ccc(cc1)-c1ccc(cc1)N(=O)=O");
        assert_eq!(r.oxygen(n(0)), Some(OxygenRole::AromaticHydroxyl));
    }

    #[test]
    fn nitro_family() {
        let r = roles("CCN(=O)=O");
        assert_eq!(r.nitrogen(n(2)), Some(NitrogenRole::Nitro(NitroClass::Nitro)));

        let r = roles("CCON(=O)=O");
        assert_eq!(r.nitrogen(n(3)), Some(NitrogenRole::Nitro(NitroClass::Nitrate)));
        assert_eq!(r.oxygen(n(2)), Some(OxygenRole::NitrateOxygen));

        let r = roles("CC(=O)ON(=O)=O");
        assert_eq!(r.nitrogen(n(4)), Some(NitrogenRole::Nitro(NitroClass::Nitroester)));
        assert_eq!(r.oxygen(n(3)), Some(OxygenRole::NitrateOxygen));

        let r = roles("CC(=O)OON(=O)=O");
        assert_eq!(
            r.nitrogen(n(5)),
            Some(NitrogenRole::Nitro(NitroClass::CarbonylPeroxyNitrate))
        );
        assert_eq!(r.oxygen(n(3)), Some(OxygenRole::PeroxyPartner));
        assert_eq!(r.oxygen(n(4)), Some(OxygenRole::NitrateOxygen));
        assert!(r.peroxy_pairs().is_empty());
    }

    #[test]
    fn nitro_group_path() {
        let r = roles("CC(=O)OON(=O)=O");
        let group = &r.nitro_groups()[0];
        assert_eq!(group.nitrogen, n(5));
        assert_eq!(group.attachment, n(4));
        assert_eq!(group.path, vec![n(4), n(3), n(1)]);
    }

    #[test]
    fn peroxy_classes() {
        let r = roles("CCOO");
        assert_eq!(r.peroxy_pairs()[0].class, PeroxyClass::Hydroperoxide);
        assert_eq!(r.oxygen(n(2)), Some(OxygenRole::Peroxy(PeroxyClass::Hydroperoxide)));
        assert_eq!(r.oxygen(n(3)), Some(OxygenRole::PeroxyPartner));

        assert_eq!(roles("COOC").peroxy_pairs()[0].class, PeroxyClass::Peroxide);
        assert_eq!(roles("CC(=O)OO").peroxy_pairs()[0].class, PeroxyClass::CarbonylPeroxyAcid);
        assert_eq!(roles("CC(=O)OOC").peroxy_pairs()[0].class, PeroxyClass::PeroxyEster);
        assert_eq!(roles("CCO[O]").peroxy_pairs()[0].class, PeroxyClass::PeroxyRadical);
        assert!(roles("CC(=O)O[O]").peroxy_pairs().is_empty());
    }

    #[test]
    fn hydroperoxide_anchor_written_first() {
        let r = roles("OOCC");
        let pair = r.peroxy_pairs()[0];
        assert_eq!(pair.anchor, n(1));
        assert_eq!(pair.partner, n(0));
        assert_eq!(pair.carbon, n(2));
    }

    #[test]
    fn radical_oxygen() {
        assert_eq!(roles("CC[O]").oxygen(n(2)), Some(OxygenRole::RadicalKetone));
        assert_eq!(roles("CC(=O)[O]").oxygen(n(3)), Some(OxygenRole::Other));
    }

    #[test]
    fn amide_beats_amine() {
        let r = roles("CC(=O)N");
        assert_eq!(r.nitrogen(n(3)), Some(NitrogenRole::Amide(Degree::Primary)));
        let r = roles("CC(=O)NC");
        assert_eq!(r.nitrogen(n(3)), Some(NitrogenRole::Amide(Degree::Secondary)));
        let r = roles("CC(=O)N(C)C");
        assert_eq!(r.nitrogen(n(3)), Some(NitrogenRole::Amide(Degree::Tertiary)));
        let r = roles("CC(=O)Nc1ccccc1");
        assert_eq!(r.nitrogen(n(3)), Some(NitrogenRole::Amide(Degree::Secondary)));
    }

    #[test]
    fn amine_degrees() {
        assert_eq!(roles("CCN").nitrogen(n(2)), Some(NitrogenRole::Amine(Degree::Primary)));
        assert_eq!(roles("CNC").nitrogen(n(1)), Some(NitrogenRole::Amine(Degree::Secondary)));
        assert_eq!(roles("CN(C)C").nitrogen(n(1)), Some(NitrogenRole::Amine(Degree::Tertiary)));
        assert_eq!(roles("Nc1ccccc1").nitrogen(n(0)), Some(NitrogenRole::AromaticAmine));
        assert_eq!(roles("N").nitrogen(n(0)), Some(NitrogenRole::Other));
        assert_eq!(roles("CC=N").nitrogen(n(2)), Some(NitrogenRole::Other));
        assert_eq!(roles("c1ccncc1").nitrogen(n(3)), None);
    }

    #[test]
    fn nitroaniline_is_nitrophenol() {
        let r = roles("Nc1ccc(cc1)N(=O)=O");
        assert_eq!(r.nitrogen(n(0)), Some(NitrogenRole::Nitrophenol));
    }

    #[test]
    fn acid_side_of_amide() {
        let r = roles("CCC(=O)NCC");
        assert_eq!(r.acid_side_carbons(), &[n(0), n(1), n(2)]);
        assert!(roles("CCN").acid_side_carbons().is_empty());
    }

    #[test]
    fn lactam_acid_side_stops_at_nitrogen() {
        let r = roles("O=C1CCCN1");
        assert_eq!(r.nitrogen(n(5)), Some(NitrogenRole::Amide(Degree::Secondary)));
        assert_eq!(r.acid_side_carbons(), &[n(1), n(2), n(3)]);

        let r = roles("O=C1CCCN1C");
        assert_eq!(r.acid_side_carbons(), &[n(1), n(2), n(3)]);
    }

    #[test]
    fn imide_counts_both_carbonyl_sides() {
        let r = roles("O=C1CCC(=O)N1");
        assert_eq!(r.acid_side_carbons(), &[n(1), n(2), n(3), n(4)]);
    }

    #[test]
    fn acid_side_union_over_amides() {
        // Both amides share the central carbon chain.
        let r = roles("NC(=O)CC(=O)N");
        assert_eq!(r.acid_side_carbons(), &[n(1), n(3), n(4)]);
    }
}
