//! Target-side model: the structure handed to the identifier engine.
//!
//! Everything here is index-based plain data. Atoms are one-to-one with the
//! source atoms in the same order, so a `usize` here is a source node index.

/// Placeholder element the wildcard symbol maps to.
pub const PSEUDO_ELEMENT: &str = "Zz";

/// Reduced bond order vocabulary of the engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    None,
    #[default]
    Single,
    Double,
    Triple,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub element: Box<str>,
    pub charge: i8,
    pub implicit_h: u8,
    /// `None` is natural abundance, not mass zero.
    pub isotope: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub from: usize,
    pub to: usize,
    pub order: BondOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StereoKind {
    Tetrahedral,
    Allene,
    DoubleBond,
}

/// Two-valued handedness encoding. Carried verbatim from the source tags,
/// never re-derived from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Odd,
    Even,
}

/// One stereo descriptor: exactly four neighbor references, an explicit
/// center for tetrahedral and allene kinds, and a parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StereoElement {
    pub kind: StereoKind,
    pub neighbors: [usize; 4],
    pub center: Option<usize>,
    pub parity: Parity,
}

/// The structure handed to the engine: built fresh per translation and
/// immutable afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub stereo: Vec<StereoElement>,
}
impl Structure {
    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(atoms),
            bonds: Vec::with_capacity(bonds),
            stereo: Vec::new(),
        }
    }
    /// Stereo elements of one kind, mostly a test convenience.
    pub fn stereo_of(&self, kind: StereoKind) -> impl Iterator<Item = &StereoElement> {
        self.stereo.iter().filter(move |e| e.kind == kind)
    }
}
