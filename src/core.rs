//! Source-side model: the kekulized molecule graph handed over by the
//! line-notation parser.
// This file only defines data; behavior lives in `stereo` and `translate`.

use petgraph::prelude::*;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Local stereo configuration tag carried by a source atom.
///
/// The variants mirror the line notation's chirality classes: `Th1`/`Th2`
/// are the two tetrahedral windings, `Al1`/`Al2` the two extended
/// (cumulated double bond) windings. The enum is closed so every consumer
/// can match it exhaustively.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stereo {
    #[default]
    None,
    Th1,
    Th2,
    Al1,
    Al2,
}
impl Stereo {
    pub fn as_static_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Th1 => "tetrahedral-1",
            Self::Th2 => "tetrahedral-2",
            Self::Al1 => "extended-tetrahedral-1",
            Self::Al2 => "extended-tetrahedral-2",
        }
    }
}
impl Display for Stereo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_static_str())
    }
}

/// Direction of a directional single bond, as written at the edge's first
/// endpoint. Perception compares these as raw flags and never normalizes
/// them per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// An atom in the source graph.
///
/// `element` holds the symbol verbatim; `"*"` is the wildcard. A `None`
/// isotope means natural abundance, which is distinct from any numeric
/// mass and must not collapse to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub element: Box<str>,
    pub isotope: Option<u16>,
    pub charge: i8,
    pub implicit_h: u8,
    pub stereo: Stereo,
}
impl Atom {
    pub fn new(element: &str) -> Self {
        Self {
            element: element.into(),
            isotope: None,
            charge: 0,
            implicit_h: 0,
            stereo: Stereo::None,
        }
    }
    pub fn with_isotope(mut self, isotope: u16) -> Self {
        self.isotope = Some(isotope);
        self
    }
    pub fn with_charge(mut self, charge: i8) -> Self {
        self.charge = charge;
        self
    }
    pub fn with_implicit_h(mut self, count: u8) -> Self {
        self.implicit_h = count;
        self
    }
    pub fn with_stereo(mut self, stereo: Stereo) -> Self {
        self.stereo = stereo;
        self
    }

    pub fn is_wildcard(&self) -> bool {
        &*self.element == "*"
    }
}
impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use fmtastic::*;
        if let Some(isotope) = self.isotope {
            write!(f, "{}", Superscript(isotope))?;
        }
        f.write_str(&self.element)?;
        match self.charge {
            0 => {}
            1 => f.write_str("⁺")?,
            -1 => f.write_str("⁻")?,
            _ => write!(f, "{:+}", Superscript(self.charge))?,
        }
        Ok(())
    }
}

/// Bond class of a source edge.
///
/// `Up`/`Down` are directional single bonds; the class itself is the
/// edge-local direction flag. `Aromatic`/`ImplicitAromatic` should not
/// survive kekulization and are only tolerated by the remapper's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bond {
    /// Dot / disconnection, shouldn't appear in a connected graph
    Non,
    Single,
    Double,
    Triple,
    Quad,
    Aromatic,
    Up,
    Down,
    Implicit,
    ImplicitAromatic,
}
impl Bond {
    /// The direction flag for directional classes, `None` for everything else.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            _ => None,
        }
    }
    /// Classes that denote a single-order connection, whatever their tag.
    pub fn is_single_order(self) -> bool {
        matches!(
            self,
            Self::Single | Self::Implicit | Self::ImplicitAromatic | Self::Up | Self::Down
        )
    }
    pub fn as_static_str(self) -> &'static str {
        match self {
            Self::Non => "non",
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Quad => "quad",
            Self::Aromatic => "aromatic",
            Self::Up => "up",
            Self::Down => "down",
            Self::Implicit => "implicit",
            Self::ImplicitAromatic => "implicit aromatic",
        }
    }
}
impl Display for Bond {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_static_str())
    }
}

/// A molecule graph is an undirected graph between atoms, connected with bonds
pub type MoleculeGraph = UnGraph<Atom, Bond>;

/// Failure reported by the upstream graph provider, carried through so it
/// surfaces when translation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SourceFailure(pub Box<str>);
impl SourceFailure {
    pub fn new(message: &str) -> Self {
        Self(message.into())
    }
}

/// What the upstream parser hands over: either a fully kekulized graph or
/// the failure that prevented building one.
#[derive(Debug, Clone)]
pub enum Parsed {
    Graph(MoleculeGraph),
    Failed(SourceFailure),
}
impl Parsed {
    pub fn graph(&self) -> Option<&MoleculeGraph> {
        match self {
            Self::Graph(graph) => Some(graph),
            Self::Failed(_) => None,
        }
    }
}
impl From<MoleculeGraph> for Parsed {
    fn from(graph: MoleculeGraph) -> Self {
        Self::Graph(graph)
    }
}
