//! The translator itself: attribute remapping plus the assembler entry
//! points that drive stereo perception over a whole graph.

use crate::core::*;
use crate::ident::{self, BondOrder, Structure, PSEUDO_ELEMENT};
use crate::stereo;
use ahash::AHashSet;
use petgraph::visit::EdgeRef;
use thiserror::Error;
use tracing::*;

/// Something went wrong before any translation could happen. Local stereo
/// skips are policy, not errors, and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("no source graph was provided")]
    InvalidArgument,
    #[error("the source graph could not be built")]
    MalformedInput(#[source] SourceFailure),
}

/// Knobs recognized across the pipeline. The stereo toggles gate the
/// corresponding perceivers; `max_protonation_states` is opaque here and
/// forwarded to the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub max_protonation_states: u32,
    pub tetrahedral: bool,
    pub allene: bool,
    pub double_bond: bool,
}
impl Default for Options {
    fn default() -> Self {
        Self {
            max_protonation_states: 1,
            tetrahedral: true,
            allene: true,
            double_bond: true,
        }
    }
}

/// Remap one source atom into the engine's vocabulary. The wildcard symbol
/// becomes the fixed pseudoatom; everything else is copied verbatim,
/// including the absence of an isotope.
pub fn remap_atom(atom: &Atom) -> ident::Atom {
    ident::Atom {
        element: if atom.is_wildcard() {
            PSEUDO_ELEMENT.into()
        } else {
            atom.element.clone()
        },
        charge: atom.charge,
        implicit_h: atom.implicit_h,
        isotope: atom.isotope,
    }
}

/// Reduce a bond class to the engine's order vocabulary.
///
/// The table is lossy on purpose: quads collapse to triples and a residual
/// aromatic bond (kekulization failed upstream) falls back to single. The
/// engine depends on this exact mapping, so don't "fix" it. Directionality
/// is consumed by perception only and never lands on the target bond.
pub fn reduce_bond(bond: Bond) -> BondOrder {
    match bond {
        Bond::Single | Bond::Implicit | Bond::ImplicitAromatic | Bond::Up | Bond::Down => {
            BondOrder::Single
        }
        Bond::Double => BondOrder::Double,
        Bond::Triple | Bond::Quad => BondOrder::Triple,
        Bond::Non => BondOrder::None,
        Bond::Aromatic => {
            warn!("residual aromatic bond in a kekulized graph, reducing to single");
            BondOrder::Single
        }
    }
}

/// Translate with default options.
pub fn translate(source: Option<&Parsed>) -> Result<Structure, TranslateError> {
    translate_with(source, &Options::default())
}

/// Translate a parsed source graph into the engine's structure model.
///
/// Atoms are visited once in index order (remap, tetrahedral, allene), then
/// edges once in edge order (remap, cis/trans). The output is deterministic
/// across repeated calls on the same graph and the source graph is never
/// mutated. Fails fast on an absent graph or an upstream construction
/// failure; no partial structure is ever returned.
#[instrument(level = "debug", skip_all)]
pub fn translate_with(
    source: Option<&Parsed>,
    options: &Options,
) -> Result<Structure, TranslateError> {
    let graph = match source {
        None => return Err(TranslateError::InvalidArgument),
        Some(Parsed::Failed(failure)) => {
            return Err(TranslateError::MalformedInput(failure.clone()))
        }
        Some(Parsed::Graph(graph)) => graph,
    };

    let mut out = Structure::with_capacity(graph.node_count(), graph.edge_count());
    // Double bonds interior to a perceived allene chain, excluded from
    // cis/trans treatment below.
    let mut consumed = AHashSet::new();

    for idx in graph.node_indices() {
        let atom = &graph[idx];
        out.atoms.push(remap_atom(atom));
        match atom.stereo {
            Stereo::None => {}
            Stereo::Th1 | Stereo::Th2 => {
                if options.tetrahedral {
                    out.stereo.extend(stereo::tetrahedral(graph, idx));
                }
            }
            Stereo::Al1 | Stereo::Al2 => {
                if options.allene {
                    out.stereo.extend(stereo::allene(graph, idx, &mut consumed));
                }
            }
        }
    }

    for edge in graph.edge_references() {
        let bond = *edge.weight();
        out.bonds.push(ident::Bond {
            from: edge.source().index(),
            to: edge.target().index(),
            order: reduce_bond(bond),
        });
        if options.double_bond && bond == Bond::Double && !consumed.contains(&edge.id()) {
            out.stereo.extend(stereo::double_bond(graph, edge.id()));
        }
    }

    debug!(
        atoms = out.atoms.len(),
        bonds = out.bonds.len(),
        stereo = out.stereo.len(),
        "translated structure"
    );
    Ok(out)
}
