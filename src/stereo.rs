//! Stereo perception over the source graph.
//!
//! Three independent perceivers, one per descriptor class. Each is a pure
//! function of the immutable graph; a center whose local topology doesn't
//! satisfy the preconditions is skipped silently, never an error. Parities
//! come verbatim from the source tags, they are never re-derived from
//! geometry.

use crate::core::*;
use crate::ident::{Parity, StereoElement, StereoKind};
use ahash::AHashSet;
use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use smallvec::SmallVec;
use tracing::*;

/// Incident edges of `at` in graph (insertion) order. Petgraph walks the
/// edges where `at` is the source before those where it is the target, so
/// adjacency order can interleave; edge indices are assigned on insertion
/// and sorting by them restores graph order.
fn incident(graph: &MoleculeGraph, at: NodeIndex) -> SmallVec<(EdgeIndex, NodeIndex, Bond), 4> {
    let mut es: SmallVec<_, 4> = graph
        .edges(at)
        .map(|e| {
            let other = if e.source() == at {
                e.target()
            } else {
                e.source()
            };
            (e.id(), other, *e.weight())
        })
        .collect();
    es.sort_unstable_by_key(|&(id, _, _)| id);
    es
}

/// Perceive a tetrahedral stereocenter.
///
/// Exactly 3 explicit neighbors signal an implicit substituent (hydrogen or
/// lone pair); the center's own index stands in for it and the 4 indices are
/// sorted ascending. With 4 explicit neighbors the graph order is kept.
pub fn tetrahedral(graph: &MoleculeGraph, center: NodeIndex) -> Option<StereoElement> {
    let parity = match graph[center].stereo {
        Stereo::Th1 => Parity::Odd,
        Stereo::Th2 => Parity::Even,
        Stereo::None | Stereo::Al1 | Stereo::Al2 => return None,
    };
    let mut ns: SmallVec<usize, 4> = incident(graph, center)
        .into_iter()
        .map(|(_, other, _)| other.index())
        .collect();
    if ns.len() == 3 {
        ns.push(center.index());
        ns.sort_unstable();
    }
    if ns.len() != 4 {
        trace!(
            center = center.index(),
            neighbors = ns.len(),
            "skipping tetrahedral center, not 4-coordinate"
        );
        return None;
    }
    Some(StereoElement {
        kind: StereoKind::Tetrahedral,
        neighbors: [ns[0], ns[1], ns[2], ns[3]],
        center: Some(center.index()),
        parity,
    })
}

/// Perceive an extended-tetrahedral (allene) center by walking both
/// cumulated double-bond arms.
///
/// The walk advances while the current atom has exactly 2 incident edges,
/// both double; the first atom failing that test is the arm's terminal. Each
/// terminal contributes its first single-order neighbor plus itself, and the
/// four indices are sorted ascending. On success every traversed double bond
/// is added to `consumed` so it won't also get cis/trans treatment.
pub fn allene(
    graph: &MoleculeGraph,
    center: NodeIndex,
    consumed: &mut AHashSet<EdgeIndex>,
) -> Option<StereoElement> {
    let parity = match graph[center].stereo {
        Stereo::Al1 => Parity::Odd,
        Stereo::Al2 => Parity::Even,
        Stereo::None | Stereo::Th1 | Stereo::Th2 => return None,
    };
    let arms = incident(graph, center);
    if arms.len() != 2 || arms.iter().any(|&(_, _, bond)| bond != Bond::Double) {
        trace!(
            center = center.index(),
            "skipping allene center, incident bonds aren't two doubles"
        );
        return None;
    }

    let mut walked: SmallVec<EdgeIndex, 8> = arms.iter().map(|&(id, _, _)| id).collect();
    let mut refs: SmallVec<usize, 4> = SmallVec::new();
    for &(_, first, _) in &arms {
        let (mut prev, mut cur) = (center, first);
        loop {
            let es = incident(graph, cur);
            if es.len() != 2 || es.iter().any(|&(_, _, bond)| bond != Bond::Double) {
                break;
            }
            let Some(&(id, next, _)) = es.iter().find(|&&(_, other, _)| other != prev) else {
                break;
            };
            // A chain can only revisit the center if the doubles close a
            // ring, in which case there is no terminal to report.
            if next == center {
                debug!(
                    center = center.index(),
                    "skipping allene center, cumulated chain closes a ring"
                );
                return None;
            }
            walked.push(id);
            (prev, cur) = (cur, next);
        }
        // cur is the terminal; its first single-order neighbor defines the arm
        let Some(&(_, sub, _)) = incident(graph, cur)
            .iter()
            .find(|&&(_, _, bond)| bond.is_single_order())
        else {
            trace!(
                center = center.index(),
                terminal = cur.index(),
                "skipping allene center, terminal has no substituent"
            );
            return None;
        };
        refs.push(sub.index());
        refs.push(cur.index());
    }

    refs.sort_unstable();
    if refs.iter().tuple_windows().any(|(a, b)| a == b) {
        trace!(
            center = center.index(),
            "skipping allene center, duplicate references"
        );
        return None;
    }
    consumed.extend(walked);
    Some(StereoElement {
        kind: StereoKind::Allene,
        neighbors: [refs[0], refs[1], refs[2], refs[3]],
        center: Some(center.index()),
        parity,
    })
}

/// First directional bond at `at` other than `skip`, in graph order.
fn directional_neighbor(
    graph: &MoleculeGraph,
    at: NodeIndex,
    skip: EdgeIndex,
) -> Option<(Direction, NodeIndex)> {
    incident(graph, at)
        .into_iter()
        .filter(|&(id, _, _)| id != skip)
        .find_map(|(_, other, bond)| bond.direction().map(|dir| (dir, other)))
}

/// Perceive cis/trans on one double bond from the directional bonds flanking
/// it. A side without a directional neighbor leaves the bond unspecified.
///
/// Parity is `Odd` when the two raw direction flags agree and `Even`
/// otherwise. The equal/unequal rule is the source system's relative
/// direction convention; flipping it inverts cis/trans for every molecule.
pub fn double_bond(graph: &MoleculeGraph, id: EdgeIndex) -> Option<StereoElement> {
    if graph[id] != Bond::Double {
        return None;
    }
    let (a, b) = graph.edge_endpoints(id)?;
    let Some((dir_a, n_a)) = directional_neighbor(graph, a, id) else {
        trace!(id = id.index(), "double bond unspecified, no marker on one side");
        return None;
    };
    let Some((dir_b, n_b)) = directional_neighbor(graph, b, id) else {
        trace!(id = id.index(), "double bond unspecified, no marker on one side");
        return None;
    };
    Some(StereoElement {
        kind: StereoKind::DoubleBond,
        neighbors: [n_a.index(), a.index(), b.index(), n_b.index()],
        center: None,
        parity: if dir_a == dir_b {
            Parity::Odd
        } else {
            Parity::Even
        },
    })
}
