
mod engine;

use crate::core::{Atom, Bond, MoleculeGraph};

/// Build a graph from atoms and `(from, to, bond)` triples. Tests construct
/// graphs by hand since parsing is out of scope for this crate.
pub(crate) fn mol(atoms: &[Atom], bonds: &[(usize, usize, Bond)]) -> MoleculeGraph {
    let mut graph = MoleculeGraph::default();
    let nodes: Vec<_> = atoms.iter().map(|a| graph.add_node(a.clone())).collect();
    for &(from, to, bond) in bonds {
        graph.add_edge(nodes[from], nodes[to], bond);
    }
    graph
}
