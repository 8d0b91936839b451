//! Translation of kekulized molecular line-notation graphs into the
//! intermediate structure model consumed by an external canonicalization /
//! identifier-generation engine.
//!
//! Parsing and kekulization happen upstream, identifier generation happens
//! downstream; this crate re-derives the stereo descriptors (tetrahedral,
//! allene, double-bond cis/trans) from the tagged graph and remaps atom and
//! bond attributes into the engine's vocabulary.

pub mod core;
pub mod engine;
pub mod ident;
pub mod stereo;
pub mod translate;

#[cfg(test)]
mod tests;

pub use crate::core::{Atom, Bond, Direction, MoleculeGraph, Parsed, SourceFailure, Stereo};
pub use crate::translate::{translate, translate_with, Options, TranslateError};
