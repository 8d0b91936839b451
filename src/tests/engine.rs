use super::mol;
use crate::core::{Atom, Bond, Parsed, SourceFailure};
use crate::engine::{generate_with, EngineOutput, EngineStatus, IdentifierEngine};
use crate::ident::Structure;
use crate::translate::{Options, TranslateError};
use std::cell::Cell;

/// Engine double that records how it was called and replies with a canned
/// output.
struct Scripted {
    reply: EngineOutput,
    calls: Cell<usize>,
    seen_atoms: Cell<usize>,
    seen_protonation: Cell<u32>,
}
impl Scripted {
    fn new(reply: EngineOutput) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            seen_atoms: Cell::new(0),
            seen_protonation: Cell::new(0),
        }
    }
}
impl IdentifierEngine for Scripted {
    fn generate(&self, structure: &Structure, options: &Options) -> EngineOutput {
        self.calls.set(self.calls.get() + 1);
        self.seen_atoms.set(structure.atoms.len());
        self.seen_protonation.set(options.max_protonation_states);
        self.reply.clone()
    }
}

fn ethane() -> Parsed {
    Parsed::Graph(mol(
        &[Atom::new("C"), Atom::new("C")],
        &[(0, 1, Bond::Single)],
    ))
}

#[test]
fn success_output_is_returned_unchanged() {
    let engine = Scripted::new(EngineOutput {
        status: EngineStatus::Ok,
        message: None,
        identifier: Some("ID=1S/C2H6/c1-2/h1-2H3".into()),
        aux_info: Some("AuxInfo=1/0/N:1,2".into()),
    });
    let out = generate_with(&engine, Some(&ethane()), &Options::default()).unwrap();
    assert!(out.is_success());
    assert_eq!(out.identifier.as_deref(), Some("ID=1S/C2H6/c1-2/h1-2H3"));
    assert_eq!(engine.calls.get(), 1);
    assert_eq!(engine.seen_atoms.get(), 2);
}

#[test]
fn engine_failure_passes_through() {
    let engine = Scripted::new(EngineOutput {
        status: EngineStatus::Error,
        message: Some("unsupported structure".into()),
        identifier: None,
        aux_info: None,
    });
    let out = generate_with(&engine, Some(&ethane()), &Options::default()).unwrap();
    assert!(!out.is_success());
    assert_eq!(out.message.as_deref(), Some("unsupported structure"));
}

#[test]
fn engine_sees_the_configured_options() {
    let engine = Scripted::new(EngineOutput {
        status: EngineStatus::Ok,
        message: None,
        identifier: None,
        aux_info: None,
    });
    let options = Options {
        max_protonation_states: 8,
        ..Options::default()
    };
    generate_with(&engine, Some(&ethane()), &options).unwrap();
    assert_eq!(engine.seen_protonation.get(), 8);
}

#[test]
fn translation_failure_short_circuits() {
    let engine = Scripted::new(EngineOutput {
        status: EngineStatus::Ok,
        message: None,
        identifier: None,
        aux_info: None,
    });
    let err = generate_with(&engine, None, &Options::default()).unwrap_err();
    assert_eq!(err, TranslateError::InvalidArgument);
    assert_eq!(engine.calls.get(), 0);

    let failed = Parsed::Failed(SourceFailure::new("bad token"));
    let err = generate_with(&engine, Some(&failed), &Options::default()).unwrap_err();
    assert!(matches!(err, TranslateError::MalformedInput(_)));
    assert_eq!(engine.calls.get(), 0);
}
