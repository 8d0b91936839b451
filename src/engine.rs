//! Boundary to the downstream canonicalization / identifier engine.
//!
//! The engine is opaque to this crate: its output, including failure
//! statuses, is passed through unchanged. Only translation failures surface
//! as errors, and they do so before the engine is ever invoked.

use crate::core::Parsed;
use crate::ident::Structure;
use crate::translate::{translate_with, Options, TranslateError};
use tracing::*;

/// Status code reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineStatus {
    Ok,
    Warning,
    Error,
}

/// Everything the engine hands back for one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub status: EngineStatus,
    /// Diagnostic message, usually set for `Warning`/`Error`.
    pub message: Option<String>,
    /// The generated textual identifier, set on success.
    pub identifier: Option<String>,
    pub aux_info: Option<String>,
}
impl EngineOutput {
    pub fn is_success(&self) -> bool {
        self.status != EngineStatus::Error
    }
}

/// The canonicalization/identifier engine this crate feeds.
pub trait IdentifierEngine {
    fn generate(&self, structure: &Structure, options: &Options) -> EngineOutput;
}

/// Translate `source` and run the engine once on the result.
///
/// The engine's output is returned unchanged whatever its status; only a
/// failed translation short-circuits.
#[instrument(level = "debug", skip_all)]
pub fn generate_with<E: IdentifierEngine>(
    engine: &E,
    source: Option<&Parsed>,
    options: &Options,
) -> Result<EngineOutput, TranslateError> {
    let structure = translate_with(source, options)?;
    let output = engine.generate(&structure, options);
    if output.status == EngineStatus::Error {
        debug!(message = output.message.as_deref(), "engine reported failure");
    }
    Ok(output)
}
