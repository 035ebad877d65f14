//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced while building machine components or parsing settings.
///
/// Encoding itself never fails: every error here is raised at construction
/// time, before a message can be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// Rotor wiring does not contain exactly 26 symbols.
    #[error("Rotor wiring must contain 26 symbols, got {0}")]
    InvalidWiringLength(usize),
    /// Rotor wiring contains a character outside `A..=Z`.
    #[error("Rotor wiring contains non-alphabet symbol {0:?}")]
    InvalidWiringSymbol(char),
    /// Rotor wiring maps two contacts to the same symbol.
    #[error("Rotor wiring repeats symbol {0:?}")]
    DuplicateWiringSymbol(char),
    /// Reflector maps a contact to itself.
    #[error("Reflector maps contact {0} to itself")]
    ReflectorFixedPoint(usize),
    /// Reflector applied twice does not return the original contact.
    #[error("Reflector is not an involution at contact {0}")]
    ReflectorNotInvolution(usize),
    /// Plug lead references a character outside the alphabet.
    #[error("Plug lead uses non-alphabet symbol {0:?}")]
    InvalidPlugSymbol(char),
    /// Plug lead connects a letter to itself.
    #[error("Plug lead connects {0:?} to itself")]
    PlugSelfPair(char),
    /// A letter appears in more than one plug lead.
    #[error("Letter {0:?} is already connected by another plug lead")]
    PlugAlreadyUsed(char),
    /// A plug lead definition is not exactly two letters.
    #[error("Plug lead {0:?} must be exactly two letters")]
    MalformedPlugPair(String),
    /// A rotor position is given as a character outside the alphabet.
    #[error("Rotor position {0:?} is not a letter A-Z")]
    InvalidPositionSymbol(char),
    /// Rotor settings do not name exactly one position per rotor.
    #[error("Rotor settings must name 3 positions, got {0}")]
    InvalidRotorSettings(usize),
    /// Ring settings could not be parsed.
    #[error("Invalid ring settings {0:?}")]
    InvalidRingSetting(String),
    /// Rotor name does not match a predefined wiring table.
    #[error("Unknown rotor {0:?}")]
    UnknownRotor(String),
    /// A request or response document could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for RotorCryptError {
    fn from(err: serde_json::Error) -> Self {
        RotorCryptError::Json(err.to_string())
    }
}
