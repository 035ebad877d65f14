//! RotorWiringTable: the fixed substitution wired inside one rotor.
//!
//! A wiring table is a permutation of the alphabet. The forward direction
//! carries the signal from the entry contacts towards the reflector; the
//! backward direction is its exact inverse and carries the signal back.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::RotorCryptError;

/// Wiring of Rotor I.
pub const WIRING_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

/// Wiring of Rotor II.
pub const WIRING_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";

/// Wiring of Rotor III.
pub const WIRING_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";

/// Immutable bijective substitution over the 26-letter alphabet.
///
/// Both directions are precomputed so that each pass through a rotor is a
/// single table lookup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RotorWiringTable {
    forward: [u8; ALPHABET_SIZE],
    backward: [u8; ALPHABET_SIZE],
}

/// Canonical Rotor I.
pub const ROTOR_I: RotorWiringTable = RotorWiringTable::from_static(WIRING_I);

/// Canonical Rotor II.
pub const ROTOR_II: RotorWiringTable = RotorWiringTable::from_static(WIRING_II);

/// Canonical Rotor III.
pub const ROTOR_III: RotorWiringTable = RotorWiringTable::from_static(WIRING_III);

impl RotorWiringTable {
    /// Builds a wiring table from a 26-letter string.
    ///
    /// The string lists, for each contact `A..=Z` in order, the letter it is
    /// wired to.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidWiringLength`] if the string does not hold 26 characters.
    /// - [`RotorCryptError::InvalidWiringSymbol`] if a character is not `A..=Z`.
    /// - [`RotorCryptError::DuplicateWiringSymbol`] if a letter appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::rotor::RotorWiringTable;
    ///
    /// let rotor = RotorWiringTable::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(rotor.forward('A'), Some('E'));
    /// assert_eq!(rotor.backward('E'), Some('A'));
    ///
    /// assert!(RotorWiringTable::new("AABCDEFGHIJKLMNOPQRSTUVWXY").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, RotorCryptError> {
        let count = wiring.chars().count();
        if count != ALPHABET_SIZE {
            return Err(RotorCryptError::InvalidWiringLength(count));
        }

        let mut forward = [0u8; ALPHABET_SIZE];
        let mut backward = [0u8; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];

        for (contact, symbol) in wiring.chars().enumerate() {
            let target =
                alphabet::index_of(symbol).ok_or(RotorCryptError::InvalidWiringSymbol(symbol))?;
            if seen[target] {
                return Err(RotorCryptError::DuplicateWiringSymbol(symbol));
            }
            seen[target] = true;
            forward[contact] = target as u8;
            backward[target] = contact as u8;
        }

        Ok(RotorWiringTable { forward, backward })
    }

    /// Compile-time constructor for the canonical tables.
    ///
    /// Panics during constant evaluation if `wiring` is not a permutation,
    /// so a bad table fails the build rather than a run.
    const fn from_static(wiring: &str) -> Self {
        let bytes = wiring.as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            panic!("rotor wiring must contain 26 symbols");
        }

        let mut forward = [0u8; ALPHABET_SIZE];
        let mut backward = [0u8; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];

        let mut contact = 0;
        while contact < ALPHABET_SIZE {
            let symbol = bytes[contact];
            if !symbol.is_ascii_uppercase() {
                panic!("rotor wiring contains a non-alphabet symbol");
            }
            let target = (symbol - b'A') as usize;
            if seen[target] {
                panic!("rotor wiring repeats a symbol");
            }
            seen[target] = true;
            forward[contact] = target as u8;
            backward[target] = contact as u8;
            contact += 1;
        }

        RotorWiringTable { forward, backward }
    }

    /// Forward substitution by contact index.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub fn forward_index(&self, index: usize) -> usize {
        self.forward[index] as usize
    }

    /// Inverse substitution by contact index.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub fn backward_index(&self, index: usize) -> usize {
        self.backward[index] as usize
    }

    /// Forward substitution of a letter. Returns `None` outside `A..=Z`.
    pub fn forward(&self, symbol: char) -> Option<char> {
        alphabet::index_of(symbol).map(|i| alphabet::symbol_at(self.forward_index(i)))
    }

    /// Inverse substitution of a letter. Returns `None` outside `A..=Z`.
    pub fn backward(&self, symbol: char) -> Option<char> {
        alphabet::index_of(symbol).map(|i| alphabet::symbol_at(self.backward_index(i)))
    }

    /// Returns the wiring as the 26-letter string it was built from.
    pub fn wiring(&self) -> String {
        self.forward
            .iter()
            .map(|&i| alphabet::symbol_at(i as usize))
            .collect()
    }
}

impl fmt::Debug for RotorWiringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RotorWiringTable")
            .field(&self.wiring())
            .finish()
    }
}

/// Names of the predefined rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorName {
    I,
    II,
    III,
}

impl RotorName {
    /// Default left-to-right slot assignment: slot 0 holds Rotor I.
    pub const DEFAULT_ORDER: [RotorName; 3] = [RotorName::I, RotorName::II, RotorName::III];

    /// Returns the canonical wiring table for this rotor.
    pub fn wiring(self) -> RotorWiringTable {
        match self {
            RotorName::I => ROTOR_I,
            RotorName::II => ROTOR_II,
            RotorName::III => ROTOR_III,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RotorName::I => "I",
            RotorName::II => "II",
            RotorName::III => "III",
        }
    }
}

impl fmt::Display for RotorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotorName {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" | "1" => Ok(RotorName::I),
            "II" | "2" => Ok(RotorName::II),
            "III" | "3" => Ok(RotorName::III),
            _ => Err(RotorCryptError::UnknownRotor(s.to_string())),
        }
    }
}
