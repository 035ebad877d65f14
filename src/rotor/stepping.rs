//! Rotor stepping and the caller-held machine state.
//!
//! The three rotor offsets advance like an odometer: slot 0 moves on every
//! letter, slot 1 moves when slot 0 wraps to zero, slot 2 moves when slot 1
//! wraps to zero.

use std::fmt;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::RotorCryptError;

/// Number of rotor slots in the machine.
pub const NUM_ROTORS: usize = 3;

/// Rotational offsets of the three rotors at a point in time.
///
/// Slot 0 is the fast rotor, stepped on every letter. Offsets are always
/// kept in `0..26`. The machine never stores a `MachineState`; callers own
/// it and pass it into every encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MachineState {
    offsets: [u8; NUM_ROTORS],
}

impl MachineState {
    /// Creates a state from raw offsets, reducing each one onto the wheel.
    ///
    /// Negative and out-of-range values wrap modulo 26 instead of failing,
    /// since an offset is a position on a circle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::MachineState;
    ///
    /// assert_eq!(MachineState::new([27, -1, 0]).offsets(), [1, 25, 0]);
    /// ```
    pub fn new(offsets: [i32; NUM_ROTORS]) -> Self {
        let size = ALPHABET_SIZE as i32;
        MachineState {
            offsets: offsets.map(|o| o.rem_euclid(size) as u8),
        }
    }

    /// Parses one letter per rotor slot, slot 0 first (`"AAZ"` puts slot 2 at 25).
    ///
    /// Lower-case letters are accepted.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidRotorSettings`] unless exactly 3 characters are given.
    /// - [`RotorCryptError::InvalidPositionSymbol`] for a non-letter.
    pub fn from_letters(letters: &str) -> Result<Self, RotorCryptError> {
        let count = letters.chars().count();
        if count != NUM_ROTORS {
            return Err(RotorCryptError::InvalidRotorSettings(count));
        }
        let mut offsets = [0u8; NUM_ROTORS];
        for (slot, c) in letters.chars().enumerate() {
            offsets[slot] =
                alphabet::normalize(c).ok_or(RotorCryptError::InvalidPositionSymbol(c))? as u8;
        }
        Ok(MachineState { offsets })
    }

    /// Returns the offsets, slot 0 first.
    pub fn offsets(&self) -> [u8; NUM_ROTORS] {
        self.offsets
    }

    /// Offset of one rotor slot as a contact shift.
    ///
    /// # Panics
    /// Panics if `slot >= 3`.
    #[inline]
    pub fn offset(&self, slot: usize) -> usize {
        self.offsets[slot] as usize
    }

    /// Renders the offsets as letters, slot 0 first.
    pub fn to_letters(&self) -> String {
        self.offsets
            .iter()
            .map(|&o| alphabet::symbol_at(o as usize))
            .collect()
    }

    /// Returns the state after one step of the carry chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::MachineState;
    ///
    /// let state = MachineState::new([25, 25, 0]);
    /// assert_eq!(state.stepped().offsets(), [0, 0, 1]);
    /// ```
    #[must_use]
    pub fn stepped(self) -> Self {
        MachineState {
            offsets: step(self.offsets),
        }
    }

    /// Returns the state after `count` steps.
    #[must_use]
    pub fn advanced(self, count: usize) -> Self {
        (0..count).fold(self, |state, _| state.stepped())
    }
}

impl From<[u8; NUM_ROTORS]> for MachineState {
    fn from(offsets: [u8; NUM_ROTORS]) -> Self {
        MachineState::new(offsets.map(i32::from))
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

/// Odometer carry rule over raw offsets.
///
/// Increments slot 0; a wrap to zero carries into slot 1, and a wrap of
/// slot 1 carries into slot 2. Slot 2 wraps silently. Offsets of 26 or
/// more are reduced onto the wheel before stepping.
pub fn step(positions: [u8; NUM_ROTORS]) -> [u8; NUM_ROTORS] {
    let size = ALPHABET_SIZE as u8;
    let mut next = positions.map(|o| o % size);
    for offset in next.iter_mut() {
        *offset = (*offset + 1) % size;
        if *offset != 0 {
            break;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_fast_rotor_only() {
        assert_eq!(step([0, 0, 0]), [1, 0, 0]);
        assert_eq!(step([12, 4, 7]), [13, 4, 7]);
    }

    #[test]
    fn test_step_single_carry() {
        assert_eq!(step([25, 0, 0]), [0, 1, 0]);
    }

    #[test]
    fn test_step_double_carry() {
        assert_eq!(step([25, 25, 0]), [0, 0, 1]);
    }

    #[test]
    fn test_step_full_wrap() {
        assert_eq!(step([25, 25, 25]), [0, 0, 0]);
    }

    #[test]
    fn test_step_middle_not_carried_without_wrap() {
        assert_eq!(step([24, 25, 3]), [25, 25, 3]);
    }

    #[test]
    fn test_step_out_of_range_offsets() {
        assert_eq!(step([255, 0, 0]), [22, 0, 0]);
        assert_eq!(step([51, 0, 0]), [0, 1, 0]);
        assert_eq!(step([0, 255, 26]), [1, 21, 0]);
        assert_eq!(
            step([255, 0, 0]),
            MachineState::new([255, 0, 0]).stepped().offsets()
        );
    }

    #[test]
    fn test_full_cycle_period() {
        let start = MachineState::new([3, 14, 15]);
        assert_eq!(start.advanced(26 * 26 * 26), start);
        assert_ne!(start.advanced(26 * 26 * 26 - 1), start);
    }

    #[test]
    fn test_new_normalizes() {
        assert_eq!(MachineState::new([26, 52, -27]).offsets(), [0, 0, 25]);
    }

    #[test]
    fn test_letters_roundtrip() {
        let state = MachineState::from_letters("qev").unwrap();
        assert_eq!(state.offsets(), [16, 4, 21]);
        assert_eq!(state.to_letters(), "QEV");
        assert_eq!(format!("{}", state), "QEV");
    }

    #[test]
    fn test_from_letters_errors() {
        assert_eq!(
            MachineState::from_letters("AB"),
            Err(RotorCryptError::InvalidRotorSettings(2))
        );
        assert_eq!(
            MachineState::from_letters("A1B"),
            Err(RotorCryptError::InvalidPositionSymbol('1'))
        );
    }
}
