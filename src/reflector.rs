//! Reflector: the fixed turnaround disk between the two rotor passes.

use crate::alphabet::ALPHABET_SIZE;
use crate::error::RotorCryptError;

/// Involutive, fixed-point-free map over contact indices.
///
/// The default reflector mirrors the alphabet (`i -> 25 - i`). Because
/// `25 - i == i` has no integer solution it never maps a contact to itself,
/// so a letter can never encrypt to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    map: [u8; ALPHABET_SIZE],
}

/// The mirror reflector, `reflect(i) = 25 - i`.
pub const MIRROR: Reflector = Reflector::mirror();

impl Reflector {
    /// Builds the mirror reflector.
    pub const fn mirror() -> Self {
        let mut map = [0u8; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            map[i] = (ALPHABET_SIZE - 1 - i) as u8;
            i += 1;
        }
        Reflector { map }
    }

    /// Builds a reflector from an explicit contact table.
    ///
    /// # Errors
    /// - [`RotorCryptError::ReflectorFixedPoint`] if some contact maps to itself.
    /// - [`RotorCryptError::ReflectorNotInvolution`] if some contact is out of range
    ///   or `map[map[i]] != i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Reflector;
    ///
    /// let mut swapped = [0usize; 26];
    /// for i in 0..26 {
    ///     swapped[i] = i ^ 1;
    /// }
    /// assert!(Reflector::new(swapped).is_ok());
    ///
    /// let identity: [usize; 26] = std::array::from_fn(|i| i);
    /// assert!(Reflector::new(identity).is_err());
    /// ```
    pub fn new(map: [usize; ALPHABET_SIZE]) -> Result<Self, RotorCryptError> {
        for (i, &target) in map.iter().enumerate() {
            if target >= ALPHABET_SIZE {
                return Err(RotorCryptError::ReflectorNotInvolution(i));
            }
            if target == i {
                return Err(RotorCryptError::ReflectorFixedPoint(i));
            }
            if map[target] != i {
                return Err(RotorCryptError::ReflectorNotInvolution(i));
            }
        }
        Ok(Reflector {
            map: map.map(|t| t as u8),
        })
    }

    /// Reflects a contact index.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub fn reflect(&self, index: usize) -> usize {
        self.map[index] as usize
    }
}

impl Default for Reflector {
    fn default() -> Self {
        MIRROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_values() {
        assert_eq!(MIRROR.reflect(0), 25);
        assert_eq!(MIRROR.reflect(25), 0);
        assert_eq!(MIRROR.reflect(12), 13);
    }

    #[test]
    fn test_mirror_involution_no_fixed_point() {
        for i in 0..ALPHABET_SIZE {
            assert_eq!(MIRROR.reflect(MIRROR.reflect(i)), i);
            assert_ne!(MIRROR.reflect(i), i);
        }
    }

    #[test]
    fn test_mirror_passes_validation() {
        let table: [usize; ALPHABET_SIZE] = std::array::from_fn(|i| MIRROR.reflect(i));
        assert_eq!(Reflector::new(table).unwrap(), MIRROR);
    }

    #[test]
    fn test_rejects_fixed_point() {
        let mut table: [usize; ALPHABET_SIZE] = std::array::from_fn(|i| i ^ 1);
        table[4] = 4;
        table[5] = 5;
        assert_eq!(
            Reflector::new(table),
            Err(RotorCryptError::ReflectorFixedPoint(4))
        );
    }

    #[test]
    fn test_rejects_non_involution() {
        // 0 -> 1 -> 2 -> 0 is a cycle, not a pairing.
        let mut table: [usize; ALPHABET_SIZE] = std::array::from_fn(|i| i ^ 1);
        table[0] = 1;
        table[1] = 2;
        table[2] = 0;
        assert_eq!(
            Reflector::new(table),
            Err(RotorCryptError::ReflectorNotInvolution(0))
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut table: [usize; ALPHABET_SIZE] = std::array::from_fn(|i| i ^ 1);
        table[7] = 30;
        assert_eq!(
            Reflector::new(table),
            Err(RotorCryptError::ReflectorNotInvolution(7))
        );
    }
}
