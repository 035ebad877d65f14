//! Plugboard: optional pairwise letter swap at signal entry and exit.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::RotorCryptError;

/// Most leads a plugboard can hold (each lead uses two letters).
pub const MAX_LEADS: usize = ALPHABET_SIZE / 2;

/// Self-inverse letter swap built from unordered pairs.
///
/// Unconnected letters map to themselves. Every connected letter belongs
/// to exactly one lead, which keeps `swap(swap(x)) == x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; ALPHABET_SIZE],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard::new()
    }
}

impl Plugboard {
    /// Creates an empty plugboard (every letter maps to itself).
    pub fn new() -> Self {
        Plugboard {
            map: std::array::from_fn(|i| i as u8),
        }
    }

    /// Builds a plugboard from letter pairs.
    ///
    /// # Errors
    /// See [`add_lead`](Self::add_lead).
    pub fn from_pairs<I>(pairs: I) -> Result<Self, RotorCryptError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut board = Plugboard::new();
        for (a, b) in pairs {
            board.add_lead(a, b)?;
        }
        Ok(board)
    }

    /// Builds a plugboard from whitespace-separated two-letter leads.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedPlugPair`] for a lead that is not two
    /// characters, otherwise see [`add_lead`](Self::add_lead).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Plugboard;
    ///
    /// let board = Plugboard::from_leads("SZ GT DV KU").unwrap();
    /// assert_eq!(board.swap('K'), 'U');
    /// assert_eq!(board.swap('U'), 'K');
    /// assert_eq!(board.swap('A'), 'A');
    ///
    /// assert!(Plugboard::from_leads("AB BC").is_err());
    /// ```
    pub fn from_leads(leads: &str) -> Result<Self, RotorCryptError> {
        let mut board = Plugboard::new();
        for lead in leads.split_whitespace() {
            let mut chars = lead.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => board.add_lead(a, b)?,
                _ => return Err(RotorCryptError::MalformedPlugPair(lead.to_string())),
            }
        }
        Ok(board)
    }

    /// Connects two letters. Lower-case letters are accepted.
    ///
    /// Adding a lead that already exists (in either order) is a no-op.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidPlugSymbol`] for a non-letter.
    /// - [`RotorCryptError::PlugSelfPair`] if both ends are the same letter.
    /// - [`RotorCryptError::PlugAlreadyUsed`] if either letter is already
    ///   connected to a different letter.
    pub fn add_lead(&mut self, a: char, b: char) -> Result<(), RotorCryptError> {
        let ia = alphabet::normalize(a).ok_or(RotorCryptError::InvalidPlugSymbol(a))?;
        let ib = alphabet::normalize(b).ok_or(RotorCryptError::InvalidPlugSymbol(b))?;
        if ia == ib {
            return Err(RotorCryptError::PlugSelfPair(alphabet::symbol_at(ia)));
        }
        if self.swap_index(ia) == ib {
            return Ok(());
        }
        for i in [ia, ib] {
            if self.swap_index(i) != i {
                return Err(RotorCryptError::PlugAlreadyUsed(alphabet::symbol_at(i)));
            }
        }
        self.map[ia] = ib as u8;
        self.map[ib] = ia as u8;
        Ok(())
    }

    /// Swaps a contact index.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub fn swap_index(&self, index: usize) -> usize {
        self.map[index] as usize
    }

    /// Swaps a letter. Characters outside `A..=Z` are returned unchanged.
    pub fn swap(&self, symbol: char) -> char {
        match alphabet::index_of(symbol) {
            Some(i) => alphabet::symbol_at(self.swap_index(i)),
            None => symbol,
        }
    }

    /// Returns the connected pairs, each ordered and listed once.
    pub fn pairs(&self) -> Vec<(char, char)> {
        (0..ALPHABET_SIZE)
            .filter(|&i| self.swap_index(i) > i)
            .map(|i| (alphabet::symbol_at(i), alphabet::symbol_at(self.swap_index(i))))
            .collect()
    }

    /// Number of leads plugged in.
    pub fn num_leads(&self) -> usize {
        self.pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_leads() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity() {
        let board = Plugboard::new();
        for i in 0..ALPHABET_SIZE {
            assert_eq!(board.swap_index(i), i);
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_leads_swap_both_ways() {
        let board = Plugboard::from_leads("SZ GT DV KU").unwrap();
        assert_eq!(board.swap('K'), 'U');
        assert_eq!(board.swap('S'), 'Z');
        assert_eq!(board.swap('Z'), 'S');
        assert_eq!(board.swap('A'), 'A');
        assert_eq!(board.num_leads(), 4);
    }

    #[test]
    fn test_swap_is_involution() {
        let board = Plugboard::from_leads("AQ BW CE DR FT").unwrap();
        for i in 0..ALPHABET_SIZE {
            assert_eq!(board.swap_index(board.swap_index(i)), i);
        }
    }

    #[test]
    fn test_swap_passes_non_letters() {
        let board = Plugboard::from_leads("AB").unwrap();
        assert_eq!(board.swap('1'), '1');
        assert_eq!(board.swap(' '), ' ');
    }

    #[test]
    fn test_pairs_listing() {
        let board = Plugboard::from_pairs([('z', 's'), ('U', 'K')]).unwrap();
        assert_eq!(board.pairs(), vec![('K', 'U'), ('S', 'Z')]);
    }

    #[test]
    fn test_duplicate_lead_is_noop() {
        let board = Plugboard::from_pairs([('A', 'B'), ('B', 'A')]).unwrap();
        assert_eq!(board.num_leads(), 1);
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert_eq!(
            Plugboard::from_leads("AB BC"),
            Err(RotorCryptError::PlugAlreadyUsed('B'))
        );
    }

    #[test]
    fn test_rejects_self_pair() {
        assert_eq!(
            Plugboard::from_pairs([('q', 'Q')]),
            Err(RotorCryptError::PlugSelfPair('Q'))
        );
    }

    #[test]
    fn test_rejects_malformed_lead() {
        assert_eq!(
            Plugboard::from_leads("ABC"),
            Err(RotorCryptError::MalformedPlugPair("ABC".to_string()))
        );
        assert_eq!(
            Plugboard::from_leads("A1"),
            Err(RotorCryptError::InvalidPlugSymbol('1'))
        );
    }

    #[test]
    fn test_full_board() {
        let board = Plugboard::from_leads("AB CD EF GH IJ KL MN OP QR ST UV WX YZ").unwrap();
        assert_eq!(board.num_leads(), MAX_LEADS);
    }
}
