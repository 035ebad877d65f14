//! Alphabet index arithmetic.
//!
//! All rotor, reflector and plugboard arithmetic happens on contact indices
//! in `0..26`. This module converts between those indices and the letters
//! `A..=Z`, and normalizes raw input characters.

/// Number of symbols (and contacts per rotor).
pub const ALPHABET_SIZE: usize = 26;

/// The ordered alphabet used for all index arithmetic.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the contact index of an upper-case letter, or `None` for
/// anything outside `A..=Z`.
///
/// # Examples
///
/// ```
/// use rotorcrypt::alphabet::index_of;
///
/// assert_eq!(index_of('A'), Some(0));
/// assert_eq!(index_of('Z'), Some(25));
/// assert_eq!(index_of('a'), None);
/// ```
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the letter at contact `index`.
///
/// # Panics
/// Panics if `index >= 26`. Callers always pass indices already reduced
/// modulo [`ALPHABET_SIZE`].
pub fn symbol_at(index: usize) -> char {
    ALPHABET[index] as char
}

/// Upper-cases ASCII letters and returns the contact index for them.
///
/// Returns `None` for digits, punctuation, whitespace and any non-ASCII
/// character; those pass through the machine untouched.
pub fn normalize(symbol: char) -> Option<usize> {
    index_of(symbol.to_ascii_uppercase())
}

/// Shifts a contact index by `offset` positions around the wheel.
#[inline]
pub(crate) fn shift(index: usize, offset: usize) -> usize {
    (index + offset) % ALPHABET_SIZE
}

/// Undoes [`shift`].
#[inline]
pub(crate) fn unshift(index: usize, offset: usize) -> usize {
    (index + ALPHABET_SIZE - offset % ALPHABET_SIZE) % ALPHABET_SIZE
}
