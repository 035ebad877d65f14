//! RotorMachine: the encryption engine.
//!
//! Orchestrates plugboard, three rotors, and reflector for each letter:
//!
//! ```text
//! plugboard -> rotor 0 -> rotor 1 -> rotor 2 -> reflector
//!           <- rotor 0 <- rotor 1 <- rotor 2 <-
//! plugboard
//! ```
//!
//! The machine holds only immutable wiring. Rotor offsets live in a
//! [`MachineState`] owned by the caller, so one machine can serve any
//! number of independent messages, including from several threads.

use crate::alphabet::{self, shift, unshift};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{MachineState, RotorName, RotorWiringTable, NUM_ROTORS};

/// Three-rotor cipher machine with an optional plugboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorMachine {
    rotors: [RotorWiringTable; NUM_ROTORS],
    reflector: Reflector,
    plugboard: Option<Plugboard>,
}

impl Default for RotorMachine {
    /// Rotors I, II, III in slots 0, 1, 2, mirror reflector, no plugboard.
    fn default() -> Self {
        Self::new(RotorName::DEFAULT_ORDER.map(RotorName::wiring), Reflector::default())
    }
}

impl RotorMachine {
    /// Creates a machine from three wiring tables (slot 0 first) and a reflector.
    ///
    /// All components are validated when they are built, so assembling
    /// them cannot fail.
    pub fn new(rotors: [RotorWiringTable; NUM_ROTORS], reflector: Reflector) -> Self {
        log::debug!("Rotor machine assembled with wirings {:?}", rotors);
        RotorMachine {
            rotors,
            reflector,
            plugboard: None,
        }
    }

    /// Returns this machine with a plugboard inserted.
    ///
    /// An empty plugboard is dropped, since it would not change any letter.
    #[must_use]
    pub fn with_plugboard(mut self, plugboard: Plugboard) -> Self {
        if plugboard.is_empty() {
            self.plugboard = None;
        } else {
            log::debug!("Plugboard leads: {:?}", plugboard.pairs());
            self.plugboard = Some(plugboard);
        }
        self
    }

    /// Wiring table in the given slot.
    ///
    /// # Panics
    /// Panics if `slot >= 3`.
    pub fn rotor(&self, slot: usize) -> &RotorWiringTable {
        &self.rotors[slot]
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> Option<&Plugboard> {
        self.plugboard.as_ref()
    }

    /// Encodes a message starting from `state`.
    ///
    /// Letters are upper-cased, the rotors step once, and the letter is
    /// enciphered with the stepped offsets. Any other character is copied
    /// through unchanged and does not step the rotors.
    ///
    /// # Returns
    /// The encoded text and the state after the last letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{MachineState, RotorMachine};
    ///
    /// let machine = RotorMachine::default();
    /// let start = MachineState::new([0, 0, 0]);
    ///
    /// let (cipher, end) = machine.encode("Hello, World!", start);
    /// assert_eq!(cipher, "DDVEE, NXUTZ!");
    /// assert_eq!(end.offsets(), [10, 0, 0]);
    ///
    /// let (plain, _) = machine.decode(&cipher, start);
    /// assert_eq!(plain, "HELLO, WORLD!");
    /// ```
    pub fn encode(&self, message: &str, state: MachineState) -> (String, MachineState) {
        let mut state = state;
        let result = message
            .chars()
            .map(|c| self.encode_symbol(c, &mut state))
            .collect();
        (result, state)
    }

    /// Decodes a message. Identical to [`encode`](Self::encode): the machine
    /// is its own inverse when started from the same state.
    pub fn decode(&self, message: &str, state: MachineState) -> (String, MachineState) {
        self.encode(message, state)
    }

    /// Encodes one character, stepping `state` first if it is a letter.
    pub fn encode_symbol(&self, symbol: char, state: &mut MachineState) -> char {
        let Some(index) = alphabet::normalize(symbol) else {
            return symbol;
        };
        *state = state.stepped();
        let out = self.encipher_index(index, state);
        log::trace!(
            "{} -> {} at {}",
            alphabet::symbol_at(index),
            alphabet::symbol_at(out),
            state
        );
        alphabet::symbol_at(out)
    }

    /// Signal path for one contact index at fixed rotor offsets.
    fn encipher_index(&self, index: usize, state: &MachineState) -> usize {
        let mut idx = self.plug(index);

        for (slot, rotor) in self.rotors.iter().enumerate() {
            let o = state.offset(slot);
            idx = unshift(rotor.forward_index(shift(idx, o)), o);
        }

        idx = self.reflector.reflect(idx);

        for (slot, rotor) in self.rotors.iter().enumerate().rev() {
            let o = state.offset(slot);
            idx = unshift(rotor.backward_index(shift(idx, o)), o);
        }

        self.plug(idx)
    }

    #[inline]
    fn plug(&self, index: usize) -> usize {
        match &self.plugboard {
            Some(board) => board.swap_index(index),
            None => index,
        }
    }
}

/// Encodes `message` on the default machine (rotors I, II, III, mirror
/// reflector) from raw rotor offsets.
///
/// Offsets outside `0..26` wrap onto the wheel.
///
/// # Returns
/// The encoded text and the final offsets, slot 0 first.
///
/// # Examples
///
/// ```
/// let (cipher, positions) = rotorcrypt::encode("A", [0, 0, 0], None);
/// assert_eq!(cipher, "O");
/// assert_eq!(positions, [1, 0, 0]);
///
/// let (plain, _) = rotorcrypt::encode(&cipher, [0, 0, 0], None);
/// assert_eq!(plain, "A");
/// ```
pub fn encode(
    message: &str,
    initial_positions: [i32; NUM_ROTORS],
    plugboard: Option<&Plugboard>,
) -> (String, [u8; NUM_ROTORS]) {
    let mut machine = RotorMachine::default();
    if let Some(board) = plugboard {
        machine = machine.with_plugboard(*board);
    }
    let (result, state) = machine.encode(message, MachineState::new(initial_positions));
    (result, state.offsets())
}
