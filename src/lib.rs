//! Three-rotor electromechanical cipher machine.
//!
//! A polyalphabetic substitution cipher built from three rotating wired
//! disks, an optional plugboard, and a reflector that sends the signal back
//! through the rotors. Because the reflector pairs contacts and never maps a
//! contact to itself, the whole machine is self-inverse: encoding the
//! ciphertext from the same starting positions recovers the plaintext.
//!
//! # Architecture
//!
//! ```text
//! RotorWiringTable  (fixed permutation, forward + backward lookup)
//!     × 3, offset by MachineState (odometer stepping before every letter)
//! Reflector         (involution without fixed points, i -> 25 - i)
//! Plugboard         (optional letter pairs, applied on entry and exit)
//! RotorMachine      (signal path + per-letter stepping across a message)
//! ```
//!
//! The machine owns no rotor state. Callers pass a [`MachineState`] into
//! every encode call and receive the advanced state back.
//!
//! # Examples
//!
//! Encode and decode a message:
//!
//! ```
//! use rotorcrypt::{MachineState, RotorMachine};
//!
//! let machine = RotorMachine::default();
//! let start = MachineState::from_letters("DHL").unwrap();
//!
//! let (cipher, _) = machine.encode("ATTACK AT DAWN", start);
//! assert_ne!(cipher, "ATTACK AT DAWN");
//!
//! let (plain, _) = machine.decode(&cipher, start);
//! assert_eq!(plain, "ATTACK AT DAWN");
//! ```
//!
//! With a plugboard:
//!
//! ```
//! use rotorcrypt::{MachineState, Plugboard, RotorMachine};
//!
//! let board = Plugboard::from_leads("SZ GT DV KU").unwrap();
//! let machine = RotorMachine::default().with_plugboard(board);
//!
//! let (cipher, end) = machine.encode("ATTACKATDAWN", MachineState::default());
//! assert_eq!(cipher, "OHFPXSVCOMLR");
//! assert_eq!(end.to_letters(), "MAA");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

mod machine;

pub use error::RotorCryptError;
pub use machine::{encode, RotorMachine};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{MachineState, RotorName, RotorWiringTable};
