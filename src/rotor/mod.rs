//! Rotor subsystem: wiring tables and the stepping mechanism.

pub mod stepping;
pub mod wiring;

pub use stepping::{step, MachineState, NUM_ROTORS};
pub use wiring::{RotorName, RotorWiringTable, ROTOR_I, ROTOR_II, ROTOR_III};
