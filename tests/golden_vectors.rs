//! Frozen golden vectors for rotors I, II, III with the mirror reflector.
//!
//! All expected values are snapshots: any change in output means the
//! signal path or stepping order changed.

use rotorcrypt::{MachineState, Plugboard, RotorMachine};

/// (message, start offsets, expected output, expected end offsets)
const VECTORS: [(&str, [i32; 3], &str, [u8; 3]); 6] = [
    ("A", [0, 0, 0], "O", [1, 0, 0]),
    ("HELLOWORLD", [0, 0, 0], "DDVEENXUTZ", [10, 0, 0]),
    ("Hello, World!", [0, 0, 0], "DDVEE, NXUTZ!", [10, 0, 0]),
    ("A1B", [0, 0, 0], "O1J", [2, 0, 0]),
    ("A", [25, 25, 25], "W", [0, 0, 0]),
    ("ATTACKATDAWN", [3, 7, 11], "KWISVSOYUGBC", [15, 7, 11]),
];

// ═══════════════════════════════════════════════════════════════════════
// Encoding snapshots
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn golden_vectors_encode() {
    let _ = pretty_env_logger::try_init();
    let machine = RotorMachine::default();

    for (i, &(message, start, expected, end)) in VECTORS.iter().enumerate() {
        let (out, state) = machine.encode(message, MachineState::new(start));
        assert_eq!(out, expected, "output mismatch for vector[{}]", i);
        assert_eq!(state.offsets(), end, "end state mismatch for vector[{}]", i);
    }
}

#[test]
fn golden_vectors_decode() {
    let machine = RotorMachine::default();

    for (i, &(message, start, expected, _)) in VECTORS.iter().enumerate() {
        let (back, _) = machine.decode(expected, MachineState::new(start));
        assert_eq!(
            back,
            message.to_ascii_uppercase(),
            "decode mismatch for vector[{}]",
            i
        );
    }
}

#[test]
fn golden_single_letter_via_free_function() {
    let (out, positions) = rotorcrypt::encode("A", [0, 0, 0], None);
    assert_eq!(out, "O");
    assert_eq!(positions, [1, 0, 0]);

    let (back, _) = rotorcrypt::encode(&out, [0, 0, 0], None);
    assert_eq!(back, "A");
}

#[test]
fn golden_plugboard_vector() {
    let board = Plugboard::from_leads("SZ GT DV KU").unwrap();

    let (out, positions) = rotorcrypt::encode("ATTACKATDAWN", [0, 0, 0], Some(&board));
    assert_eq!(out, "OHFPXSVCOMLR");
    assert_eq!(positions, [12, 0, 0]);

    let (back, _) = rotorcrypt::encode(&out, [0, 0, 0], Some(&board));
    assert_eq!(back, "ATTACKATDAWN");
}

#[test]
fn golden_repeated_letter_differs() {
    let (out, _) = rotorcrypt::encode("AAAAA", [0, 0, 0], None);
    assert_eq!(out, "OLBPU");
}
