// src/core/caesar.rs
use crate::core::rotor::rotate;
use crate::core::types::{Direction, ShiftCandidate};

/// Applies the fixed-shift (Caesar) cipher.
///
/// Total over any input: the shift is reduced to its canonical value
/// first, so 0, negative, and out-of-range shifts all behave as the
/// rotation they are congruent to. Non-alphabetic characters pass
/// through unchanged.
pub fn shift_cipher(text: &str, shift: i32) -> String {
    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Decrypts Caesar ciphertext that was produced with `shift`.
pub fn decrypt_caesar(text: &str, shift: i32) -> String {
    shift_cipher(text, Direction::Decrypt.signed(shift))
}

/// Tries all 25 non-zero shift magnitudes against `text`, assuming it
/// was encrypted with a positive shift in [1, 25].
///
/// Returns exactly 25 candidates in ascending shift order, whatever the
/// input (an empty string yields 25 empty results). Shift 0 is never
/// tried. No scoring or language detection is applied: surfacing the
/// candidates for a human to pick from is the caller's job.
pub fn brute_force(text: &str) -> Vec<ShiftCandidate> {
    (1..=25)
        .map(|shift| ShiftCandidate {
            shift,
            result: decrypt_caesar(text, shift),
        })
        .collect()
}
