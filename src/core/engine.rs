use crate::core::caesar::{brute_force, decrypt_caesar, shift_cipher};
use crate::core::poly::{keyword_cipher, multi_shift, pattern_cipher};
use crate::core::types::{CipherMode, CipherOutput, Direction};

/// Stateless facade over the five cipher operations.
///
/// Every call is a pure function of its arguments; the engine holds no
/// state and is freely shareable across threads.
pub struct CipherEngine;

impl CipherEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs the operation selected by `mode` over `text`.
    ///
    /// [`CipherMode::BruteForce`] always decrypts (the decoder exists to
    /// reverse an unknown shift) and ignores `direction`; every other
    /// mode honors it. Gating brute force to a decrypt-mode UI is a
    /// front-end concern.
    pub fn apply(&self, text: &str, mode: &CipherMode, direction: Direction) -> CipherOutput {
        match mode {
            CipherMode::Caesar { shift } => CipherOutput::Text(match direction {
                Direction::Encrypt => shift_cipher(text, *shift),
                Direction::Decrypt => decrypt_caesar(text, *shift),
            }),
            CipherMode::BruteForce => CipherOutput::Candidates(brute_force(text)),
            CipherMode::MultiShift { shifts } => {
                CipherOutput::Text(multi_shift(text, shifts, direction))
            }
            CipherMode::Keyword { keyword } => {
                CipherOutput::Text(keyword_cipher(text, keyword, direction))
            }
            CipherMode::Pattern { pattern } => {
                CipherOutput::Text(pattern_cipher(text, pattern, direction))
            }
        }
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}
