// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Which way a transformation runs. Decrypting is encrypting with the
/// shift negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// The shift actually applied for this direction.
    ///
    /// When decrypting, the shift is canonicalized to [0, 25] before
    /// negation so that `i32::MIN` cannot overflow.
    pub fn signed(self, shift: i32) -> i32 {
        match self {
            Direction::Encrypt => shift,
            Direction::Decrypt => -shift.rem_euclid(26),
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

/// Mode selector: which of the five operations to run, carrying its
/// parameters. Front-ends build one of these from their current widget
/// state and hand it to [`CipherEngine::apply`](crate::CipherEngine::apply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "kebab-case")]
pub enum CipherMode {
    /// Fixed-shift (Caesar) cipher.
    Caesar { shift: i32 },
    /// Exhaustive trial of all 25 non-zero shifts.
    BruteForce,
    /// Per-word shift, cycled from a list.
    MultiShift { shifts: Vec<i32> },
    /// Per-letter shift from a keyword's letters (Vigenère).
    Keyword { keyword: String },
    /// Per-letter shift, cycled from a numeric sequence.
    Pattern { pattern: Vec<i32> },
}

/// One brute-force decryption candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCandidate {
    pub shift: i32,
    pub result: String,
}

/// What an engine invocation produces: a single transformed string for
/// four of the modes, the 25-entry candidate set when brute forcing.
#[derive(Debug, Clone, PartialEq)]
pub enum CipherOutput {
    Text(String),
    Candidates(Vec<ShiftCandidate>),
}

impl CipherOutput {
    /// The transformed text, if this output carries one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CipherOutput::Text(text) => Some(text),
            CipherOutput::Candidates(_) => None,
        }
    }
}
