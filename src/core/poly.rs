// src/core/poly.rs
//
// The polyalphabetic family: shifts that vary per word or per letter.

use crate::core::rotor::rotate;
use crate::core::types::Direction;

/// Per-word shift cipher.
///
/// Words are whatever single spaces delimit; consecutive spaces produce
/// empty words, which are preserved (and still consume a slot in the
/// shift cycle). Word `i` is rotated wholesale by `shifts[i % len]`,
/// negated when decrypting. An empty shift list leaves the text
/// untouched.
pub fn multi_shift(text: &str, shifts: &[i32], direction: Direction) -> String {
    if shifts.is_empty() {
        return text.to_string();
    }
    text.split(' ')
        .enumerate()
        .map(|(i, word)| {
            let shift = direction.signed(shifts[i % shifts.len()]);
            word.chars().map(|c| rotate(c, shift)).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword (Vigenère) cipher.
///
/// The keyword is uppercased and consumed cyclically: each alphabetic
/// input character takes the next keyword letter's alphabet position
/// (A=0, B=1, ...) as its shift. Non-alphabetic characters pass through
/// without advancing the keyword cursor, and the cursor runs across the
/// whole text rather than resetting per word. An empty keyword leaves
/// the text untouched.
///
/// Callers are expected to supply an alphabetic keyword; anything else
/// still transforms totally, just with shifts derived from the raw byte
/// values.
pub fn keyword_cipher(text: &str, keyword: &str, direction: Direction) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    let key = keyword.to_ascii_uppercase();
    let key = key.as_bytes();
    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let k = key[cursor % key.len()] as i32 - 'A' as i32;
                cursor += 1;
                rotate(c, direction.signed(k))
            } else {
                c
            }
        })
        .collect()
}

/// Custom shift-pattern cipher.
///
/// Like the keyword cipher, but the per-letter shifts come from a
/// numeric sequence instead of keyword letters: alphabetic character
/// `n` is rotated by `pattern[n % len]` (negated when decrypting), and
/// only alphabetic characters advance the pattern cursor. An empty
/// pattern leaves the text untouched.
pub fn pattern_cipher(text: &str, pattern: &[i32], direction: Direction) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = direction.signed(pattern[cursor % pattern.len()]);
                cursor += 1;
                rotate(c, shift)
            } else {
                c
            }
        })
        .collect()
}
