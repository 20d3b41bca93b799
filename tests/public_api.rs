//! Integration tests for the public cipher API.
//!
//! Exercises the documented contract of every operation through the
//! crate's public surface: the five transformations, the engine facade,
//! and the serde shapes the front-ends rely on.

use cipher_core::core::caesar::{brute_force, decrypt_caesar, shift_cipher};
use cipher_core::core::poly::{keyword_cipher, multi_shift, pattern_cipher};
use cipher_core::core::rotor;
use cipher_core::{CipherEngine, CipherMode, CipherOutput, Direction, ShiftCandidate};

// ═══════════════════════════════════════════════════════════════════════
// Fixed shift cipher — round trips, periodicity, passthrough
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_concrete_vector() {
    assert_eq!(shift_cipher("Attack at Dawn", 3), "Dwwdfn dw Gdzq");
    assert_eq!(decrypt_caesar("Dwwdfn dw Gdzq", 3), "Attack at Dawn");
}

#[test]
fn caesar_round_trip_all_shifts() {
    let text = "Mixed CASE, digits 0189 and punctuation?!";
    for shift in -30..=56 {
        assert_eq!(
            decrypt_caesar(&shift_cipher(text, shift), shift),
            text,
            "round trip failed for shift={}",
            shift
        );
    }
}

#[test]
fn caesar_periodicity() {
    let text = "Periodic";
    for shift in [-3, 0, 7, 25] {
        assert_eq!(shift_cipher(text, shift), shift_cipher(text, shift + 26));
        assert_eq!(shift_cipher(text, shift), shift_cipher(text, shift - 26));
    }
}

#[test]
fn caesar_preserves_case_and_non_letters() {
    let text = "Ab9 -Zz!";
    let out = shift_cipher(text, 5);
    for (a, b) in text.chars().zip(out.chars()) {
        if a.is_ascii_alphabetic() {
            assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            assert_ne!(a, b, "shift 5 must move every letter");
        } else {
            assert_eq!(a, b, "non-letters must be untouched and in place");
        }
    }
}

#[test]
fn caesar_leaves_non_ascii_untouched() {
    assert_eq!(shift_cipher("naïve — déjà vu", 4), "reïzi — hénà zy");
}

// ═══════════════════════════════════════════════════════════════════════
// Brute force decoder — completeness and recovery
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn brute_force_is_complete_and_ascending() {
    let ciphertext = "Wkh vhfuhw lv rxw";
    let candidates = brute_force(ciphertext);
    assert_eq!(candidates.len(), 25);
    for (i, candidate) in candidates.iter().enumerate() {
        assert_eq!(candidate.shift, i as i32 + 1);
        assert_eq!(candidate.result, shift_cipher(ciphertext, -(i as i32 + 1)));
    }
}

#[test]
fn brute_force_contains_original_plaintext() {
    let plaintext = "The secret is out";
    let ciphertext = shift_cipher(plaintext, 3);
    let candidates = brute_force(&ciphertext);
    assert_eq!(candidates[2].result, plaintext);
    // Exactly one candidate matches for ordinary English text.
    let hits = candidates.iter().filter(|c| c.result == plaintext).count();
    assert_eq!(hits, 1);
}

#[test]
fn brute_force_never_tries_shift_zero() {
    let candidates = brute_force("identity would be cheating");
    assert!(candidates.iter().all(|c| c.shift != 0));
}

// ═══════════════════════════════════════════════════════════════════════
// Multi-shift cipher — word cycling
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn multi_shift_cycles_and_round_trips() {
    assert_eq!(
        multi_shift("AB CD EF", &[1, 2], Direction::Encrypt),
        "BC EF FG"
    );
    let text = "one two three four five";
    let shifts = [4, 9];
    let encrypted = multi_shift(text, &shifts, Direction::Encrypt);
    assert_eq!(multi_shift(&encrypted, &shifts, Direction::Decrypt), text);
}

#[test]
fn multi_shift_empty_list_is_identity() {
    assert_eq!(
        multi_shift("kept verbatim", &[], Direction::Encrypt),
        "kept verbatim"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Keyword cipher — cursor discipline
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn keyword_punctuation_does_not_consume_key() {
    assert_eq!(keyword_cipher("A, B", "AB", Direction::Encrypt), "A, C");
}

#[test]
fn keyword_round_trips_with_mixed_text() {
    let text = "Attack at dawn! Bring 3 torches.";
    let encrypted = keyword_cipher(text, "LEMON", Direction::Encrypt);
    assert_eq!(
        keyword_cipher(&encrypted, "LEMON", Direction::Decrypt),
        text
    );
}

#[test]
fn keyword_empty_is_identity() {
    assert_eq!(
        keyword_cipher("kept verbatim", "", Direction::Encrypt),
        "kept verbatim"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Pattern cipher — cursor discipline
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn pattern_mirrors_keyword_cursor_rules() {
    // Same text, equivalent shift sources: keyword "ABC" is pattern [0,1,2].
    let text = "Wait; for it...";
    assert_eq!(
        pattern_cipher(text, &[0, 1, 2], Direction::Encrypt),
        keyword_cipher(text, "ABC", Direction::Encrypt)
    );
}

#[test]
fn pattern_round_trips() {
    let text = "Pattern over words, not resetting";
    let pattern = [5, -2, 30];
    let encrypted = pattern_cipher(text, &pattern, Direction::Encrypt);
    assert_eq!(
        pattern_cipher(&encrypted, &pattern, Direction::Decrypt),
        text
    );
}

#[test]
fn pattern_empty_is_identity() {
    assert_eq!(
        pattern_cipher("kept verbatim", &[], Direction::Encrypt),
        "kept verbatim"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Engine facade — dispatch and serde shapes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn engine_round_trips_every_text_mode() {
    let engine = CipherEngine::new();
    let text = "Round trip through the facade";
    let modes = [
        CipherMode::Caesar { shift: 11 },
        CipherMode::MultiShift {
            shifts: vec![3, 5, 7],
        },
        CipherMode::Keyword {
            keyword: "CYBER".to_string(),
        },
        CipherMode::Pattern {
            pattern: vec![1, 3, 5],
        },
    ];
    for mode in &modes {
        let encrypted = match engine.apply(text, mode, Direction::Encrypt) {
            CipherOutput::Text(t) => t,
            CipherOutput::Candidates(_) => panic!("unexpected candidates from {:?}", mode),
        };
        assert_eq!(
            engine.apply(&encrypted, mode, Direction::Decrypt),
            CipherOutput::Text(text.to_string()),
            "round trip failed for {:?}",
            mode
        );
    }
}

#[test]
fn engine_brute_force_yields_candidates() {
    let engine = CipherEngine::new();
    let output = engine.apply("Khoor", &CipherMode::BruteForce, Direction::Decrypt);
    match output {
        CipherOutput::Candidates(candidates) => {
            assert_eq!(candidates.len(), 25);
            assert_eq!(candidates[2].result, "Hello");
        }
        CipherOutput::Text(_) => panic!("brute force must yield candidates"),
    }
}

#[test]
fn candidate_json_matches_frontend_shape() {
    let candidate = ShiftCandidate {
        shift: 3,
        result: "Attack at Dawn".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&candidate).unwrap(),
        r#"{"shift":3,"result":"Attack at Dawn"}"#
    );
}

#[test]
fn mode_deserializes_from_tagged_json() {
    let mode: CipherMode =
        serde_json::from_str(r#"{"cipher":"multi-shift","shifts":[3,5,7]}"#).unwrap();
    assert_eq!(
        mode,
        CipherMode::MultiShift {
            shifts: vec![3, 5, 7]
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Rotation helpers — shared normalization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rotor_normalization_is_total() {
    assert_eq!(rotor::normalize(0), 0);
    assert_eq!(rotor::normalize(-1), 25);
    assert_eq!(rotor::normalize(77), 25);
    assert_eq!(rotor::normalize(i32::MIN), 2);
    assert_eq!(rotor::rotate('z', 2), 'b');
}
