//! Chi-squared scoring against English letter frequencies and exhaustive
//! key search over the Caesar and Affine key spaces.
//!
//! Searches only rank candidates. Applying a chosen key is left to the caller.

use crate::{
    alphabet::{letter_index, ALPHABET_LEN},
    cipher::{is_coprime, Cipher},
    frequency::{frequency_analysis, LetterFrequency},
    substitution::{caesar_decrypt, AffineCipher},
};
use log::{debug, trace, warn};
use std::cmp::Ordering;

/// Expected share of each letter A..Z in English text, in percent.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Expected counts below this are treated as zero.
const EPSILON: f64 = 1e-9;
/// Added for each letter observed where the reference expects none.
const IMPOSSIBLE_LETTER_PENALTY: f64 = 1e6;

const M: i64 = ALPHABET_LEN as i64;

/// Chi-squared distance of `freq` from a reference distribution given in percent.
pub fn chi_squared_against(freq: &LetterFrequency, reference: &[f64; ALPHABET_LEN]) -> f64 {
    let total = freq.total() as f64;
    freq.counts()
        .iter()
        .zip(reference)
        .map(|(&observed, &pct)| {
            let observed = observed as f64;
            let expected = total * pct / 100.0;
            if expected < EPSILON {
                if observed > 0.0 {
                    IMPOSSIBLE_LETTER_PENALTY
                } else {
                    0.0
                }
            } else {
                (observed - expected).powi(2) / expected
            }
        })
        .sum()
}

/// Lower is more English-like.
pub fn chi_squared_score(freq: &LetterFrequency) -> f64 {
    chi_squared_against(freq, &ENGLISH_FREQUENCIES)
}

pub fn score_text(text: &str) -> f64 {
    chi_squared_score(&frequency_analysis(text))
}

/// A decryption attempt under one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<K> {
    pub key: K,
    pub score: f64,
    pub plaintext: String,
}

impl<K> Candidate<K> {
    fn evaluate(key: K, plaintext: String) -> Self {
        Self {
            score: score_text(&plaintext),
            key,
            plaintext,
        }
    }
}

/// Affine key as searched: `a` coprime with 26, `b` in [0, 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AffineKey {
    pub a: usize,
    pub b: usize,
}

/// Ascending score, ties broken by ascending key.
fn rank<K: Ord>(mut candidates: Vec<Candidate<K>>) -> Vec<Candidate<K>> {
    candidates.sort_by(|x, y| match x.score.total_cmp(&y.score) {
        Ordering::Equal => x.key.cmp(&y.key),
        ord => ord,
    });
    candidates
}

/// Decrypts under all 26 shifts and ranks the results.
pub fn bruteforce_caesar(cipher_text: &str) -> Vec<Candidate<usize>> {
    let candidates = (0..ALPHABET_LEN)
        .map(|shift| {
            let candidate = Candidate::evaluate(shift, caesar_decrypt(cipher_text, shift as i64));
            trace!("caesar shift {:>2}: {:.3}", shift, candidate.score);
            candidate
        })
        .collect();
    let ranked = rank(candidates);
    if let Some(best) = ranked.first() {
        debug!("caesar search: best shift {} scores {:.3}", best.key, best.score);
    }
    ranked
}

/// Decrypts under every `a` coprime with 26 and every `b`, 312 keys in all,
/// and ranks the results. Keys without an inverse are logged and skipped.
pub fn bruteforce_affine(cipher_text: &str) -> Vec<Candidate<AffineKey>> {
    let candidates: Vec<_> = (1..M)
        .filter(|&a| is_coprime(a, M))
        .flat_map(|a| (0..M).map(move |b| (a, b)))
        .filter_map(|(a, b)| {
            let cipher = AffineCipher::new(a, b)
                .map_err(|err| warn!("skipping affine key a={} b={}: {}", a, b, err))
                .ok()?;
            let plaintext = cipher.decrypt(cipher_text).ok()?;
            let key = AffineKey {
                a: cipher.a(),
                b: cipher.b(),
            };
            let candidate = Candidate::evaluate(key, plaintext);
            trace!("affine key {:?}: {:.3}", key, candidate.score);
            Some(candidate)
        })
        .collect();
    debug!("affine search evaluated {} keys", candidates.len());
    let ranked = rank(candidates);
    if let Some(best) = ranked.first() {
        debug!("affine search: best key {:?} scores {:.3}", best.key, best.score);
    }
    ranked
}

/// Guesses the Caesar shift by mapping the most frequent cipher letter onto 'E'.
/// None when the text has no letters.
pub fn suggest_caesar_shift(cipher_text: &str) -> Option<usize> {
    let top = frequency_analysis(cipher_text).most_frequent()?;
    let top = letter_index(top)?;
    let e = letter_index('E')?;
    Some((top + ALPHABET_LEN - e) % ALPHABET_LEN)
}
