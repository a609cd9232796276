//! Classical ciphers for teaching: Caesar, ROT13, Affine, Rail Fence and
//! Columnar transposition, plus frequency analysis and chi-squared key search.
//!
//! None of these ciphers offer real confidentiality.

pub mod alphabet;
pub mod cipher;
pub mod cryptanalysis;
pub mod frequency;
pub mod substitution;
pub mod transposition;

pub use cipher::{Cipher, CipherError, ErrorKind};
pub use cryptanalysis::{
    bruteforce_affine, bruteforce_caesar, chi_squared_score, suggest_caesar_shift, AffineKey,
    Candidate, ENGLISH_FREQUENCIES,
};
pub use frequency::{frequency_analysis, LetterFrequency};
pub use substitution::{
    affine_decrypt, affine_encrypt, caesar_decrypt, caesar_encrypt, rot13, AffineCipher,
    CaesarCipher, Rot13,
};
pub use transposition::{
    columnar_decrypt, columnar_encrypt, rail_fence_decrypt, rail_fence_encrypt, ColumnarCipher,
    RailFenceCipher,
};
