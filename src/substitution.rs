//! Letter-by-letter modular ciphers: Caesar, ROT13 and Affine.
//! Only ASCII letters are transformed; every other character stays in place.

use crate::{
    alphabet::{map_letters, ALPHABET_LEN},
    cipher::{absmod, modular_multiplicative_inverse, Cipher, CipherError},
};

const M: i64 = ALPHABET_LEN as i64;

/// Caesar cipher
/// https://en.wikipedia.org/wiki/Caesar_cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    /// shift reduced into [0, 26)
    shift: usize,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        Self {
            shift: absmod(shift, M) as usize,
        }
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    fn apply(&self, text: &str, shift: usize) -> String {
        map_letters(text, |p| p + shift)
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        Ok(self.apply(message, self.shift))
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        Ok(self.apply(cipher_text, ALPHABET_LEN - self.shift))
    }
}

pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    let cipher = CaesarCipher::new(shift);
    cipher.apply(text, cipher.shift)
}

pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    let cipher = CaesarCipher::new(shift);
    cipher.apply(text, ALPHABET_LEN - cipher.shift)
}

/// ROT13 is its own inverse, so encrypt and decrypt coincide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rot13;

impl Cipher for Rot13 {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        Ok(rot13(message))
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        Ok(rot13(cipher_text))
    }
}

pub fn rot13(text: &str) -> String {
    caesar_encrypt(text, 13)
}

/// Affine cipher
/// https://en.wikipedia.org/wiki/Affine_cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineCipher {
    /// modular multiplicative inverse of 'a' over 26
    inverse_a: usize,
    /// affine 'a' param
    a: usize,
    /// affine 'b' param
    b: usize,
}

impl AffineCipher {
    /// Both parameters are reduced mod 26. Fails unless `a` is coprime with 26,
    /// for encryption as well as decryption, since a lossy key cannot round-trip.
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        let a = absmod(a, M);
        let inverse_a =
            modular_multiplicative_inverse(a, M).ok_or(CipherError::NotCoprime(a))?;
        Ok(Self {
            inverse_a: inverse_a as usize,
            a: a as usize,
            b: absmod(b, M) as usize,
        })
    }

    pub fn a(&self) -> usize {
        self.a
    }

    pub fn b(&self) -> usize {
        self.b
    }
}

impl Cipher for AffineCipher {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        Ok(map_letters(message, |x| self.a * x + self.b))
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        // y + (26 - b) === y - b (mod 26)
        let inverse_b = ALPHABET_LEN - self.b;
        Ok(map_letters(cipher_text, |y| self.inverse_a * (y + inverse_b)))
    }
}

pub fn affine_encrypt(text: &str, a: i64, b: i64) -> Result<String, CipherError> {
    AffineCipher::new(a, b)?.encrypt(text)
}

pub fn affine_decrypt(text: &str, a: i64, b: i64) -> Result<String, CipherError> {
    AffineCipher::new(a, b)?.decrypt(text)
}

#[cfg(test)]
mod caesar_cipher_test {
    use super::{caesar_decrypt, caesar_encrypt, rot13, CaesarCipher, Rot13};
    use crate::cipher::Cipher;

    const MESSAGE: &str = "Hello, World! 123 zebra";

    #[test]
    fn test_caesar_known_vector() {
        assert_eq!(caesar_encrypt("HELLO", 3), "KHOOR");
        assert_eq!(caesar_decrypt("KHOOR", 3), "HELLO");
        assert_eq!(caesar_encrypt("xyz", 3), "abc");
    }

    #[test]
    fn test_caesar_symmetric() {
        for shift in [i64::MIN, -53, -1, 0, 1, 7, 25, 26, 100, i64::MAX] {
            let cipher_text = caesar_encrypt(MESSAGE, shift);
            assert_eq!(caesar_decrypt(&cipher_text, shift), MESSAGE);
        }
    }

    #[test]
    fn test_caesar_negative_shift_is_inverse() {
        assert_eq!(caesar_encrypt("KHOOR", -3), "HELLO");
        assert_eq!(caesar_encrypt(MESSAGE, 29), caesar_encrypt(MESSAGE, 3));
        // i64::MIN = -(2^63), which is 18 mod 26
        assert_eq!(caesar_decrypt("y", i64::MIN), "g");
        assert_eq!(
            caesar_decrypt(MESSAGE, i64::MIN),
            CaesarCipher::new(i64::MIN).decrypt(MESSAGE).unwrap()
        );
    }

    #[test]
    fn test_caesar_struct_matches_functions() {
        let cipher = CaesarCipher::new(-3);
        assert_eq!(cipher.shift(), 23);
        assert_eq!(cipher.encrypt(MESSAGE).unwrap(), caesar_encrypt(MESSAGE, -3));
        assert_eq!(cipher.decrypt(MESSAGE).unwrap(), caesar_decrypt(MESSAGE, -3));
    }

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Hello"), "Uryyb");
        assert_eq!(rot13(&rot13(MESSAGE)), MESSAGE);
        assert_eq!(
            Rot13.encrypt(MESSAGE).unwrap(),
            Rot13.decrypt(MESSAGE).unwrap()
        );
    }

    #[test]
    fn test_non_letters_unchanged() {
        let cipher_text = caesar_encrypt("a1 b2, c3!", 5);
        assert_eq!(cipher_text, "f1 g2, h3!");
        assert_eq!(caesar_encrypt("", 5), "");
    }
}
