use derive_more::Display;
use num::{one, Integer, Signed};

/// Common errors for ciphers
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[display(fmt = "'a' = {} and 26 are not coprime", _0)]
    NotCoprime(i64),
    #[display(fmt = "columnar key is empty")]
    EmptyKey,
    #[display(fmt = "rail count must be at least 1, got {}", _0)]
    InvalidRails(usize),
}

impl std::error::Error for CipherError {}

/// Coarse classification of a [`CipherError`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[display(fmt = "invalid key")]
    InvalidKey,
    #[display(fmt = "invalid parameter")]
    InvalidParameter,
}

impl CipherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::NotCoprime(_) | CipherError::EmptyKey => ErrorKind::InvalidKey,
            CipherError::InvalidRails(_) => ErrorKind::InvalidParameter,
        }
    }
}

pub trait Cipher {
    fn encrypt(&self, message: &str) -> Result<String, CipherError>;
    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError>;
}

/// Modular multiplicative inverse of `a` over `m`, reduced into `[0, m)`.
/// Returns None if they are not coprime.
/// https://en.wikipedia.org/wiki/Modular_multiplicative_inverse
#[inline]
pub fn modular_multiplicative_inverse<A: Integer + Signed + Copy>(a: A, m: A) -> Option<A> {
    let gcd = a.extended_gcd(&m);
    if gcd.gcd != one() {
        None
    } else {
        Some(absmod(gcd.x, m))
    }
}

/// Non-negative remainder of `a` modulo a positive `m`.
#[inline]
pub fn absmod<A: Integer + Copy>(a: A, m: A) -> A {
    a.mod_floor(&m)
}

#[inline]
pub fn is_coprime<A: Integer + Copy>(a: A, m: A) -> bool {
    a.gcd(&m) == one()
}

#[cfg(test)]
mod cipher_test {
    use super::{absmod, is_coprime, modular_multiplicative_inverse, CipherError, ErrorKind};

    #[test]
    fn test_absmod() {
        assert_eq!(absmod(-2, 7), 5);
        assert_eq!(absmod(-9, 7), 5);
        assert_eq!(absmod(-51, 7), 5);
        assert_eq!(absmod(29, 26), 3);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(modular_multiplicative_inverse(5i64, 26), Some(21));
        assert_eq!(modular_multiplicative_inverse(25i64, 26), Some(25));
        assert_eq!(modular_multiplicative_inverse(13i64, 26), None);
        assert_eq!(modular_multiplicative_inverse(0i64, 26), None);
        for a in (1..26i64).filter(|&a| is_coprime(a, 26)) {
            let inv = modular_multiplicative_inverse(a, 26).unwrap();
            assert_eq!((a * inv) % 26, 1);
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CipherError::NotCoprime(2).kind(), ErrorKind::InvalidKey);
        assert_eq!(CipherError::EmptyKey.kind(), ErrorKind::InvalidKey);
        assert_eq!(CipherError::InvalidRails(0).kind(), ErrorKind::InvalidParameter);
        assert_eq!(
            CipherError::NotCoprime(13).to_string(),
            "'a' = 13 and 26 are not coprime"
        );
    }
}
