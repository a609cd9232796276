//! Position-permutation ciphers. Every character, letter or not, takes a slot.

use crate::cipher::{Cipher, CipherError};
use log::trace;

/// Filler used to complete the last row of a columnar grid.
pub const PAD: char = ' ';

/// Row assigned to each text position by the zig-zag walk.
/// One rail maps every position to row 0.
pub fn zigzag_rows(len: usize, rails: usize) -> Vec<usize> {
    if rails <= 1 {
        return vec![0; len];
    }
    let cycle = 2 * (rails - 1);
    (0..len)
        .map(|i| {
            let r = i % cycle;
            if r < rails {
                r
            } else {
                cycle - r
            }
        })
        .collect()
}

/// `order[k]` is the plaintext position that lands at ciphertext position `k`:
/// positions grouped by rail top to bottom, left to right within a rail.
pub fn zigzag_permutation(len: usize, rails: usize) -> Vec<usize> {
    let rows = zigzag_rows(len, rails);
    let mut order: Vec<usize> = (0..len).collect();
    // stable, so positions keep their walk order inside a rail
    order.sort_by_key(|&i| rows[i]);
    order
}

/// Rail Fence cipher
/// https://en.wikipedia.org/wiki/Rail_fence_cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails == 0 {
            return Err(CipherError::InvalidRails(rails));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }
}

impl Cipher for RailFenceCipher {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = message.chars().collect();
        let order = zigzag_permutation(chars.len(), self.rails);
        Ok(order.into_iter().map(|i| chars[i]).collect())
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = cipher_text.chars().collect();
        let order = zigzag_permutation(chars.len(), self.rails);
        let mut restored = vec![PAD; chars.len()];
        for (ch, i) in chars.into_iter().zip(order) {
            restored[i] = ch;
        }
        Ok(restored.into_iter().collect())
    }
}

pub fn rail_fence_encrypt(text: &str, rails: usize) -> Result<String, CipherError> {
    RailFenceCipher::new(rails)?.encrypt(text)
}

pub fn rail_fence_decrypt(text: &str, rails: usize) -> Result<String, CipherError> {
    RailFenceCipher::new(rails)?.decrypt(text)
}

/// Columnar transposition cipher
/// https://en.wikipedia.org/wiki/Transposition_cipher#Columnar_transposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnarCipher {
    key: Vec<char>,
    /// original column indices in read order
    order: Vec<usize>,
}

impl ColumnarCipher {
    pub fn new(key: impl AsRef<str>) -> Result<Self, CipherError> {
        let key: Vec<char> = key.as_ref().chars().collect();
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let mut order: Vec<usize> = (0..key.len()).collect();
        // ties keep their original key position
        order.sort_by_key(|&i| key[i]);
        trace!("columnar key {:?} reads columns {:?}", key, order);
        Ok(Self { key, order })
    }

    pub fn columns(&self) -> usize {
        self.key.len()
    }

    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    fn rows_for(&self, len: usize) -> usize {
        (len + self.columns() - 1) / self.columns()
    }
}

impl Cipher for ColumnarCipher {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        let cols = self.columns();
        let mut grid: Vec<char> = message.chars().collect();
        let rows = self.rows_for(grid.len());
        grid.resize(rows * cols, PAD);
        Ok(self
            .order
            .iter()
            .flat_map(|&col| (0..rows).map(move |row| row * cols + col))
            .map(|i| grid[i])
            .collect())
    }

    /// Trailing whitespace of the restored text is stripped together with the padding.
    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let cols = self.columns();
        let len = cipher_text.chars().count();
        let rows = self.rows_for(len);
        let mut grid: Vec<Option<char>> = vec![None; rows * cols];
        let slots = self
            .order
            .iter()
            .flat_map(|&col| (0..rows).map(move |row| row * cols + col));
        for (slot, ch) in slots.zip(cipher_text.chars()) {
            grid[slot] = Some(ch);
        }
        let restored: String = grid.into_iter().flatten().collect();
        Ok(restored.trim_end().to_string())
    }
}

pub fn columnar_encrypt(text: &str, key: &str) -> Result<String, CipherError> {
    ColumnarCipher::new(key)?.encrypt(text)
}

pub fn columnar_decrypt(text: &str, key: &str) -> Result<String, CipherError> {
    ColumnarCipher::new(key)?.decrypt(text)
}


#[cfg(test)]
mod columnar_cipher_test {
    use super::{columnar_decrypt, columnar_encrypt, ColumnarCipher};
    use crate::cipher::{CipherError, ErrorKind};

    #[test]
    fn test_columnar_known_vector() {
        let cipher_text = columnar_encrypt("HELLO WORLD", "HACK").unwrap();
        assert_eq!(cipher_text, "E LLWDHORLO ");
        assert_eq!(columnar_decrypt(&cipher_text, "HACK").unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_columnar_pads_to_grid() {
        let cipher_text = columnar_encrypt("ABCDE", "ZYX").unwrap();
        assert_eq!(cipher_text.chars().count(), 6);
        assert_eq!(cipher_text, "C BEAD");
    }

    #[test]
    fn test_columnar_repeated_key_symbols() {
        let cipher = ColumnarCipher::new("BANANA").unwrap();
        assert_eq!(cipher.column_order(), &[1, 3, 5, 0, 2, 4]);
        let message = "attack at dawn, bring 12 rations";
        let cipher_text = columnar_encrypt(message, "BANANA").unwrap();
        assert_eq!(columnar_decrypt(&cipher_text, "BANANA").unwrap(), message);
    }

    #[test]
    fn test_columnar_strips_trailing_whitespace_only() {
        let message = "  keep leading   ";
        let cipher_text = columnar_encrypt(message, "KEY").unwrap();
        assert_eq!(columnar_decrypt(&cipher_text, "KEY").unwrap(), "  keep leading");
    }

    #[test]
    fn test_columnar_short_ciphertext() {
        // 5 symbols over 3 columns: the last column in read order runs short
        assert_eq!(columnar_decrypt("ADBEC", "ABC").unwrap(), "ABCDE");
        assert_eq!(columnar_encrypt("", "KEY").unwrap(), "");
    }

    #[test]
    fn test_columnar_empty_key() {
        let err = columnar_encrypt("abc", "").unwrap_err();
        assert_eq!(err, CipherError::EmptyKey);
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert!(columnar_decrypt("abc", "").is_err());
    }
}
