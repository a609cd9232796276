/// Size of the modular universe shared by every cipher.
pub const ALPHABET_LEN: usize = 26;

/// Zero-based position of an ASCII letter in its own case range.
/// Returns None for anything that is not an ASCII letter.
#[inline]
pub fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter for a zero-based index, reduced mod 26.
#[inline]
pub fn letter_at(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Applies `f` to the position of every ASCII letter, keeping its case.
/// Non-letters keep their value and their place.
pub fn map_letters(text: &str, f: impl Fn(usize) -> usize) -> String {
    text.chars()
        .map(|ch| match letter_index(ch) {
            Some(p) => {
                let base = if ch.is_ascii_lowercase() { b'a' } else { b'A' };
                (base + (f(p) % ALPHABET_LEN) as u8) as char
            }
            None => ch,
        })
        .collect()
}

#[cfg(test)]
mod alphabet_test {
    use super::{letter_at, letter_index, map_letters};

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('7'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(letter_at(27), 'B');
    }

    #[test]
    fn test_map_letters_keeps_case_and_symbols() {
        let out = map_letters("aZ 9!", |p| p + 1);
        assert_eq!(out, "bA 9!");
    }
}
