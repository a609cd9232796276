//! Letter frequency analysis, case-folded, over the 26 ASCII letters.

use crate::alphabet::{letter_at, letter_index, ALPHABET_LEN};
use std::{collections::BTreeMap, fmt};

/// Per-letter occurrence counts of a text. Non-letters are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterFrequency {
    counts: [usize; ALPHABET_LEN],
    total: usize,
}

impl LetterFrequency {
    pub fn analyze(text: &str) -> Self {
        let mut counts = [0; ALPHABET_LEN];
        for p in text.chars().filter_map(letter_index) {
            counts[p] += 1;
        }
        Self::from_counts(counts)
    }

    pub fn from_counts(counts: [usize; ALPHABET_LEN]) -> Self {
        Self {
            counts,
            total: counts.iter().sum(),
        }
    }

    pub fn counts(&self) -> &[usize; ALPHABET_LEN] {
        &self.counts
    }

    /// Number of letters counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for a letter of either case; zero for non-letters.
    pub fn count(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |p| self.counts[p])
    }

    /// Share of `letter` in percent. The total is floored to 1, so an empty
    /// text gives 0 everywhere.
    pub fn percentage(&self, letter: char) -> f64 {
        self.count(letter) as f64 / self.total.max(1) as f64 * 100.0
    }

    pub fn percentages(&self) -> [f64; ALPHABET_LEN] {
        let total = self.total.max(1) as f64;
        self.counts.map(|n| n as f64 / total * 100.0)
    }

    /// `{letter: count}` over all 26 uppercase letters, zero-filled.
    pub fn to_map(&self) -> BTreeMap<char, usize> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().enumerate().map(|(p, &n)| (letter_at(p), n))
    }

    /// Most frequent letter, the alphabetically smallest on ties.
    pub fn most_frequent(&self) -> Option<char> {
        if self.total == 0 {
            return None;
        }
        let (p, _) = self
            .counts
            .iter()
            .enumerate()
            .fold((0, 0), |best, (p, &n)| if n > best.1 { (p, n) } else { best });
        Some(letter_at(p))
    }

    /// Index of coincidence
    /// English text ≈ 0.066, uniform random ≈ 0.038
    pub fn index_of_coincidence(&self) -> f64 {
        if self.total < 2 {
            return 0.0;
        }
        let pairs: usize = self.counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
        pairs as f64 / (self.total * (self.total - 1)) as f64
    }
}

impl fmt::Display for LetterFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR_WIDTH: f64 = 30.0;
        let max = self.counts.iter().copied().max().unwrap_or(0).max(1);
        writeln!(f, "letter | count |      % |")?;
        for (letter, n) in self.iter() {
            let bar = "#".repeat((n as f64 / max as f64 * BAR_WIDTH).round() as usize);
            writeln!(
                f,
                "{:>6} | {:>5} | {:>6.2} | {}",
                letter,
                n,
                self.percentage(letter),
                bar
            )?;
        }
        write!(f, "total letters: {}", self.total)
    }
}

pub fn frequency_analysis(text: &str) -> LetterFrequency {
    LetterFrequency::analyze(text)
}
