use clap::{Args as KeyArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(about = "Classical ciphers and frequency cryptanalysis")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    Encrypt {
        cipher_name: CipherName,
        #[command(flatten)]
        key: Key,
    },
    Decrypt {
        cipher_name: CipherName,
        #[command(flatten)]
        key: Key,
    },
    /// Letter counts and percentages
    Frequency,
    /// Rank every key of a cipher by how English the result looks
    Crack {
        target: CrackTarget,
        /// Number of candidates to print
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CipherName {
    Caesar,
    Rot13,
    Affine,
    RailFence,
    Columnar,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CrackTarget {
    Caesar,
    Affine,
}

#[derive(Clone, KeyArgs)]
pub struct Key {
    /// Caesar shift
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub shift: i64,
    /// Affine multiplier, coprime with 26
    #[arg(short, default_value_t = 5, allow_negative_numbers = true)]
    pub a: i64,
    /// Affine offset
    #[arg(short, default_value_t = 8, allow_negative_numbers = true)]
    pub b: i64,
    /// Rail Fence rail count
    #[arg(long, default_value_t = 2)]
    pub rails: usize,
    /// Columnar key
    #[arg(long, default_value = "HACK")]
    pub key: String,
}
