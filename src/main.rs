use anyhow::Context;
use args::{Args, CipherName, Command, CrackTarget, Key};
use clap::Parser;
use classical_cipher::{
    bruteforce_affine, bruteforce_caesar, frequency_analysis, suggest_caesar_shift, AffineCipher,
    CaesarCipher, Candidate, Cipher, ColumnarCipher, RailFenceCipher, Rot13,
};
use log::debug;
use std::{fmt::Debug, io::stdin, str::FromStr};

pub mod args;

fn read_from_str<T>() -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut input = String::new();
    stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(T::from_str(input.trim_end_matches(&['\r', '\n'][..]))?)
}

fn build_cipher(cipher_name: CipherName, key: Key) -> anyhow::Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match cipher_name {
        CipherName::Caesar => Box::new(CaesarCipher::new(key.shift)),
        CipherName::Rot13 => Box::new(Rot13),
        CipherName::Affine => Box::new(AffineCipher::new(key.a, key.b)?),
        CipherName::RailFence => Box::new(RailFenceCipher::new(key.rails)?),
        CipherName::Columnar => Box::new(ColumnarCipher::new(key.key)?),
    };
    Ok(cipher)
}

fn print_candidates<K: Debug>(candidates: &[Candidate<K>], top: usize) {
    println!("{:<24} {:>12}  plaintext", "key", "chi-squared");
    for candidate in candidates.iter().take(top) {
        println!(
            "{:<24} {:>12.3}  {}",
            format!("{:?}", candidate.key),
            candidate.score,
            candidate.plaintext
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args { command } = Args::parse();
    match command {
        Command::Encrypt { cipher_name, key } => {
            let cipher = build_cipher(cipher_name, key)?;
            println!("Message:");
            let cipher_text = cipher.encrypt(&read_from_str::<String>()?)?;
            println!("Cipher text:\n{cipher_text}");
        }
        Command::Decrypt { cipher_name, key } => {
            let cipher = build_cipher(cipher_name, key)?;
            println!("Cipher text:");
            let message = cipher.decrypt(&read_from_str::<String>()?)?;
            println!("Message:\n{message}");
        }
        Command::Frequency => {
            println!("Text:");
            let freq = frequency_analysis(&read_from_str::<String>()?);
            println!("{freq}");
            println!("Index of coincidence: {:.4}", freq.index_of_coincidence());
        }
        Command::Crack { target, top } => {
            println!("Cipher text:");
            let cipher_text: String = read_from_str()?;
            debug!("cracking {} characters", cipher_text.chars().count());
            match target {
                CrackTarget::Caesar => {
                    match suggest_caesar_shift(&cipher_text) {
                        Some(shift) => {
                            println!("Most frequent letter as 'E' suggests shift {shift}")
                        }
                        None => println!("No letters, no shift suggestion"),
                    }
                    print_candidates(&bruteforce_caesar(&cipher_text), top);
                }
                CrackTarget::Affine => print_candidates(&bruteforce_affine(&cipher_text), top),
            }
        }
    };
    Ok(())
}
