//! Shared-secret generator for dht-station deployments (std-only).
//!
//! Generates a random token, writes it together with its SHA-256 digest to a
//! TOML credentials file, and prints the digest array to embed via
//! `TokenGuard::from_digest` so the plaintext never lands in the firmware
//! image.
//!
//! Usage: `cargo run --features tokengen --bin dht-station-tokengen [OUTPUT]`

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::{env, fs, process};

/// Generated token length in characters.
const TOKEN_LEN: usize = 32;

/// Unambiguous alphanumerics (no 0/O, 1/l/I).
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";

#[derive(Serialize)]
struct Credentials {
    token: String,
    digest: String,
}

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("station-token.toml"));

    let mut raw = [0u8; TOKEN_LEN];
    if let Err(err) = getrandom::fill(&mut raw) {
        eprintln!("tokengen: failed to gather randomness: {err}");
        process::exit(1);
    }

    let token: String = raw
        .iter()
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect();

    let digest = Sha256::digest(token.as_bytes());
    let digest_hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();

    let credentials = Credentials {
        token,
        digest: digest_hex,
    };

    let body = match toml::to_string(&credentials) {
        Ok(body) => body,
        Err(err) => {
            eprintln!("tokengen: failed to serialize credentials: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = fs::write(&path, body) {
        eprintln!("tokengen: failed to write {path}: {err}");
        process::exit(1);
    }

    println!("wrote {path}");
    println!("embed in firmware:");
    print!("    TokenGuard::from_digest([");
    for (i, b) in digest.iter().enumerate() {
        if i % 8 == 0 {
            print!("\n        ");
        }
        print!("0x{b:02x}, ");
    }
    println!("\n    ])");
}
