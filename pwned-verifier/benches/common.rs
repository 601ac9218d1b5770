use std::path::Path;

use pwned_format::Record;
use pwned_verifier::sha1_digest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generates a specified number of random passwords with uniform distribution.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_passwords(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| ALL_CHARS[rng.gen_range(0..ALL_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

/// Writes a sorted binary file holding the SHA1 of every password.
pub fn write_binary_file(path: &Path, passwords: &[String]) {
    let mut digests: Vec<[u8; 20]> = passwords.iter().map(|p| sha1_digest(p)).collect();
    digests.sort_unstable();
    digests.dedup();

    let bytes: Vec<u8> = digests.iter().flat_map(|d| Record::new(*d, 1).to_bytes()).collect();
    std::fs::write(path, bytes).expect("failed to write benchmark file");
}
