//! Breached password checker using a Pwned Passwords binary file.
//!
//! The file is the output of `pwned-converter`: fixed 24-byte records (20-byte
//! SHA1 digest, 4-byte little-endian count) sorted by digest. Lookups bisect the
//! file with one seek and one 24-byte read per probe, so nothing is loaded into
//! memory and a file with ~900 million records needs about 30 probes.

use std::fs::File;
use std::path::{Path, PathBuf};

use pwned_format::DIGEST_LEN;
use sha1::{Digest, Sha1};

pub mod error;
pub mod search;
pub mod verify;

pub use error::Error;
pub use pwned_format::RECORD_SIZE;
pub use search::{bisect_digest, lookup};
pub use verify::{SortReport, verify_file, verify_sorted};

/// Environment variable name for specifying the binary file.
pub const BIN_FILE_ENV: &str = "PWNED_BIN_FILE";

/// Returns the binary file path from the PWNED_BIN_FILE environment variable,
/// or falls back to `pwned-passwords.bin` in the workspace root.
pub fn bin_file_from_env() -> PathBuf {
    std::env::var(BIN_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("../pwned-passwords.bin"))
}

/// SHA1 of the password's UTF-8 bytes.
#[inline]
pub fn sha1_digest(password: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Checks if a password has been found in known data breaches.
///
/// Holds a reference to the binary file; each check opens it, bisects it and
/// closes it again.
pub struct BreachChecker<'a> {
    bin_file: &'a Path,
}

impl<'a> BreachChecker<'a> {
    pub fn new(bin_file: &'a Path) -> Self {
        Self { bin_file }
    }

    /// Checks if the given password has been found in a data breach.
    ///
    /// Returns `Ok(true)` if the password's SHA1 is in the file, `Ok(false)` if
    /// it is not, or an error if the file is missing, malformed or unreadable.
    pub fn is_breached(&self, password: &str) -> Result<bool, Error> {
        self.contains_digest(&sha1_digest(password))
    }

    /// Checks for a precomputed SHA1 digest.
    pub fn contains_digest(&self, digest: &[u8; DIGEST_LEN]) -> Result<bool, Error> {
        let mut file = self.open_file()?;
        lookup(&mut file, digest)
    }

    fn open_file(&self) -> Result<File, Error> {
        if !self.bin_file.exists() {
            return Err(Error::MissingInput { path: self.bin_file.to_path_buf() });
        }
        Ok(File::open(self.bin_file)?)
    }
}
