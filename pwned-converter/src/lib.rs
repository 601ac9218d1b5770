//! Converts the ordered Pwned Passwords SHA1 text corpus into a compact 24-byte
//! binary format for use with `pwned-verifier`.
//!
//! # Input
//!
//! The "ordered by hash" SHA1 download, where every line is exactly 63 bytes:
//! 40 hex characters, a `:` separator, and a padded decimal occurrence count.
//! The corpus must already be sorted by digest; conversion preserves the order.
//!
//! # Binary Format
//!
//! One 24-byte record per input line, no header:
//!
//! - 20 bytes of raw SHA1 digest
//! - 4 bytes of occurrence count, signed little-endian
//!
//! Record N starts at byte offset N * 24, which lets the verifier bisect the file
//! with direct seeks instead of loading it.
//!
//! # Why This Format?
//!
//! The text corpus spends 63 bytes per hash. Storing the raw digest and a binary
//! count brings that down to 24 bytes, and the fixed stride removes any parsing
//! from the lookup path.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pwned_converter::{NoProgress, convert_file};
//!
//! let stats = convert_file(
//!     Path::new("pwned-passwords-sha1-ordered-by-hash.txt"),
//!     Path::new("pwned-passwords.bin"),
//!     &mut NoProgress,
//! )?;
//! println!("wrote {} records", stats.records);
//! # Ok::<(), pwned_converter::Error>(())
//! ```

pub mod converter;
pub mod error;
pub mod progress;

pub use converter::{
    CHUNK_LINES, ConversionStats, PROGRESS_INTERVAL, convert, convert_file, parse_count,
};
pub use error::Error;
pub use progress::{NoProgress, Progress};
