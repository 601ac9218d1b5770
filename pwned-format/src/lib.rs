//! Record layout shared by the Pwned Passwords converter and verifier.
//!
//! # Text corpus
//!
//! The ordered SHA1 corpus is a sequence of fixed 63-byte lines:
//!
//! - bytes `[0, 40)`: the SHA1 digest as hex (either case)
//! - byte `40`: a separator (`:`)
//! - bytes `[41, 51)`: the decimal occurrence count, padded to the field width
//! - the rest of the line up to and including the line terminator
//!
//! # Binary format
//!
//! No header, magic number or version. The file is a flat run of 24-byte records:
//!
//! - bytes `[0, 20)`: raw SHA1 digest
//! - bytes `[20, 24)`: occurrence count, signed 32-bit little-endian
//!
//! Records keep the corpus order, so the file is sorted ascending by digest
//! (unsigned byte-lexicographic) and record N lives at byte offset `N * 24`.

pub mod hex;
pub mod record;

pub use hex::{HEX_LOOKUP, decode_hex_digest, encode_hex_digest, hex_to_nibble, parse_hex_digest};
pub use record::{Record, record_digest};

/// Length of a raw SHA1 digest.
pub const DIGEST_LEN: usize = 20;

/// Length of the encoded occurrence count.
pub const COUNT_LEN: usize = 4;

/// Stride of one binary record.
pub const RECORD_SIZE: usize = DIGEST_LEN + COUNT_LEN;

/// Width of one line of the text corpus, terminator included.
pub const LINE_WIDTH: usize = 63;

/// Number of hex characters that make up a digest.
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Byte range of the decimal count field within a text line.
pub const COUNT_FIELD: std::ops::Range<usize> = 41..51;
