use crate::{DIGEST_LEN, HEX_DIGEST_LEN};

/// ASCII byte -> nibble value.
///
/// `0-9`, `A-F` and `a-f` map to 0-15. Every other byte maps to 0, so malformed
/// hex decodes silently instead of being rejected.
pub static HEX_LOOKUP: [u8; 256] = build_hex_lookup();

const HEX: &[u8; 16] = b"0123456789ABCDEF";

const fn build_hex_lookup() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        table[i] = match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'F' => c - b'A' + 10,
            b'a'..=b'f' => c - b'a' + 10,
            _ => 0,
        };
        i += 1;
    }
    table
}

/// Convert hex ASCII character to nibble value (0-15), 0 for non-hex bytes
#[inline(always)]
pub fn hex_to_nibble(c: u8) -> u8 {
    HEX_LOOKUP[c as usize]
}

/// Decode the leading 40 hex characters of `line` into a 20-byte digest.
///
/// Byte `j` of the digest is built from characters `2j` (high nibble) and
/// `2j + 1` (low nibble). Panics if `line` is shorter than 40 bytes.
#[inline]
pub fn decode_hex_digest(line: &[u8]) -> [u8; DIGEST_LEN] {
    let hex = &line[..HEX_DIGEST_LEN];
    let mut out = [0u8; DIGEST_LEN];
    for (byte, pair) in out.iter_mut().zip(hex.chunks_exact(2)) {
        *byte = (hex_to_nibble(pair[0]) << 4) | hex_to_nibble(pair[1]);
    }
    out
}

/// Like [`decode_hex_digest`], but rejects anything that is not exactly 40
/// hex characters.
pub fn parse_hex_digest(s: &str) -> Option<[u8; DIGEST_LEN]> {
    let bytes = s.as_bytes();
    if bytes.len() != HEX_DIGEST_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    Some(decode_hex_digest(bytes))
}

/// Encode a digest as 40 uppercase hex characters (stack allocated)
#[inline]
pub fn encode_hex_digest(digest: &[u8; DIGEST_LEN]) -> [u8; HEX_DIGEST_LEN] {
    let mut out = [0u8; HEX_DIGEST_LEN];
    for (pair, byte) in out.chunks_exact_mut(2).zip(digest) {
        pair[0] = HEX[(byte >> 4) as usize];
        pair[1] = HEX[(byte & 0x0f) as usize];
    }
    out
}
