use crate::{COUNT_LEN, DIGEST_LEN, RECORD_SIZE};

/// One `(digest, occurrence count)` pair in its 24-byte binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub digest: [u8; DIGEST_LEN],
    pub count: i32,
}

impl Record {
    pub fn new(digest: [u8; DIGEST_LEN], count: i32) -> Self {
        Self { digest, count }
    }

    /// Writes the raw digest followed by the little-endian count.
    #[inline]
    pub fn encode_into(&self, out: &mut [u8; RECORD_SIZE]) {
        out[..DIGEST_LEN].copy_from_slice(&self.digest);
        out[DIGEST_LEN..].copy_from_slice(&self.count.to_le_bytes());
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        self.encode_into(&mut out);
        out
    }

    #[inline]
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let (digest, count) = bytes.split_at(DIGEST_LEN);
        let mut d = [0u8; DIGEST_LEN];
        d.copy_from_slice(digest);
        let mut c = [0u8; COUNT_LEN];
        c.copy_from_slice(count);
        Self { digest: d, count: i32::from_le_bytes(c) }
    }
}

/// The digest portion of an encoded record.
#[inline(always)]
pub fn record_digest(record: &[u8; RECORD_SIZE]) -> &[u8] {
    &record[..DIGEST_LEN]
}
