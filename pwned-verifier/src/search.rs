use std::cmp::Ordering;
use std::io::{self, Read, Seek, SeekFrom};

use pwned_format::{DIGEST_LEN, RECORD_SIZE, record_digest};
use tracing::trace;

use crate::error::Error;

const STRIDE: u64 = RECORD_SIZE as u64;

/// Checks whether `digest` occurs in a sorted binary record source.
///
/// Rejects sources whose length is not a multiple of the record stride, then
/// bisects the whole source. Sortedness is assumed, not checked.
pub fn lookup<S: Read + Seek>(source: &mut S, digest: &[u8; DIGEST_LEN]) -> Result<bool, Error> {
    let len = source.seek(SeekFrom::End(0))?;
    if len % STRIDE != 0 {
        return Err(Error::MalformedBinaryFile { len, stride: RECORD_SIZE });
    }

    Ok(bisect_digest(source, 0, len, digest)?)
}

/// Bisects the record-aligned byte range `[start, end)` of `source` for `digest`.
///
/// Each probe seeks to the lower-middle record of the range, reads it, and
/// narrows to the records strictly before or strictly after it. Needs at most
/// `floor(log2(n)) + 1` probes for `n` records in the range.
pub fn bisect_digest<S: Read + Seek>(
    source: &mut S,
    mut start: u64,
    mut end: u64,
    digest: &[u8; DIGEST_LEN],
) -> io::Result<bool> {
    let mut record = [0u8; RECORD_SIZE];

    while start < end {
        let count = (end - start) / STRIDE;
        let read_pos = start + (count / 2) * STRIDE;

        source.seek(SeekFrom::Start(read_pos))?;
        source.read_exact(&mut record)?;
        trace!(start, end, read_pos, "probe");

        match digest.as_slice().cmp(record_digest(&record)) {
            Ordering::Equal => return Ok(true),
            Ordering::Greater => start = read_pos + STRIDE,
            Ordering::Less => end = read_pos,
        }
    }

    Ok(false)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use hex_literal::hex;
    use pwned_format::Record;

    use super::*;

    /// Counts probes by counting absolute seeks.
    pub(crate) struct ProbeCounter<S> {
        inner: S,
        pub probes: u32,
    }

    impl<S> ProbeCounter<S> {
        pub(crate) fn new(inner: S) -> Self {
            Self { inner, probes: 0 }
        }
    }

    impl<S: Read> Read for ProbeCounter<S> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl<S: Seek> Seek for ProbeCounter<S> {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            if let SeekFrom::Start(_) = pos {
                self.probes += 1;
            }
            self.inner.seek(pos)
        }
    }

    /// Digest whose last four bytes hold `n` big-endian, so digests sort like `n`.
    pub(crate) fn numbered_digest(n: u32) -> [u8; DIGEST_LEN] {
        let mut digest = [0u8; DIGEST_LEN];
        digest[16..].copy_from_slice(&n.to_be_bytes());
        digest
    }

    /// Records holding the odd numbers `1, 3, ..., 2n - 1`.
    pub(crate) fn odd_records(n: u32) -> Vec<u8> {
        (0..n).flat_map(|i| Record::new(numbered_digest(2 * i + 1), i as i32).to_bytes()).collect()
    }

    fn max_probes(n: u32) -> u32 {
        if n == 0 { 0 } else { n.ilog2() + 1 }
    }

    #[test]
    fn test_single_record() {
        let data = Record::new([0xAA; DIGEST_LEN], 5).to_bytes().to_vec();

        let mut source = ProbeCounter::new(Cursor::new(&data));
        assert!(lookup(&mut source, &[0xAA; DIGEST_LEN]).unwrap());
        assert_eq!(source.probes, 1);

        let mut source = ProbeCounter::new(Cursor::new(&data));
        assert!(!lookup(&mut source, &[0xAB; DIGEST_LEN]).unwrap());
        assert_eq!(source.probes, 1);

        let mut source = ProbeCounter::new(Cursor::new(&data));
        assert!(!lookup(&mut source, &[0x00; DIGEST_LEN]).unwrap());
        assert_eq!(source.probes, 1);
    }

    #[test]
    fn test_empty_source() {
        let mut source = ProbeCounter::new(Cursor::new(Vec::new()));
        assert!(!lookup(&mut source, &[0xAA; DIGEST_LEN]).unwrap());
        assert_eq!(source.probes, 0);
    }

    #[test]
    fn test_known_digests() {
        let digests = [
            hex!("000000005AD76BD555C1D6D771DE417A4B87E4B4"),
            hex!("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"),
            hex!("CBFDAC6008F9CAB4083784CBD1874F76618D2A97"),
            hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
        ];
        let data: Vec<u8> =
            digests.iter().flat_map(|d| Record::new(*d, 1).to_bytes()).collect();

        for digest in &digests {
            assert!(lookup(&mut Cursor::new(&data), digest).unwrap());
        }

        assert!(!lookup(&mut Cursor::new(&data), &[0x00; DIGEST_LEN]).unwrap());
        assert!(
            !lookup(&mut Cursor::new(&data), &hex!("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD9"))
                .unwrap()
        );
        assert!(
            !lookup(&mut Cursor::new(&data), &hex!("CBFDAC6008F9CAB4083784CBD1874F76618D2A96"))
                .unwrap()
        );
    }

    #[test]
    fn test_every_present_and_absent_digest() {
        for n in 0..=70u32 {
            let data = odd_records(n);

            for i in 0..n {
                let mut source = ProbeCounter::new(Cursor::new(&data));
                assert!(lookup(&mut source, &numbered_digest(2 * i + 1)).unwrap(), "n={n} i={i}");
                assert!(source.probes <= max_probes(n), "n={n} i={i} probes={}", source.probes);
            }

            // Even numbers fall before, between and after every record.
            for i in 0..=n {
                let mut source = ProbeCounter::new(Cursor::new(&data));
                assert!(!lookup(&mut source, &numbered_digest(2 * i)).unwrap(), "n={n} i={i}");
                assert!(source.probes <= max_probes(n), "n={n} i={i} probes={}", source.probes);
            }
        }
    }

    #[test]
    fn test_bisect_sub_range() {
        let data = odd_records(10);

        // Records 3..7 hold 7, 9, 11, 13.
        let (start, end) = (3 * STRIDE, 7 * STRIDE);
        let mut source = Cursor::new(&data);
        assert!(bisect_digest(&mut source, start, end, &numbered_digest(7)).unwrap());
        assert!(bisect_digest(&mut source, start, end, &numbered_digest(13)).unwrap());
        assert!(!bisect_digest(&mut source, start, end, &numbered_digest(5)).unwrap());
        assert!(!bisect_digest(&mut source, start, end, &numbered_digest(15)).unwrap());
        assert!(!bisect_digest(&mut source, start, start, &numbered_digest(7)).unwrap());
    }

    #[test]
    fn test_count_bytes_do_not_affect_comparison() {
        let mut data = Record::new(numbered_digest(1), 0).to_bytes().to_vec();
        data.extend(Record::new(numbered_digest(3), -1).to_bytes());

        assert!(lookup(&mut Cursor::new(&data), &numbered_digest(3)).unwrap());
        assert!(!lookup(&mut Cursor::new(&data), &numbered_digest(2)).unwrap());
    }

    #[test]
    fn test_malformed_length_rejected() {
        let mut data = odd_records(3);
        data.push(0);

        let mut source = ProbeCounter::new(Cursor::new(&data));
        match lookup(&mut source, &numbered_digest(1)) {
            Err(Error::MalformedBinaryFile { len, stride }) => {
                assert_eq!(len, 73);
                assert_eq!(stride, 24);
            }
            other => panic!("expected MalformedBinaryFile, got {other:?}"),
        }
        assert_eq!(source.probes, 0);
    }
}
