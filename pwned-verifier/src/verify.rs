use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use pwned_format::{DIGEST_LEN, RECORD_SIZE, record_digest};
use tracing::{info, warn};

use crate::error::Error;

/// Outcome of a full scan over a binary file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    pub records: u64,
    /// Index of the first record whose digest is smaller than its predecessor's.
    pub first_unsorted: Option<u64>,
    /// Records whose digest equals their predecessor's.
    pub duplicates: u64,
}

impl SortReport {
    pub fn is_sorted(&self) -> bool {
        self.first_unsorted.is_none()
    }
}

/// Streams every record of `path` and checks ascending digest order.
pub fn verify_file(path: &Path) -> Result<SortReport, Error> {
    if !path.exists() {
        return Err(Error::MissingInput { path: path.to_path_buf() });
    }

    let report = verify_sorted(File::open(path)?)?;
    info!(
        path = %path.display(),
        records = report.records,
        sorted = report.is_sorted(),
        duplicates = report.duplicates,
        "verified binary file"
    );
    Ok(report)
}

/// Streams records from `reader` and checks that digests never decrease.
///
/// A trailing partial record fails with [`Error::MalformedBinaryFile`].
pub fn verify_sorted<R: Read>(reader: R) -> Result<SortReport, Error> {
    let mut reader = BufReader::new(reader);
    let mut report = SortReport::default();
    let mut previous = [0u8; DIGEST_LEN];
    let mut record = [0u8; RECORD_SIZE];

    loop {
        let n = read_record(&mut reader, &mut record)?;
        if n == 0 {
            break;
        }
        if n < RECORD_SIZE {
            return Err(Error::MalformedBinaryFile {
                len: report.records * RECORD_SIZE as u64 + n as u64,
                stride: RECORD_SIZE,
            });
        }

        let digest = record_digest(&record);
        if report.records > 0 {
            if digest == previous.as_slice() {
                report.duplicates += 1;
            } else if digest < previous.as_slice() && report.first_unsorted.is_none() {
                warn!(index = report.records, "record out of order");
                report.first_unsorted = Some(report.records);
            }
        }

        previous.copy_from_slice(digest);
        report.records += 1;
    }

    Ok(report)
}

fn read_record<R: Read>(reader: &mut R, record: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
    let mut total = 0usize;
    while total < RECORD_SIZE {
        match reader.read(&mut record[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
