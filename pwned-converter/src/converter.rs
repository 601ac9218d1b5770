use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use pwned_format::{COUNT_FIELD, LINE_WIDTH, RECORD_SIZE, Record, decode_hex_digest};
use tracing::{debug, info};

use crate::error::Error;
use crate::progress::Progress;

/// Lines read per chunk
pub const CHUNK_LINES: usize = 1000;

/// Records between two progress reports
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub records: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

/// Convert the text corpus at `input_path` into a binary file at `output_path`.
///
/// The output file is created fresh, truncating any existing file. On error the
/// partially written output is left in place.
pub fn convert_file<P: Progress + ?Sized>(
    input_path: &Path,
    output_path: &Path,
    progress: &mut P,
) -> Result<ConversionStats, Error> {
    if !input_path.exists() {
        return Err(Error::MissingInput { path: input_path.to_path_buf() });
    }

    let input = File::open(input_path)?;
    let total_len = input.metadata()?.len();
    let output = File::create(output_path)?;

    let stats = convert(input, total_len, output, progress)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        records = stats.records,
        bytes_written = stats.bytes_written,
        "conversion complete"
    );

    Ok(stats)
}

/// Stream-convert 63-byte text lines from `input` into 24-byte records on `output`.
///
/// `total_len` is the length of the input stream and is only used for progress
/// percentages. Input is consumed in chunks of `CHUNK_LINES` lines; a chunk whose
/// size is not a multiple of the line width fails with [`Error::InvalidFormat`],
/// and an unparsable count field fails with [`Error::CountParseFailure`].
pub fn convert<R, W, P>(
    mut input: R,
    total_len: u64,
    output: W,
    progress: &mut P,
) -> Result<ConversionStats, Error>
where
    R: Read,
    W: Write,
    P: Progress + ?Sized,
{
    let mut writer = BufWriter::new(output);
    let mut buf = vec![0u8; LINE_WIDTH * CHUNK_LINES];
    let mut record = [0u8; RECORD_SIZE];
    let mut stats = ConversionStats::default();

    loop {
        let bytes_read = fill_chunk(&mut input, &mut buf)?;
        if bytes_read == 0 {
            break;
        }
        if bytes_read % LINE_WIDTH != 0 {
            return Err(Error::InvalidFormat { bytes_read, line_width: LINE_WIDTH });
        }
        stats.bytes_read += bytes_read as u64;

        for line in buf[..bytes_read].chunks_exact(LINE_WIDTH) {
            let digest = decode_hex_digest(line);

            let field = &line[COUNT_FIELD];
            let count = parse_count(field).ok_or_else(|| Error::CountParseFailure {
                line: stats.records + 1,
                field: String::from_utf8_lossy(field).into_owned(),
            })?;

            Record::new(digest, count).encode_into(&mut record);
            writer.write_all(&record)?;

            if stats.records % PROGRESS_INTERVAL == 0 {
                progress.report(percent(stats.bytes_read, total_len));
            }
            stats.records += 1;
        }

        debug!(bytes_read, records = stats.records, "converted chunk");
    }

    progress.report(100.0);
    writer.flush()?;

    stats.bytes_written = stats.records * RECORD_SIZE as u64;
    Ok(stats)
}

/// Parse the leading integer of a count field.
///
/// Accepts an optional sign followed by at least one ASCII digit and stops at
/// the first non-digit, so trailing padding and line terminators are ignored.
/// Returns `None` when there are no digits or the value does not fit in `i32`.
pub fn parse_count(field: &[u8]) -> Option<i32> {
    let (negative, rest) = match field.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, field),
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    // Accumulate in i64 so i32::MIN is representable before negation.
    let limit = i32::MAX as i64 + 1;
    let mut value = 0i64;
    for &d in &rest[..digits] {
        value = value * 10 + (d - b'0') as i64;
        if value > limit {
            return None;
        }
    }

    i32::try_from(if negative { -value } else { value }).ok()
}

// read() is not guaranteed to fill the buffer in a single call, so keep reading
// until the chunk is full or the stream is exhausted.
fn fill_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0usize;
    while total < buf.len() {
        match input.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

#[inline]
fn percent(consumed: u64, total: u64) -> f32 {
    if total == 0 {
        return 100.0;
    }
    ((consumed as f64 / total as f64) * 100.0).min(100.0) as f32
}
