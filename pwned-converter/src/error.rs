use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input file '{path}' does not exist")]
    MissingInput { path: PathBuf },

    #[error("Invalid number of bytes read: {bytes_read} is not a multiple of the {line_width}-byte line width")]
    InvalidFormat { bytes_read: usize, line_width: usize },

    #[error("Line {line}: cannot parse occurrence count from {field:?}")]
    CountParseFailure { line: u64, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
