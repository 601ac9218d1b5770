use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Convert(#[from] pwned_converter::Error),

    #[error(transparent)]
    Verify(#[from] pwned_verifier::Error),

    #[error("'{value}' is not a 40-character hex SHA1 digest")]
    InvalidDigest { value: String },

    #[error("Binary file '{path}' is not sorted: record {index} is out of order")]
    Unsorted { path: PathBuf, index: u64 },
}
