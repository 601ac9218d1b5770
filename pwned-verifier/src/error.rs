use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Binary file '{path}' does not exist")]
    MissingInput { path: PathBuf },

    #[error("Binary file length {len} is not a multiple of the {stride}-byte record stride")]
    MalformedBinaryFile { len: u64, stride: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
