use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Record \"{id}\" has {sequence_len} bases but {quality_len} quality scores")]
    InvalidRecord {
        id: String,
        sequence_len: usize,
        quality_len: usize,
    },

    #[error("Invalid trimming configuration: {0}")]
    ConfigurationConflict(String),

    #[error("Window size must be at least 1")]
    UnderflowWindow,

    #[error("Quality character {ch:?} is outside the Phred+33 range")]
    InvalidQualityChar { ch: char },

    #[error("Quality score {score} cannot be encoded as Phred+33")]
    ScoreOutOfRange { score: u8 },

    #[error("Malformed FASTQ record at line {line}: {msg}")]
    MalformedRecord { line: usize, msg: String },

    #[error("Output {} is the same file as the input", path.display())]
    SameInputOutput { path: PathBuf },

    #[error("Writer thread panicked")]
    WriterPanicked,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
