use thiserror::Error;

/// All errors produced by slowverb-core.
#[derive(Debug, Error)]
pub enum SlowverbError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    #[error("WAV codec error: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SlowverbError>;
