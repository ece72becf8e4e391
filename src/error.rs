use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlendoptError {
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error("Degenerate renormalization: proportions sum to zero")]
    DegenerateRenormalization,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlendoptError>;
